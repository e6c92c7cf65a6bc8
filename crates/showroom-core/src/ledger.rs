use crate::constants::AREA_PER_ROLL;
use crate::scene::{MaterialHandle, MaterialTable, Surface};
use crate::state::InteractionState;

/// Cost of covering `area` at `price` per roll.
#[inline]
pub fn roll_cost(area: f32, area_per_roll: f64, price: f64) -> f64 {
    area as f64 / area_per_roll * price
}

#[derive(Clone, Debug, PartialEq)]
pub enum ToggleOutcome {
    Painted { cost: f64 },
    Reverted { cost: f64 },
    /// The selected option has no renderable material; nothing changed.
    UnknownMaterial,
}

/// Toggles walls between the neutral finish and the selected wallcovering
/// while keeping the running total.
///
/// Costs use the price selected at the moment of each toggle. Painting at
/// one price and reverting at another therefore leaves a remainder in the
/// total; already painted walls are never re-priced.
#[derive(Clone, Debug)]
pub struct SurfaceLedger {
    area_per_roll: f64,
}

impl Default for SurfaceLedger {
    fn default() -> Self {
        Self::new(AREA_PER_ROLL)
    }
}

impl SurfaceLedger {
    pub fn new(area_per_roll: f64) -> Self {
        Self { area_per_roll }
    }

    pub fn toggle(
        &self,
        surface: &mut Surface,
        materials: &MaterialTable,
        state: &mut InteractionState,
    ) -> ToggleOutcome {
        let selection = state.selection().clone();
        let Some(option_handle) = materials.handle(&selection.option) else {
            log::warn!(
                "[ledger] option `{}` is not in the material table; {} left as is",
                selection.option,
                surface.name
            );
            return ToggleOutcome::UnknownMaterial;
        };
        let cost = roll_cost(surface.area(), self.area_per_roll, selection.price);

        if *surface.material() == selection.option {
            let neutral = surface.neutral().clone();
            let neutral_handle = materials.handle(&neutral).unwrap_or(MaterialHandle(0));
            surface.set_material(neutral.clone());
            state.record_unpainted(surface.id, cost);
            state.publish_material(surface.id, neutral, neutral_handle);
            log::info!("[ledger] reverted {} (-{:.2})", surface.name, cost);
            ToggleOutcome::Reverted { cost }
        } else {
            surface.set_material(selection.option.clone());
            state.record_painted(surface.id, cost);
            state.publish_material(surface.id, selection.option, option_handle);
            log::info!("[ledger] painted {} (+{:.2})", surface.name, cost);
            ToggleOutcome::Painted { cost }
        }
    }
}
