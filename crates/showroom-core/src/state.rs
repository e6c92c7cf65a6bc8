//! Process-wide interaction state shared with the frontends.
//!
//! These types avoid referencing platform-specific APIs. Every externally
//! visible mutation is queued as a [`StateChange`]; the render loop and the
//! panel drain the queue once per frame instead of relying on implicit
//! reactivity.

use crate::constants::{eye_to_target, DEFAULT_OPTION, DEFAULT_PRICE, GROUND_FLOOR_HEIGHT};
use crate::scene::{MaterialHandle, MaterialId, SurfaceId};
use glam::Vec3;

/// Camera eye position plus the orbit-control look-at target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub target: Vec3,
}

impl Pose {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// Pose standing at `point`, looking along the house's default heading.
    pub fn standing_at(point: Vec3) -> Self {
        Self {
            position: point,
            target: point + eye_to_target(),
        }
    }

    pub fn to_array(&self) -> [f32; 6] {
        let p = self.position;
        let t = self.target;
        [p.x, p.y, p.z, t.x, t.y, t.z]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorStyle {
    #[default]
    Auto,
    Pointer,
    Grab,
    Grabbing,
}

impl CursorStyle {
    pub fn as_css(self) -> &'static str {
        match self {
            CursorStyle::Auto => "auto",
            CursorStyle::Pointer => "pointer",
            CursorStyle::Grab => "grab",
            CursorStyle::Grabbing => "grabbing",
        }
    }
}

/// The wallcovering currently picked in the panel and its price per roll.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub option: MaterialId,
    pub price: f64,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            option: MaterialId::from(DEFAULT_OPTION),
            price: DEFAULT_PRICE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StateChange {
    Selection(Selection),
    FloorHeight(f32),
    LastInteraction(Option<String>),
    SelectedWalls(Vec<SurfaceId>),
    TotalCost(f64),
    Cursor(CursorStyle),
    Marker {
        position: Vec3,
        visible: bool,
    },
    MaterialAssigned {
        surface: SurfaceId,
        material: MaterialId,
        handle: MaterialHandle,
    },
}

#[derive(Clone, Debug)]
pub struct InteractionState {
    selection: Selection,
    floor_height: f32,
    last_interaction: Option<String>,
    selected_walls: Vec<SurfaceId>,
    total_cost: f64,
    cursor: CursorStyle,
    changes: Vec<StateChange>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new(Selection::default())
    }
}

impl InteractionState {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            floor_height: GROUND_FLOOR_HEIGHT,
            last_interaction: None,
            selected_walls: Vec::new(),
            total_cost: 0.0,
            cursor: CursorStyle::default(),
            changes: Vec::new(),
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn floor_height(&self) -> f32 {
        self.floor_height
    }

    pub fn last_interaction(&self) -> Option<&str> {
        self.last_interaction.as_deref()
    }

    pub fn selected_walls(&self) -> &[SurfaceId] {
        &self.selected_walls
    }

    pub fn is_selected(&self, surface: SurfaceId) -> bool {
        self.selected_walls.contains(&surface)
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    /// Drain the queued notifications, oldest first.
    pub fn take_changes(&mut self) -> Vec<StateChange> {
        std::mem::take(&mut self.changes)
    }

    pub fn set_selection(&mut self, selection: Selection) {
        if self.selection != selection {
            self.selection = selection.clone();
            self.changes.push(StateChange::Selection(selection));
        }
    }

    pub(crate) fn set_floor_height(&mut self, height: f32) {
        if self.floor_height != height {
            self.floor_height = height;
            self.changes.push(StateChange::FloorHeight(height));
        }
    }

    pub(crate) fn set_last_interaction(&mut self, description: Option<String>) {
        if self.last_interaction != description {
            self.last_interaction = description.clone();
            self.changes.push(StateChange::LastInteraction(description));
        }
    }

    pub(crate) fn set_cursor(&mut self, cursor: CursorStyle) {
        if self.cursor != cursor {
            self.cursor = cursor;
            self.changes.push(StateChange::Cursor(cursor));
        }
    }

    pub(crate) fn publish_marker(&mut self, position: Vec3, visible: bool) {
        self.changes.push(StateChange::Marker { position, visible });
    }

    pub(crate) fn publish_material(
        &mut self,
        surface: SurfaceId,
        material: MaterialId,
        handle: MaterialHandle,
    ) {
        self.changes.push(StateChange::MaterialAssigned {
            surface,
            material,
            handle,
        });
    }

    /// Add a painted wall and its cost. The wall is listed at most once.
    pub(crate) fn record_painted(&mut self, surface: SurfaceId, cost: f64) {
        if !self.selected_walls.contains(&surface) {
            self.selected_walls.push(surface);
        }
        self.adjust_total(cost);
    }

    /// Drop a wall (absent walls are fine) and subtract its cost.
    pub(crate) fn record_unpainted(&mut self, surface: SurfaceId, cost: f64) {
        self.selected_walls.retain(|s| *s != surface);
        self.adjust_total(-cost);
    }

    fn adjust_total(&mut self, delta: f64) {
        self.total_cost += delta;
        self.changes
            .push(StateChange::SelectedWalls(self.selected_walls.clone()));
        self.changes.push(StateChange::TotalCost(self.total_cost));
    }
}
