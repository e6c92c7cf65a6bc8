use crate::catalog::find_entry;
use crate::config::{ShowroomConfig, UnknownSurfacePolicy};
use crate::error::ShowroomError;
use crate::gesture::{Gesture, GestureClassifier, Hit, PointerEvent};
use crate::ledger::{SurfaceLedger, ToggleOutcome};
use crate::marker::Marker;
use crate::navigation::{NavOutcome, Navigator};
use crate::scene::{Scene, SurfaceId, SurfaceKind};
use crate::state::{CursorStyle, InteractionState, Pose, Selection, StateChange};
use std::time::Duration;

/// What a click ended up doing. Mostly useful to tests and logs.
#[derive(Clone, Debug, PartialEq)]
pub enum ClickAction {
    Navigate(NavOutcome),
    Toggle(ToggleOutcome),
    Ignored,
}

/// Single entry point for pointer input and per-frame updates.
///
/// Owns the scene, the shared [`InteractionState`] and the components that
/// mutate it; everything runs on the caller's thread.
///
/// The last-interaction label follows accepted clicks only. A long press
/// (a drag of the view) leaves the previous label in place.
#[derive(Clone, Debug)]
pub struct Showroom {
    scene: Scene,
    state: InteractionState,
    gestures: GestureClassifier,
    marker: Marker,
    navigator: Navigator,
    ledger: SurfaceLedger,
    unknown_surfaces: UnknownSurfacePolicy,
    last_click: Option<ClickAction>,
}

impl Showroom {
    pub fn new(scene: Scene, config: ShowroomConfig) -> Self {
        Self {
            scene,
            state: InteractionState::new(config.initial_selection),
            gestures: GestureClassifier::new(config.click_max_hold_ms),
            marker: Marker::new(config.marker_start),
            navigator: Navigator::new(config.initial_pose, config.spring),
            ledger: SurfaceLedger::new(config.area_per_roll),
            unknown_surfaces: config.unknown_surfaces,
            last_click: None,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn gestures(&self) -> &GestureClassifier {
        &self.gestures
    }

    pub fn camera(&self) -> Pose {
        self.navigator.camera()
    }

    /// Outcome of the most recent accepted click.
    pub fn last_click(&self) -> Option<&ClickAction> {
        self.last_click.as_ref()
    }

    pub fn take_changes(&mut self) -> Vec<StateChange> {
        self.state.take_changes()
    }

    /// Panel picked a catalog entry.
    pub fn select_option(&mut self, id: &str) -> Result<(), ShowroomError> {
        let entry = find_entry(id).ok_or_else(|| ShowroomError::UnknownOption(id.to_string()))?;
        self.set_selection(entry.selection()?);
        Ok(())
    }

    pub fn set_selection(&mut self, selection: Selection) {
        log::info!(
            "[panel] selected {} at {:.2}/roll",
            selection.option,
            selection.price
        );
        self.state.set_selection(selection);
    }

    /// Camera moved by the orbit controls.
    pub fn sync_camera(&mut self, pose: Pose) {
        self.navigator.sync_camera(pose);
    }

    /// Per-frame update. Returns the camera pose while it is being flown.
    pub fn tick(&mut self, dt: Duration) -> Option<Pose> {
        self.navigator.tick(dt)
    }

    pub fn handle(&mut self, event: PointerEvent) {
        for gesture in self.gestures.feed(event) {
            self.route(gesture);
        }
    }

    fn route(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::HoverEnter(surface) => {
                let Some(kind) = self.kind_of(surface) else {
                    return;
                };
                if let Some(cursor) = self.marker.enter(kind) {
                    self.state.set_cursor(cursor);
                }
                self.publish_marker();
            }
            Gesture::HoverMove(hit) => {
                let Some(kind) = self.kind_of(hit.surface) else {
                    return;
                };
                if self
                    .marker
                    .follow(kind, hit.point, self.state.floor_height())
                {
                    self.publish_marker();
                }
            }
            Gesture::HoverExit { remaining } => {
                let was_visible = self.marker.is_visible();
                self.marker.exit(remaining);
                if was_visible != self.marker.is_visible() {
                    self.publish_marker();
                }
            }
            Gesture::DragStart => {
                self.marker.suppress();
                self.navigator.cancel();
                self.state.set_cursor(CursorStyle::Grabbing);
                self.publish_marker();
            }
            Gesture::DragEnd => {
                let cursor = self.marker.restore();
                self.state.set_cursor(cursor);
                self.publish_marker();
            }
            Gesture::Click(hit) => {
                let action = self.click(hit);
                self.last_click = Some(action);
            }
            Gesture::Missed => self.state.set_last_interaction(None),
        }
    }

    fn click(&mut self, hit: Hit) -> ClickAction {
        let Some(surface) = self.scene.surface(hit.surface) else {
            log::warn!("[gesture] click on unregistered surface {:?}", hit.surface);
            return ClickAction::Ignored;
        };
        let kind = surface.kind;
        let name = surface.name.clone();
        self.state
            .set_last_interaction(Some(format!("{}: \"{}\"", name, surface.material())));

        match kind {
            k if k.is_navigable() => {
                ClickAction::Navigate(self.navigator.request(k, hit.point, &mut self.state))
            }
            SurfaceKind::PaintableWall => self.toggle(hit.surface),
            _ => match self.unknown_surfaces {
                UnknownSurfacePolicy::Paint => self.toggle(hit.surface),
                UnknownSurfacePolicy::Ignore => {
                    log::info!("[gesture] {} is not paintable; ignoring click", name);
                    ClickAction::Ignored
                }
            },
        }
    }

    fn toggle(&mut self, id: SurfaceId) -> ClickAction {
        match self.scene.surface_and_materials(id) {
            Some((surface, materials)) => {
                ClickAction::Toggle(self.ledger.toggle(surface, materials, &mut self.state))
            }
            None => ClickAction::Ignored,
        }
    }

    fn kind_of(&self, surface: SurfaceId) -> Option<SurfaceKind> {
        let kind = self.scene.surface(surface).map(|s| s.kind);
        if kind.is_none() {
            log::warn!("[gesture] hover over unregistered surface {:?}", surface);
        }
        kind
    }

    fn publish_marker(&mut self) {
        self.state
            .publish_marker(self.marker.position(), self.marker.is_visible());
    }
}
