use crate::constants::CLICK_MAX_HOLD_MS;
use crate::scene::SurfaceId;
use glam::Vec3;
use smallvec::SmallVec;

/// A renderer raycast result: the surface under the pointer and the world-space hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub surface: SurfaceId,
    pub point: Vec3,
}

/// Raw pointer input, already raycast by the renderer. Times are in the
/// event source's millisecond clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Pointer entered `surface`.
    Over { surface: SurfaceId },
    /// Pointer left a surface; `remaining` surfaces are still under it.
    Out { remaining: usize },
    /// Pointer moved; `hit` is the nearest surface, if any.
    Move { hit: Option<Hit> },
    Down { time_ms: f64 },
    Up { time_ms: f64, hit: Option<Hit> },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    HoverEnter(SurfaceId),
    HoverMove(Hit),
    HoverExit { remaining: usize },
    DragStart,
    DragEnd,
    Click(Hit),
    /// A quick release that landed on nothing.
    Missed,
}

pub type Gestures = SmallVec<[Gesture; 2]>;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum PressTiming {
    #[default]
    Idle,
    Pressed {
        started_ms: f64,
    },
    Released {
        held_ms: f64,
    },
}

/// Turns pointer down/move/up sequences into hovers, drags and clicks.
///
/// A release only counts as a click when the press lasted less than the
/// configured hold limit; anything longer belongs to the orbit controls.
#[derive(Clone, Debug)]
pub struct GestureClassifier {
    max_hold_ms: f64,
    timing: PressTiming,
    dragging: bool,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(CLICK_MAX_HOLD_MS)
    }
}

impl GestureClassifier {
    pub fn new(max_hold_ms: f64) -> Self {
        Self {
            max_hold_ms,
            timing: PressTiming::Idle,
            dragging: false,
        }
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self.timing, PressTiming::Pressed { .. })
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Duration of the last completed press, if one completed.
    pub fn last_hold_ms(&self) -> Option<f64> {
        match self.timing {
            PressTiming::Released { held_ms } => Some(held_ms),
            _ => None,
        }
    }

    pub fn feed(&mut self, event: PointerEvent) -> Gestures {
        let mut out = Gestures::new();
        match event {
            PointerEvent::Over { surface } => out.push(Gesture::HoverEnter(surface)),
            PointerEvent::Out { remaining } => out.push(Gesture::HoverExit { remaining }),
            PointerEvent::Move { hit } => {
                if self.is_pressed() {
                    if !self.dragging {
                        self.dragging = true;
                        out.push(Gesture::DragStart);
                    }
                } else if let Some(hit) = hit {
                    out.push(Gesture::HoverMove(hit));
                }
            }
            PointerEvent::Down { time_ms } => {
                self.timing = PressTiming::Pressed {
                    started_ms: time_ms,
                };
            }
            PointerEvent::Up { time_ms, hit } => {
                if std::mem::take(&mut self.dragging) {
                    out.push(Gesture::DragEnd);
                }
                self.timing = match self.timing {
                    PressTiming::Pressed { started_ms } => PressTiming::Released {
                        held_ms: time_ms - started_ms,
                    },
                    _ => {
                        log::debug!("[gesture] release without a press; not a click");
                        PressTiming::Idle
                    }
                };
                if self.is_quick_release() {
                    out.push(hit.map_or(Gesture::Missed, Gesture::Click));
                }
            }
        }
        out
    }

    fn is_quick_release(&self) -> bool {
        self.last_hold_ms()
            .is_some_and(|held| held.is_finite() && held < self.max_hold_ms)
    }
}
