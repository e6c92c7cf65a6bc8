use crate::constants::{MARKER_GROUND_Y, MARKER_UPPER_Y, STOREY_SPLIT_HEIGHT};
use crate::scene::SurfaceKind;
use crate::state::CursorStyle;
use glam::Vec3;

/// Height of the marker plane for the storey the camera is on.
#[inline]
pub fn marker_height(floor_height: f32) -> f32 {
    if floor_height < STOREY_SPLIT_HEIGHT {
        MARKER_GROUND_Y
    } else {
        MARKER_UPPER_Y
    }
}

/// Floor-following cursor showing where a click would walk to.
#[derive(Clone, Debug)]
pub struct Marker {
    position: Vec3,
    visible: bool,
    hovered: Option<SurfaceKind>,
    suppressed: bool,
}

impl Marker {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            visible: false,
            hovered: None,
            suppressed: false,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn hovered(&self) -> Option<SurfaceKind> {
        self.hovered
    }

    /// Pointer entered a surface. Returns the cursor to show, or `None` while
    /// a drag owns the cursor.
    pub fn enter(&mut self, kind: SurfaceKind) -> Option<CursorStyle> {
        self.hovered = Some(kind);
        if self.suppressed {
            return None;
        }
        self.visible = kind.is_navigable();
        Some(cursor_for(kind))
    }

    /// Track the pointer over walkable surfaces. `kind` is that of the
    /// surface actually under the pointer. Returns whether it moved.
    pub fn follow(&mut self, kind: SurfaceKind, point: Vec3, floor_height: f32) -> bool {
        if self.suppressed || !kind.is_navigable() {
            return false;
        }
        self.position = Vec3::new(point.x, marker_height(floor_height), point.z);
        true
    }

    pub fn exit(&mut self, remaining: usize) {
        if remaining == 0 {
            self.hovered = None;
            self.visible = false;
        }
    }

    /// Hide for the duration of a drag.
    pub fn suppress(&mut self) {
        self.suppressed = true;
        self.visible = false;
    }

    /// Drag finished: show again if still over a walkable surface.
    pub fn restore(&mut self) -> CursorStyle {
        self.suppressed = false;
        match self.hovered {
            Some(kind) => {
                self.visible = kind.is_navigable();
                cursor_for(kind)
            }
            None => CursorStyle::Grab,
        }
    }
}

fn cursor_for(kind: SurfaceKind) -> CursorStyle {
    if kind.is_navigable() {
        CursorStyle::Pointer
    } else {
        CursorStyle::Grab
    }
}
