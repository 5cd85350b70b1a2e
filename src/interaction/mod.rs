use serde::{Deserialize, Serialize};

use crate::core::PixelPoint;

pub use crate::core::ActivePoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEventKind {
    Enter,
    Move,
    Leave,
}

/// Pointer input in page coordinates, as delivered by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub page_x: f64,
    pub page_y: f64,
}

impl PointerEvent {
    #[must_use]
    pub const fn enter(page_x: f64, page_y: f64) -> Self {
        Self {
            kind: PointerEventKind::Enter,
            page_x,
            page_y,
        }
    }

    #[must_use]
    pub const fn moved(page_x: f64, page_y: f64) -> Self {
        Self {
            kind: PointerEventKind::Move,
            page_x,
            page_y,
        }
    }

    #[must_use]
    pub const fn leave() -> Self {
        Self {
            kind: PointerEventKind::Leave,
            page_x: 0.0,
            page_y: 0.0,
        }
    }
}

/// Transient hover state; never part of the chart's data.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    surface_origin: PixelPoint,
    cursor: Option<PixelPoint>,
    active: Option<ActivePoint>,
}

impl InteractionState {
    /// Page position of the surface's top-left corner.
    #[must_use]
    pub fn surface_origin(self) -> PixelPoint {
        self.surface_origin
    }

    pub fn set_surface_origin(&mut self, origin: PixelPoint) {
        self.surface_origin = origin;
    }

    /// Page coordinates → surface-local pixel coordinates.
    #[must_use]
    pub fn to_local(self, page_x: f64, page_y: f64) -> PixelPoint {
        PixelPoint::new(page_x - self.surface_origin.x, page_y - self.surface_origin.y)
    }

    #[must_use]
    pub fn cursor(self) -> Option<PixelPoint> {
        self.cursor
    }

    #[must_use]
    pub fn active(self) -> Option<ActivePoint> {
        self.active
    }

    pub fn on_pointer_move(&mut self, local: PixelPoint) {
        self.cursor = Some(local);
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor = None;
    }

    /// Stores the new active point; returns `true` when it changed.
    pub fn set_active(&mut self, active: Option<ActivePoint>) -> bool {
        if self.active == active {
            return false;
        }
        self.active = active;
        true
    }
}
