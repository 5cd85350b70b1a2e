use tracing::trace;

use crate::core::PixelPoint;
use crate::error::ChartResult;
use crate::extensions::{ChartEvent, HoverInfo};
use crate::interaction::{ActivePoint, PointerEvent, PointerEventKind};
use crate::render::DrawingSurface;

use super::Chart;

impl Chart {
    /// Page position of the surface's top-left corner, used to translate
    /// pointer events into surface-local coordinates.
    pub fn set_surface_origin(&mut self, x: f64, y: f64) {
        self.interaction.set_surface_origin(PixelPoint::new(x, y));
    }

    pub fn reset_surface_origin(&mut self) {
        self.interaction.set_surface_origin(PixelPoint::default());
    }

    /// Point under the surface-local position `local`, if any.
    ///
    /// Pure query against the cached point space; hover state is untouched.
    #[must_use]
    pub fn hit_at(&self, local: PixelPoint) -> Option<ActivePoint> {
        let space = self.point_space.as_ref()?;
        self.kind.hit_test(local, space, &self.sets, &self.config)
    }

    /// Applies a pointer event to the hover state and repaints the hover
    /// marker on `surface` when the active point changes.
    ///
    /// Returns the active point after the event.
    pub fn handle_pointer<S: DrawingSurface + ?Sized>(
        &mut self,
        event: PointerEvent,
        surface: &mut S,
    ) -> ChartResult<Option<ActivePoint>> {
        if self.update_pointer(event) {
            self.redraw_hover(surface)?;
        }
        Ok(self.interaction.active())
    }

    /// Hover bookkeeping without drawing; returns `true` when the active
    /// point changed.
    ///
    /// For hosts that schedule their own repaint instead of handing a surface
    /// to `handle_pointer`.
    pub fn update_pointer(&mut self, event: PointerEvent) -> bool {
        let active = match event.kind {
            PointerEventKind::Enter | PointerEventKind::Move => {
                let local = self.interaction.to_local(event.page_x, event.page_y);
                self.interaction.on_pointer_move(local);
                self.emit_plugin_event(ChartEvent::PointerMoved {
                    x: local.x,
                    y: local.y,
                });
                self.hit_at(local)
            }
            PointerEventKind::Leave => {
                self.interaction.on_pointer_leave();
                self.emit_plugin_event(ChartEvent::PointerLeft);
                None
            }
        };

        if !self.interaction.set_active(active) {
            return false;
        }
        trace!(?active, "active point changed");
        match active.and_then(|active| self.hover_info(active)) {
            Some(info) => self.emit_plugin_event(ChartEvent::Hover(info)),
            None => self.emit_plugin_event(ChartEvent::HoverCleared),
        }
        true
    }

    /// Data value, pixel position and tooltip text of `active`.
    #[must_use]
    pub fn hover_info(&self, active: ActivePoint) -> Option<HoverInfo> {
        let point = *self
            .sets
            .get(active.set_index)?
            .points()
            .get(active.point_index)?;
        let pixel = self
            .point_space
            .as_ref()?
            .point(active.set_index, active.point_index)?;
        Some(HoverInfo {
            active,
            point,
            pixel,
            tooltip: self.tooltip_for(active),
        })
    }
}
