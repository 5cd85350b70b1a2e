use tracing::{debug, trace};

use crate::core::{DrawRect, PixelPoint, PointSpace, generate_ticks};
use crate::error::{ChartError, ChartResult};
use crate::extensions::ChartEvent;
use crate::render::{DrawingSurface, TextBaseline, TextHAlign};

use super::Chart;

const AXIS_LINE_WIDTH: f64 = 1.0;

impl Chart {
    /// Full redraw: axes, tick labels, every data set, then the hovered
    /// marker.
    ///
    /// The frame without the hover marker is saved on the surface so
    /// `redraw_hover` can repaint pointer changes without redrawing the graph.
    pub fn redraw<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) -> ChartResult<()> {
        let viewport = self.config.viewport;
        surface.discard_frame();
        surface.clear_rect(DrawRect::new(
            0.0,
            0.0,
            f64::from(viewport.width),
            f64::from(viewport.height),
        ))?;

        self.draw_axes(surface)?;
        match &self.point_space {
            Some(space) => {
                self.draw_tick_labels(surface, space)?;
                self.kind
                    .draw_graph(surface, space, &self.sets, &self.config)?;
            }
            None => self.draw_no_data(surface)?,
        }

        surface.save_frame()?;
        self.frame_valid = true;
        self.draw_active(surface)?;

        debug!(
            sets_len = self.sets.len(),
            has_data = self.point_space.is_some(),
            "full redraw"
        );
        self.emit_plugin_event(ChartEvent::Rendered { full: true });
        Ok(())
    }

    /// Repaints only the hover marker on top of the saved frame.
    ///
    /// Falls back to `redraw` when the frame is stale or the surface has none.
    pub fn redraw_hover<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) -> ChartResult<()> {
        if !self.frame_valid {
            debug!("saved frame is stale, running full redraw");
            return self.redraw(surface);
        }
        match surface.restore_frame() {
            Ok(()) => {}
            Err(ChartError::NoCachedFrame) => {
                debug!("surface has no saved frame, running full redraw");
                return self.redraw(surface);
            }
            Err(err) => return Err(err),
        }

        self.draw_active(surface)?;
        trace!(active = ?self.interaction.active(), "hover redraw");
        self.emit_plugin_event(ChartEvent::Rendered { full: false });
        Ok(())
    }

    fn draw_active<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> ChartResult<()> {
        let (Some(active), Some(space)) = (self.interaction.active(), &self.point_space) else {
            return Ok(());
        };
        self.kind
            .draw_active_marker(surface, active, space, &self.sets, &self.config)
    }

    fn draw_axes<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> ChartResult<()> {
        let rect = self.draw_rect;
        let offset = AXIS_LINE_WIDTH;

        surface.set_stroke_color(self.config.axis_color);
        surface.set_line_width(AXIS_LINE_WIDTH);
        surface.begin_path();
        surface.move_to(PixelPoint::new(rect.x - offset, rect.y - offset));
        surface.line_to(PixelPoint::new(rect.x - offset, rect.bottom() + offset));
        surface.line_to(PixelPoint::new(rect.right(), rect.bottom() + offset));
        surface.stroke()
    }

    fn draw_tick_labels<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        space: &PointSpace,
    ) -> ChartResult<()> {
        let rect = self.draw_rect;
        let x_label = self.config.x_label;
        let y_label = self.config.y_label;
        let x_ticks = generate_ticks(&space.x, x_label.steps)?;
        let y_ticks = generate_ticks(&space.y, y_label.steps)?;

        surface.set_stroke_color(self.config.axis_color);
        surface.set_line_width(AXIS_LINE_WIDTH);
        surface.begin_path();
        let axis_y = rect.bottom();
        for tick in &x_ticks {
            surface.move_to(PixelPoint::new(tick.pixel, axis_y));
            surface.line_to(PixelPoint::new(tick.pixel, axis_y + x_label.tick_size));
        }
        let axis_x = rect.x;
        for tick in &y_ticks {
            surface.move_to(PixelPoint::new(axis_x, tick.pixel));
            surface.line_to(PixelPoint::new(axis_x - y_label.tick_size, tick.pixel));
        }
        surface.stroke()?;

        surface.set_font(&self.config.label_font);
        surface.set_fill_color(self.config.label_color);

        surface.set_text_align(TextHAlign::Center);
        surface.set_text_baseline(TextBaseline::Top);
        let label_y = axis_y + x_label.tick_size + x_label.label_gap;
        for tick in &x_ticks {
            surface.fill_text(
                &self.format_x_value(tick.value),
                PixelPoint::new(tick.pixel, label_y),
            )?;
        }

        surface.set_text_align(TextHAlign::Right);
        surface.set_text_baseline(TextBaseline::Middle);
        let label_x = axis_x - y_label.tick_size - y_label.label_gap;
        for tick in &y_ticks {
            surface.fill_text(
                &self.format_y_value(tick.value),
                PixelPoint::new(label_x, tick.pixel),
            )?;
        }
        Ok(())
    }

    fn draw_no_data<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> ChartResult<()> {
        let rect = self.draw_rect;
        surface.set_font(&self.config.label_font);
        surface.set_fill_color(self.config.label_color);
        surface.set_text_align(TextHAlign::Center);
        surface.set_text_baseline(TextBaseline::Middle);
        surface.fill_text(
            &self.config.no_data_text,
            PixelPoint::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0),
        )
    }
}
