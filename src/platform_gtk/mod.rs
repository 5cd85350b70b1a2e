use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk::prelude::*;
use tracing::warn;

use crate::api::Chart;
use crate::interaction::PointerEvent;
use crate::render::CairoSurface;

/// Hosts a `Chart` in a GTK4 `DrawingArea`.
///
/// GTK hands out a fresh cairo context per draw, so every draw is a full
/// redraw; pointer motion only updates the hover state and queues a draw.
pub struct GtkChartAdapter {
    chart: Rc<RefCell<Chart>>,
    area: gtk::DrawingArea,
}

impl GtkChartAdapter {
    #[must_use]
    pub fn new(chart: Chart) -> Self {
        let viewport = chart.config().viewport;
        let chart = Rc::new(RefCell::new(chart));
        let area = gtk::DrawingArea::new();
        area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));

        let draw_chart = Rc::clone(&chart);
        area.set_draw_func(move |_, context, width, height| {
            let mut surface = CairoSurface::from_context(context.clone(), width, height);
            if let Err(err) = draw_chart.borrow_mut().redraw(&mut surface) {
                warn!(error = %err, "chart draw failed");
            }
        });

        let motion = gtk::EventControllerMotion::new();
        let enter_chart = Rc::clone(&chart);
        let enter_area = area.clone();
        motion.connect_enter(move |_, x, y| {
            if enter_chart.borrow_mut().update_pointer(PointerEvent::enter(x, y)) {
                enter_area.queue_draw();
            }
        });
        let move_chart = Rc::clone(&chart);
        let move_area = area.clone();
        motion.connect_motion(move |_, x, y| {
            if move_chart.borrow_mut().update_pointer(PointerEvent::moved(x, y)) {
                move_area.queue_draw();
            }
        });
        let leave_chart = Rc::clone(&chart);
        let leave_area = area.clone();
        motion.connect_leave(move |_| {
            if leave_chart.borrow_mut().update_pointer(PointerEvent::leave()) {
                leave_area.queue_draw();
            }
        });
        area.add_controller(motion);

        Self { chart, area }
    }

    /// Shared handle for adding data or resizing from host code.
    ///
    /// Call `queue_draw` after mutating the chart.
    #[must_use]
    pub fn chart(&self) -> Rc<RefCell<Chart>> {
        Rc::clone(&self.chart)
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    pub fn queue_draw(&self) {
        self.area.queue_draw();
    }
}
