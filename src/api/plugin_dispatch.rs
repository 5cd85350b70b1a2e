use crate::extensions::{ChartContext, ChartEvent};

use super::Chart;

impl Chart {
    pub(super) fn plugin_context(&self) -> ChartContext {
        ChartContext {
            viewport: self.config.viewport,
            sets_len: self.sets.len(),
            points_len: self.sets.total_points(),
            data_range: self.point_space.as_ref().map(|space| space.data_range),
            active: self.interaction.active(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: ChartEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(&event, context);
        }
    }
}
