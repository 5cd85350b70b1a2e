use chrono::{Datelike, Utc};

use crate::core::{ActivePoint, DataPoint};

use super::Chart;

impl Chart {
    /// Year the date axis treats as current.
    #[must_use]
    pub fn date_reference_year(&self) -> i32 {
        self.config
            .date_reference_year
            .unwrap_or_else(|| Utc::now().year())
    }

    #[must_use]
    pub fn format_x_value(&self, value: f64) -> String {
        self.kind
            .x_format()
            .format(value, self.date_reference_year())
    }

    #[must_use]
    pub fn format_y_value(&self, value: f64) -> String {
        self.kind
            .y_format()
            .format(value, self.date_reference_year())
    }

    /// Tooltip text for `active`, or `None` when the set has no template.
    #[must_use]
    pub fn tooltip_for(&self, active: ActivePoint) -> Option<String> {
        let set = self.sets.get(active.set_index)?;
        let point = set.points().get(active.point_index)?;
        let template = set.options().tooltip.as_deref()?;
        Some(self.fill_tooltip(template, *point))
    }

    fn fill_tooltip(&self, template: &str, point: DataPoint) -> String {
        template
            .replace("%x", &self.format_x_value(point.x))
            .replace("%y", &self.format_y_value(point.y))
    }
}
