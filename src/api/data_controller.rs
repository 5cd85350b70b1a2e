use tracing::{debug, warn};

use crate::core::{
    DataPoint, DataSet, DataSetOptionsOverride, DrawRect, Padding, PointSpace, Viewport,
};
use crate::error::ChartResult;
use crate::extensions::ChartEvent;

use super::Chart;

impl Chart {
    /// Adds a data set in front of the existing ones and rebuilds the point
    /// space.
    ///
    /// Options are the chart's `line_defaults` with `overrides` applied; they
    /// are fixed from here on. Non-finite coordinates are rejected. On error
    /// the chart is left unchanged.
    pub fn add_data_set<I, P>(
        &mut self,
        points: I,
        overrides: DataSetOptionsOverride,
    ) -> ChartResult<()>
    where
        I: IntoIterator<Item = P>,
        P: Into<DataPoint>,
    {
        let points: Vec<DataPoint> = points.into_iter().map(Into::into).collect();
        let options = self.config.line_defaults.merged(&overrides);
        let set = DataSet::new(points, options)?;
        let points_len = set.len();

        self.sets.prepend(set);
        if let Err(err) = self.recompute() {
            warn!(error = %err, "rejecting data set: point space cannot be built");
            self.sets.remove_front();
            self.recompute()?;
            return Err(err);
        }
        self.interaction.set_active(None);

        debug!(
            points_len,
            sets_len = self.sets.len(),
            total_points = self.sets.total_points(),
            "data set added"
        );
        self.emit_plugin_event(ChartEvent::DataSetAdded {
            points_len,
            sets_len: self.sets.len(),
        });
        Ok(())
    }

    /// Removes every data set; the chart shows its no-data state.
    pub fn clear_data_sets(&mut self) {
        self.sets.clear();
        self.point_space = None;
        self.frame_valid = false;
        self.interaction.set_active(None);
        debug!("data sets cleared");
        self.emit_plugin_event(ChartEvent::DataCleared);
    }

    /// Changes canvas size and label padding.
    ///
    /// Fails when the padding leaves no room for the graph; the previous
    /// geometry stays in effect in that case.
    pub fn set_dimensions(&mut self, width: u32, height: u32, padding: Padding) -> ChartResult<()> {
        let mut candidate = self.config.clone();
        candidate.viewport = Viewport::new(width, height);
        candidate.padding = padding;
        candidate.validate()?;

        let draw_rect = DrawRect::from_viewport(candidate.viewport, candidate.padding)?;
        let inner_padding = self.kind.inner_padding(&self.sets, &candidate);
        let point_space = PointSpace::compute(&self.sets, draw_rect, inner_padding)?;

        self.config = candidate;
        self.draw_rect = draw_rect;
        self.point_space = point_space;
        self.frame_valid = false;

        debug!(width, height, "chart dimensions changed");
        self.emit_plugin_event(ChartEvent::DimensionsChanged { width, height });
        Ok(())
    }

    /// Rebuilds range and point space from the current sets and geometry.
    pub fn recompute(&mut self) -> ChartResult<()> {
        let inner_padding = self.kind.inner_padding(&self.sets, &self.config);
        self.point_space = PointSpace::compute(&self.sets, self.draw_rect, inner_padding)?;
        self.frame_valid = false;
        debug!(
            sets_len = self.sets.len(),
            has_data = self.point_space.is_some(),
            "point space recomputed"
        );
        Ok(())
    }
}
