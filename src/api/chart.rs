use tracing::debug;

use crate::core::{DrawRect, PointSpace, SetCollection};
use crate::error::ChartResult;
use crate::extensions::ChartPlugin;
use crate::interaction::{ActivePoint, InteractionState};

use super::{ChartConfig, ChartKind};

/// Main orchestration facade consumed by host applications.
///
/// `Chart` owns the data sets, the derived point space and the hover state.
/// It never owns a drawing surface: hosts pass one into each draw call.
/// Every data or geometry mutation rebuilds the point space from scratch;
/// pointer hover only re-runs the hit test against the cached point space.
pub struct Chart {
    pub(super) config: ChartConfig,
    pub(super) kind: ChartKind,
    pub(super) sets: SetCollection,
    pub(super) draw_rect: DrawRect,
    pub(super) point_space: Option<PointSpace>,
    pub(super) interaction: InteractionState,
    /// Whether the surface's saved frame matches the current data/geometry.
    pub(super) frame_valid: bool,
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
}

impl Chart {
    pub fn new(config: ChartConfig, kind: ChartKind) -> ChartResult<Self> {
        config.validate()?;
        let draw_rect = DrawRect::from_viewport(config.viewport, config.padding)?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            ?kind,
            "chart created"
        );

        Ok(Self {
            config,
            kind,
            sets: SetCollection::new(),
            draw_rect,
            point_space: None,
            interaction: InteractionState::default(),
            frame_valid: false,
            plugins: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn sets(&self) -> &SetCollection {
        &self.sets
    }

    #[must_use]
    pub fn draw_rect(&self) -> DrawRect {
        self.draw_rect
    }

    /// Cached pixel-space data; `None` in the no-data state.
    #[must_use]
    pub fn point_space(&self) -> Option<&PointSpace> {
        self.point_space.as_ref()
    }

    #[must_use]
    pub fn has_data(&self) -> bool {
        self.point_space.is_some()
    }

    #[must_use]
    pub fn active_point(&self) -> Option<ActivePoint> {
        self.interaction.active()
    }

    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }
}
