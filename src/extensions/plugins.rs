use serde::{Deserialize, Serialize};

use crate::core::{ActivePoint, DataPoint, DataRange, PixelPoint, Viewport};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartContext {
    pub viewport: Viewport,
    pub sets_len: usize,
    pub points_len: usize,
    pub data_range: Option<DataRange>,
    pub active: Option<ActivePoint>,
}

/// Details of the point under the pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverInfo {
    pub active: ActivePoint,
    pub point: DataPoint,
    pub pixel: PixelPoint,
    /// Tooltip template of the set with `%x`/`%y` filled in.
    pub tooltip: Option<String>,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    DataSetAdded { points_len: usize, sets_len: usize },
    DataCleared,
    DimensionsChanged { width: u32, height: u32 },
    PointerMoved { x: f64, y: f64 },
    PointerLeft,
    Hover(HoverInfo),
    HoverCleared,
    Rendered { full: bool },
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins can observe events and read chart context without mutating chart
/// internals directly.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &ChartEvent, context: ChartContext);
}

type HoverCallback = Box<dyn FnMut(Option<&HoverInfo>)>;

/// Adapts a closure into a plugin that only sees hover changes.
///
/// The closure receives `Some` when a new point becomes active and `None`
/// when the hover is cleared.
pub struct HoverCallbackPlugin {
    id: String,
    callback: HoverCallback,
}

impl HoverCallbackPlugin {
    pub fn new(id: impl Into<String>, callback: impl FnMut(Option<&HoverInfo>) + 'static) -> Self {
        Self {
            id: id.into(),
            callback: Box::new(callback),
        }
    }
}

impl ChartPlugin for HoverCallbackPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: &ChartEvent, _context: ChartContext) {
        match event {
            ChartEvent::Hover(info) => (self.callback)(Some(info)),
            ChartEvent::HoverCleared => (self.callback)(None),
            _ => {}
        }
    }
}
