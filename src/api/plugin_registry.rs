use crate::error::{ChartError, ChartResult};
use crate::extensions::{ChartPlugin, HoverCallbackPlugin, HoverInfo};

use super::Chart;

/// Plugin id reserved for the callback installed by `Chart::on_hover`.
pub const HOVER_CALLBACK_PLUGIN_ID: &str = "hover-callback";

impl Chart {
    /// Registers a plugin with unique identifier.
    ///
    /// `HOVER_CALLBACK_PLUGIN_ID` is reserved for `on_hover` and rejected here.
    pub fn register_plugin(&mut self, plugin: Box<dyn ChartPlugin>) -> ChartResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(ChartError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if plugin_id == HOVER_CALLBACK_PLUGIN_ID {
            return Err(ChartError::InvalidData(format!(
                "plugin id `{plugin_id}` is reserved for the hover callback"
            )));
        }
        if self.has_plugin(&plugin_id) {
            return Err(ChartError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        self.plugins.push(plugin);
        Ok(())
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        if let Some(position) = self
            .plugins
            .iter()
            .position(|entry| entry.id() == plugin_id)
        {
            self.plugins.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.id() == plugin_id)
    }

    /// Installs the hover callback, replacing a previous one.
    ///
    /// The callback gets `Some` when a new point becomes active and `None`
    /// when the hover is cleared.
    pub fn on_hover(&mut self, callback: impl FnMut(Option<&HoverInfo>) + 'static) {
        self.unregister_plugin(HOVER_CALLBACK_PLUGIN_ID);
        self.plugins.push(Box::new(HoverCallbackPlugin::new(
            HOVER_CALLBACK_PLUGIN_ID,
            callback,
        )));
    }
}
