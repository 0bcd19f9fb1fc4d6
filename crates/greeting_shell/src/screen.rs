//! The main greeting screen

use crate::app::ShellApp;
use crate::error::Result;
use crate::widget::{Layout, WidgetId};

/// The single screen of the application.
pub struct MainScreen;

impl MainScreen {
    /// Screen creation: fill the greeting label.
    ///
    /// Calls the provider exactly once. A provider failure shows the
    /// configured placeholder; only a missing label is an error.
    pub fn on_create(app: &ShellApp, layout: &mut Layout) -> Result<()> {
        let view = layout.find_text_view_mut(WidgetId::TXT_HELLO)?;
        view.set_text(app.greeting_or_placeholder());
        tracing::debug!(widget = %view.id(), "MainScreen created");
        Ok(())
    }
}
