//! Display widgets
//!
//! The host toolkit owns real views; the shell only needs text views it can
//! look up by their layout identifier.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Result, ShellError};

/// Layout-defined widget identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(&'static str);

impl WidgetId {
    /// The greeting label in the main activity layout
    pub const TXT_HELLO: WidgetId = WidgetId("txtHello");

    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A widget showing a single text value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextView {
    id: WidgetId,
    text: String,
}

impl TextView {
    pub fn new(id: WidgetId) -> Self {
        Self {
            id,
            text: String::new(),
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

/// An inflated layout: the widgets of one screen, keyed by identifier
#[derive(Debug, Default)]
pub struct Layout {
    views: HashMap<WidgetId, TextView>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main activity layout: a single greeting label
    pub fn activity_main() -> Self {
        Self::new().with_text_view(WidgetId::TXT_HELLO)
    }

    /// Add an empty text view
    pub fn with_text_view(mut self, id: WidgetId) -> Self {
        self.views.insert(id, TextView::new(id));
        self
    }

    pub fn find_text_view(&self, id: WidgetId) -> Option<&TextView> {
        self.views.get(&id)
    }

    pub fn find_text_view_mut(&mut self, id: WidgetId) -> Result<&mut TextView> {
        self.views.get_mut(&id).ok_or(ShellError::WidgetNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_main_has_greeting_label() {
        let layout = Layout::activity_main();
        let view = layout.find_text_view(WidgetId::TXT_HELLO).unwrap();
        assert_eq!(view.id(), WidgetId::TXT_HELLO);
        assert_eq!(view.text(), "");
    }

    #[test]
    fn test_missing_widget() {
        let mut layout = Layout::new();
        assert_eq!(
            layout.find_text_view_mut(WidgetId::TXT_HELLO),
            Err(ShellError::WidgetNotFound(WidgetId::TXT_HELLO))
        );
    }

    #[test]
    fn test_set_text_replaces() {
        let mut view = TextView::new(WidgetId::new("txtStatus"));
        view.set_text("first");
        view.set_text(String::from("second"));
        assert_eq!(view.text(), "second");
        assert_eq!(view.id().to_string(), "txtStatus");
    }
}
