//! Greeting Shell
//!
//! The host-side contract around the native greeting: initialize once at
//! startup, then on screen creation put the greeting into the label.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use greeting_shell::prelude::*;
//!
//! let app = ShellApp::start(&GreetingConfig::default(), Arc::new(RustGreeting)).unwrap();
//! let mut layout = Layout::activity_main();
//! MainScreen::on_create(&app, &mut layout).unwrap();
//!
//! let label = layout.find_text_view(WidgetId::TXT_HELLO).unwrap();
//! assert_eq!(label.text(), greeting_core::greeting());
//! ```

mod app;
mod error;
pub mod runtime;
mod screen;
mod widget;


pub use app::ShellApp;
pub use error::{Result, ShellError};
pub use screen::MainScreen;
pub use widget::{Layout, TextView, WidgetId};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::app::ShellApp;
    pub use crate::error::{Result, ShellError};
    pub use crate::screen::MainScreen;
    pub use crate::widget::{Layout, TextView, WidgetId};

    pub use greeting_core::{GreetingConfig, GreetingError, GreetingProvider, RustGreeting};
}
