//! End-to-end: process-wide startup, then the main screen

use std::sync::Arc;

use greeting_shell::prelude::*;
use greeting_shell::runtime;

#[test]
fn displayed_text_equals_greeting_byte_for_byte() {
    let app = ShellApp::start(&GreetingConfig::default(), Arc::new(RustGreeting)).unwrap();
    let mut layout = Layout::activity_main();

    MainScreen::on_create(&app, &mut layout).unwrap();

    let shown = layout.find_text_view(WidgetId::TXT_HELLO).unwrap().text();
    assert_eq!(shown.as_bytes(), greeting_core::greeting().as_bytes());
    assert_eq!(shown, "Hello 🦀");
}

#[test]
fn repeated_start_reuses_runtime() {
    let a = ShellApp::start(&GreetingConfig::default(), Arc::new(RustGreeting)).unwrap();
    let b = ShellApp::start(&GreetingConfig::default(), Arc::new(RustGreeting)).unwrap();

    assert_eq!(a.config(), b.config());
    let runtime = runtime::try_get().expect("runtime initialized by start");
    assert!(std::ptr::eq(runtime, runtime::init(&GreetingConfig::default()).unwrap()));
}
