//! JNI entry points
//!
//! Bound to:
//!
//! ```kotlin
//! package com.example.helloworld
//!
//! class MainActivity : AppCompatActivity() {
//!     private external fun greeting(): String
//!     companion object {
//!         init { System.loadLibrary("rust") }
//!     }
//! }
//! ```

use std::ffi::c_void;
use std::panic;

use greeting_core::GreetingConfig;
use jni::objects::JObject;
use jni::sys::{jint, jstring, JNI_ERR, JNI_VERSION_1_6};
use jni::{JNIEnv, JavaVM};

/// Library load hook.
///
/// Returning `JNI_ERR` makes `System.loadLibrary` throw, so a failed
/// initialization surfaces at class initialization.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn JNI_OnLoad(_vm: JavaVM, _reserved: *mut c_void) -> jint {
    match panic::catch_unwind(|| crate::init(GreetingConfig::default()).map(|_| ())) {
        Ok(Ok(())) => JNI_VERSION_1_6,
        Ok(Err(e)) => {
            tracing::error!("JNI_OnLoad: initialization failed: {}", e);
            JNI_ERR
        }
        Err(_) => JNI_ERR,
    }
}

/// `MainActivity.greeting(): String`
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn Java_com_example_helloworld_MainActivity_greeting<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jstring {
    let text = panic::catch_unwind(crate::greeting_or_placeholder).unwrap_or_else(|_| {
        tracing::error!("CRITICAL: panic caught at the JNI boundary");
        crate::placeholder()
    });

    match env.new_string(text) {
        Ok(s) => s.into_raw(),
        Err(e) => {
            tracing::error!("Failed to create Java string: {}", e);
            std::ptr::null_mut()
        }
    }
}
