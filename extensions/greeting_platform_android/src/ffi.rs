//! C ABI exports
//!
//! Strings handed out here are owned by the library for the lifetime of the
//! process. Callers must not free them.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic;
use std::ptr;
use std::sync::OnceLock;

use greeting_core::GreetingError;

/// Boundary version reported by [`greeting_abi_version`]
pub const ABI_VERSION: (u32, u32) = (1, 0);

static GREETING_C: OnceLock<Result<CString, GreetingError>> = OnceLock::new();

/// The greeting as a NUL-terminated string, built on first use.
pub fn greeting_cstr() -> greeting_core::Result<&'static CStr> {
    GREETING_C
        .get_or_init(|| {
            CString::new(greeting_core::greeting()).map_err(|e| GreetingError::InvalidText(e.to_string()))
        })
        .as_deref()
        .map_err(Clone::clone)
}

/// Return the greeting as UTF-8.
///
/// Returns null only if the greeting contains an interior NUL byte.
#[no_mangle]
pub extern "C" fn greeting() -> *const c_char {
    match panic::catch_unwind(greeting_cstr) {
        Ok(Ok(text)) => text.as_ptr(),
        Ok(Err(e)) => {
            tracing::error!("greeting: {}", e);
            ptr::null()
        }
        Err(_) => {
            tracing::error!("CRITICAL: panic caught at the greeting FFI boundary");
            ptr::null()
        }
    }
}

/// Report the boundary version.
///
/// # Safety
///
/// `major` and `minor` must each be null or valid for a `u32` write.
#[no_mangle]
pub unsafe extern "C" fn greeting_abi_version(major: *mut u32, minor: *mut u32) {
    if !major.is_null() {
        *major = ABI_VERSION.0;
    }
    if !minor.is_null() {
        *minor = ABI_VERSION.1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_greeting_decodes_to_literal() {
        let ptr = greeting();
        assert!(!ptr.is_null());
        let text = unsafe { CStr::from_ptr(ptr) };
        assert_eq!(text.to_bytes(), greeting_core::GREETING.as_bytes());
        assert_eq!(text.to_str().unwrap(), "Hello 🦀");
    }

    #[test]
    fn test_greeting_pointer_is_stable() {
        assert_eq!(greeting(), greeting());
    }

    #[test]
    fn test_greeting_from_many_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| greeting() as usize))
            .collect();
        let expected = greeting() as usize;
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn test_abi_version() {
        let (mut major, mut minor) = (0u32, 0u32);
        unsafe { greeting_abi_version(&mut major, &mut minor) };
        assert_eq!((major, minor), (1, 0));
    }

    #[test]
    fn test_abi_version_null_pointers() {
        let mut major = 0u32;
        unsafe {
            greeting_abi_version(ptr::null_mut(), ptr::null_mut());
            greeting_abi_version(&mut major, ptr::null_mut());
        }
        assert_eq!(major, 1);
    }
}
