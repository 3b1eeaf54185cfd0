use std::ffi::CStr;

use libc::c_char;

// Overridable at build time with `NIX_VENDOR_STORE_PREFIX`.
pub const STORE_PREFIX: &[u8] = match option_env!("NIX_VENDOR_STORE_PREFIX") {
    Some(prefix) => prefix.as_bytes(),
    None => b"/nix",
};

#[cfg(target_os = "macos")]
pub const ROOT_ENV_NAME: &CStr = c"DYLD_ROOT_PATH";
#[cfg(not(target_os = "macos"))]
pub const ROOT_ENV_NAME: &CStr = c"NIX_VENDOR_ROOT";

/// Set to anything but `0` to trace applied rewrites on stderr.
pub const LOG_ENV_NAME: &CStr = c"NIX_VENDOR_LOG";

/// Reads an environment variable without allocating.
///
/// # Safety
/// The returned string borrows the environment block; it must not outlive a
/// concurrent `setenv`/`unsetenv` of the same name.
pub unsafe fn getenv(name: &CStr) -> Option<&'static CStr> {
    let value: *const c_char = unsafe { libc::getenv(name.as_ptr()) };
    if value.is_null() {
        None
    } else {
        Some(unsafe { CStr::from_ptr(value) })
    }
}

/// Read on every call, never cached.
pub unsafe fn relocation_root() -> Option<&'static CStr> {
    unsafe { getenv(ROOT_ENV_NAME) }
}
