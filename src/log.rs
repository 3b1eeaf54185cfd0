use std::sync::LazyLock;

use crate::config::{LOG_ENV_NAME, getenv};

static ENABLED: LazyLock<bool> = LazyLock::new(|| {
    match unsafe { getenv(LOG_ENV_NAME) } {
        Some(value) => !value.is_empty() && value.to_bytes() != b"0",
        None => false,
    }
});

pub fn enabled() -> bool {
    *ENABLED
}

/// Writes a diagnostic line to stderr with `write(2)` when `NIX_VENDOR_LOG`
/// is set.
macro_rules! trace {
    ($($arg:tt)*) => {
        if $crate::log::enabled() {
            ::libc_print::libc_eprintln!("nix-vendor: {}", ::core::format_args!($($arg)*));
        }
    };
}

pub(crate) use trace;
