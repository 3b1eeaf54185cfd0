//! Binding backends.
//!
//! Both backends expose the same `intercept!` macro. It takes the name of a
//! wrapper defined next to it, checks the wrapper against the platform
//! declaration, binds it in place of the platform primitive, and generates a
//! module of the same name whose `original()` returns the real primitive.
//!
//! `intercept!(name(64): ..)` marks a primitive with a 64-bit-field twin; the
//! wrapper then delegates to the twin.

#[cfg(target_os = "macos")]
#[path = "./macos.rs"]
mod os_impl;

#[cfg(target_os = "linux")]
#[path = "./linux.rs"]
mod os_impl;

pub use os_impl::*;
