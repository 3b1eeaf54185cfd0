//! Preload library that relocates absolute `/nix` store paths under a root
//! chosen at run time.
//!
//! Loaded with `LD_PRELOAD` (Linux) or `DYLD_INSERT_LIBRARIES` (macOS), it
//! binds a wrapper in place of every path-taking libc primitive in
//! `interceptions`. A wrapper prefixes its path argument with the relocation
//! root when the path starts with the store prefix, and otherwise forwards
//! the caller's arguments untouched.

#![feature(c_variadic)]
#![allow(clippy::missing_safety_doc)]

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
compile_error!("nix-vendor only supports Linux and macOS");

mod argv;
mod config;
mod error;
mod interceptions;
mod libc;
mod log;
mod macros;
mod store;

#[cfg(test)]
mod testing;
