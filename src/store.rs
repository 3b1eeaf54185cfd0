use std::ffi::{CStr, CString};

use bstr::BStr;
use libc::c_char;
use nix::errno::Errno;

use crate::{
    config::{STORE_PREFIX, relocation_root},
    log::trace,
};

/// `Ok(None)` means `path` is used as is. The prefix test is bytewise, so
/// `/nixos` matches `/nix`.
pub fn rewrite(path: &CStr, prefix: &[u8], root: Option<&CStr>) -> nix::Result<Option<CString>> {
    let path = path.to_bytes();
    if !path.starts_with(prefix) {
        return Ok(None);
    }
    let Some(root) = root.map(CStr::to_bytes).filter(|root| !root.is_empty()) else {
        return Ok(None);
    };

    let mut rewritten = Vec::<u8>::new();
    rewritten
        .try_reserve_exact(root.len() + path.len() + 1)
        .map_err(|_| Errno::ENOMEM)?;
    rewritten.extend_from_slice(root);
    rewritten.extend_from_slice(path);
    // Both halves come from C strings, so there is no interior NUL.
    Ok(Some(unsafe { CString::from_vec_unchecked(rewritten) }))
}

pub struct StorePath {
    original: *const c_char,
    rewritten: Option<CString>,
}

impl StorePath {
    /// # Safety
    /// `path` must be null or point to a NUL-terminated string.
    pub unsafe fn expand(path: *const c_char) -> nix::Result<Self> {
        let unchanged = Self {
            original: path,
            rewritten: None,
        };
        if path.is_null() {
            return Ok(unchanged);
        }
        let path = unsafe { CStr::from_ptr(path) };
        if !path.to_bytes().starts_with(STORE_PREFIX) {
            return Ok(unchanged);
        }
        let rewritten = rewrite(path, STORE_PREFIX, unsafe { relocation_root() })?;
        if let Some(rewritten) = &rewritten {
            trace!(
                "{} -> {}",
                BStr::new(path.to_bytes()),
                BStr::new(rewritten.to_bytes())
            );
        }
        Ok(Self { rewritten, ..unchanged })
    }

    pub fn as_ptr(&self) -> *const c_char {
        match &self.rewritten {
            Some(rewritten) => rewritten.as_ptr(),
            None => self.original,
        }
    }

    pub fn is_rewritten(&self) -> bool {
        self.rewritten.is_some()
    }
}

// Returns from the enclosing wrapper with ENOMEM on allocation failure.
macro_rules! expand_store {
    ($path: expr) => {
        match unsafe { $crate::store::StorePath::expand($path) } {
            Ok(path) => path,
            Err(errno) => $crate::error::bail!(errno),
        }
    };
}

pub(crate) use expand_store;
