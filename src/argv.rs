use libc::{c_char, c_int};
use nix::{errno::Errno, fcntl::OFlag};

#[cfg(not(target_os = "macos"))]
pub type Mode = libc::mode_t;
#[cfg(target_os = "macos")] // https://github.com/tailhook/openat/issues/21#issuecomment-535914957
pub type Mode = c_int;

pub fn has_mode_arg(flags: c_int) -> bool {
    let flags = OFlag::from_bits_retain(flags);
    #[cfg(target_os = "linux")]
    if flags.contains(OFlag::O_TMPFILE) {
        return true;
    }
    flags.contains(OFlag::O_CREAT)
}

/// Null-terminated argument vector of an `execl`-style call.
pub struct Argv(Vec<*const c_char>);

impl Argv {
    /// `next` is not called again once it returned the terminating null.
    pub fn collect(
        arg0: *const c_char,
        mut next: impl FnMut() -> *const c_char,
    ) -> nix::Result<Self> {
        let mut args = Vec::new();
        let mut arg = arg0;
        loop {
            args.try_reserve(1).map_err(|_| Errno::ENOMEM)?;
            args.push(arg);
            if arg.is_null() {
                return Ok(Self(args));
            }
            arg = next();
        }
    }

    #[cfg(test)]
    pub fn args(&self) -> &[*const c_char] {
        &self.0[..self.0.len() - 1]
    }

    pub fn as_ptr(&self) -> *const *const c_char {
        self.0.as_ptr()
    }
}

/// Copy of a null-terminated path list with the first entry replaced. The
/// other entries still point to the caller's strings.
pub struct PathList(Vec<*mut c_char>);

impl PathList {
    /// # Safety
    /// `list` must point to a null-terminated array with at least one entry
    /// before the terminator.
    pub unsafe fn with_first(list: *const *mut c_char, first: *mut c_char) -> nix::Result<Self> {
        let mut len = 0;
        while !unsafe { *list.add(len) }.is_null() {
            len += 1;
        }

        let mut paths = Vec::new();
        paths
            .try_reserve_exact(len + 1)
            .map_err(|_| Errno::ENOMEM)?;
        paths.extend_from_slice(unsafe { core::slice::from_raw_parts(list, len + 1) });
        paths[0] = first;
        Ok(Self(paths))
    }

    pub fn as_ptr(&self) -> *const *mut c_char {
        self.0.as_ptr()
    }
}
