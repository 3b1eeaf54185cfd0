use libc::{c_int, c_long, ssize_t};

/// Value a primitive returns to report failure through errno.
pub trait Failure {
    fn failure() -> Self;
}

impl Failure for c_int {
    fn failure() -> Self {
        -1
    }
}

// Both are `c_int` on 32-bit targets.
#[cfg(target_pointer_width = "64")]
impl Failure for c_long {
    fn failure() -> Self {
        -1
    }
}

#[cfg(target_pointer_width = "64")]
impl Failure for ssize_t {
    fn failure() -> Self {
        -1
    }
}

impl<T> Failure for *mut T {
    fn failure() -> Self {
        core::ptr::null_mut()
    }
}

/// Sets errno and bails out of a wrapper with its failure value.
macro_rules! bail {
    ($errno: expr) => {{
        let errno: ::nix::errno::Errno = $errno;
        errno.set();
        return $crate::error::Failure::failure();
    }};
}

pub(crate) use bail;

#[cfg(test)]
mod tests {
    use libc::c_char;
    use nix::errno::Errno;

    use super::*;

    fn fails_with_enomem() -> c_int {
        bail!(Errno::ENOMEM)
    }

    fn fails_with_null() -> *mut c_char {
        bail!(Errno::ENOMEM)
    }

    #[test]
    fn bail_sets_errno_and_returns_failure() {
        Errno::clear();
        assert_eq!(fails_with_enomem(), -1);
        assert_eq!(Errno::last(), Errno::ENOMEM);

        Errno::clear();
        assert!(fails_with_null().is_null());
        assert_eq!(Errno::last(), Errno::ENOMEM);
    }

    #[test]
    fn failure_values() {
        assert_eq!(<ssize_t as Failure>::failure(), -1);
        assert_eq!(<c_long as Failure>::failure(), -1);
        assert!(<*mut libc::FILE as Failure>::failure().is_null());
    }
}
