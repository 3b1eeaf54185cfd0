use libc::{c_char, c_int, c_void};

use crate::{macros::intercept, store::expand_store};

intercept!(dlopen: unsafe extern "C" fn(path: *const c_char, mode: c_int) -> *mut c_void);
unsafe extern "C" fn dlopen(path: *const c_char, mode: c_int) -> *mut c_void {
    // A null path (the main program) is passed through.
    let path = expand_store!(path);
    unsafe { dlopen::original()(path.as_ptr(), mode) }
}

#[cfg(test)]
mod tests {
    use std::ffi::CStr;

    use bstr::ByteSlice as _;

    use super::*;
    use crate::testing::{LEAK_ITERATIONS, StoreEntry, assert_no_leaks, c_path, scratch_dir};

    #[test]
    fn dlopen_of_null_is_the_main_program() {
        let handle = unsafe { dlopen(core::ptr::null(), libc::RTLD_LAZY) };
        assert!(!handle.is_null());
        unsafe { libc::dlclose(handle) };
    }

    #[test]
    fn dlopen_error_names_relocated_path() {
        let entry = StoreEntry::new("libmissing.so");
        let handle = unsafe { dlopen(entry.store.as_ptr(), libc::RTLD_NOW) };
        assert!(handle.is_null());

        let error = unsafe { CStr::from_ptr(libc::dlerror()) }.to_bytes();
        assert!(
            error.contains_str(entry.relocated.as_os_str().as_encoded_bytes()),
            "{}",
            error.as_bstr()
        );
    }

    #[test]
    fn no_leaks() {
        let entry = StoreEntry::new("libleaks.so");
        let foreign = c_path(&scratch_dir().join("libleaks.so"));
        assert_no_leaks(
            LEAK_ITERATIONS,
            || unsafe {
                dlopen(entry.store.as_ptr(), libc::RTLD_NOW);
            },
            || unsafe {
                dlopen(foreign.as_ptr(), libc::RTLD_NOW);
            },
        );
    }
}
