use libc::{FILE, c_char, c_int};

use crate::{
    argv::{Mode, has_mode_arg},
    macros::intercept,
    store::expand_store,
};

intercept!(open(64): unsafe extern "C" fn(*const c_char, c_int, ...) -> c_int);
unsafe extern "C" fn open(path: *const c_char, flags: c_int, mut args: ...) -> c_int {
    let path = expand_store!(path);
    if has_mode_arg(flags) {
        let mode: Mode = unsafe { args.next_arg() };
        unsafe { open::original()(path.as_ptr(), flags, mode) }
    } else {
        unsafe { open::original()(path.as_ptr(), flags) }
    }
}

intercept!(openat(64): unsafe extern "C" fn(c_int, *const c_char, c_int, ...) -> c_int);
unsafe extern "C" fn openat(
    dirfd: c_int,
    path: *const c_char,
    flags: c_int,
    mut args: ...
) -> c_int {
    let path = expand_store!(path);
    if has_mode_arg(flags) {
        let mode: Mode = unsafe { args.next_arg() };
        unsafe { openat::original()(dirfd, path.as_ptr(), flags, mode) }
    } else {
        unsafe { openat::original()(dirfd, path.as_ptr(), flags) }
    }
}

intercept!(fopen(64): unsafe extern "C" fn(path: *const c_char, mode: *const c_char) -> *mut FILE);
unsafe extern "C" fn fopen(path: *const c_char, mode: *const c_char) -> *mut FILE {
    let path = expand_store!(path);
    unsafe { fopen::original()(path.as_ptr(), mode) }
}

intercept!(freopen(64): unsafe extern "C" fn(path: *const c_char, mode: *const c_char, stream: *mut FILE) -> *mut FILE);
unsafe extern "C" fn freopen(
    path: *const c_char,
    mode: *const c_char,
    stream: *mut FILE,
) -> *mut FILE {
    let path = expand_store!(path);
    unsafe { freopen::original()(path.as_ptr(), mode, stream) }
}
