use libc::{c_char, c_int, c_long, timeval};

use crate::{macros::intercept, store::expand_store};

intercept!(access: unsafe extern "C" fn(path: *const c_char, mode: c_int) -> c_int);
unsafe extern "C" fn access(path: *const c_char, mode: c_int) -> c_int {
    let path = expand_store!(path);
    unsafe { access::original()(path.as_ptr(), mode) }
}

intercept!(chdir: unsafe extern "C" fn(path: *const c_char) -> c_int);
unsafe extern "C" fn chdir(path: *const c_char) -> c_int {
    let path = expand_store!(path);
    unsafe { chdir::original()(path.as_ptr()) }
}

intercept!(pathconf: unsafe extern "C" fn(path: *const c_char, name: c_int) -> c_long);
unsafe extern "C" fn pathconf(path: *const c_char, name: c_int) -> c_long {
    let path = expand_store!(path);
    unsafe { pathconf::original()(path.as_ptr(), name) }
}

intercept!(realpath: unsafe extern "C" fn(path: *const c_char, resolved: *mut c_char) -> *mut c_char);
unsafe extern "C" fn realpath(path: *const c_char, resolved: *mut c_char) -> *mut c_char {
    let path = expand_store!(path);
    unsafe { realpath::original()(path.as_ptr(), resolved) }
}

#[cfg(target_os = "macos")]
intercept!(revoke: unsafe extern "C" fn(path: *const c_char) -> c_int);
#[cfg(target_os = "macos")]
unsafe extern "C" fn revoke(path: *const c_char) -> c_int {
    let path = expand_store!(path);
    unsafe { revoke::original()(path.as_ptr()) }
}

intercept!(utimes: unsafe extern "C" fn(path: *const c_char, times: *const timeval) -> c_int);
unsafe extern "C" fn utimes(path: *const c_char, times: *const timeval) -> c_int {
    let path = expand_store!(path);
    unsafe { utimes::original()(path.as_ptr(), times) }
}

intercept!(lutimes: unsafe extern "C" fn(path: *const c_char, times: *const timeval) -> c_int);
unsafe extern "C" fn lutimes(path: *const c_char, times: *const timeval) -> c_int {
    let path = expand_store!(path);
    unsafe { lutimes::original()(path.as_ptr(), times) }
}
