//! Link primitives. Only the first path argument (the existing file, or the
//! symlink target) is relocated; the path being created is used as given.

use libc::{c_char, c_int, size_t, ssize_t};

use crate::{macros::intercept, store::expand_store};

intercept!(link: unsafe extern "C" fn(path1: *const c_char, path2: *const c_char) -> c_int);
unsafe extern "C" fn link(path1: *const c_char, path2: *const c_char) -> c_int {
    let path1 = expand_store!(path1);
    unsafe { link::original()(path1.as_ptr(), path2) }
}

intercept!(linkat: unsafe extern "C" fn(fd1: c_int, path1: *const c_char, fd2: c_int, path2: *const c_char, flag: c_int) -> c_int);
unsafe extern "C" fn linkat(
    fd1: c_int,
    path1: *const c_char,
    fd2: c_int,
    path2: *const c_char,
    flag: c_int,
) -> c_int {
    let path1 = expand_store!(path1);
    unsafe { linkat::original()(fd1, path1.as_ptr(), fd2, path2, flag) }
}

intercept!(symlink: unsafe extern "C" fn(path1: *const c_char, path2: *const c_char) -> c_int);
unsafe extern "C" fn symlink(path1: *const c_char, path2: *const c_char) -> c_int {
    let path1 = expand_store!(path1);
    unsafe { symlink::original()(path1.as_ptr(), path2) }
}

intercept!(symlinkat: unsafe extern "C" fn(path1: *const c_char, fd: c_int, path2: *const c_char) -> c_int);
unsafe extern "C" fn symlinkat(path1: *const c_char, fd: c_int, path2: *const c_char) -> c_int {
    let path1 = expand_store!(path1);
    unsafe { symlinkat::original()(path1.as_ptr(), fd, path2) }
}

intercept!(readlink: unsafe extern "C" fn(path: *const c_char, buf: *mut c_char, bufsize: size_t) -> ssize_t);
unsafe extern "C" fn readlink(path: *const c_char, buf: *mut c_char, bufsize: size_t) -> ssize_t {
    let path = expand_store!(path);
    unsafe { readlink::original()(path.as_ptr(), buf, bufsize) }
}

intercept!(readlinkat: unsafe extern "C" fn(fd: c_int, path: *const c_char, buf: *mut c_char, bufsize: size_t) -> ssize_t);
unsafe extern "C" fn readlinkat(
    fd: c_int,
    path: *const c_char,
    buf: *mut c_char,
    bufsize: size_t,
) -> ssize_t {
    let path = expand_store!(path);
    unsafe { readlinkat::original()(fd, path.as_ptr(), buf, bufsize) }
}
