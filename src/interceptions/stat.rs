use libc::{c_char, c_int, stat as stat_struct, statfs as statfs_struct, statvfs as statvfs_struct};

use crate::{macros::intercept, store::expand_store};

intercept!(stat(64): unsafe extern "C" fn(path: *const c_char, buf: *mut stat_struct) -> c_int);
unsafe extern "C" fn stat(path: *const c_char, buf: *mut stat_struct) -> c_int {
    let path = expand_store!(path);
    unsafe { stat::original()(path.as_ptr(), buf) }
}

intercept!(lstat(64): unsafe extern "C" fn(path: *const c_char, buf: *mut stat_struct) -> c_int);
unsafe extern "C" fn lstat(path: *const c_char, buf: *mut stat_struct) -> c_int {
    let path = expand_store!(path);
    unsafe { lstat::original()(path.as_ptr(), buf) }
}

intercept!(fstatat(64): unsafe extern "C" fn(dirfd: c_int, pathname: *const c_char, buf: *mut stat_struct, flags: c_int) -> c_int);
unsafe extern "C" fn fstatat(
    dirfd: c_int,
    pathname: *const c_char,
    buf: *mut stat_struct,
    flags: c_int,
) -> c_int {
    let pathname = expand_store!(pathname);
    unsafe { fstatat::original()(dirfd, pathname.as_ptr(), buf, flags) }
}

intercept!(statfs(64): unsafe extern "C" fn(path: *const c_char, buf: *mut statfs_struct) -> c_int);
unsafe extern "C" fn statfs(path: *const c_char, buf: *mut statfs_struct) -> c_int {
    let path = expand_store!(path);
    unsafe { statfs::original()(path.as_ptr(), buf) }
}

intercept!(statvfs(64): unsafe extern "C" fn(path: *const c_char, buf: *mut statvfs_struct) -> c_int);
unsafe extern "C" fn statvfs(path: *const c_char, buf: *mut statvfs_struct) -> c_int {
    let path = expand_store!(path);
    unsafe { statvfs::original()(path.as_ptr(), buf) }
}
