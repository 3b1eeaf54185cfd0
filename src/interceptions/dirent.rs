use libc::{DIR, c_char, c_int, c_void};

use crate::{
    argv::PathList,
    error::bail,
    libc::FTS,
    macros::intercept,
    store::expand_store,
};

intercept!(opendir: unsafe extern "C" fn(dirname: *const c_char) -> *mut DIR);
unsafe extern "C" fn opendir(dirname: *const c_char) -> *mut DIR {
    let dirname = expand_store!(dirname);
    unsafe { opendir::original()(dirname.as_ptr()) }
}

/// Runs `f` with `path_argv`, or with a copy of it whose first entry is
/// relocated. Only the first root is considered.
unsafe fn with_path_argv(
    path_argv: *const *mut c_char,
    f: impl FnOnce(*const *mut c_char) -> *mut FTS,
) -> *mut FTS {
    if path_argv.is_null() {
        return f(path_argv);
    }
    let first = unsafe { *path_argv };
    if first.is_null() {
        return f(path_argv);
    }
    let first = expand_store!(first);
    if !first.is_rewritten() {
        return f(path_argv);
    }
    let path_argv_copy = match unsafe { PathList::with_first(path_argv, first.as_ptr().cast_mut()) } {
        Ok(path_argv_copy) => path_argv_copy,
        Err(errno) => bail!(errno),
    };
    f(path_argv_copy.as_ptr())
}

intercept!(fts_open: unsafe extern "C" fn(path_argv: *const *mut c_char, options: c_int, compar: *const c_void) -> *mut FTS);
unsafe extern "C" fn fts_open(
    path_argv: *const *mut c_char,
    options: c_int,
    compar: *const c_void,
) -> *mut FTS {
    unsafe {
        with_path_argv(path_argv, |path_argv| {
            fts_open::original()(path_argv, options, compar)
        })
    }
}

#[cfg(target_os = "macos")]
intercept!(fts_open_b: unsafe extern "C" fn(path_argv: *const *mut c_char, options: c_int, compar: *const c_void) -> *mut FTS);
#[cfg(target_os = "macos")]
unsafe extern "C" fn fts_open_b(
    path_argv: *const *mut c_char,
    options: c_int,
    compar: *const c_void,
) -> *mut FTS {
    unsafe {
        with_path_argv(path_argv, |path_argv| {
            fts_open_b::original()(path_argv, options, compar)
        })
    }
}

intercept!(ftw(64): unsafe extern "C" fn(path: *const c_char, func: *const c_void, depth: c_int) -> c_int);
unsafe extern "C" fn ftw(path: *const c_char, func: *const c_void, depth: c_int) -> c_int {
    let path = expand_store!(path);
    unsafe { ftw::original()(path.as_ptr(), func, depth) }
}

intercept!(nftw(64): unsafe extern "C" fn(path: *const c_char, func: *const c_void, depth: c_int, flags: c_int) -> c_int);
unsafe extern "C" fn nftw(
    path: *const c_char,
    func: *const c_void,
    depth: c_int,
    flags: c_int,
) -> c_int {
    let path = expand_store!(path);
    unsafe { nftw::original()(path.as_ptr(), func, depth, flags) }
}
