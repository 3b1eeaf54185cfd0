pub use libc::*;

/// Opaque `FTS` stream.
pub type FTS = c_void;

unsafe extern "C" {
    #[cfg_attr(
        all(target_os = "macos", target_arch = "x86_64"),
        link_name = "fts_open$INODE64"
    )]
    pub unsafe fn fts_open(
        path_argv: *const *mut c_char,
        options: c_int,
        compar: *const c_void,
    ) -> *mut FTS;

    #[cfg_attr(
        all(target_os = "macos", target_arch = "x86_64"),
        link_name = "fts_close$INODE64"
    )]
    pub unsafe fn fts_close(ftsp: *mut FTS) -> c_int;

    #[cfg_attr(
        all(target_os = "macos", target_arch = "x86_64"),
        link_name = "ftw$INODE64"
    )]
    pub unsafe fn ftw(path: *const c_char, func: *const c_void, depth: c_int) -> c_int;

    #[cfg_attr(
        all(target_os = "macos", target_arch = "x86_64"),
        link_name = "nftw$INODE64"
    )]
    pub unsafe fn nftw(path: *const c_char, func: *const c_void, depth: c_int, flags: c_int) -> c_int;

    pub unsafe fn lutimes(path: *const c_char, times: *const timeval) -> c_int;
}

cfg_if::cfg_if! {
    if #[cfg(target_os = "macos")] {
        unsafe extern "C" {
            /// `compar` is a block (`int (^)(const FTSENT **, const FTSENT **)`).
            #[cfg_attr(target_arch = "x86_64", link_name = "fts_open_b$INODE64")]
            pub unsafe fn fts_open_b(
                path_argv: *const *mut c_char,
                options: c_int,
                compar: *const c_void,
            ) -> *mut FTS;

            pub unsafe fn execvP(
                file: *const c_char,
                search_path: *const c_char,
                argv: *const *const c_char,
            ) -> c_int;

            pub unsafe fn revoke(path: *const c_char) -> c_int;

            pub unsafe fn stat64(path: *const c_char, buf: *mut stat) -> c_int;
            pub unsafe fn lstat64(path: *const c_char, buf: *mut stat) -> c_int;
        }

        // Delegates of the primitives intercepted with a 64-bit twin.
        pub mod wide {
            pub use super::{lstat64 as lstat, stat64 as stat};
            pub use super::{fopen, freopen, fstatat, ftw, nftw, open, openat, statfs, statvfs};
        }
    }
}
