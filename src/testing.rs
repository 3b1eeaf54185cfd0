// The test binary does not interpose anything. Tests call the wrappers
// directly and the wrappers reach the real libc.

use std::{
    alloc::{GlobalAlloc, Layout, System},
    cell::Cell,
    ffi::{CString, OsStr},
    fs,
    os::unix::{ffi::OsStrExt as _, fs::PermissionsExt as _},
    path::{Path, PathBuf},
    sync::{
        OnceLock,
        atomic::{AtomicUsize, Ordering},
    },
};

use tempfile::TempDir;

use crate::config::{ROOT_ENV_NAME, STORE_PREFIX};

static RELOCATION_ROOT: OnceLock<TempDir> = OnceLock::new();

// Before the harness spawns threads.
#[ctor::ctor]
unsafe fn install_relocation_root() {
    let root = tempfile::Builder::new()
        .prefix("nix-vendor-root")
        .tempdir()
        .unwrap();
    unsafe { std::env::set_var(ROOT_ENV_NAME.to_str().unwrap(), root.path()) };
    let _ = RELOCATION_ROOT.set(root);
}

pub fn relocation_root() -> &'static Path {
    RELOCATION_ROOT.get().unwrap().path()
}

fn unique_name(name: &str) -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    format!(
        "nix-vendor-test-{}-{}-{}",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::Relaxed),
        name
    )
}

/// Only the parent of `relocated` is created.
pub struct StoreEntry {
    pub store: CString,
    pub relocated: PathBuf,
}

impl StoreEntry {
    pub fn new(name: &str) -> Self {
        let mut store = STORE_PREFIX.to_vec();
        store.extend_from_slice(b"/");
        store.extend_from_slice(unique_name(name).as_bytes());

        let mut relocated = relocation_root().as_os_str().as_bytes().to_vec();
        relocated.extend_from_slice(&store);
        let relocated = PathBuf::from(OsStr::from_bytes(&relocated));
        fs::create_dir_all(relocated.parent().unwrap()).unwrap();

        Self {
            store: CString::new(store).unwrap(),
            relocated,
        }
    }
}

pub fn scratch_dir() -> PathBuf {
    let dir = relocation_root().join("scratch").join(unique_name("scratch"));
    fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn c_path(path: &Path) -> CString {
    CString::new(path.as_os_str().as_bytes()).unwrap()
}

pub fn write_script(path: &Path, body: &str) {
    fs::write(path, format!("#!/bin/sh\n{body}")).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

thread_local! {
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
    static LIVE: Cell<isize> = const { Cell::new(0) };
}

struct CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let _ = ALLOCATIONS.try_with(|count| count.set(count.get() + 1));
        let _ = LIVE.try_with(|live| live.set(live.get() + 1));
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        let _ = LIVE.try_with(|live| live.set(live.get() - 1));
        unsafe { System.dealloc(ptr, layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let _ = ALLOCATIONS.try_with(|count| count.set(count.get() + 1));
        unsafe { System.realloc(ptr, layout, new_size) }
    }
}

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

pub const LEAK_ITERATIONS: usize = 10_000;

fn count_allocations(f: impl FnOnce()) -> (usize, isize) {
    let (allocations, live) = (ALLOCATIONS.get(), LIVE.get());
    f();
    (ALLOCATIONS.get() - allocations, LIVE.get() - live)
}

/// Foreign calls must not allocate at all, store calls must release
/// everything they allocate.
#[track_caller]
pub fn assert_no_leaks(iterations: usize, mut store_call: impl FnMut(), mut foreign_call: impl FnMut()) {
    let (allocations, live) = count_allocations(|| {
        for _ in 0..iterations {
            foreign_call();
        }
    });
    assert_eq!((allocations, live), (0, 0), "foreign path allocated");

    let (allocations, live) = count_allocations(|| {
        for _ in 0..iterations {
            store_call();
        }
    });
    assert!(allocations >= iterations, "store path was not rewritten");
    assert_eq!(live, 0, "store path leaked");
}

#[track_caller]
pub fn assert_released(iterations: usize, mut call: impl FnMut()) {
    let (_, live) = count_allocations(|| {
        for _ in 0..iterations {
            call();
        }
    });
    assert_eq!(live, 0, "leaked");
}
