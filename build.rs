fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Mark the shared object as an interposer so the loader prefers its
    // definitions even when it is pulled in through DT_NEEDED instead of
    // LD_PRELOAD.
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os == "linux" {
        println!("cargo:rustc-cdylib-link-arg=-Wl,-z,interpose");
    }
}
