//! Captures the rustc version at build time so `runtime::version()` can
//! report it without shelling out at run time.

fn main() {
    let version = rustc_version::version().expect("failed to query rustc version");
    println!("cargo:rustc-env=GREET_RUSTC_VERSION=rustc{version}");
    println!("cargo:rerun-if-changed=build.rs");
}
