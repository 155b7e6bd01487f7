// File: crates/area-core/build.rs
// Summary: Build script linking Windows system libraries that Skia needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW, ...
        println!("cargo:rustc-link-lib=advapi32");
    }
}
