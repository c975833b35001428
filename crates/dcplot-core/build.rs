// File: crates/dcplot-core/build.rs
// Summary: Links the Windows registry library that Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, used when enumerating system fonts
        println!("cargo:rustc-link-lib=advapi32");
    }
}
