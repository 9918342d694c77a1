//! Build script for librbd-sys
//!
//! This script handles:
//! 1. Locating the installed librbd shared library
//! 2. Emitting linker configuration when it is found
//! 3. Falling back to ENOSYS stubs when it is not, so that dependent
//!    crates still build and run their unit tests on machines without
//!    a Ceph installation

use std::env;
use std::path::PathBuf;

/// Find the directory containing librbd.
///
/// `LIBRBD_LIB_PATH` takes precedence and may point at either the shared
/// object itself or the directory holding it.
fn find_librbd() -> Option<PathBuf> {
    if let Ok(path) = env::var("LIBRBD_LIB_PATH") {
        let path = PathBuf::from(&path);
        if path.is_file() {
            return path.parent().map(|p| p.to_path_buf());
        }
        if contains_librbd(&path) {
            return Some(path);
        }
    }

    let search_paths = [
        "/usr/local/lib",
        "/usr/lib",
        "/usr/lib64",
        "/usr/lib/x86_64-linux-gnu",
        "/usr/lib/aarch64-linux-gnu",
    ];

    search_paths
        .iter()
        .map(PathBuf::from)
        .find(|dir| contains_librbd(dir))
}

fn contains_librbd(dir: &PathBuf) -> bool {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return false;
    };
    entries.flatten().any(|entry| {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        name.starts_with("librbd.so") || name.starts_with("librbd.dylib")
    })
}

fn main() {
    println!("cargo::rustc-check-cfg=cfg(rbd_stub)");
    println!("cargo:rerun-if-env-changed=LIBRBD_LIB_PATH");

    match find_librbd() {
        Some(lib_dir) => {
            println!("cargo:rustc-link-search=native={}", lib_dir.display());
            println!("cargo:rustc-link-lib=dylib=rbd");
        }
        None => {
            println!("cargo:warning=librbd-sys: librbd not found, building ENOSYS stubs");
            println!("cargo:rustc-cfg=rbd_stub");
        }
    }
}
