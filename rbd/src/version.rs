//! librbd version query.

use libc::c_int;

/// The version of the linked librbd, as `(major, minor, extra)`.
///
/// Stub builds (no librbd installed) report `(0, 0, 0)`.
pub fn library_version() -> (i32, i32, i32) {
    let mut major: c_int = 0;
    let mut minor: c_int = 0;
    let mut extra: c_int = 0;

    unsafe { librbd_sys::rbd_version(&mut major, &mut minor, &mut extra) };

    (major, minor, extra)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_query_reports_non_negative_components() {
        let (major, minor, extra) = library_version();
        assert!(major >= 0);
        assert!(minor >= 0);
        assert!(extra >= 0);
    }
}
