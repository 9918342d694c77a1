//! Pool-scoped operations: listing, renaming, and removing images.
//!
//! The pool handle itself belongs to a librados binding. This module only
//! forwards it to librbd and never touches its lifecycle.

use std::ffi::CString;

use libc::c_char;
use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Capacity of the buffer handed to `rbd_list`. Listings that do not fit
/// are reported by librbd as a failure; the buffer is not grown locally.
const NAME_LIST_CAPACITY: usize = 65536;

/// An I/O context for a storage pool, obtained from a librados binding.
///
/// `Pool` is a pass-through capability token: this crate never creates,
/// destroys, or validates the underlying context. The caller must keep the
/// librados context alive for as long as the `Pool` (and any `Image` opened
/// through it) is in use.
#[derive(Debug)]
pub struct Pool {
    ioctx: librbd_sys::rados_ioctx_t,
}

impl Pool {
    /// Wrap a raw librados I/O context.
    ///
    /// # Safety
    ///
    /// `ioctx` must be a live context returned by librados and must outlive
    /// the returned `Pool` and every image opened through it.
    pub unsafe fn from_raw(ioctx: librbd_sys::rados_ioctx_t) -> Self {
        Self { ioctx }
    }

    /// The raw context, for forwarding to librbd.
    pub fn as_raw(&self) -> librbd_sys::rados_ioctx_t {
        self.ioctx
    }
}

/// List the names of all images in the pool.
///
/// Ordering is whatever librbd yields. A negative native result maps to
/// [`Error::List`]; a partial listing is never returned.
pub fn list_images(pool: &Pool) -> Result<Vec<String>> {
    let mut buf = vec![0u8; NAME_LIST_CAPACITY];
    let mut size = NAME_LIST_CAPACITY as libc::size_t;

    let ret =
        unsafe { librbd_sys::rbd_list(pool.as_raw(), buf.as_mut_ptr().cast::<c_char>(), &mut size) };
    if ret < 0 {
        return Err(Error::List { code: ret });
    }

    // librbd reports how many bytes of null-separated names it wrote.
    let valid = (ret as usize).min(buf.len());
    trace!(bytes = valid, "decoding image name listing");
    Ok(split_name_list(&buf[..valid]))
}

/// Remove an image from the pool by name.
///
/// All snapshots of the image must have been removed first; librbd rejects
/// the removal otherwise.
pub fn remove_image(pool: &Pool, name: &str) -> Result<()> {
    let c_name = CString::new(name)?;

    let ret = unsafe { librbd_sys::rbd_remove(pool.as_raw(), c_name.as_ptr()) };
    if ret < 0 {
        return Err(Error::Remove {
            name: name.to_string(),
            code: ret,
        });
    }

    debug!(image = name, "removed image");
    Ok(())
}

/// Rename an image within the pool.
pub fn rename_image(pool: &Pool, src: &str, dst: &str) -> Result<()> {
    let c_src = CString::new(src)?;
    let c_dst = CString::new(dst)?;

    let ret = unsafe { librbd_sys::rbd_rename(pool.as_raw(), c_src.as_ptr(), c_dst.as_ptr()) };
    if ret < 0 {
        return Err(Error::Rename {
            src: src.to_string(),
            dst: dst.to_string(),
            code: ret,
        });
    }

    debug!(from = src, to = dst, "renamed image");
    Ok(())
}

/// Split a buffer of null-separated names into a list of strings.
///
/// Each name is a maximal run of non-null bytes; the null byte after a run
/// is a separator, not content. A non-empty run left at end-of-input (no
/// trailing separator) is still flushed as a final name, so a listing that
/// exactly fills the buffer does not silently lose its last entry.
fn split_name_list(valid: &[u8]) -> Vec<String> {
    let mut names = Vec::new();
    let mut start = 0;

    for (x, &byte) in valid.iter().enumerate() {
        if byte == 0 {
            if x > start {
                names.push(String::from_utf8_lossy(&valid[start..x]).into_owned());
            }
            start = x + 1;
        }
    }
    if start < valid.len() {
        names.push(String::from_utf8_lossy(&valid[start..]).into_owned());
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_terminated_names() {
        assert_eq!(split_name_list(b"a\0bb\0ccc\0"), vec!["a", "bb", "ccc"]);
    }

    #[test]
    fn flushes_unterminated_trailing_name() {
        assert_eq!(split_name_list(b"a\0bb"), vec!["a", "bb"]);
    }

    #[test]
    fn single_name_without_separator() {
        assert_eq!(split_name_list(b"solo"), vec!["solo"]);
    }

    #[test]
    fn empty_input_yields_no_names() {
        assert!(split_name_list(b"").is_empty());
    }

    #[test]
    fn consecutive_separators_yield_no_empty_names() {
        assert_eq!(split_name_list(b"a\0\0b\0"), vec!["a", "b"]);
    }

    #[test]
    fn non_utf8_bytes_are_replaced_not_dropped() {
        let names = split_name_list(b"a\xff\0b\0");
        assert_eq!(names.len(), 2);
        assert_eq!(names[1], "b");
    }
}
