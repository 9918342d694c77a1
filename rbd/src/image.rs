//! Image handles: lifecycle, metadata, resize, snapshots, and copies.

use std::ffi::CString;
use std::mem;
use std::ptr;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::pool::Pool;
use crate::types::{ImageFormat, ImageInfo};

/// An open RBD image.
///
/// Opened with [`Image::open`] and closed either explicitly with
/// [`Image::close`] or implicitly on drop. The handle is owned: once the
/// value is gone the native handle is gone with it, so a closed image
/// cannot be used again.
///
/// librbd image handles are not safe for concurrent use from multiple
/// threads; `Image` deliberately adds no synchronization of its own.
pub struct Image {
    handle: librbd_sys::rbd_image_t,
    name: String,
}

impl Image {
    /// Open the named image in the pool.
    pub fn open(pool: &Pool, name: &str) -> Result<Self> {
        let c_name = CString::new(name)?;
        let mut handle: librbd_sys::rbd_image_t = ptr::null_mut();

        let ret = unsafe {
            librbd_sys::rbd_open(pool.as_raw(), c_name.as_ptr(), &mut handle, ptr::null())
        };
        if ret < 0 {
            return Err(Error::Open {
                name: name.to_string(),
                code: ret,
            });
        }

        debug!(image = name, "opened image");
        Ok(Self {
            handle,
            name: name.to_string(),
        })
    }

    /// The name this image was opened under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw librbd handle, for passing back into the native layer.
    pub fn as_raw(&self) -> librbd_sys::rbd_image_t {
        self.handle
    }

    /// Close the image, reporting any failure from librbd.
    ///
    /// Dropping an `Image` also closes it; use `close` when the close
    /// result matters.
    pub fn close(mut self) -> Result<()> {
        let handle = mem::replace(&mut self.handle, ptr::null_mut());

        let ret = unsafe { librbd_sys::rbd_close(handle) };
        if ret < 0 {
            return Err(Error::Close {
                name: self.name.clone(),
                code: ret,
            });
        }
        Ok(())
    }

    /// Current size of the image in bytes.
    pub fn size(&self) -> Result<u64> {
        let mut size: u64 = 0;

        let ret = unsafe { librbd_sys::rbd_get_size(self.handle, &mut size) };
        if ret < 0 {
            return Err(Error::Size {
                name: self.name.clone(),
                code: ret,
            });
        }
        Ok(size)
    }

    /// Stat the image.
    pub fn info(&self) -> Result<ImageInfo> {
        let mut raw = librbd_sys::rbd_image_info_t::zeroed();

        let ret = unsafe {
            librbd_sys::rbd_stat(
                self.handle,
                &mut raw,
                mem::size_of::<librbd_sys::rbd_image_info_t>() as libc::size_t,
            )
        };
        if ret < 0 {
            return Err(Error::Stat {
                name: self.name.clone(),
                code: ret,
            });
        }

        Ok(ImageInfo {
            size: raw.size,
            obj_size: raw.obj_size,
            num_objs: raw.num_objs,
            order: raw.order,
        })
    }

    /// On-disk format version of the image.
    ///
    /// Returns [`ImageFormat::Unknown`] both for an out-of-range flag byte
    /// and for a failed native query; the query result is the only signal.
    pub fn format(&self) -> ImageFormat {
        let mut old_format: u8 = 0;

        let ret = unsafe { librbd_sys::rbd_get_old_format(self.handle, &mut old_format) };
        if ret < 0 {
            return ImageFormat::Unknown;
        }
        ImageFormat::from_old_format_flag(old_format)
    }

    /// Resize the image to `size` bytes.
    pub fn resize(&self, size: u64) -> Result<()> {
        let ret = unsafe { librbd_sys::rbd_resize(self.handle, size) };
        if ret < 0 {
            return Err(Error::Resize {
                name: self.name.clone(),
                size,
                code: ret,
            });
        }

        debug!(image = %self.name, size, "resized image");
        Ok(())
    }

    /// Create a snapshot of the image's current state.
    pub fn create_snapshot(&self, snap: &str) -> Result<()> {
        let c_snap = CString::new(snap)?;

        let ret = unsafe { librbd_sys::rbd_snap_create(self.handle, c_snap.as_ptr()) };
        if ret < 0 {
            return Err(Error::SnapshotCreate {
                image: self.name.clone(),
                snap: snap.to_string(),
                code: ret,
            });
        }

        debug!(image = %self.name, snapshot = snap, "created snapshot");
        Ok(())
    }

    /// Remove a snapshot of the image by name.
    pub fn remove_snapshot(&self, snap: &str) -> Result<()> {
        let c_snap = CString::new(snap)?;

        let ret = unsafe { librbd_sys::rbd_snap_remove(self.handle, c_snap.as_ptr()) };
        if ret < 0 {
            return Err(Error::SnapshotRemove {
                image: self.name.clone(),
                snap: snap.to_string(),
                code: ret,
            });
        }

        debug!(image = %self.name, snapshot = snap, "removed snapshot");
        Ok(())
    }

    /// Copy this image into `dest_pool` under `dest_name`.
    ///
    /// `rbd_copy` is synchronous: the call blocks until the copy has
    /// completed.
    pub fn copy_to_pool(&self, dest_pool: &Pool, dest_name: &str) -> Result<()> {
        let c_dest = CString::new(dest_name)?;

        let ret =
            unsafe { librbd_sys::rbd_copy(self.handle, dest_pool.as_raw(), c_dest.as_ptr()) };
        if ret < 0 {
            return Err(Error::Copy {
                name: dest_name.to_string(),
                code: ret,
            });
        }
        Ok(())
    }

    /// Copy this image into an already-open destination image.
    ///
    /// `rbd_copy2` is synchronous: the call blocks until the copy has
    /// completed.
    pub fn copy_to_image(&self, dest: &Image) -> Result<()> {
        let ret = unsafe { librbd_sys::rbd_copy2(self.handle, dest.as_raw()) };
        if ret < 0 {
            return Err(Error::Copy {
                name: dest.name().to_string(),
                code: ret,
            });
        }
        Ok(())
    }
}

impl Drop for Image {
    fn drop(&mut self) {
        if self.handle.is_null() {
            // Already closed explicitly.
            return;
        }
        let ret = unsafe { librbd_sys::rbd_close(self.handle) };
        if ret < 0 {
            warn!(image = %self.name, code = ret, "failed to close image handle on drop");
        }
    }
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image").field("name", &self.name).finish()
    }
}
