//! FFI declarations matching the exported symbols of librbd.

use libc::{c_char, c_int, size_t};

use crate::{rados_ioctx_t, rbd_image_info_t, rbd_image_t};

extern "C" {
    pub fn rbd_version(major: *mut c_int, minor: *mut c_int, extra: *mut c_int);

    // Pool-level operations
    pub fn rbd_list(io: rados_ioctx_t, names: *mut c_char, size: *mut size_t) -> c_int;
    pub fn rbd_remove(io: rados_ioctx_t, name: *const c_char) -> c_int;
    pub fn rbd_rename(
        src_io: rados_ioctx_t,
        srcname: *const c_char,
        destname: *const c_char,
    ) -> c_int;

    // Image lifecycle
    pub fn rbd_open(
        io: rados_ioctx_t,
        name: *const c_char,
        image: *mut rbd_image_t,
        snap_name: *const c_char,
    ) -> c_int;
    pub fn rbd_close(image: rbd_image_t) -> c_int;

    // Image metadata and mutation
    pub fn rbd_resize(image: rbd_image_t, size: u64) -> c_int;
    pub fn rbd_stat(image: rbd_image_t, info: *mut rbd_image_info_t, infosize: size_t) -> c_int;
    pub fn rbd_get_size(image: rbd_image_t, size: *mut u64) -> c_int;
    pub fn rbd_get_old_format(image: rbd_image_t, old: *mut u8) -> c_int;

    // Snapshots
    pub fn rbd_snap_create(image: rbd_image_t, snapname: *const c_char) -> c_int;
    pub fn rbd_snap_remove(image: rbd_image_t, snapname: *const c_char) -> c_int;

    // Synchronous copies
    pub fn rbd_copy(image: rbd_image_t, dest_io: rados_ioctx_t, destname: *const c_char) -> c_int;
    pub fn rbd_copy2(src: rbd_image_t, dest: rbd_image_t) -> c_int;
}
