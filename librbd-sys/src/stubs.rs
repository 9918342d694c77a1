//! ENOSYS stubs compiled in place of the real bindings when librbd is not
//! installed. Every operation fails; out-parameters are left untouched
//! except for the version query, which reports 0.0.0.

use libc::{c_char, c_int, size_t, ENOSYS};

use crate::{rados_ioctx_t, rbd_image_info_t, rbd_image_t};

const STUB_ERROR: c_int = -ENOSYS;

/// # Safety
/// Out-pointers must be valid for writes, as with the real symbol.
pub unsafe fn rbd_version(major: *mut c_int, minor: *mut c_int, extra: *mut c_int) {
    for out in [major, minor, extra] {
        if !out.is_null() {
            unsafe { *out = 0 };
        }
    }
}

pub unsafe fn rbd_list(_io: rados_ioctx_t, _names: *mut c_char, _size: *mut size_t) -> c_int {
    STUB_ERROR
}

pub unsafe fn rbd_remove(_io: rados_ioctx_t, _name: *const c_char) -> c_int {
    STUB_ERROR
}

pub unsafe fn rbd_rename(
    _src_io: rados_ioctx_t,
    _srcname: *const c_char,
    _destname: *const c_char,
) -> c_int {
    STUB_ERROR
}

pub unsafe fn rbd_open(
    _io: rados_ioctx_t,
    _name: *const c_char,
    _image: *mut rbd_image_t,
    _snap_name: *const c_char,
) -> c_int {
    STUB_ERROR
}

pub unsafe fn rbd_close(_image: rbd_image_t) -> c_int {
    STUB_ERROR
}

pub unsafe fn rbd_resize(_image: rbd_image_t, _size: u64) -> c_int {
    STUB_ERROR
}

pub unsafe fn rbd_stat(
    _image: rbd_image_t,
    _info: *mut rbd_image_info_t,
    _infosize: size_t,
) -> c_int {
    STUB_ERROR
}

pub unsafe fn rbd_get_size(_image: rbd_image_t, _size: *mut u64) -> c_int {
    STUB_ERROR
}

pub unsafe fn rbd_get_old_format(_image: rbd_image_t, _old: *mut u8) -> c_int {
    STUB_ERROR
}

pub unsafe fn rbd_snap_create(_image: rbd_image_t, _snapname: *const c_char) -> c_int {
    STUB_ERROR
}

pub unsafe fn rbd_snap_remove(_image: rbd_image_t, _snapname: *const c_char) -> c_int {
    STUB_ERROR
}

pub unsafe fn rbd_copy(
    _image: rbd_image_t,
    _dest_io: rados_ioctx_t,
    _destname: *const c_char,
) -> c_int {
    STUB_ERROR
}

pub unsafe fn rbd_copy2(_src: rbd_image_t, _dest: rbd_image_t) -> c_int {
    STUB_ERROR
}
