//! # librbd-sys
//!
//! Raw FFI declarations for [librbd](https://docs.ceph.com/en/latest/rbd/),
//! Ceph's RBD block device library.
//!
//! Only the entry points used by the `rbd` crate are declared: version
//! query, pool-level image listing/rename/removal, image open/close,
//! resize, stat, size and old-format queries, snapshot create/remove, and
//! the two synchronous copy variants.
//!
//! # Stub fallback
//!
//! When `build.rs` cannot locate librbd, the crate is compiled with the
//! `rbd_stub` cfg and every entry point is replaced by a stub that fails
//! with `-ENOSYS`. Dependents can then build and run their unit tests
//! without a Ceph installation; every native call simply reports failure.
//!
//! The pool handle (`rados_ioctx_t`) is owned by a librados binding. This
//! crate only forwards it and never manages its lifetime.

#![allow(non_camel_case_types)]

use libc::{c_int, c_void};

/// Opaque pool I/O context, created and destroyed by librados.
pub type rados_ioctx_t = *mut c_void;

/// Opaque handle to an open RBD image.
pub type rbd_image_t = *mut c_void;

pub const RBD_MAX_BLOCK_NAME_SIZE: usize = 24;
pub const RBD_MAX_IMAGE_NAME_SIZE: usize = 96;

/// Mirror of `rbd_image_info_t` from `rbd/librbd.h`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct rbd_image_info_t {
    pub size: u64,
    pub obj_size: u64,
    pub num_objs: u64,
    pub order: c_int,
    pub block_name_prefix: [libc::c_char; RBD_MAX_BLOCK_NAME_SIZE],
    pub parent_pool: i64,
    pub parent_name: [libc::c_char; RBD_MAX_IMAGE_NAME_SIZE],
}

impl rbd_image_info_t {
    /// An all-zero stat structure for librbd to fill in.
    pub fn zeroed() -> Self {
        Self {
            size: 0,
            obj_size: 0,
            num_objs: 0,
            order: 0,
            block_name_prefix: [0; RBD_MAX_BLOCK_NAME_SIZE],
            parent_pool: 0,
            parent_name: [0; RBD_MAX_IMAGE_NAME_SIZE],
        }
    }
}

#[cfg(not(rbd_stub))]
mod bindings;
#[cfg(not(rbd_stub))]
pub use bindings::*;

#[cfg(rbd_stub)]
mod stubs;
#[cfg(rbd_stub)]
pub use stubs::*;

/// Whether this build links the real librbd or the ENOSYS stubs.
pub fn is_stubbed() -> bool {
    cfg!(rbd_stub)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_struct_matches_header_layout() {
        // uint64_t size, obj_size, num_objs; int order; char prefix[24];
        // int64_t parent_pool; char parent_name[96]; plus alignment padding
        // after `order` to place `parent_pool` on an 8-byte boundary.
        assert_eq!(std::mem::size_of::<rbd_image_info_t>(), 160);
        assert_eq!(std::mem::align_of::<rbd_image_info_t>(), 8);
    }

    #[test]
    fn zeroed_info_is_all_zero() {
        let info = rbd_image_info_t::zeroed();
        assert_eq!(info.size, 0);
        assert_eq!(info.order, 0);
        assert!(info.parent_name.iter().all(|&c| c == 0));
    }
}
