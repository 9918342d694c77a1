//! rbd: safe Rust bindings for librbd, Ceph's RBD block device library.
//!
//! Every operation is a blocking, synchronous call into librbd: image
//! open/close/resize/info, snapshot create/remove, pool-level image
//! listing/rename/removal, and image copies. Block-storage semantics
//! (replication, copy-on-write, snapshot consistency) live entirely in the
//! native library; this crate translates arguments and return codes.
//!
//! Pool handles come from a librados binding and are only forwarded here,
//! never created or destroyed (see [`Pool::from_raw`]).
//!
//! # Example
//!
//! ```ignore
//! use rbd::{Image, Pool, list_images};
//!
//! let pool = unsafe { Pool::from_raw(ioctx) };
//! for name in list_images(&pool)? {
//!     let image = Image::open(&pool, &name)?;
//!     println!("{}: {} bytes", image.name(), image.size()?);
//! }
//! ```

pub mod error;
pub mod image;
pub mod pool;
pub mod types;
pub mod version;

pub use error::{Error, Result};
pub use image::Image;
pub use pool::{Pool, list_images, remove_image, rename_image};
pub use types::{ImageFormat, ImageInfo};
pub use version::library_version;

pub use librbd_sys;
