//! # MicroCanvas Math
//!
//! Fixed-length vector arithmetic for the MicroCanvas demos.
//!
//! ## Design Rules
//!
//! 1. **Explicit lengths** - operations between two vectors require equal
//!    length; a mismatch is a reportable error, never silent truncation
//! 2. **No sentinels** - every fallible operation returns a typed
//!    [`VectorError`], never a magic empty vector or NaN
//! 3. **Pure and synchronous** - no shared state between calls; each
//!    operation allocates a fresh, independent result
//!
//! ## Example
//!
//! ```rust
//! use microcanvas_math::Vector;
//!
//! let position = Vector::from_components([0.0, 10.0]);
//! let velocity = Vector::from_components([2.0, 1.0]);
//! let next = position.add(&velocity)?;
//! assert_eq!(next.as_slice(), &[2.0, 11.0][..]);
//! # Ok::<(), microcanvas_math::VectorError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod vector;

pub use error::{VectorError, VectorResult};
pub use vector::Vector;
