//! Distance arithmetic for the scanners.
//!
//! Everything here is 64-bit on purpose: block coordinates and radii can
//! exceed the 32-bit-squared range at large radii, so intermediate squaring
//! must never happen in `i32`.

use crate::pos::ColumnPos;

/// Squares a 64-bit value.
#[inline]
#[must_use]
pub const fn sq(a: i64) -> i64 {
    a * a
}

/// Squared Euclidean distance between two columns in the XZ plane.
///
/// Avoids the square root; compare against a squared radius.
#[inline]
#[must_use]
pub fn dist_sq_xz(a: ColumnPos, b: ColumnPos) -> i64 {
    let dx = i64::from(a.x) - i64::from(b.x);
    let dz = i64::from(a.z) - i64::from(b.z);
    sq(dx) + sq(dz)
}
