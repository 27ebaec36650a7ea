//! Float mappings over raw noise values.

use crate::noise::{noise_1d, noise_2d, noise_3d, noise_4d};

const UNSIGNED_MAX: f64 = u32::MAX as f64;
const SIGNED_MAX: f64 = i32::MAX as f64;

/// Maps a raw noise value into [0, 1], hitting both endpoints exactly.
#[inline]
pub fn zero_to_one(bits: u32) -> f64 {
    bits as f64 / UNSIGNED_MAX
}

/// Signed mapping inherited from the reference construction: subtract the
/// unsigned max, divide by the signed max. The extremes do not land exactly
/// on -1 and +1; kept bit-exact rather than remapped symmetrically.
#[inline]
pub fn neg_one_to_one(bits: u32) -> f64 {
    (bits as f64 - UNSIGNED_MAX) / SIGNED_MAX
}

#[inline]
pub fn noise_1d_zero_to_one(position: i32, seed: i32) -> f64 {
    zero_to_one(noise_1d(position, seed))
}

#[inline]
pub fn noise_2d_zero_to_one(x: i32, y: i32, seed: i32) -> f64 {
    zero_to_one(noise_2d(x, y, seed))
}

#[inline]
pub fn noise_3d_zero_to_one(x: i32, y: i32, z: i32, seed: i32) -> f64 {
    zero_to_one(noise_3d(x, y, z, seed))
}

#[inline]
pub fn noise_4d_zero_to_one(x: i32, y: i32, z: i32, t: i32, seed: i32) -> f64 {
    zero_to_one(noise_4d(x, y, z, t, seed))
}

#[inline]
pub fn noise_1d_neg_one_to_one(position: i32, seed: i32) -> f64 {
    neg_one_to_one(noise_1d(position, seed))
}

#[inline]
pub fn noise_2d_neg_one_to_one(x: i32, y: i32, seed: i32) -> f64 {
    neg_one_to_one(noise_2d(x, y, seed))
}

#[inline]
pub fn noise_3d_neg_one_to_one(x: i32, y: i32, z: i32, seed: i32) -> f64 {
    neg_one_to_one(noise_3d(x, y, z, seed))
}

#[inline]
pub fn noise_4d_neg_one_to_one(x: i32, y: i32, z: i32, t: i32, seed: i32) -> f64 {
    neg_one_to_one(noise_4d(x, y, z, t, seed))
}
