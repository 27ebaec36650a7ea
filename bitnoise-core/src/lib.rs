//! Deterministic, random-access bit-noise primitives.
//!
//! Every function maps `(coordinates, seed)` to the same 32-bit value
//! anywhere, in any call order, with no state between calls. That makes the
//! crate suited to out-of-order / on-demand procedural generation: a chunk of
//! terrain is identical whether it is queried first or last. Smoothed,
//! fractal, and gradient noise are left to callers built on these primitives.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod field;
pub mod float;
pub mod hash;
pub mod noise;

pub use field::NoiseField;
pub use float::{
    neg_one_to_one, noise_1d_neg_one_to_one, noise_1d_zero_to_one, noise_2d_neg_one_to_one,
    noise_2d_zero_to_one, noise_3d_neg_one_to_one, noise_3d_zero_to_one, noise_4d_neg_one_to_one,
    noise_4d_zero_to_one, zero_to_one,
};
pub use hash::{sanitize_seed, squirrel_noise5};
pub use noise::{noise_1d, noise_2d, noise_3d, noise_4d};
