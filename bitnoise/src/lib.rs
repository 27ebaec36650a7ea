//! Umbrella crate that re-exports the `bitnoise` building blocks.
//!
//! This crate is intended as a convenient entrypoint for users and as a home for docs.rs guides.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use bitnoise_core as core;
