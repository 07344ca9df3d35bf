//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for parallel encoders.

mod rayon_encoder;

#[doc(inline)]
pub use rayon_encoder::ParallelRayonEncoder;
