//! Wire-format models received from the remote API.

pub mod profile;

pub use profile::{RawProfile, RawStage};
