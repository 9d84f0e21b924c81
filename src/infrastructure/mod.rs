//! Platform and sandbox utilities.
//!
//! - [`paths`]: `/host` mapping and tilde expansion for configured paths

pub mod paths;

pub use paths::{data_dir, expand_tilde};
