//! Infrastructure layer for filesystem and environment interactions.
//!
//! Currently this is data directory resolution; see [`paths`].

pub mod paths;

pub use paths::{data_dir, resolve_data_dir, DATA_DIR_ENV};
