//! Structured logging to a rotating file.
//!
//! All modules emit `tracing` events and spans. This module wires them to a
//! subscriber that writes human-readable lines to disk:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → RotatingFileWriter → ltps.log
//! ```
//!
//! # Features
//!
//! - **File Output**: Lines written to `<data_dir>/ltps.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//!
//! # Configuration
//!
//! Level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::{RotatingFileWriter, MAX_BACKUP_FILES, MAX_FILE_SIZE_BYTES};
pub use init::{init_tracing, LOG_FILE_NAME};
