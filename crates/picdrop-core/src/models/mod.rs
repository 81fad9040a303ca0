//! Data models for an upload attempt
//!
//! `file` holds the user's selection, `upload` the wire payloads exchanged with the
//! collaborators plus the final result, and `status` the externally observable progress.

mod file;
mod status;
mod upload;

// Re-export all models for convenient imports
pub use file::*;
pub use status::*;
pub use upload::*;
