//! Validation modules

pub mod file;

pub use file::validate_selected_file;
