//! Utility functions shared across the crate.

pub mod fs;

pub use fs::{ensure_dir, read_json_file, read_text_file, write_json_file, write_text_file};
