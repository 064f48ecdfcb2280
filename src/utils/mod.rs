//! Utility modules: build info and on-disk persistence.

pub mod build_info;
pub mod persistence;

pub use build_info::version_line;
