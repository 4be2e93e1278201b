pub mod api;
pub mod config;
pub mod format;
pub mod serde_ext;
pub mod sheet;
