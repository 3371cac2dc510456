//! Request handlers.

pub mod process_file;

pub use process_file::{ProcessFileResponse, process_file};
