//! # recap-server
//!
//! The HTTP surface of the recap service.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `context` | Injected application state: model handles, upload dir |
//! | `routes` | Router assembly and middleware layers |
//! | `handlers` | `POST /process-file` upload → transcribe → summarize |
//! | `errors` | [`errors::ApiError`] → JSON error response mapping |
//! | `metrics` | Prometheus recorder and metric-name constants |
//!
//! ## Crate Position
//!
//! Depends on all other recap crates. Depended on by: the `recap` binary.

#![deny(unsafe_code)]

pub mod context;
pub mod errors;
pub mod handlers;
pub mod metrics;
pub mod routes;

pub use context::AppContext;
pub use errors::ApiError;
pub use routes::build_router;
