//! # recap-settings
//!
//! Configuration for the recap service, loaded from three layers (in
//! priority order):
//!
//! 1. **Compiled defaults** — [`RecapSettings::default()`]
//! 2. **JSON file** — deep-merged over defaults, so partial files are fine
//! 3. **Environment variables** — `RECAP_*` overrides (highest priority)
//!
//! There is no global singleton: the binary loads settings once at startup
//! and injects them into the services it constructs. That keeps every
//! consumer explicit about where its configuration came from and makes tests
//! trivial (build a [`RecapSettings`] by hand).
//!
//! # Usage
//!
//! ```no_run
//! use recap_settings::load_or_default;
//!
//! let settings = load_or_default(Some(std::path::Path::new("recap.json")));
//! println!("listening on port {}", settings.server.port);
//! ```

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{Env, MapEnv, StdEnv, deep_merge, load_or_default, load_settings_from_path};
pub use types::*;
