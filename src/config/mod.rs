//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! document file (JSON tree encoding)
//!     → loader.rs (read & decode into a Node tree)
//!     → build.rs (scalars → section parsers → virtual hosts)
//!     → ServerConfig (normalized, immutable)
//!     → shared via ConfigStore to all subsystems
//!
//! On reload signal:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → atomic swap via ConfigStore
//!     → subsystems observe new config
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - Every scalar has a zero-value fallback and every section an empty
//!   fallback, so a loaded model is always total
//! - Section parsers are scope-agnostic; virtual-host overlays re-run
//!   the exact root-level parsers against each virtual-host node

mod build;
pub mod loader;
pub mod model;
pub mod params;
mod scalar;
mod sections;
pub mod store;
mod vhosts;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use model::{
    AnalyticsRule, Certificate, Connector, EnvironmentVariable, HandlerConfig, HeaderRule,
    Headers, LocationConfig, RewriteRule, ServerConfig, VirtualHost,
};
pub use params::ParamBlock;
pub use store::ConfigStore;
pub use watcher::ConfigWatcher;
