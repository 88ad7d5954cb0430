//! Server Configuration Library
//!
//! Loads a hierarchical server definition from a declarative tree
//! document and normalizes it into an immutable, queryable model: the
//! single source of truth for a web-server engine's routing, TLS and
//! module chain.
//!
//! ```no_run
//! use std::path::Path;
//! use server_config::{load_config, ConfigStore};
//!
//! let config = load_config(Path::new("etc/server.json")).expect("config loads");
//! let store = ConfigStore::new(config);
//!
//! // Request-time consumers take lock-free snapshots.
//! let active = store.current();
//! if let Some(host) = active.virtual_host("shop.example.com") {
//!     println!("documentRoot = {}", host.params().string("documentRoot"));
//! }
//! ```

pub mod config;
pub mod node;

pub use config::loader::{load_config, parse_config, ConfigError};
pub use config::model::ServerConfig;
pub use config::store::ConfigStore;
pub use config::watcher::ConfigWatcher;
