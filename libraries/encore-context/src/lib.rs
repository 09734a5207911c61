//! Encore - Application Context
//!
//! Wires the playback store and the playlist collection together for a host
//! shell:
//! - Loads [`AppConfig`](encore_core::AppConfig) and applies the initial
//!   repeat/shuffle modes and appearance
//! - Refreshes the library from a platform [`MediaScanner`]
//! - Routes notification actions to the playback store
//! - Installs the `tracing` subscriber
//!
//! # Example
//!
//! ```rust,no_run
//! use encore_context::{init_tracing, AppContext, MediaScanner};
//! use encore_core::AppConfig;
//! use encore_playback::Transport;
//! use std::sync::Arc;
//!
//! # async fn run(
//! #     transport: Arc<dyn Transport>,
//! #     scanner: &dyn MediaScanner,
//! # ) -> encore_context::Result<()> {
//! let config = AppConfig::load()?;
//! init_tracing(&config.logging.filter)?;
//!
//! let ctx = AppContext::new(config, transport);
//! ctx.refresh_library(scanner).await?;
//! ctx.handle_notification_action("next").await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
pub mod logging;
pub mod scanner;

pub use context::AppContext;
pub use error::{ContextError, Result};
pub use logging::init_tracing;
pub use scanner::{MediaScanner, ScanError, ScannedAsset};
