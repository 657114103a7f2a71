//! Connect four over HTTP.
//!
//! # Architecture
//!
//! - **Table**: the single shared game behind an async mutex
//! - **Routes**: axum handlers for the start page, moves and resets
//! - **View**: server-rendered HTML pages
//! - **Config**: TOML file plus command-line overrides
//!
//! # Example
//!
//! ```no_run
//! use connect_four_server::{GameTable, ServerConfig, router};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServerConfig::default();
//! let app = router(GameTable::new(config.ai_delay()));
//! let listener = tokio::net::TcpListener::bind(("127.0.0.1", *config.port())).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod routes;
mod table;
pub mod view;

pub use config::{ConfigError, ServerConfig};
pub use routes::{GameQuery, PlayForm, StartForm, router};
pub use table::{GameTable, PlayReport};
