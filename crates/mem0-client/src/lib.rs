//! Async client for the Mem0 platform REST API.
//!
//! One [`MemoryClient`] wraps every endpoint: memory CRUD and search, history, batch updates,
//! entities, project settings, webhooks, feedback and export jobs. Requests carry
//! `Authorization: Token <key>`, time out after [`REQUEST_TIMEOUT`] and are never retried.
//!
//! ```no_run
//! use mem0_client::{ClientConfig, MemoryClient, Message, MemoryOptions};
//!
//! # async fn run() -> mem0_client::Result<()> {
//! let client = MemoryClient::new(ClientConfig::new("m0-..."))?;
//! let added = client
//!     .add(&[Message::user("I like coffee")], &MemoryOptions::for_user("alice"))
//!     .await?;
//! println!("{} memories added", added.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod entities;
mod error;
mod memories;
mod params;
mod project;

pub use client::{MemoryClient, REQUEST_TIMEOUT};
pub use config::{ClientConfig, DEFAULT_HOST};
pub use error::{ClientError, Result};
pub use mem0_types::*;
