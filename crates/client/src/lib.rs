//! Paydesk Client - Async HTTP client for the order endpoints.
//!
//! # Usage
//!
//! ```rust,no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use paydesk_client::{Client, ClientConfig};
//! use paydesk_core::{OrderId, Params};
//!
//! let config = ClientConfig::from_env()?;
//! let client = Client::new(&config)?;
//!
//! let mut params = Params::default();
//! params.add_expand("customer");
//! let order = client.get_order(&OrderId::new("or_123"), &params).await?;
//! println!("{} is {:?}", order.id, order.status);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod client;
pub mod config;
mod error;
mod orders;

pub use client::Client;
pub use config::{ClientConfig, ConfigError};
pub use error::{ApiError, ApiErrorResponse, ClientError};
