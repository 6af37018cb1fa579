//! Typed Rust types and async client for the Ankr Advanced (multichain) JSON-RPC API.
//!
//! Every `ankr_*` procedure is exposed as one async method taking a typed request
//! and returning the typed reply unwrapped from the JSON-RPC `result` field.
//!
//! # Features
//!
//! - **`types` module** — Request/reply types for every procedure. Available with no
//!   additional features.
//! - **`client` module** (enabled by default) — An async RPC client built on `reqwest`.
//!
//! # Quick start
//!
//! ```no_run
//! use ankr_multichain_client::{AnkrClient, types::*};
//!
//! #[tokio::main]
//! async fn main() -> ankr_multichain_client::client::Result<()> {
//!     let client = AnkrClient::new("my-api-key");
//!     let balances = client
//!         .get_account_balance(GetAccountBalanceRequest::new("0xd8da6bf26964af9d7eed9e03e53415d37aa96045"))
//!         .await?;
//!     println!("Total: ${}", balances.total_balance_usd);
//!     Ok(())
//! }
//! ```

mod amount_helpers;
mod request_helpers;
pub mod types;

pub use amount_helpers::parse_quantity;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "client")]
pub use client::{AnkrClient, AnkrClientBuilder};

pub use types::*;
