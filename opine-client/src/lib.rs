//! # opine-client
//!
//! HTTP transport and configuration for the Opine SDK.
//!
//! The client owns the boundary between the declarative query layer and
//! the network: it turns a composed
//! [`ParameterSet`](opine_query::ParameterSet) into a display API URL,
//! issues the GET request and decodes the JSON body. Configuration is an
//! explicit [`ClientConfig`] value — passkey, client id, environment,
//! locale and optional analytics — passed in at construction time.
//!
//! ```rust
//! use opine_client::{ClientConfig, Environment, OpineClient};
//!
//! let config = ClientConfig::new("my-passkey", "my-client", Environment::Staging)
//!     .locale("en_US");
//! let client = OpineClient::new(config);
//! assert!(client.pixel().is_none());
//! ```
//!
//! Retry, backoff and response caching are deliberately out of scope; the
//! hosting application owns those policies.

pub mod client;
pub mod config;
pub mod error;
pub mod logging;

pub use client::OpineClient;
pub use config::{API_VERSION, ClientConfig, Environment};
pub use error::{ClientError, ClientResult};
