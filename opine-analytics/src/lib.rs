//! # opine-analytics
//!
//! Analytics pixel events and dispatch for the Opine SDK.
//!
//! Display queries attribute the content a user saw through pixel events:
//! page views, impressions, feature usage, conversions and transactions.
//! Events are built as plain values, serialized into the collector's flat
//! JSON shape and posted in batches by the [`Pixel`] dispatcher.
//!
//! The dispatcher is configured with an explicit [`AnalyticsConfig`] —
//! there is no shared global manager. A `dry_run` configuration keeps the
//! whole pipeline active but never performs network I/O, which is what the
//! SDK's own tests use.
//!
//! ```rust
//! use opine_analytics::{AnalyticsConfig, AnalyticsEnvironment, Pixel};
//!
//! let config = AnalyticsConfig::dry_run("my-client", AnalyticsEnvironment::Staging);
//! let pixel = Pixel::new(config);
//! assert_eq!(pixel.pending(), 0);
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod pixel;

pub use config::{AnalyticsConfig, AnalyticsEnvironment};
pub use error::{AnalyticsError, AnalyticsResult};
pub use event::{Additional, AnalyticsEvent, ContentKind, ProductArea};
pub use pixel::Pixel;
