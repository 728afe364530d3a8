//! Core configuration for the Gattlink BLE data-transfer protocol
//!
//! Gattlink moves opaque payloads between two peers over a single GATT
//! characteristic. This crate defines the [`Config`] both roles share.
//! A configuration addresses the data service and the characteristic
//! within it, and decides how peers are discovered and how logical
//! messages are delimited in the byte stream.
//!
//! # Example
//!
//! ```
//! use gattlink_core::Config;
//! use uuid::Uuid;
//!
//! # fn main() -> Result<(), gattlink_core::ConfigError> {
//! let service = Uuid::parse_str("a1f3c2d0-5b7e-4aa0-9e10-0242ac120001")?;
//! let characteristic = Uuid::parse_str("b2e4d3c1-6c8f-4bb1-8f21-0242ac120002")?;
//! let config = Config::new(service, characteristic, false);
//!
//! // The central scans only for the data service unless told otherwise.
//! assert!(config.discovery_filter().is_some());
//! assert_eq!(
//!     config.characteristic_uuids_for_service(service),
//!     vec![characteristic]
//! );
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;

pub use config::{Config, DEFAULT_DATA_CANCELLED_MARK, DEFAULT_END_OF_DATA_MARK, DiscoveryStrategy};
pub use error::ConfigError;
