//! Link configuration for the Gattlink transfer protocol
//!
//! Defines which GATT service and characteristic carry payload bytes,
//! which advertised peers the discovery scan considers, and the sentinel
//! byte sequences that delimit logical messages in the data stream.

use std::collections::HashSet;

use tracing::debug;
use uuid::Uuid;

use crate::error::ConfigError;

/// Default mark appended to the stream when a transmission completes.
pub const DEFAULT_END_OF_DATA_MARK: &[u8] = b"EOD";

/// Default mark signalling that a transmission was cancelled.
pub const DEFAULT_DATA_CANCELLED_MARK: &[u8] = b"COD";

/// Which advertised peers the discovery scan considers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryStrategy {
    /// Consider every discovered peer, regardless of advertised services.
    AcceptAll,
    /// Consider only peers advertising at least one of these service UUIDs.
    ///
    /// The set is built once at construction and always contains the data
    /// service UUID.
    RestrictTo(HashSet<Uuid>),
}

/// Configuration for a Gattlink session.
///
/// A `Config` is the single source of truth shared by the discovery layer
/// (which peers to consider, which service carries data) and the framing
/// layer (which characteristic carries payload bytes, which sentinels
/// delimit messages). Build it before discovery starts and treat it as
/// read-only for the rest of the session. If marks must change mid-session,
/// adjust a clone and publish that snapshot to the collaborators instead of
/// mutating shared state.
#[derive(Debug, Clone)]
pub struct Config {
    /// The GATT service carrying application data. Fixed for the lifetime
    /// of the configuration.
    data_service_uuid: Uuid,

    /// The characteristic within the data service that carries payload
    /// bytes.
    data_characteristic_uuid: Uuid,

    /// Sentinel marking a completed transmission.
    end_of_data_mark: Vec<u8>,

    /// Sentinel marking a cancelled transmission.
    data_cancelled_mark: Vec<u8>,

    /// Scan filtering policy.
    discovery_strategy: DiscoveryStrategy,
}

impl Config {
    /// Create a configuration for the given data service and characteristic.
    ///
    /// With `scan_all` false the discovery strategy is restricted to the
    /// data service UUID; with `scan_all` true every advertised peer is
    /// considered. Marks start at [`DEFAULT_END_OF_DATA_MARK`] and
    /// [`DEFAULT_DATA_CANCELLED_MARK`]; each instance owns its own copies.
    pub fn new(data_service_uuid: Uuid, data_characteristic_uuid: Uuid, scan_all: bool) -> Self {
        let discovery_strategy = if scan_all {
            DiscoveryStrategy::AcceptAll
        } else {
            DiscoveryStrategy::RestrictTo(HashSet::from([data_service_uuid]))
        };

        debug!(
            "Configured data service {} (characteristic {}, scan_all: {})",
            data_service_uuid, data_characteristic_uuid, scan_all
        );

        Self {
            data_service_uuid,
            data_characteristic_uuid,
            end_of_data_mark: DEFAULT_END_OF_DATA_MARK.to_vec(),
            data_cancelled_mark: DEFAULT_DATA_CANCELLED_MARK.to_vec(),
            discovery_strategy,
        }
    }

    /// Create a configuration from canonical UUID strings.
    ///
    /// Fails with [`ConfigError::InvalidIdentifier`] if either string is not
    /// a well-formed 128-bit UUID; no configuration is produced in that
    /// case.
    pub fn from_strings(
        data_service_uuid: &str,
        data_characteristic_uuid: &str,
        scan_all: bool,
    ) -> Result<Self, ConfigError> {
        let service = Uuid::parse_str(data_service_uuid)?;
        let characteristic = Uuid::parse_str(data_characteristic_uuid)?;
        Ok(Self::new(service, characteristic, scan_all))
    }

    /// The UUID of the service carrying application data.
    pub fn data_service_uuid(&self) -> Uuid {
        self.data_service_uuid
    }

    /// The UUID of the characteristic carrying payload bytes.
    pub fn data_characteristic_uuid(&self) -> Uuid {
        self.data_characteristic_uuid
    }

    /// Reassign the characteristic that carries payload bytes.
    ///
    /// The configuration maps exactly one characteristic to the data
    /// service; reassignment replaces it for subsequent lookups.
    pub fn set_data_characteristic_uuid(&mut self, data_characteristic_uuid: Uuid) {
        self.data_characteristic_uuid = data_characteristic_uuid;
    }

    /// The mark that closes a completed transmission.
    pub fn end_of_data_mark(&self) -> &[u8] {
        &self.end_of_data_mark
    }

    /// Override the end-of-data mark.
    ///
    /// The new mark must be non-empty, distinct from the cancelled mark,
    /// and neither may be a prefix of the other; otherwise the override is
    /// rejected with [`ConfigError::InvalidMarker`] and the current mark is
    /// kept.
    pub fn set_end_of_data_mark(&mut self, mark: Vec<u8>) -> Result<(), ConfigError> {
        validate_marks(&mark, &self.data_cancelled_mark)?;
        debug!("End-of-data mark overridden ({} bytes)", mark.len());
        self.end_of_data_mark = mark;
        Ok(())
    }

    /// The mark that signals a cancelled transmission.
    pub fn data_cancelled_mark(&self) -> &[u8] {
        &self.data_cancelled_mark
    }

    /// Override the cancelled mark.
    ///
    /// Validated against the current end-of-data mark under the same rules
    /// as [`set_end_of_data_mark`](Self::set_end_of_data_mark); a rejected
    /// override keeps the current mark.
    pub fn set_data_cancelled_mark(&mut self, mark: Vec<u8>) -> Result<(), ConfigError> {
        validate_marks(&self.end_of_data_mark, &mark)?;
        debug!("Cancelled mark overridden ({} bytes)", mark.len());
        self.data_cancelled_mark = mark;
        Ok(())
    }

    /// The discovery strategy carried by this configuration.
    pub fn discovery_strategy(&self) -> &DiscoveryStrategy {
        &self.discovery_strategy
    }

    /// The services this configuration defines.
    ///
    /// The peripheral side publishes and advertises exactly these when
    /// accepting transfers.
    pub fn service_uuids(&self) -> Vec<Uuid> {
        vec![self.data_service_uuid]
    }

    /// The characteristics to resolve for `service_uuid`.
    ///
    /// Returns the single data characteristic when `service_uuid` is the
    /// data service, and an empty sequence for any service this
    /// configuration does not recognize. An empty result is not an error:
    /// the caller decides whether an unknown service matters in its
    /// context, and must not attempt characteristic discovery on it.
    pub fn characteristic_uuids_for_service(&self, service_uuid: Uuid) -> Vec<Uuid> {
        if service_uuid == self.data_service_uuid {
            vec![self.data_characteristic_uuid]
        } else {
            Vec::new()
        }
    }

    /// The advertised-service filter for the discovery scan.
    ///
    /// `None` means the scan is unfiltered and every discovered peer is
    /// considered. `Some(set)` restricts the scan to peers advertising at
    /// least one UUID in the set.
    pub fn discovery_filter(&self) -> Option<&HashSet<Uuid>> {
        match &self.discovery_strategy {
            DiscoveryStrategy::AcceptAll => None,
            DiscoveryStrategy::RestrictTo(uuids) => Some(uuids),
        }
    }
}

/// Check that the two marks can be told apart in an unframed byte stream.
fn validate_marks(end_of_data: &[u8], cancelled: &[u8]) -> Result<(), ConfigError> {
    // An empty slice is a prefix of everything; report it as empty instead.
    if end_of_data.is_empty() {
        return Err(ConfigError::InvalidMarker(
            "End-of-data mark must not be empty".into(),
        ));
    }
    if cancelled.is_empty() {
        return Err(ConfigError::InvalidMarker(
            "Cancelled mark must not be empty".into(),
        ));
    }
    if end_of_data == cancelled {
        return Err(ConfigError::InvalidMarker(
            "End-of-data and cancelled marks must be distinct".into(),
        ));
    }
    if cancelled.starts_with(end_of_data) || end_of_data.starts_with(cancelled) {
        return Err(ConfigError::InvalidMarker(
            "Neither mark may be a prefix of the other".into(),
        ));
    }
    Ok(())
}
