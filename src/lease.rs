//! Lease records read from the dnsmasq status file.
//!
//! libvirt's dnsmasq keeps the current leases of a virtual network in a JSON
//! array, one object per guest:
//!
//! ```json
//! [
//!   {
//!     "ip-address": "192.168.122.45",
//!     "mac-address": "52:54:00:6b:3c:58",
//!     "hostname": "vm1",
//!     "client-id": "01:52:54:00:6b:3c:58",
//!     "expiry-time": 1700000000
//!   }
//! ]
//! ```
//!
//! This module only reads that file; it is never written here.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};

/// A single DHCP lease as written by dnsmasq.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LeaseRecord {
    /// Guest hostname. Expected to be unique within one status file.
    pub hostname: String,

    #[serde(rename = "ip-address")]
    pub ip_address: String,

    #[serde(rename = "mac-address")]
    pub mac_address: String,

    #[serde(rename = "client-id")]
    pub client_id: String,

    /// Lease expiration, passed through untouched.
    ///
    /// dnsmasq writes this as a number of seconds since the epoch, but some
    /// tooling stores it as a string, so the raw JSON value is kept.
    #[serde(rename = "expiry-time")]
    pub expiry_time: Value,
}

/// Reads and parses the status file at `path`.
///
/// # Errors
///
/// - [`Error::StatusFileNotFound`] if the file cannot be opened or read.
/// - [`Error::InvalidStatusJson`] if the content is not valid JSON.
/// - [`Error::NotAnArray`] or [`Error::InvalidRecord`] if the JSON does not
///   have the shape of a lease list.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<LeaseRecord>> {
    let path = path.as_ref();

    let content = std::fs::read(path).map_err(|source| Error::StatusFileNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let document: Value =
        serde_json::from_slice(&content).map_err(|source| Error::InvalidStatusJson {
            path: path.to_path_buf(),
            source,
        })?;

    let records = parse_records(document).map_err(|error| match error {
        RecordsError::NotAnArray => Error::NotAnArray {
            path: path.to_path_buf(),
        },
        RecordsError::Record { index, source } => Error::InvalidRecord { index, source },
    })?;

    debug!("Loaded {} lease record(s) from {:?}", records.len(), path);
    Ok(records)
}

enum RecordsError {
    NotAnArray,
    Record {
        index: usize,
        source: serde_json::Error,
    },
}

fn parse_records(document: Value) -> std::result::Result<Vec<LeaseRecord>, RecordsError> {
    let Value::Array(entries) = document else {
        return Err(RecordsError::NotAnArray);
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value(entry).map_err(|source| RecordsError::Record { index, source })
        })
        .collect()
}
