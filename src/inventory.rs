//! Ansible dynamic inventory built from lease records.
//!
//! The document follows the layout Ansible expects from an inventory script
//! called with `--list`:
//!
//! ```json
//! {
//!   "_meta": { "hostvars": { "vm1": { "ansible_host": "10.0.0.2", ... } } },
//!   "all": { "hosts": ["vm1"], "children": ["kvm_guests"] },
//!   "kvm_guests": { "hosts": ["vm1"] }
//! }
//! ```
//!
//! An [`Inventory`] is assembled once by [`Inventory::build`] and not modified
//! afterwards.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::lease::LeaseRecord;

/// Name of the group every guest belongs to.
pub const GUEST_GROUP: &str = "kvm_guests";

/// Variables exposed to playbooks for one guest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostVars {
    pub ansible_host: String,
    pub mac_address: String,
    pub client_id: String,
    pub expiry_time: Value,
}

impl From<&LeaseRecord> for HostVars {
    fn from(record: &LeaseRecord) -> Self {
        Self {
            ansible_host: record.ip_address.clone(),
            mac_address: record.mac_address.clone(),
            client_id: record.client_id.clone(),
            expiry_time: record.expiry_time.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
struct Meta {
    hostvars: IndexMap<String, HostVars>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct AllGroup {
    hosts: Vec<String>,
    children: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
struct Group {
    hosts: Vec<String>,
}

/// The full inventory document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inventory {
    #[serde(rename = "_meta")]
    meta: Meta,
    all: AllGroup,
    kvm_guests: Group,
}

impl Inventory {
    /// Projects lease records into an inventory, in record order.
    ///
    /// Every record contributes one entry to both host lists, duplicates
    /// included. Host variables are keyed by hostname, so a repeated hostname
    /// replaces the earlier variables while keeping its original position.
    pub fn build(records: &[LeaseRecord]) -> Self {
        let mut hosts = Vec::with_capacity(records.len());
        let mut hostvars = IndexMap::with_capacity(records.len());

        for record in records {
            hosts.push(record.hostname.clone());
            if hostvars
                .insert(record.hostname.clone(), HostVars::from(record))
                .is_some()
            {
                debug!(
                    "Duplicate lease for host {}, keeping the later one",
                    record.hostname
                );
            }
        }

        Self {
            meta: Meta { hostvars },
            all: AllGroup {
                hosts: hosts.clone(),
                children: vec![GUEST_GROUP.to_string()],
            },
            kvm_guests: Group { hosts },
        }
    }

    /// Returns the variables for `hostname`, if it has a lease.
    pub fn host_vars(&self, hostname: &str) -> Option<&HostVars> {
        self.meta.hostvars.get(hostname)
    }

    /// All host variables, in first-seen order.
    pub fn hostvars(&self) -> &IndexMap<String, HostVars> {
        &self.meta.hostvars
    }

    /// Hosts of the `all` group, one per lease record.
    pub fn all_hosts(&self) -> &[String] {
        &self.all.hosts
    }

    /// Child groups of `all`.
    pub fn children(&self) -> &[String] {
        &self.all.children
    }

    /// Hosts of the [`GUEST_GROUP`] group.
    pub fn guest_hosts(&self) -> &[String] {
        &self.kvm_guests.hosts
    }
}
