//! # kvm-guests-inventory
//!
//! Dynamic Ansible inventory for KVM guests, built from the JSON status file
//! libvirt's dnsmasq keeps for a virtual network.
//!
//! ## Quick Start
//!
//! ```no_run
//! use kvm_guests_inventory::{load_records, render, Config, Inventory, Mode};
//!
//! fn main() -> kvm_guests_inventory::Result<()> {
//!     let config = Config::resolve(None);
//!     let records = load_records(&config.status_file)?;
//!     let inventory = Inventory::build(&records);
//!     println!("{}", render(&inventory, &Mode::List)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`Config`] - Status file location (flag, `KVM_GUESTS_STATUS_FILE`, or default)
//! - [`load_records`] - Reads the status file into [`LeaseRecord`]s
//! - [`Inventory`] - Groups and host variables projected from the leases
//! - [`render`] - JSON output for `--list` and `--host`

pub mod config;
pub mod error;
pub mod inventory;
pub mod lease;
pub mod render;

pub use config::Config;
pub use error::{Error, Result};
pub use inventory::{HostVars, Inventory};
pub use lease::{load_records, LeaseRecord};
pub use render::{render, write_output, Mode};
