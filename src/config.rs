use std::ffi::OsString;
use std::path::PathBuf;

/// Status file written by libvirt's dnsmasq for the default `virbr0` network.
pub const DEFAULT_STATUS_FILE: &str = "/var/lib/libvirt/dnsmasq/virbr0.status";

/// Environment variable that overrides the status file location.
pub const STATUS_FILE_ENV: &str = "KVM_GUESTS_STATUS_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub status_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            status_file: PathBuf::from(DEFAULT_STATUS_FILE),
        }
    }
}

impl Config {
    /// Resolves the configuration from the process environment.
    ///
    /// An explicit `status_file` (from the command line) takes precedence over
    /// [`STATUS_FILE_ENV`], which takes precedence over [`DEFAULT_STATUS_FILE`].
    pub fn resolve(status_file: Option<PathBuf>) -> Self {
        Self::resolve_with(status_file, |key| std::env::var_os(key))
    }

    /// Same as [`Config::resolve`] with a caller-supplied environment lookup.
    pub fn resolve_with<F>(status_file: Option<PathBuf>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        if let Some(status_file) = status_file {
            return Self { status_file };
        }

        match lookup(STATUS_FILE_ENV) {
            Some(value) => Self {
                status_file: PathBuf::from(value),
            },
            None => Self::default(),
        }
    }
}
