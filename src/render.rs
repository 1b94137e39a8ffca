//! Output for the two inventory script modes.

use std::io::Write;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::Result;
use crate::inventory::Inventory;

/// What the caller asked Ansible's inventory protocol for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// `--list`: the whole inventory document.
    List,
    /// `--host <hostname>`: variables of a single host.
    Host(String),
}

/// Renders the document for `mode` as JSON indented by two spaces.
///
/// An unknown host renders as `{}`, which Ansible reads as "no variables".
/// Non-ASCII characters are written as `\uXXXX` escapes, so the output is
/// plain ASCII.
pub fn render(inventory: &Inventory, mode: &Mode) -> Result<String> {
    let rendered = match mode {
        Mode::List => serde_json::to_string_pretty(inventory)?,
        Mode::Host(hostname) => match inventory.host_vars(hostname) {
            Some(vars) => serde_json::to_string_pretty(vars)?,
            None => {
                debug!("No lease for host {}", hostname);
                serde_json::to_string_pretty(&Value::Object(Map::new()))?
            }
        },
    };
    Ok(escape_non_ascii(&rendered))
}

/// Replaces every non-ASCII character with its UTF-16 `\uXXXX` escape.
///
/// Only string contents of a JSON document can hold non-ASCII characters, so
/// this never touches structure.
fn escape_non_ascii(rendered: &str) -> String {
    if rendered.is_ascii() {
        return rendered.to_string();
    }

    let mut escaped = String::with_capacity(rendered.len() + 16);
    let mut units = [0u16; 2];
    for c in rendered.chars() {
        if c.is_ascii() {
            escaped.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                escaped.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    escaped
}

/// Writes a rendered document followed by a newline.
pub fn write_output<W: Write>(mut writer: W, rendered: &str) -> Result<()> {
    writeln!(writer, "{}", rendered)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lease::LeaseRecord;
    use serde_json::json;

    fn inventory() -> Inventory {
        Inventory::build(&[LeaseRecord {
            hostname: "vm1".to_string(),
            ip_address: "10.0.0.2".to_string(),
            mac_address: "aa:bb:cc:dd:ee:ff".to_string(),
            client_id: "01:aa:bb".to_string(),
            expiry_time: json!("1700000000"),
        }])
    }

    #[test]
    fn test_render_host() {
        let rendered = render(&inventory(), &Mode::Host("vm1".to_string())).unwrap();
        assert_eq!(
            rendered,
            r#"{
  "ansible_host": "10.0.0.2",
  "mac_address": "aa:bb:cc:dd:ee:ff",
  "client_id": "01:aa:bb",
  "expiry_time": "1700000000"
}"#
        );
    }

    #[test]
    fn test_render_unknown_host() {
        let rendered = render(&inventory(), &Mode::Host("nope".to_string())).unwrap();
        assert_eq!(rendered, "{}");
    }

    #[test]
    fn test_render_list() {
        let rendered = render(&inventory(), &Mode::List).unwrap();
        assert_eq!(
            rendered,
            r#"{
  "_meta": {
    "hostvars": {
      "vm1": {
        "ansible_host": "10.0.0.2",
        "mac_address": "aa:bb:cc:dd:ee:ff",
        "client_id": "01:aa:bb",
        "expiry_time": "1700000000"
      }
    }
  },
  "all": {
    "hosts": [
      "vm1"
    ],
    "children": [
      "kvm_guests"
    ]
  },
  "kvm_guests": {
    "hosts": [
      "vm1"
    ]
  }
}"#
        );
    }

    #[test]
    fn test_render_empty_list() {
        let rendered = render(&Inventory::build(&[]), &Mode::List).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            value,
            json!({
                "_meta": { "hostvars": {} },
                "all": { "hosts": [], "children": ["kvm_guests"] },
                "kvm_guests": { "hosts": [] }
            })
        );
    }

    #[test]
    fn test_render_escapes_non_ascii() {
        let inventory = Inventory::build(&[LeaseRecord {
            hostname: "vm\u{e9}".to_string(),
            ip_address: "10.0.0.3".to_string(),
            mac_address: "aa:bb:cc:dd:ee:01".to_string(),
            client_id: "01:\u{1f600}".to_string(),
            expiry_time: json!(1700000000),
        }]);

        let rendered = render(&inventory, &Mode::Host("vm\u{e9}".to_string())).unwrap();
        assert!(rendered.is_ascii());
        assert!(rendered.contains(r#""client_id": "01:\ud83d\ude00""#));

        let rendered = render(&inventory, &Mode::List).unwrap();
        assert!(rendered.contains(r#""vm\u00e9": {"#));
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["all"]["hosts"], json!(["vm\u{e9}"]));
    }

    #[test]
    fn test_render_keeps_large_expiry_exact() {
        let expiry: Value = serde_json::from_str("123456789012345678901234567890").unwrap();
        let inventory = Inventory::build(&[LeaseRecord {
            hostname: "vm1".to_string(),
            ip_address: "10.0.0.2".to_string(),
            mac_address: "aa:bb:cc:dd:ee:ff".to_string(),
            client_id: "01:aa:bb".to_string(),
            expiry_time: expiry,
        }]);

        let rendered = render(&inventory, &Mode::Host("vm1".to_string())).unwrap();
        assert!(rendered.contains(r#""expiry_time": 123456789012345678901234567890"#));
    }

    #[test]
    fn test_write_output_appends_newline() {
        let mut buffer = Vec::new();
        write_output(&mut buffer, "{}").unwrap();
        assert_eq!(buffer, b"{}\n");
    }
}
