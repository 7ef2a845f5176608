// PV device profile: line-oriented KEY=VALUE file parser

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Profile keys the dashboard looks up. All optional.
pub const KEY_CHARGER: &str = "pi-solar-charger";
pub const KEY_CHARGER_RATING: &str = "pi-solar-chrate";
pub const KEY_PANEL_TYPE: &str = "pi-solar-pvtype";
pub const KEY_PANEL_RATING: &str = "pi-solar-pvrate";
pub const KEY_BATTERY_TYPE: &str = "pi-solar-battype";
pub const KEY_BATTERY_RATING: &str = "pi-solar-batrate";

/// Parsed PV hardware profile. Empty when the profile file is missing or
/// unreadable; a host without a PV profile still renders station health.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeviceProfile {
    entries: BTreeMap<String, String>,
}

impl DeviceProfile {
    /// Read and parse the profile file. Never fails: a file that does not
    /// exist or cannot be opened yields an empty profile, matching the
    /// behavior of omitting the PV section entirely.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(s) => Self::parse(&s),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "device profile not readable");
                Self::default()
            }
        }
    }

    /// Parse profile text. One `KEY=VALUE` entry per line; `#` comments and
    /// blank lines are ignored; a malformed line is skipped without
    /// aborting the rest of the parse.
    pub fn parse(s: &str) -> Self {
        let mut entries = BTreeMap::new();
        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            // Split on the first '=' only; values may themselves contain '='.
            let Some((key, value)) = line.split_once('=') else {
                tracing::debug!(line, "skipping malformed profile line");
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                tracing::debug!(line, "skipping profile line with empty key");
                continue;
            }
            entries.insert(key.to_string(), unquote(value).to_string());
        }
        Self { entries }
    }

    /// Lookup with an explicit "not set" sentinel: `None` for a key that
    /// never appeared, distinguishable from a key set to the empty string.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Trim, strip one wrapping pair of double quotes, trim again. Interior
/// quotes survive.
fn unquote(value: &str) -> &str {
    let value = value.trim();
    match value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
    {
        Some(inner) => inner.trim(),
        None => value,
    }
}
