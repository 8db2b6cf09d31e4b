use std::collections::HashMap;

use tracing::debug;

use super::normalizer::{normalize_password, normalize_username};
use crate::source::{DataUnavailable, TableSource};

const USERNAME_COLUMN: &str = "username";
const PASSWORD_COLUMN: &str = "password";

/// Snapshot of the users table keyed by normalized username.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialTable {
    entries: HashMap<String, String>,
}

impl CredentialTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, username: &str) -> bool {
        self.entries.contains_key(&normalize_username(username))
    }

    /// Exact comparison of the trimmed password against the stored one.
    pub fn check(&self, username: &str, password: &str) -> bool {
        self.entries
            .get(&normalize_username(username))
            .is_some_and(|stored| stored == normalize_password(password))
    }
}

pub(super) fn parse_table(source: &TableSource) -> Result<CredentialTable, DataUnavailable> {
    let raw = source.read_table()?;
    let [username_index, password_index] = raw.require(&[USERNAME_COLUMN, PASSWORD_COLUMN])?;

    let mut entries = HashMap::with_capacity(raw.rows.len());
    for row in &raw.rows {
        let username = normalize_username(row.get(username_index));
        if username.is_empty() {
            debug!(source = %raw.source_name, line = row.line, "skipping user row without a username");
            continue;
        }

        // Later rows replace earlier ones for the same normalized name.
        entries.insert(
            username,
            normalize_password(row.get(password_index)).to_string(),
        );
    }

    Ok(CredentialTable { entries })
}
