//! Credential lookup backing sign-in.
//!
//! Passwords are stored and compared as plaintext, exactly as they appear in
//! the users table. That is not acceptable for a real deployment.

mod normalizer;
mod parser;

pub use parser::CredentialTable;

use crate::source::{DataUnavailable, TableSource};
use normalizer::normalize_username;
use tracing::{debug, warn};

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful! Welcome back.";
pub const LOGIN_FAILURE_MESSAGE: &str = "Invalid username or password. Please try again.";

/// Answers sign-in queries against the users table, re-reading it per call.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    source: TableSource,
}

impl CredentialStore {
    pub fn new(source: TableSource) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &TableSource {
        &self.source
    }

    pub fn load(&self) -> Result<CredentialTable, DataUnavailable> {
        parser::parse_table(&self.source)
    }

    pub fn verify(&self, username: &str, password: &str) -> AuthOutcome {
        let table = match self.load() {
            Ok(table) => table,
            Err(err) => {
                warn!(source = %self.source.describe(), error = %err, "users table unavailable; sign-in rejected");
                return AuthOutcome::DataUnavailable(err);
            }
        };

        if table.check(username, password) {
            AuthOutcome::Authenticated {
                username: normalize_username(username),
            }
        } else {
            debug!(known_users = table.len(), "credentials did not match");
            AuthOutcome::Rejected
        }
    }

    /// `true` only for a known username with the exact password.
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.verify(username, password).is_authenticated()
    }
}

/// Result of a sign-in attempt, keeping "unknown credentials" apart from
/// "no users table to check against".
#[derive(Debug)]
pub enum AuthOutcome {
    Authenticated { username: String },
    Rejected,
    DataUnavailable(DataUnavailable),
}

impl AuthOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthOutcome::Authenticated { .. })
    }

    pub fn message(&self) -> &'static str {
        if self.is_authenticated() {
            LOGIN_SUCCESS_MESSAGE
        } else {
            LOGIN_FAILURE_MESSAGE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::count_warnings;

    const USERS: &str = "username,password\n  Alice ,Wonder1and\nbob,hunter2\nBOB,Hunter3\n,orphan\n";

    fn store(contents: &str) -> CredentialStore {
        CredentialStore::new(TableSource::inline("users.csv", contents))
    }

    #[test]
    fn username_case_and_whitespace_are_ignored() {
        let store = store(USERS);

        assert!(store.authenticate("alice", "Wonder1and"));
        assert!(store.authenticate("  ALICE  ", " Wonder1and "));
    }

    #[test]
    fn password_case_matters() {
        let store = store(USERS);

        assert!(!store.authenticate("alice", "wonder1and"));
        assert!(!store.authenticate("alice", "WONDER1AND"));
    }

    #[test]
    fn duplicate_usernames_keep_the_last_row() {
        let store = store(USERS);

        assert!(store.authenticate("bob", "Hunter3"));
        assert!(!store.authenticate("bob", "hunter2"));
    }

    #[test]
    fn rows_without_username_are_skipped() {
        let table = store(USERS).load().expect("table loads");

        assert_eq!(table.len(), 2);
        assert!(!table.contains(""));
        assert!(!store(USERS).authenticate("", "orphan"));
    }

    #[test]
    fn unknown_user_is_rejected() {
        match store(USERS).verify("mallory", "hunter2") {
            AuthOutcome::Rejected => {}
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn authenticated_outcome_reports_normalized_name() {
        match store(USERS).verify(" Alice", "Wonder1and") {
            AuthOutcome::Authenticated { username } => assert_eq!(username, "alice"),
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn missing_password_column_makes_table_unavailable() {
        let store = store("username,passcode\nalice,Wonder1and\n");

        match store.verify("alice", "Wonder1and") {
            AuthOutcome::DataUnavailable(DataUnavailable::MissingColumns { missing, .. }) => {
                assert_eq!(missing, vec!["password".to_string()])
            }
            other => panic!("expected missing column, got {other:?}"),
        }
    }

    #[test]
    fn malformed_row_empties_the_whole_table() {
        let store = store("username,password\nalice,Wonder1and\nbob,hunter2,extra\n");

        assert!(store.load().is_err());
        assert!(!store.authenticate("alice", "Wonder1and"));
    }

    #[test]
    fn absent_or_empty_table_never_authenticates() {
        let absent = CredentialStore::new(TableSource::file("./no-such-users.csv"));
        assert!(!absent.authenticate("alice", "Wonder1and"));

        let empty = store("username,password\n");
        assert!(empty.load().expect("header-only table loads").is_empty());
        assert!(!empty.authenticate("alice", "Wonder1and"));

        let blank = store("");
        assert!(!blank.authenticate("", ""));
    }

    #[test]
    fn unavailable_users_table_warns_once_per_attempt() {
        let absent = CredentialStore::new(TableSource::file("./no-such-users.csv"));

        for _ in 0..2 {
            let warnings = count_warnings(|| {
                assert!(matches!(
                    absent.verify("alice", "Wonder1and"),
                    AuthOutcome::DataUnavailable(DataUnavailable::Missing { .. })
                ));
            });
            assert_eq!(warnings, 1);
        }

        let warnings = count_warnings(|| {
            assert!(!store(USERS).authenticate("alice", "wrong"));
        });
        assert_eq!(warnings, 0);
    }

    #[test]
    fn missing_password_cell_matches_empty_password() {
        let store = store("username,password\ncarol\n");

        assert!(store.authenticate("carol", ""));
        assert!(!store.authenticate("carol", "anything"));
    }

    #[test]
    fn outcome_messages_follow_result() {
        let store = store(USERS);

        assert_eq!(
            store.verify("alice", "Wonder1and").message(),
            LOGIN_SUCCESS_MESSAGE
        );
        assert_eq!(store.verify("alice", "nope").message(), LOGIN_FAILURE_MESSAGE);
    }
}
