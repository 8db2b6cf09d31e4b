//! Outfit recommendations over two CSV tables: a users table consulted at
//! sign-in and an outfit catalog filtered by body and style preferences.

pub mod accounts;
pub mod advisor;
pub mod catalog;
pub mod config;
pub mod error;
pub mod router;
pub mod source;
pub mod telemetry;

pub use accounts::{AuthOutcome, CredentialStore, CredentialTable};
pub use advisor::StyleAdvisor;
pub use catalog::{
    InvalidInput, MatchOutcome, OutfitMatcher, OutfitRecord, OutfitTable, PreferenceForm,
    PreferenceQuery, RejectedRow, SUPPORTED_THEMES,
};
pub use router::style_router;
pub use source::{DataUnavailable, TableSource};
