use crate::accounts::{AuthOutcome, CredentialStore};
use crate::catalog::{MatchOutcome, OutfitMatcher, PreferenceForm};
use crate::config::DataConfig;
use crate::source::TableSource;

/// Caller-side composition of the two independent lookups. Holds no
/// session or user state between calls.
#[derive(Debug, Clone)]
pub struct StyleAdvisor {
    credentials: CredentialStore,
    outfits: OutfitMatcher,
}

impl StyleAdvisor {
    pub fn new(credentials: CredentialStore, outfits: OutfitMatcher) -> Self {
        Self {
            credentials,
            outfits,
        }
    }

    pub fn from_config(config: &DataConfig) -> Self {
        Self::new(
            CredentialStore::new(TableSource::file(&config.users_csv)),
            OutfitMatcher::new(TableSource::file(&config.outfits_csv)),
        )
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    pub fn outfits(&self) -> &OutfitMatcher {
        &self.outfits
    }

    pub fn sign_in(&self, username: &str, password: &str) -> AuthOutcome {
        self.credentials.verify(username, password)
    }

    pub fn recommend(&self, form: &PreferenceForm) -> MatchOutcome {
        self.outfits.filter(form)
    }
}
