//! API credentials for the two remote endpoints.
//!
//! Both keys are secrets and must come from the environment (or another
//! secret store feeding `ApiKeys::new`), never from source. Presence is
//! checked up front so a misconfigured process fails before any remote call.

use std::fmt;

use thiserror::Error;

/// Environment variable holding the vatlayer access key.
pub const VATLAYER_KEY_VAR: &str = "VATBILL_VATLAYER_KEY";
/// Environment variable holding the pdflayer access key.
pub const PDFLAYER_KEY_VAR: &str = "VATBILL_PDFLAYER_KEY";

/// Credential configuration errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The environment variable is not set.
    #[error("missing credential: {0} is not set")]
    Missing(&'static str),

    /// The credential value is empty or whitespace.
    #[error("empty credential: {0} is set but blank")]
    Empty(&'static str),
}

/// Access keys for the vatlayer and pdflayer endpoints.
#[derive(Clone)]
pub struct ApiKeys {
    pub vatlayer: String,
    pub pdflayer: String,
}

impl ApiKeys {
    /// Build from explicit values, rejecting blank keys.
    pub fn new(
        vatlayer: impl Into<String>,
        pdflayer: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let vatlayer = vatlayer.into();
        let pdflayer = pdflayer.into();
        if vatlayer.trim().is_empty() {
            return Err(ConfigError::Empty(VATLAYER_KEY_VAR));
        }
        if pdflayer.trim().is_empty() {
            return Err(ConfigError::Empty(PDFLAYER_KEY_VAR));
        }
        Ok(Self { vatlayer, pdflayer })
    }

    /// Load both keys from the environment.
    ///
    /// # Errors
    ///
    /// `ConfigError::Missing` if a variable is unset, `ConfigError::Empty`
    /// if it is set but blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let vatlayer =
            std::env::var(VATLAYER_KEY_VAR).map_err(|_| ConfigError::Missing(VATLAYER_KEY_VAR))?;
        let pdflayer =
            std::env::var(PDFLAYER_KEY_VAR).map_err(|_| ConfigError::Missing(PDFLAYER_KEY_VAR))?;
        Self::new(vatlayer, pdflayer)
    }
}

// Keys are secrets; keep them out of debug output and logs.
impl fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeys")
            .field("vatlayer", &"<redacted>")
            .field("pdflayer", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_empty_keys() {
        let keys = ApiKeys::new("abc123", "def456").unwrap();
        assert_eq!(keys.vatlayer, "abc123");
        assert_eq!(keys.pdflayer, "def456");
    }

    #[test]
    fn rejects_empty_vatlayer_key() {
        assert!(matches!(
            ApiKeys::new("", "def456"),
            Err(ConfigError::Empty(VATLAYER_KEY_VAR))
        ));
    }

    #[test]
    fn rejects_whitespace_pdflayer_key() {
        assert!(matches!(
            ApiKeys::new("abc123", "   "),
            Err(ConfigError::Empty(PDFLAYER_KEY_VAR))
        ));
    }

    #[test]
    fn debug_output_redacts_keys() {
        let keys = ApiKeys::new("topsecret", "alsosecret").unwrap();
        let debug = format!("{keys:?}");
        assert!(!debug.contains("topsecret"));
        assert!(!debug.contains("alsosecret"));
    }
}
