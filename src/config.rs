//! Classification tables as loadable configuration.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::category::{ClauseTable, Classifier, Tier, TierTable};
use crate::errors::ConfigError;

/// Code lists for the four-tier tree scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCodes {
    pub terminator: Vec<String>,
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    pub tertiary: Vec<String>,
}

/// Code lists for the two-tier clause scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseCodes {
    pub terminator: Vec<String>,
    pub continuer: Vec<String>,
}

/// Both schemes, as read from TOML.
///
/// ```toml
/// [tiers]
/// terminator = ["00", "92"]
/// primary = ["01", "65"]
/// secondary = ["02"]
/// tertiary = ["14"]
///
/// [clauses]
/// terminator = ["00", "92"]
/// continuer = ["01", "65"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeConfig {
    pub tiers: TierCodes,
    pub clauses: ClauseCodes,
}

fn codes(list: &[&str]) -> Vec<String> {
    list.iter().map(|code| code.to_string()).collect()
}

impl Default for SchemeConfig {
    /// The tables used for the Torah cantillation corpus.
    fn default() -> Self {
        SchemeConfig {
            tiers: TierCodes {
                terminator: codes(&["00", "92"]),
                primary: codes(&["01", "65", "73", "80", "85"]),
                secondary: codes(&["02", "03", "10", "88", "91"]),
                tertiary: codes(&["14", "61", "62", "83", "84", "98"]),
            },
            clauses: ClauseCodes {
                terminator: codes(&["00", "92"]),
                continuer: codes(&["01", "65", "73", "80", "85"]),
            },
        }
    }
}

impl SchemeConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SchemeConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse { message: e.to_string() })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Reject codes that are blank or listed twice within one scheme.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_scheme(
            "tiers",
            [
                &self.tiers.terminator,
                &self.tiers.primary,
                &self.tiers.secondary,
                &self.tiers.tertiary,
            ],
        )?;
        check_scheme("clauses", [&self.clauses.terminator, &self.clauses.continuer])
    }

    pub fn into_classifier(self) -> Result<Classifier, ConfigError> {
        self.validate()?;
        Ok(self.into_classifier_unchecked())
    }

    pub(crate) fn into_classifier_unchecked(self) -> Classifier {
        let tiers = TierTable::from_tiers([
            (Tier::Terminator, self.tiers.terminator.as_slice()),
            (Tier::Primary, self.tiers.primary.as_slice()),
            (Tier::Secondary, self.tiers.secondary.as_slice()),
            (Tier::Tertiary, self.tiers.tertiary.as_slice()),
        ]);
        let clauses = ClauseTable::new(&self.clauses.terminator, &self.clauses.continuer);
        Classifier::new(tiers, clauses)
    }
}

fn check_scheme<const N: usize>(scheme: &'static str, lists: [&Vec<String>; N]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for code in lists.iter().flat_map(|list| list.iter()) {
        let code = code.trim();
        if code.is_empty() {
            return Err(ConfigError::BlankCode { scheme });
        }
        if !seen.insert(code) {
            return Err(ConfigError::DuplicateCode {
                scheme,
                code: code.to_string(),
            });
        }
    }
    Ok(())
}

impl Classifier {
    /// Build a classifier from a TOML scheme description.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        SchemeConfig::from_toml_str(content).map(SchemeConfig::into_classifier_unchecked)
    }

    /// Build a classifier from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        SchemeConfig::load(path).map(SchemeConfig::into_classifier_unchecked)
    }
}
