//! Data-bag fields whose string values are title-cased in detail lines.

use std::collections::BTreeSet;
use std::sync::{LazyLock, OnceLock};

use thiserror::Error;

/// Errors raised while configuring the allow-list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A process-wide allow-list was already installed.
    #[error("title-case fields are already installed for this process")]
    AlreadyInstalled,

    /// Field names must contain at least one non-blank character.
    #[error("title-case field name must not be blank")]
    BlankFieldName,
}

/// Case-insensitive set of field names (e.g. `environment`, `feature`).
///
/// Read-only once in use. Pass one explicitly to a
/// [`crate::DetailDeriver`], or [`install`](TitleCaseFields::install) one at
/// startup to replace the built-in set for the whole process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleCaseFields {
    names: BTreeSet<String>,
}

static BUILTIN: LazyLock<TitleCaseFields> = LazyLock::new(TitleCaseFields::builtin);
static INSTALLED: OnceLock<TitleCaseFields> = OnceLock::new();

impl TitleCaseFields {
    pub const DEFAULT_FIELDS: [&'static str; 3] = ["environment", "entityEnvironment", "feature"];

    /// Comma-separated extra field names, appended to the defaults.
    pub const ENV_VAR: &'static str = "COVERLINE_TITLE_CASE_FIELDS";

    pub fn empty() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    pub fn builtin() -> Self {
        Self {
            names: Self::DEFAULT_FIELDS.iter().map(|n| fold(n)).collect(),
        }
    }

    pub fn with_field(mut self, name: impl AsRef<str>) -> Result<Self, ConfigError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ConfigError::BlankFieldName);
        }
        self.names.insert(fold(name));
        Ok(self)
    }

    /// Defaults plus every non-blank entry of a comma-separated list.
    pub fn builtin_extended_with(list: &str) -> Self {
        let mut fields = Self::builtin();
        for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            fields.names.insert(fold(name));
        }
        fields
    }

    /// Defaults extended with [`Self::ENV_VAR`], if set.
    pub fn from_env() -> Self {
        match std::env::var(Self::ENV_VAR) {
            Ok(list) => Self::builtin_extended_with(&list),
            Err(std::env::VarError::NotPresent) => Self::builtin(),
            Err(err) => {
                tracing::warn!(
                    var = Self::ENV_VAR,
                    error = %err,
                    "ignoring unreadable title-case field list; using defaults"
                );
                Self::builtin()
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.names.contains(&fold(key))
    }

    /// Field names in folded (lowercase) form.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Make this set the process-wide one. Only the first call succeeds.
    pub fn install(self) -> Result<(), ConfigError> {
        let count = self.len();
        INSTALLED
            .set(self)
            .map_err(|_| ConfigError::AlreadyInstalled)?;
        tracing::debug!(fields = count, "installed process-wide title-case fields");
        Ok(())
    }

    /// The installed set, or the built-in defaults.
    pub fn global() -> &'static TitleCaseFields {
        INSTALLED.get().unwrap_or(&*BUILTIN)
    }
}

impl Default for TitleCaseFields {
    fn default() -> Self {
        Self::builtin()
    }
}

fn fold(name: &str) -> String {
    name.to_lowercase()
}
