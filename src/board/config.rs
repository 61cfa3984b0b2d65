//! Board configuration: the fixed column set and the form chrome texts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::domain::{BoardDomainError, ColumnKey};

/// Errors returned while building a board configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration lists no columns.
    #[error("board configuration must define at least one column")]
    NoColumns,

    /// Two columns share a key.
    #[error("duplicate column key: {0}")]
    DuplicateColumn(ColumnKey),

    /// A column key failed validation.
    #[error(transparent)]
    InvalidColumn(#[from] BoardDomainError),

    /// The configuration document could not be parsed.
    #[error("invalid board configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One board column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Category key stored on tasks.
    pub key: ColumnKey,
    /// Column heading.
    pub title: String,
}

impl ColumnConfig {
    /// Creates a column definition.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidColumnKey`] for an invalid key.
    pub fn new(key: &str, title: impl Into<String>) -> Result<Self, BoardDomainError> {
        Ok(Self {
            key: ColumnKey::new(key)?,
            title: title.into(),
        })
    }
}

/// Texts shown by the modal in each mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormLabels {
    /// Heading in create mode.
    pub create_heading: String,
    /// Submit label in create mode.
    pub create_submit: String,
    /// Heading in edit mode.
    pub edit_heading: String,
    /// Submit label in edit mode.
    pub edit_submit: String,
}

impl Default for FormLabels {
    fn default() -> Self {
        Self {
            create_heading: "Add Task".to_owned(),
            create_submit: "Add Task".to_owned(),
            edit_heading: "Edit Task".to_owned(),
            edit_submit: "Update Task".to_owned(),
        }
    }
}

/// Board configuration.
///
/// # Examples
///
/// ```
/// use taskboard::board::BoardConfig;
///
/// let config = BoardConfig::from_json(
///     r#"{"columns": [{"key": "todo", "title": "To Do"}, {"key": "done", "title": "Done"}]}"#,
/// )
/// .expect("valid configuration");
/// assert!(config.find_column("done").is_some());
/// assert!(config.find_column("review").is_none());
/// assert_eq!(config.labels().edit_submit, "Update Task");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    columns: Vec<ColumnConfig>,
    #[serde(default)]
    labels: FormLabels,
}

impl BoardConfig {
    /// Creates a configuration with default labels.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoColumns`] or [`ConfigError::DuplicateColumn`].
    pub fn new(columns: Vec<ColumnConfig>) -> Result<Self, ConfigError> {
        Self {
            columns,
            labels: FormLabels::default(),
        }
        .validated()
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed documents and the
    /// validation errors of [`BoardConfig::new`].
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(document)?;
        config.validated()
    }

    /// Replaces the form labels.
    #[must_use]
    pub fn with_labels(mut self, labels: FormLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnConfig] {
        &self.columns
    }

    /// Iterates over the column keys in display order.
    pub fn column_keys(&self) -> impl Iterator<Item = &ColumnKey> {
        self.columns.iter().map(|column| &column.key)
    }

    /// Resolves a raw category string to a configured column.
    #[must_use]
    pub fn find_column(&self, raw: &str) -> Option<&ColumnKey> {
        let wanted = raw.trim();
        self.column_keys().find(|key| key.as_str() == wanted)
    }

    /// Returns `true` when `key` names a configured column.
    #[must_use]
    pub fn has_column(&self, key: &ColumnKey) -> bool {
        self.column_keys().any(|known| known == key)
    }

    /// Returns the form labels.
    #[must_use]
    pub const fn labels(&self) -> &FormLabels {
        &self.labels
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.columns.is_empty() {
            return Err(ConfigError::NoColumns);
        }
        for (index, column) in self.columns.iter().enumerate() {
            let seen_before = self
                .columns
                .iter()
                .take(index)
                .any(|earlier| earlier.key == column.key);
            if seen_before {
                return Err(ConfigError::DuplicateColumn(column.key.clone()));
            }
        }
        Ok(self)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        let columns = [("todo", "To Do"), ("inprogress", "In Progress"), ("done", "Done")]
            .into_iter()
            .filter_map(|(key, title)| ColumnConfig::new(key, title).ok())
            .collect();
        Self {
            columns,
            labels: FormLabels::default(),
        }
    }
}
