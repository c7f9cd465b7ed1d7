use std::error::Error as StdError;

/// Boxed parse failure carried by [`EnvError::InvalidFormat`].
pub type ParseError = Box<dyn StdError + Send + Sync + 'static>;

/// Failure of a required environment lookup.
///
/// Defaulted lookups never return this; they log it and fall back instead.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error("{name} is not set and no default value is provided.")]
    MissingVariable { name: String },
    #[error("{name} conversion failed: (env='{raw}')")]
    InvalidFormat {
        name: String,
        raw: String,
        #[source]
        source: ParseError,
    },
}

impl EnvError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingVariable { .. } => "MISSING_VARIABLE",
            Self::InvalidFormat { .. } => "INVALID_FORMAT",
        }
    }

    /// Name of the variable the lookup was for.
    pub fn name(&self) -> &str {
        match self {
            Self::MissingVariable { name } | Self::InvalidFormat { name, .. } => name,
        }
    }

    /// Raw text that failed to parse, if the variable was set.
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::MissingVariable { .. } => None,
            Self::InvalidFormat { raw, .. } => Some(raw),
        }
    }
}
