//! Typed environment lookups.
//!
//! [`EnvHelper`] is the required form: an unset or unparsable variable is an
//! [`EnvError`]. [`EnvHelperWithDefault`] substitutes its default for every
//! failure and memoizes the first result for the rest of the process.

use std::borrow::Cow;
use std::env::VarError;
use std::marker::PhantomData;

use serde::Serialize;
use tracing::{error, info, warn};

use crate::cache::EnvCache;
use crate::env::{ReadEnv, SystemEnv};
use crate::error::{EnvError, ParseError};
use crate::value::EnvValue;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueSource {
    Env,
    Default,
}

/// A defaulted lookup's value together with its origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolved<T> {
    pub value: T,
    pub source: ValueSource,
}

enum Outcome<T> {
    Missing,
    Parsed { raw: String, value: T },
    Invalid { raw: String, source: ParseError },
}

impl<T> Outcome<T> {
    fn raw(&self) -> Option<&str> {
        match self {
            Self::Missing => None,
            Self::Parsed { raw, .. } | Self::Invalid { raw, .. } => Some(raw),
        }
    }
}

fn read<T: EnvValue, E: ReadEnv + ?Sized>(env: &E, name: &str) -> Outcome<T> {
    match env.var(name) {
        Err(VarError::NotPresent) => Outcome::Missing,
        Err(VarError::NotUnicode(os)) => Outcome::Invalid {
            raw: os.to_string_lossy().into_owned(),
            source: Box::new(VarError::NotUnicode(os)),
        },
        Ok(raw) => match T::parse_env(&raw) {
            Ok(value) => Outcome::Parsed { raw, value },
            Err(source) => Outcome::Invalid { raw, source },
        },
    }
}

/// Required lookup of `name` as `T`.
///
/// Not memoized: every [`get`](Self::get) reads the environment again.
#[derive(Debug, Clone)]
pub struct EnvHelper<T> {
    name: Cow<'static, str>,
    verbose: bool,
    _value: PhantomData<fn() -> T>,
}

impl<T: EnvValue> EnvHelper<T> {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            verbose: true,
            _value: PhantomData,
        }
    }

    /// Suppress the informational "is set to" line. Errors are still logged.
    pub fn quiet(mut self) -> Self {
        self.verbose = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read from the process environment.
    pub fn get(&self) -> Result<T, EnvError> {
        self.get_from(&SystemEnv)
    }

    pub fn get_from<E: ReadEnv + ?Sized>(&self, env: &E) -> Result<T, EnvError> {
        let name = self.name();
        let outcome = read::<T, E>(env, name);
        if let (true, Some(raw)) = (self.verbose, outcome.raw()) {
            info!("{name} is set to: {raw}");
        }
        match outcome {
            Outcome::Missing => {
                error!("{name} is not set and no default value is provided.");
                Err(EnvError::MissingVariable {
                    name: name.to_owned(),
                })
            }
            Outcome::Parsed { value, .. } => Ok(value),
            Outcome::Invalid { raw, source } => {
                error!("[EnvHelperNoDefault] {name} conversion failed: (env='{raw}')");
                error!("{source}");
                Err(EnvError::InvalidFormat {
                    name: name.to_owned(),
                    raw,
                    source,
                })
            }
        }
    }
}

/// Lookup of `name` as `T` that falls back to `default` when the variable is
/// unset or does not parse.
#[derive(Debug, Clone)]
pub struct EnvHelperWithDefault<T> {
    name: Cow<'static, str>,
    default: T,
    verbose: bool,
}

impl<T: EnvValue> EnvHelperWithDefault<T> {
    pub fn new(name: impl Into<Cow<'static, str>>, default: T) -> Self {
        Self {
            name: name.into(),
            default,
            verbose: true,
        }
    }

    /// Suppress the "is set to" and "is not set" lines. Conversion failures
    /// are still logged.
    pub fn quiet(mut self) -> Self {
        self.verbose = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Value from the process environment, memoized in [`EnvCache::global`].
    pub fn get(&self) -> T {
        self.get_resolved().value
    }

    pub fn get_resolved(&self) -> Resolved<T> {
        self.resolve_cached(&SystemEnv, EnvCache::global())
    }

    /// Value from `env`, memoized in `cache`.
    pub fn get_from<E: ReadEnv + ?Sized>(&self, env: &E, cache: &EnvCache) -> T {
        self.resolve_cached(env, cache).value
    }

    pub fn resolve_cached<E: ReadEnv + ?Sized>(&self, env: &E, cache: &EnvCache) -> Resolved<T> {
        cache.get_or_init(self.name(), &self.default.to_string(), || {
            self.resolve(env)
        })
    }

    /// Evaluate once without touching any cache.
    pub fn resolve<E: ReadEnv + ?Sized>(&self, env: &E) -> Resolved<T> {
        let name = self.name();
        let default = &self.default;
        let outcome = read::<T, E>(env, name);
        if let (true, Some(raw)) = (self.verbose, outcome.raw()) {
            info!("{name} is set to: {raw}");
        }
        match outcome {
            Outcome::Missing => {
                if self.verbose {
                    info!("{name} is not set, using default: {default}");
                }
                self.fallback()
            }
            Outcome::Parsed { value, .. } => Resolved {
                value,
                source: ValueSource::Env,
            },
            Outcome::Invalid { raw, source } => {
                warn!(
                    "[EnvHelper] {name} conversion failed: (env='{raw}'), using default value: {default}"
                );
                warn!("{source}");
                self.fallback()
            }
        }
    }

    fn fallback(&self) -> Resolved<T> {
        Resolved {
            value: self.default.clone(),
            source: ValueSource::Default,
        }
    }
}
