//! `get` subcommand.

use anyhow::{Context, Result};
use envhelper_core::{
    EnvCache, EnvHelper, EnvHelperWithDefault, EnvValue, ReadEnv, SystemEnv, ValueSource,
};
use serde::Serialize;

use crate::config::{GetArgs, ValueKind};
use crate::report::Report;

impl GetArgs {
    /// Look the variable up in the process environment.
    ///
    /// With `--default` the lookup never fails and is memoized process-wide;
    /// without it, an unset or unparsable variable surfaces as
    /// [`envhelper_core::EnvError`].
    pub fn run(&self) -> Result<Report> {
        self.run_with(&SystemEnv, Some(EnvCache::global()))
    }

    /// Look the variable up in `env`. Defaulted lookups go through `cache`
    /// when one is given.
    pub fn run_with<E: ReadEnv>(&self, env: &E, cache: Option<&EnvCache>) -> Result<Report> {
        match self.kind {
            ValueKind::Int => self.lookup::<i32, E>(env, cache),
            ValueKind::Long => self.lookup::<i64, E>(env, cache),
            ValueKind::Uint => self.lookup::<u32, E>(env, cache),
            ValueKind::Ulong => self.lookup::<u64, E>(env, cache),
            ValueKind::Float => self.lookup::<f32, E>(env, cache),
            ValueKind::Double => self.lookup::<f64, E>(env, cache),
            ValueKind::Char => self.lookup::<char, E>(env, cache),
            ValueKind::String => self.lookup::<String, E>(env, cache),
            ValueKind::Bool => self.lookup::<bool, E>(env, cache),
        }
    }

    fn lookup<T, E>(&self, env: &E, cache: Option<&EnvCache>) -> Result<Report>
    where
        T: EnvValue + Serialize,
        E: ReadEnv,
    {
        let Some(raw) = &self.default else {
            let mut helper = EnvHelper::<T>::new(self.name.clone());
            if self.quiet {
                helper = helper.quiet();
            }
            let value = helper.get_from(env)?;
            return self.report(value, ValueSource::Env);
        };

        let default = T::parse_env(raw)
            .map_err(|e| anyhow::anyhow!("--default '{raw}' is not a valid {}: {e}", T::TYPE_NAME))?;
        let mut helper = EnvHelperWithDefault::new(self.name.clone(), default);
        if self.quiet {
            helper = helper.quiet();
        }
        let resolved = match cache {
            Some(cache) => helper.resolve_cached(env, cache),
            None => helper.resolve(env),
        };
        self.report(resolved.value, resolved.source)
    }

    fn report<T: EnvValue + Serialize>(&self, value: T, source: ValueSource) -> Result<Report> {
        Ok(Report {
            name: self.name.clone(),
            type_name: T::TYPE_NAME,
            text: value.to_string(),
            value: serde_json::to_value(&value)
                .with_context(|| format!("failed to encode {} as JSON", self.name))?,
            source,
        })
    }
}
