//! Test utilities for envhelper.
//!
//! Provides `EnvGuard` for scoped changes to the real process environment,
//! `unique_var_name` for collision-free variable names, and `LogBuffer` for
//! capturing formatted log output.
//! Import in tests only, never in production code.

pub mod capture;
pub mod guard;
pub mod name;

pub use capture::LogBuffer;
pub use guard::EnvGuard;
pub use name::unique_var_name;
