//! Typed, memoized access to environment variables.
//!
//! ```
//! use envhelper_core::{EnvHelper, EnvHelperWithDefault, MapEnv};
//!
//! let env = MapEnv::new().with("PATH", "/usr/bin");
//! let first = EnvHelperWithDefault::new("PATH", 'a').quiet().resolve(&env).value;
//! assert_eq!(first, '/');
//!
//! let missing = EnvHelper::<i32>::new("PATH2").get_from(&env);
//! assert_eq!(missing.unwrap_err().kind(), "MISSING_VARIABLE");
//! ```

pub mod cache;
pub mod env;
pub mod error;
pub mod lookup;
mod macros;
pub mod tracing;
pub mod value;

pub use cache::EnvCache;
pub use env::{MapEnv, ReadEnv, SystemEnv};
pub use error::EnvError;
pub use lookup::{EnvHelper, EnvHelperWithDefault, Resolved, ValueSource};
pub use value::EnvValue;
