//! Collision-free variable names.

use uuid::Uuid;

/// Build an upper-case variable name `<PREFIX>_<uuid>` that no other test uses.
///
/// Memoized lookups are process-wide, so tests sharing a name would observe
/// each other's cached values.
pub fn unique_var_name(prefix: &str) -> String {
    format!("{prefix}_{}", Uuid::new_v4().simple()).to_uppercase()
}
