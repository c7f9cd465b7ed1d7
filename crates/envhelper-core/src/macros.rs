//! Accessors whose variable name and default are fixed at compile time.

/// Declare accessor functions bound to an environment variable.
///
/// `-> T = "NAME" or DEFAULT` declares a defaulted accessor. Each one owns a
/// `OnceLock` slot, so the variable is read at most once per process.
///
/// `-> Result<T> = "NAME"` declares a required accessor returning
/// `Result<T, EnvError>`. It reads the environment on every call.
///
/// A trailing `, quiet` suppresses the informational lines.
///
/// ```
/// envhelper_core::env_helper! {
///     /// TCP port to listen on.
///     pub fn listen_port() -> u16 = "LISTEN_PORT" or 3112;
///     fn separator() -> char = "FIELD_SEPARATOR" or ',', quiet;
///     pub fn database_url() -> Result<String> = "DATABASE_URL";
/// }
///
/// assert_eq!(separator(), separator());
/// let _ = listen_port();
/// let _ = database_url();
/// ```
#[macro_export]
macro_rules! env_helper {
    () => {};
    (
        $(#[$meta:meta])*
        $vis:vis fn $fn_name:ident() -> Result<$ty:ty> = $name:literal $(, $opt:ident)?;
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        $vis fn $fn_name() -> ::std::result::Result<$ty, $crate::EnvError> {
            let helper = $crate::EnvHelper::<$ty>::new($name);
            $(let helper = helper.$opt();)?
            helper.get()
        }

        $crate::env_helper!($($rest)*);
    };
    (
        $(#[$meta:meta])*
        $vis:vis fn $fn_name:ident() -> $ty:ty = $name:literal or $default:expr $(, $opt:ident)?;
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        $vis fn $fn_name() -> $ty {
            static SLOT: ::std::sync::OnceLock<$ty> = ::std::sync::OnceLock::new();
            SLOT.get_or_init(|| {
                let helper = $crate::EnvHelperWithDefault::<$ty>::new($name, $default);
                $(let helper = helper.$opt();)?
                helper.resolve(&$crate::SystemEnv).value
            })
            .clone()
        }

        $crate::env_helper!($($rest)*);
    };
}
