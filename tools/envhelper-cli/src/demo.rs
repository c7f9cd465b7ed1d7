//! `demo` subcommand: one variable read through several types.

envhelper_core::env_helper! {
    fn path_text() -> String = "PATH" or "teee".to_owned(), quiet;
    fn path_char() -> char = "PATH" or 'a', quiet;
    fn path_double() -> f64 = "PATH" or 123.4, quiet;
    fn path2_int() -> i32 = "PATH2" or 123, quiet;
}

/// Output lines of the demo, in order.
pub fn lines() -> Vec<String> {
    vec![
        path_text(),
        path_char().to_string(),
        path_double().to_string(),
        path2_int().to_string(),
    ]
}
