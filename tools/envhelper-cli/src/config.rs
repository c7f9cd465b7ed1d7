//! Command-line configuration. Every option falls back to an `ENVHELPER_*`
//! environment variable.

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "envhelper", about = "Read typed environment variables")]
pub struct Cli {
    /// Format of diagnostic log lines
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text, env = "ENVHELPER_LOG_FORMAT")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Format of what the command prints on stdout.
    pub fn output_format(&self) -> Format {
        match &self.command {
            Command::Get(args) => args.format,
            Command::Demo => Format::Text,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Read one variable as the given type
    Get(GetArgs),
    /// Print PATH as string, char and double, then PATH2 as int
    Demo,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Name of the environment variable
    #[arg(env = "ENVHELPER_NAME")]
    pub name: String,

    /// Type to parse the value as
    #[arg(long = "type", value_enum, default_value_t = ValueKind::String, env = "ENVHELPER_TYPE")]
    pub kind: ValueKind,

    /// Value to use when the variable is unset or does not parse.
    /// Without it, both cases are errors.
    #[arg(long, env = "ENVHELPER_DEFAULT")]
    pub default: Option<String>,

    /// Suppress the "is set to" / "is not set" lines
    #[arg(long, env = "ENVHELPER_QUIET")]
    pub quiet: bool,

    /// Output format for the value
    #[arg(long, value_enum, default_value_t = Format::Text, env = "ENVHELPER_FORMAT")]
    pub format: Format,
}

/// Value types understood by `--type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    /// 32-bit signed integer
    Int,
    /// 64-bit signed integer
    Long,
    /// 32-bit unsigned integer
    Uint,
    /// 64-bit unsigned integer
    Ulong,
    /// 32-bit float
    Float,
    /// 64-bit float
    Double,
    /// First character of the value
    Char,
    /// Raw value
    String,
    /// `true` or `false`
    Bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Plain lines: informational on stdout, warnings and errors on stderr
    Text,
    /// One JSON object per event on stderr
    Json,
}

#[cfg(test)]
mod tests {
    use envhelper_testing::EnvGuard;

    use super::*;

    const FALLBACK_VARS: [&str; 6] = [
        "ENVHELPER_LOG_FORMAT",
        "ENVHELPER_NAME",
        "ENVHELPER_TYPE",
        "ENVHELPER_DEFAULT",
        "ENVHELPER_QUIET",
        "ENVHELPER_FORMAT",
    ];

    /// Guard with every fallback variable unset, so parsing sees only `args`.
    fn clean_env() -> EnvGuard {
        let mut guard = EnvGuard::new();
        for var in FALLBACK_VARS {
            guard.unset(var);
        }
        guard
    }

    fn get_args(cli: Cli) -> GetArgs {
        match cli.command {
            Command::Get(args) => args,
            Command::Demo => panic!("expected get"),
        }
    }

    #[test]
    fn should_parse_get_with_defaults() {
        let _env = clean_env();
        let cli = Cli::try_parse_from(["envhelper", "get", "PATH"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Text);
        let args = get_args(cli);
        assert_eq!(args.name, "PATH");
        assert_eq!(args.kind, ValueKind::String);
        assert_eq!(args.default, None);
        assert!(!args.quiet);
        assert_eq!(args.format, Format::Text);
    }

    #[test]
    fn should_parse_typed_get_with_default() {
        let _env = clean_env();
        let cli = Cli::try_parse_from([
            "envhelper", "get", "PATH2", "--type", "int", "--default", "123", "--quiet",
            "--format", "json",
        ])
        .unwrap();
        assert_eq!(cli.output_format(), Format::Json);
        let args = get_args(cli);
        assert_eq!(args.kind, ValueKind::Int);
        assert_eq!(args.default.as_deref(), Some("123"));
        assert!(args.quiet);
        assert_eq!(args.format, Format::Json);
    }

    #[test]
    fn should_fall_back_to_envhelper_variables() {
        let mut env = clean_env();
        env.set("ENVHELPER_NAME", "PATH2")
            .set("ENVHELPER_TYPE", "long")
            .set("ENVHELPER_DEFAULT", "123")
            .set("ENVHELPER_QUIET", "true")
            .set("ENVHELPER_FORMAT", "json")
            .set("ENVHELPER_LOG_FORMAT", "json");

        let cli = Cli::try_parse_from(["envhelper", "get"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);
        let args = get_args(cli);
        assert_eq!(args.name, "PATH2");
        assert_eq!(args.kind, ValueKind::Long);
        assert_eq!(args.default.as_deref(), Some("123"));
        assert!(args.quiet);
        assert_eq!(args.format, Format::Json);
    }

    #[test]
    fn should_prefer_arguments_over_envhelper_variables() {
        let mut env = clean_env();
        env.set("ENVHELPER_NAME", "PATH2").set("ENVHELPER_DEFAULT", "123");

        let args = get_args(Cli::try_parse_from(["envhelper", "get", "PORT", "--default", "1"]).unwrap());
        assert_eq!(args.name, "PORT");
        assert_eq!(args.default.as_deref(), Some("1"));
    }

    #[test]
    fn should_require_name_without_fallback() {
        let _env = clean_env();
        assert!(Cli::try_parse_from(["envhelper", "get"]).is_err());
    }

    #[test]
    fn should_reject_unknown_type() {
        let _env = clean_env();
        assert!(Cli::try_parse_from(["envhelper", "get", "X", "--type", "decimal"]).is_err());
    }

    #[test]
    fn should_parse_demo_with_log_format() {
        let _env = clean_env();
        let cli = Cli::try_parse_from(["envhelper", "demo", "--log-format", "json"]).unwrap();
        assert!(matches!(cli.command, Command::Demo));
        assert_eq!(cli.log_format, LogFormat::Json);
        assert_eq!(cli.output_format(), Format::Text);
    }
}
