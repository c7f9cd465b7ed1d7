//! Command dispatch, shared by `main` and tests.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use envhelper_core::EnvError;

use crate::config::{Cli, Command, Format, LogFormat};
use crate::demo;

/// Install the process-wide subscriber for `cli`.
///
/// Text logs put informational lines on stdout unless the command prints JSON
/// there, in which case every line goes to stderr.
pub fn init_logging(cli: &Cli) {
    match cli.log_format {
        LogFormat::Text => {
            envhelper_core::tracing::init_console(cli.output_format() == Format::Json)
        }
        LogFormat::Json => envhelper_core::tracing::init_json(),
    }
}

/// Run the parsed command, printing results to `out`.
///
/// A failed required lookup has already been logged, so it maps to
/// `ExitCode::FAILURE` instead of an error.
pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> Result<ExitCode> {
    match &cli.command {
        Command::Get(args) => match args.run() {
            Ok(report) => writeln!(out, "{}", report.render(args.format)?)?,
            Err(e) if e.downcast_ref::<EnvError>().is_some() => return Ok(ExitCode::FAILURE),
            Err(e) => return Err(e),
        },
        Command::Demo => {
            for line in demo::lines() {
                writeln!(out, "{line}")?;
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use envhelper_core::tracing::{ConsoleWriter, console_layer};
    use envhelper_testing::{EnvGuard, LogBuffer, unique_var_name};
    use tracing_subscriber::layer::SubscriberExt;

    use super::*;
    use crate::config::{GetArgs, ValueKind};

    fn get(name: &str, default: Option<&str>, format: Format) -> Cli {
        Cli {
            log_format: LogFormat::Text,
            command: Command::Get(GetArgs {
                name: name.to_owned(),
                kind: ValueKind::Int,
                default: default.map(str::to_owned),
                quiet: false,
                format,
            }),
        }
    }

    /// Run `cli` with the console routing `init_logging` picks for it.
    /// Returns the exit code with stdout and stderr contents.
    fn run(cli: &Cli) -> (ExitCode, String, String) {
        let (stderr, stdout) = (LogBuffer::new(), LogBuffer::new());
        let writer = ConsoleWriter::new(stderr.clone(), stdout.clone())
            .info_to_errors(cli.output_format() == Format::Json);
        let subscriber = tracing_subscriber::registry().with(console_layer(writer));
        let mut out = stdout.clone();
        let code = tracing::subscriber::with_default(subscriber, || execute(cli, &mut out)).unwrap();
        (code, stdout.contents(), stderr.contents())
    }

    #[test]
    fn should_print_only_json_on_stdout_in_json_format() {
        let name = unique_var_name("X");
        let mut guard = EnvGuard::new();
        guard.set(&name, "5");

        let (code, stdout, stderr) = run(&get(&name, Some("1"), Format::Json));

        assert_eq!(code, ExitCode::SUCCESS);
        let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": name, "type": "i32", "value": 5, "source": "env" })
        );
        assert_eq!(stderr, format!("{name} is set to: 5\n"));
    }

    #[test]
    fn should_print_log_line_then_value_in_text_format() {
        let name = unique_var_name("X");
        let mut guard = EnvGuard::new();
        guard.set(&name, "5");

        let (code, stdout, stderr) = run(&get(&name, Some("1"), Format::Text));

        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(stdout, format!("{name} is set to: 5\n5\n"));
        assert_eq!(stderr, "");
    }

    #[test]
    fn should_fail_without_printing_for_missing_required_variable() {
        let name = unique_var_name("X");

        let (code, stdout, stderr) = run(&get(&name, None, Format::Json));

        assert_eq!(code, ExitCode::FAILURE);
        assert_eq!(stdout, "");
        assert_eq!(
            stderr,
            format!("{name} is not set and no default value is provided.\n")
        );
    }

    #[test]
    fn should_return_error_for_invalid_default() {
        let name = unique_var_name("X");
        let cli = get(&name, Some("abc"), Format::Text);
        let mut out = Vec::new();
        assert!(execute(&cli, &mut out).is_err());
        assert!(out.is_empty());
    }
}
