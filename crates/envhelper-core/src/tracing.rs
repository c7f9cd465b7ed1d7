//! Subscriber setup for the diagnostic lines emitted by lookups.

// Module name shadows the `tracing` crate; use `::tracing` for the external crate.
use ::tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::EitherWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Routes formatted events by level: warnings and errors to `errors`,
/// everything else to `info`, or to `errors` as well once
/// [`info_to_errors`](Self::info_to_errors) is set.
#[derive(Debug, Clone)]
pub struct ConsoleWriter<E, O> {
    errors: E,
    info: O,
    info_to_errors: bool,
}

impl<E, O> ConsoleWriter<E, O> {
    pub fn new(errors: E, info: O) -> Self {
        Self {
            errors,
            info,
            info_to_errors: false,
        }
    }

    /// Keep `info` free of log lines, e.g. when it carries machine-readable output.
    pub fn info_to_errors(mut self, enabled: bool) -> Self {
        self.info_to_errors = enabled;
        self
    }
}

impl<'a, E, O> MakeWriter<'a> for ConsoleWriter<E, O>
where
    E: MakeWriter<'a>,
    O: MakeWriter<'a>,
{
    type Writer = EitherWriter<E::Writer, O::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        if self.info_to_errors {
            EitherWriter::A(self.errors.make_writer())
        } else {
            EitherWriter::B(self.info.make_writer())
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        if self.info_to_errors || *meta.level() <= Level::WARN {
            EitherWriter::A(self.errors.make_writer_for(meta))
        } else {
            EitherWriter::B(self.info.make_writer_for(meta))
        }
    }
}

/// Plain-text layer that prints each event's message and nothing else: no
/// timestamp, level, target, or ANSI styling.
pub fn console_layer<S, E, O>(writer: ConsoleWriter<E, O>) -> impl Layer<S> + Send + Sync
where
    S: Subscriber + for<'span> LookupSpan<'span>,
    E: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    O: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::layer::<S>()
        .with_writer(writer)
        .with_ansi(false)
        .without_time()
        .with_level(false)
        .with_target(false)
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize plain console output on stdout/stderr. With `info_to_stderr`
/// every line goes to stderr. Defaults to `info` when `RUST_LOG` is unset.
///
/// Safe to call multiple times; subsequent calls are silently ignored.
pub fn init_console(info_to_stderr: bool) {
    let writer = ConsoleWriter::new(std::io::stderr, std::io::stdout).info_to_errors(info_to_stderr);
    let _ = tracing_subscriber::registry()
        .with(default_filter())
        .with(console_layer(writer))
        .try_init();
}

/// Initialize structured JSON output on stderr, one object per event.
///
/// Safe to call multiple times; subsequent calls are silently ignored.
pub fn init_json() {
    let _ = tracing_subscriber::registry()
        .with(default_filter())
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .try_init();
}
