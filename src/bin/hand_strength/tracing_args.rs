//! Logging setup for the `hand_strength` binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log flags shared by every `hand_strength` invocation.
///
/// Only warnings reach stderr unless asked for more; the report on stdout
/// is never affected.
#[derive(clap::Args, Debug, Clone)]
pub struct TracingArgs {
    /// Log the player's rank and the final tally (-v) or every opponent holding (-vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Keep stderr to warnings only, even when -v is given
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// How log lines on stderr are laid out
    #[arg(long = "log-format", default_value = "compact", global = true)]
    pub log_format: LogFormat,
}

/// Layouts for the log lines.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// One line per event
    #[default]
    Compact,
    /// Several lines per event with the span fields spelled out
    Pretty,
    /// One JSON object per event
    Json,
}

impl TracingArgs {
    /// Install the global subscriber for this run.
    ///
    /// `RUST_LOG`, when set, picks the filter. Otherwise it's `warn`, or
    /// `debug` with `-v` and `trace` with `-vv` unless `-q` is given.
    ///
    /// # Panics
    ///
    /// Panics if the subscriber has already been set.
    pub fn init_tracing(&self) {
        let filter = match std::env::var("RUST_LOG") {
            Ok(_) => EnvFilter::from_default_env(),
            Err(_) => EnvFilter::new(self.level()),
        };

        let layer = fmt::layer().with_writer(std::io::stderr);
        match self.log_format {
            LogFormat::Compact => {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.compact())
                    .init();
            }
            LogFormat::Pretty => {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.pretty())
                    .init();
            }
            LogFormat::Json => {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.json())
                    .init();
            }
        }
    }

    /// Filter level when `RUST_LOG` isn't set.
    fn level(&self) -> &'static str {
        match (self.quiet, self.verbosity) {
            (true, _) | (false, 0) => "warn",
            (false, 1) => "debug",
            (false, _) => "trace",
        }
    }
}
