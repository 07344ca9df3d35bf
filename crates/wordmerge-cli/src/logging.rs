use stderrlog::{LogLevelNum, Timestamp};

/// Logging setup arg group.
///
/// Each command picks its own base level; every ``-v`` raises it one step,
/// ``-q`` silences everything.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[arg(short, long)]
    pub quiet: bool,

    /// Raise the log level one step per flag (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Prefix log lines with a timestamp.
    #[arg(long)]
    pub ts: bool,
}

impl LogArgs {
    /// The effective ``0 (off) ..= 5 (trace)`` level over a command base level.
    pub fn level(
        &self,
        base: u8,
    ) -> u8 {
        if self.quiet {
            0
        } else {
            base.saturating_add(self.verbose).min(5)
        }
    }

    /// Install the ``stderrlog`` logger.
    pub fn setup_logging(
        &self,
        base: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let verbosity = match self.level(base) {
            0 => LogLevelNum::Off,
            1 => LogLevelNum::Error,
            2 => LogLevelNum::Warn,
            3 => LogLevelNum::Info,
            4 => LogLevelNum::Debug,
            _ => LogLevelNum::Trace,
        };
        let timestamp = if self.ts {
            Timestamp::Second
        } else {
            Timestamp::Off
        };

        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(verbosity)
            .timestamp(timestamp)
            .init()?;
        Ok(())
    }
}
