use clap::ValueEnum;

/// How command results are written to stdout.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Human-readable table.
    Table,
    /// Compact single-line JSON.
    Raw,
}

/// Flags accepted before or after any subcommand.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub limit: Option<u32>,
    pub quiet: bool,
    pub verbose: bool,
}

impl GlobalFlags {
    /// Tracing directive used when `FAQDESK_LOG` is unset. `--quiet` wins
    /// over `--verbose`.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }

    /// `--limit` as a row count, if given.
    #[must_use]
    pub fn row_limit(&self) -> Option<usize> {
        self.limit.map(|limit| usize::try_from(limit).unwrap_or(usize::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn flags(quiet: bool, verbose: bool) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            quiet,
            verbose,
        }
    }

    #[test]
    fn log_level_follows_flags() {
        assert_eq!(flags(false, false).log_level(), "warn");
        assert_eq!(flags(false, true).log_level(), "debug");
        assert_eq!(flags(true, true).log_level(), "error");
    }

    #[test]
    fn row_limit_converts_limit() {
        let mut flags = flags(false, false);
        assert_eq!(flags.row_limit(), None);
        flags.limit = Some(3);
        assert_eq!(flags.row_limit(), Some(3));
    }
}
