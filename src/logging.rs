//! Diagnostic logging to stderr.
//!
//! Verbosity flags pick the default level; `RUST_LOG` takes precedence when set.

use tracing_subscriber::EnvFilter;

/// Level directive for the given `-v` count and `--quiet` flag.
#[must_use]
pub const fn level_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(verbose, quiet)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(level_directive(3, true), "error");
    }

    #[test]
    fn each_flag_raises_the_level() {
        assert_eq!(level_directive(0, false), "warn");
        assert_eq!(level_directive(1, false), "info");
        assert_eq!(level_directive(2, false), "debug");
        assert_eq!(level_directive(9, false), "trace");
    }

    #[test]
    fn init_twice_is_harmless() {
        init(0, true);
        init(2, false);
    }
}
