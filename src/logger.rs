use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// `patterns` is the runner binary's own target.
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "design_patterns=debug,patterns=debug"
    } else {
        "design_patterns=warn,patterns=warn"
    }
}

/// Install the stderr logger. `RUST_LOG` wins over `verbose` when set.
///
/// Demo transcripts go to stdout, so log lines must never share that stream.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    // A second init (tests, repeated calls) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_parse() {
        for verbose in [false, true] {
            let directives = default_directives(verbose);
            assert!(EnvFilter::try_new(directives).is_ok());
            assert!(directives.contains("patterns="));
        }
        assert!(default_directives(true).ends_with("patterns=debug"));
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
    }
}
