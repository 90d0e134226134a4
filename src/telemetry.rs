use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logs go to stderr so `--json` output on stdout stays clean.
///
/// Safe to call more than once: an already-installed global subscriber is kept.
pub fn init_telemetry(verbose: bool) {
    let default_filter = if verbose {
        "penta_score=debug,penta=debug"
    } else {
        "penta_score=warn,penta=warn"
    };

    let installed = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();

    if let Err(e) = installed {
        tracing::debug!(error = %e, "keeping existing tracing subscriber");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_keeps_the_first_subscriber() {
        init_telemetry(false);
        init_telemetry(true);
        tracing::debug!("still logging after a second init");
    }
}
