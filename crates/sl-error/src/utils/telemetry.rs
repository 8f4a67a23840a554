use std::sync::OnceLock;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

const DEFAULT_PRETTY_FILTER: &str = "sl_error=debug";
static TRACING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Why [`init_tracing`] could not install a subscriber.
#[derive(Debug, Error)]
pub enum TelemetryInitError {
    #[error("fallback filter `{directive}` does not parse: {source}")]
    InvalidFilter {
        directive: String,
        source: tracing_subscriber::filter::ParseError,
    },
    /// Another subscriber already owns the process, usually the host application's.
    #[error("a global tracing subscriber is already installed: {0}")]
    SetGlobalDefault(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Prints the `sl_error.engine.*` spans and events to stdout in pretty form.
///
/// `RUST_LOG` decides verbosity when it is set and parses; otherwise engine
/// construction, replacements and totals show at `debug`. Per-example fold
/// events sit at `trace`, so `RUST_LOG=sl_error=trace` is needed to see them.
/// Only the first successful call installs anything.
///
/// The library never calls this itself; binaries and test harnesses opt in.
pub fn init_tracing() -> Result<(), TelemetryInitError> {
    if TRACING_INITIALIZED.get().is_some() {
        return Ok(());
    }

    let subscriber = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(resolve_filter(EnvFilter::try_from_default_env().ok())?)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    let _ = TRACING_INITIALIZED.set(());
    Ok(())
}

fn resolve_filter(from_env: Option<EnvFilter>) -> Result<EnvFilter, TelemetryInitError> {
    match from_env {
        Some(filter) => Ok(filter),
        None => EnvFilter::try_new(DEFAULT_PRETTY_FILTER).map_err(|source| {
            TelemetryInitError::InvalidFilter {
                directive: DEFAULT_PRETTY_FILTER.to_string(),
                source,
            }
        }),
    }
}

/// Cuts `value` down to at most `max_chars` characters without splitting one.
pub fn truncate(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((cutoff, _)) => &value[..cutoff],
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("1->2\n2->4", 4), "1->2");
        assert_eq!(truncate("αβγ", 2), "αβ");
        assert_eq!(truncate("short", 80), "short");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn test_fallback_filter_is_valid() {
        let filter = resolve_filter(None).expect("fallback directive should parse");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_env_filter_takes_precedence() {
        let filter = resolve_filter(Some(EnvFilter::new("sl_error=trace"))).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing().expect("first init should succeed");
        init_tracing().expect("second init should be a no-op");
    }
}
