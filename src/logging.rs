use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log traversal statistics at debug level.
///
/// Usage:
/// ```rust,ignore
/// let result = search_with(&graph, start, &target, &opts)?;
/// log_traversal_stats!(&result.stats, "search");
/// ```
#[macro_export]
macro_rules! log_traversal_stats {
    ($stats:expr, $name:expr) => {
        tracing::debug!(
            operation = $name,
            dequeued = $stats.dequeued,
            enqueued = $stats.enqueued,
            neighbor_lookups = $stats.neighbor_lookups,
            max_frontier = $stats.max_frontier,
            visited = $stats.visited,
            "traversal_stats"
        );
    };
}

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", depth = path.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Environment variable consulted when `RUST_LOG` is unset
pub const LOG_ENV: &str = "BFS_PATH_LOG";

/// Install a global subscriber that writes search events to stderr.
///
/// `log_level` takes either a bare level (`"trace"`), applied to this crate
/// only, or a full filter directive. `RUST_LOG` and [`LOG_ENV`] override both
/// arguments. Fails if a global subscriber is already installed.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = env_filter(&directive(verbose, log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        // Span open/close events carry the search fields and elapsed time
        let layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE);
        registry.with(layer).try_init()?;
    } else {
        let layer = fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_ansi(false);
        registry.with(layer).try_init()?;
    }

    Ok(())
}

fn directive(verbose: bool, log_level: Option<&str>) -> String {
    match log_level {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) => format!("bfs_path={}", level),
        None if verbose => "bfs_path=debug".to_string(),
        None => "bfs_path=warn".to_string(),
    }
}

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| EnvFilter::new(fallback))
}

#[cfg(test)]
mod tests {
    use super::directive;

    #[test]
    fn test_directive_scopes_bare_levels_to_crate() {
        assert_eq!(directive(false, None), "bfs_path=warn");
        assert_eq!(directive(true, None), "bfs_path=debug");
        assert_eq!(directive(true, Some("trace")), "bfs_path=trace");
    }

    #[test]
    fn test_directive_passes_full_filters_through() {
        assert_eq!(directive(false, Some("bfs_path=info,other=warn")), "bfs_path=info,other=warn");
    }
}
