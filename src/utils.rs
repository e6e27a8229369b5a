use std::str::FromStr;

/// Parse a comma-separated pair, such as `1,3` or `-2.5,7`
pub fn parse_pair<T>(s: &str) -> Result<(T, T), String>
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    let v = s.split(',').collect::<Vec<_>>();
    if v.len() != 2 {
        return Err(format!("expected two comma-separated values, got `{s}`"));
    }
    let parse = |item: &str| item.trim().parse::<T>().map_err(|e| format!("`{item}`: {e}"));
    Ok((parse(v[0])?, parse(v[1])?))
}

/// Group numeric digits to facilitate reading long numbers
pub fn group_digits<F: std::fmt::Display>(n: F) -> String {
    use numsep::{separate, Locale};
    separate(n, Locale::English)
}

/// Send `tracing` output to stderr, leaving stdout for the histogram itself.
///
/// Verbosity defaults to `warn` and can be changed with `RUST_LOG`.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    // Ignore the error: a subscriber may already be installed (e.g. in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
