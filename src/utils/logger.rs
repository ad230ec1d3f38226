use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the default filter directive. `level` comes from the config file, `verbose` wins over it.
pub fn default_directive(verbose: bool, level: Option<&str>) -> String {
    if verbose {
        return "math_calc=debug".to_string();
    }
    match level {
        Some(level) => format!("math_calc={}", level),
        None => "math_calc=warn".to_string(),
    }
}

pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, level)));

    // stdout carries results, so logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false, None), "math_calc=warn");
        assert_eq!(default_directive(false, Some("info")), "math_calc=info");
        assert_eq!(default_directive(true, Some("error")), "math_calc=debug");
    }
}
