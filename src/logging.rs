use std::sync::Once;

use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Settings;

static INIT: Once = Once::new();

/// Installs the global log sink writing formatted lines to stdout.
///
/// Safe to call more than once: only the first call installs a subscriber,
/// so repeated initialization never produces duplicate output. Level comes
/// from the explicit override, else `LOG_LEVEL`, else `INFO`. A `RUST_LOG`
/// filter, when set, takes precedence over the derived directives.
pub fn init(settings: &Settings, level_override: Option<&str>) {
    let level = resolve_level(level_override, &settings.log_level);

    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(directives(level)));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init();
    });
}

/// Resolves the log level name, falling back to `INFO` for anything
/// unrecognized.
pub fn resolve_level(explicit: Option<&str>, configured: &str) -> Level {
    explicit
        .unwrap_or(configured)
        .parse()
        .unwrap_or(Level::INFO)
}

// Framework subsystems log through the same sink at the same level rather
// than carrying their own configuration.
fn directives(level: Level) -> String {
    format!("{level},tower_http={level},axum={level},sqlx={level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        let vars = [
            ("APP_NAME", "HRMS API"),
            ("ENVIRONMENT", "test"),
            ("JWT_SECRET_KEY", "secret"),
            ("POSTGRES_USER", "u"),
            ("POSTGRES_PASSWORD", "p"),
            ("POSTGRES_DB", "d"),
            ("POSTGRES_HOST", "h"),
            ("REDIS_HOST", "r"),
            ("LOG_LEVEL", "DEBUG"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()));
        Settings::from_vars(vars).unwrap()
    }

    #[test]
    fn explicit_override_wins_over_configured_level() {
        assert_eq!(resolve_level(Some("warn"), "DEBUG"), Level::WARN);
    }

    #[test]
    fn configured_level_applies_without_override() {
        assert_eq!(resolve_level(None, "DEBUG"), Level::DEBUG);
    }

    #[test]
    fn unrecognized_level_falls_back_to_info() {
        assert_eq!(resolve_level(None, "verbose"), Level::INFO);
        assert_eq!(resolve_level(Some("loud"), "also-bad"), Level::INFO);
    }

    #[test]
    fn level_names_parse_case_insensitively() {
        assert_eq!(resolve_level(None, "error"), Level::ERROR);
        assert_eq!(resolve_level(None, "ERROR"), Level::ERROR);
    }

    #[test]
    fn double_initialization_is_harmless() {
        let settings = settings();
        init(&settings, None);
        init(&settings, Some("trace"));
    }
}
