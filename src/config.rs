/// Environment-driven settings, resolved once at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Listening port, from `PORT`. Defaults to 8000.
    pub port: u16,
    /// sqlx connection string, from `DATABASE_URL`.
    pub database_url: String,
}

impl AppConfig {
    /// Read configuration from the process environment, applying defaults
    /// for anything unset. Unparseable values fall back to the default
    /// rather than aborting startup.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:city.db?mode=rwc".to_string());
        Self { port, database_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test because the process environment is shared state.
    #[test]
    fn port_parsing_and_defaults() {
        std::env::remove_var("PORT");
        std::env::remove_var("DATABASE_URL");
        let config = AppConfig::from_env();
        assert_eq!(config.port, 8000);
        assert_eq!(config.database_url, "sqlite:city.db?mode=rwc");

        std::env::set_var("PORT", "not-a-port");
        assert_eq!(AppConfig::from_env().port, 8000);

        std::env::set_var("PORT", "9123");
        assert_eq!(AppConfig::from_env().port, 9123);
        std::env::remove_var("PORT");
    }
}
