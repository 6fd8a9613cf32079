//! Server configuration, read from command-line flags with environment fallbacks.

use clap::Parser;
use std::net::SocketAddr;

#[derive(Parser, Debug, Clone)]
#[command(name = "quotes-server")]
#[command(about = "In-memory HTTP service for author-attributed quotes")]
#[command(version)]
pub struct Config {
    /// Address the HTTP server binds to
    #[arg(short, long, env = "QUOTES_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Log filter directive (e.g. info, debug, quotes_service=trace)
    #[arg(long, env = "QUOTES_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::Config;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["quotes-server"]).unwrap();
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::try_parse_from([
            "quotes-server",
            "--bind",
            "127.0.0.1:9000",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(config.bind.to_string(), "127.0.0.1:9000");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_bind_rejected() {
        let result = Config::try_parse_from(["quotes-server", "--bind", "not-an-address"]);
        assert!(result.is_err());
    }
}
