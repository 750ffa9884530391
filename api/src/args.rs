use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "foodcheck-api", about = "Food processing checker HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. "/api". Empty means routes mount at the
    /// server root.
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "SERVER_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Emit logs as JSON instead of human-readable lines.
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub json: bool,

    /// Default tracing filter, overridden by RUST_LOG when set.
    #[arg(long, env = "LOG_FILTER", default_value = "info")]
    pub filter: String,
}
