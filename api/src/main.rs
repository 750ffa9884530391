use std::sync::Arc;

use clap::Parser;
use foodcheck_api::application::http::server::http_server::{router, state};
use foodcheck_api::args::Args;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();
    let args = Arc::new(Args::parse());

    init_tracing(&args);

    let state = state(args.clone())?;
    let router = router(state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log.filter));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if args.log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
