use dotenvy::dotenv;
use rewrite_service::{
    app_module::AppState,
    app_router::build_app,
    config::{AppConfig, Environment},
};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing(Environment::current())?;

    let config = AppConfig::from_env().inspect_err(|e| {
        tracing::error!("Unable to load configuration: {}", e);
    })?;

    let state = AppState::new(&config);
    let app = build_app(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!("Server started, listening on {}", address);
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(environment: Environment) -> anyhow::Result<()> {
    let subscriber_builder = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_level(true)
        .with_span_events(FmtSpan::CLOSE);

    match environment {
        Environment::Dev => tracing::subscriber::set_global_default(
            subscriber_builder.pretty().with_ansi(true).finish(),
        )?,
        Environment::Prod => tracing::subscriber::set_global_default(
            subscriber_builder.json().with_ansi(false).finish(),
        )?,
    }

    Ok(())
}
