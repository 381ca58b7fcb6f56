use payment_gateway::bank::client::BankClient;
use payment_gateway::config::AppConfig;
use payment_gateway::repo::payments_repo::PaymentsRepo;
use payment_gateway::service::payment_processor::PaymentProcessor;
use payment_gateway::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let bank = BankClient::new(
        cfg.bank_url.clone(),
        std::time::Duration::from_secs(cfg.bank_timeout_secs),
    );

    let processor = PaymentProcessor {
        bank: Arc::new(bank),
        repo: PaymentsRepo::new(),
    };

    let app = payment_gateway::http::router(AppState { processor });

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
