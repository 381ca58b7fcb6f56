pub mod bank;
pub mod config;
pub mod domain {
    pub mod payment;
    pub mod validation;
}
pub mod http {
    pub mod handlers {
        pub mod payments;
    }

    use axum::routing::{get, post};
    use axum::Router;

    pub fn router(state: crate::AppState) -> Router {
        Router::new()
            .route("/payments", post(handlers::payments::create_payment))
            .route("/payments/:payment_id", get(handlers::payments::get_payment))
            .route("/health", get(handlers::payments::health))
            .with_state(state)
    }
}
pub mod repo {
    pub mod payments_repo;
}
pub mod service {
    pub mod payment_processor;
}

#[derive(Clone)]
pub struct AppState {
    pub processor: service::payment_processor::PaymentProcessor,
}
