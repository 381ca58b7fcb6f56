use serde::{Deserialize, Serialize};

pub mod client;
pub mod mock;

/// Sanitized request sent to the acquiring bank. Built per call, never
/// persisted; the full card number must not appear in logs.
#[derive(Debug, Clone, Serialize)]
pub struct BankRequest {
    pub card_number: String,
    pub expiry_date: String,
    pub currency: String,
    pub amount: i64,
    pub cvv: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BankResponse {
    pub authorized: bool,
    pub authorization_code: String,
}

/// Outcome of a single authorization attempt. `Unreachable` covers every
/// failure mode that is not a definitive bank answer: 503, unexpected
/// status, malformed body, network error, timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankVerdict {
    Authorized { authorization_code: String },
    Declined,
    Unreachable,
}

#[async_trait::async_trait]
pub trait AcquiringBank: Send + Sync {
    /// Single attempt, no retries. All failure modes resolve to a verdict;
    /// this never returns an error.
    async fn authorize(&self, request: &BankRequest) -> BankVerdict;
}
