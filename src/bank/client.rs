use crate::bank::{AcquiringBank, BankRequest, BankResponse, BankVerdict};
use reqwest::StatusCode;

pub struct BankClient {
    pub base_url: String,
    pub timeout: std::time::Duration,
    pub client: reqwest::Client,
}

impl BankClient {
    pub fn new(base_url: String, timeout: std::time::Duration) -> Self {
        Self {
            base_url,
            timeout,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl AcquiringBank for BankClient {
    async fn authorize(&self, request: &BankRequest) -> BankVerdict {
        let url = format!("{}/payments", self.base_url);

        let resp = self
            .client
            .post(url)
            .json(request)
            .timeout(self.timeout)
            .send()
            .await;

        match resp {
            Ok(r) if r.status() == StatusCode::SERVICE_UNAVAILABLE => {
                tracing::warn!("bank returned service unavailable");
                BankVerdict::Unreachable
            }
            Ok(r) if r.status().is_success() => match r.json::<BankResponse>().await {
                Ok(body) if body.authorized => {
                    tracing::info!("bank authorized the payment");
                    BankVerdict::Authorized {
                        authorization_code: body.authorization_code,
                    }
                }
                Ok(_) => {
                    tracing::info!("bank declined the payment");
                    BankVerdict::Declined
                }
                Err(e) => {
                    tracing::warn!(error = %e, "bank reply body could not be parsed");
                    BankVerdict::Unreachable
                }
            },
            Ok(r) => {
                tracing::warn!(status = %r.status(), "bank returned unexpected status");
                BankVerdict::Unreachable
            }
            Err(e) if e.is_timeout() => {
                tracing::warn!("bank call timed out");
                BankVerdict::Unreachable
            }
            Err(e) => {
                tracing::warn!(error = %e, "bank call failed");
                BankVerdict::Unreachable
            }
        }
    }
}
