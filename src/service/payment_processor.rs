use crate::bank::{AcquiringBank, BankRequest, BankVerdict};
use crate::domain::payment::{
    GetPaymentResponse, Payment, PaymentStatus, PostPaymentRequest, PostPaymentResponse,
};
use crate::domain::validation;
use std::sync::Arc;
use uuid::Uuid;

/// Caller-facing failure kinds. Infrastructure faults are wrapped exactly
/// once, here, with the cause preserved; they never escape raw.
#[derive(Debug, thiserror::Error)]
pub enum ProcessorError {
    #[error("payment request failed validation")]
    Validation(Vec<String>),
    #[error("payment {0} was not found")]
    NotFound(Uuid),
    #[error("payment processing failed due to technical error")]
    Processing(#[source] anyhow::Error),
}

#[derive(Clone)]
pub struct PaymentProcessor {
    pub bank: Arc<dyn AcquiringBank>,
    pub repo: crate::repo::payments_repo::PaymentsRepo,
}

impl PaymentProcessor {
    pub async fn process(
        &self,
        request: PostPaymentRequest,
    ) -> Result<PostPaymentResponse, ProcessorError> {
        validation::validate(&request).map_err(ProcessorError::Validation)?;

        let bank_request = BankRequest {
            card_number: request.card_number.clone(),
            expiry_date: format!("{:02}/{}", request.expiry_month, request.expiry_year),
            currency: request.currency.clone(),
            amount: request.amount,
            cvv: request.cvv.clone(),
        };

        let verdict = self.bank.authorize(&bank_request).await;
        let status = status_from_verdict(&verdict);
        let authorization_code = match verdict {
            BankVerdict::Authorized { authorization_code } => Some(authorization_code),
            _ => None,
        };

        let payment = Payment::from_request(&request, status, authorization_code);
        let response = PostPaymentResponse::from_entity(&payment);

        self.repo.insert(payment).map_err(|e| {
            tracing::error!(error = %e, "failed to persist payment");
            ProcessorError::Processing(e)
        })?;

        tracing::info!(payment_id = %response.id, status = ?response.status, "payment processed");
        Ok(response)
    }

    pub fn retrieve(&self, id: Uuid) -> Result<GetPaymentResponse, ProcessorError> {
        let payment = self
            .repo
            .get(&id)
            .map_err(ProcessorError::Processing)?
            .ok_or(ProcessorError::NotFound(id))?;
        Ok(GetPaymentResponse::from_entity(&payment))
    }
}

/// Fail-closed mapping: only a definitive bank authorization yields
/// `Authorized`. A decline and an unreachable bank are indistinguishable on
/// the stored record; uncertainty never authorizes.
pub fn status_from_verdict(verdict: &BankVerdict) -> PaymentStatus {
    match verdict {
        BankVerdict::Authorized { .. } => PaymentStatus::Authorized,
        BankVerdict::Declined | BankVerdict::Unreachable => PaymentStatus::Declined,
    }
}
