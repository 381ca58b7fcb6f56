use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPaymentRequest {
    pub card_number: String,
    pub expiry_month: u32,
    pub expiry_year: i32,
    pub currency: String,
    pub amount: i64,
    pub cvv: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Authorized,
    Declined,
}

/// Persisted payment record. Holds only the last four digits of the card
/// number; the full number and cvv never reach the store.
#[derive(Debug, Clone)]
pub struct Payment {
    pub id: Uuid,
    pub card_number_last_four: String,
    pub expiry_month: u32,
    pub expiry_year: i32,
    pub currency: String,
    pub amount: i64,
    pub status: PaymentStatus,
    pub authorization_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// Builds the entity from an already-validated request. The last-four
    /// slice is taken verbatim, so leading zeros survive.
    pub fn from_request(
        request: &PostPaymentRequest,
        status: PaymentStatus,
        authorization_code: Option<String>,
    ) -> Self {
        let last_four = request.card_number[request.card_number.len() - 4..].to_string();
        Self {
            id: Uuid::new_v4(),
            card_number_last_four: last_four,
            expiry_month: request.expiry_month,
            expiry_year: request.expiry_year,
            currency: request.currency.clone(),
            amount: request.amount,
            status,
            authorization_code,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPaymentResponse {
    pub id: Uuid,
    pub status: PaymentStatus,
    pub card_number_last_four: u16,
    pub expiry_month: u32,
    pub expiry_year: i32,
    pub currency: String,
    pub amount: i64,
}

impl PostPaymentResponse {
    pub fn from_entity(payment: &Payment) -> Self {
        Self {
            id: payment.id,
            status: payment.status,
            card_number_last_four: payment.card_number_last_four.parse().unwrap_or(0),
            expiry_month: payment.expiry_month,
            expiry_year: payment.expiry_year,
            currency: payment.currency.clone(),
            amount: payment.amount,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPaymentResponse {
    pub id: Uuid,
    pub status: PaymentStatus,
    pub card_number_last_four: u16,
    pub expiry_month: u32,
    pub expiry_year: i32,
    pub currency: String,
    pub amount: i64,
}

impl GetPaymentResponse {
    pub fn from_entity(payment: &Payment) -> Self {
        Self {
            id: payment.id,
            status: payment.status,
            card_number_last_four: payment.card_number_last_four.parse().unwrap_or(0),
            expiry_month: payment.expiry_month,
            expiry_year: payment.expiry_year,
            currency: payment.currency.clone(),
            amount: payment.amount,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub details: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(card_number: &str) -> PostPaymentRequest {
        PostPaymentRequest {
            card_number: card_number.to_string(),
            expiry_month: 4,
            expiry_year: 2030,
            currency: "GBP".to_string(),
            amount: 100,
            cvv: "123".to_string(),
        }
    }

    #[test]
    fn entity_keeps_zero_padded_last_four() {
        let payment = Payment::from_request(&request("22224053432440000001"), PaymentStatus::Declined, None);
        assert_eq!(payment.card_number_last_four, "0001");
        assert_eq!(PostPaymentResponse::from_entity(&payment).card_number_last_four, 1);
    }

    #[test]
    fn entity_never_holds_the_full_card_number() {
        let payment = Payment::from_request(&request("4111111111111111"), PaymentStatus::Authorized, Some("auth".to_string()));
        assert_eq!(payment.card_number_last_four.len(), 4);
        assert_eq!(payment.card_number_last_four, "1111");
    }

    #[test]
    fn projections_omit_authorization_code() {
        let payment = Payment::from_request(&request("4111111111111111"), PaymentStatus::Authorized, Some("auth-99".to_string()));
        let json = serde_json::to_value(GetPaymentResponse::from_entity(&payment)).unwrap();
        assert!(json.get("authorizationCode").is_none());
        assert!(json.get("createdAt").is_none());
        assert_eq!(json["status"], "Authorized");
    }
}
