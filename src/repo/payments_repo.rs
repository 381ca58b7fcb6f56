use crate::domain::payment::Payment;
use anyhow::anyhow;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory payment store shared by every in-flight request. The write lock
/// is held only across the map insert, so a get of an id observes any insert
/// of that id that has already returned.
#[derive(Clone, Default)]
pub struct PaymentsRepo {
    payments: Arc<RwLock<HashMap<Uuid, Payment>>>,
}

impl PaymentsRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the record. Identifiers are generated per entity, so a
    /// collision cannot occur.
    pub fn insert(&self, payment: Payment) -> anyhow::Result<Uuid> {
        let id = payment.id;
        let mut payments = self
            .payments
            .write()
            .map_err(|_| anyhow!("payment store lock poisoned"))?;
        payments.insert(id, payment);
        Ok(id)
    }

    pub fn get(&self, id: &Uuid) -> anyhow::Result<Option<Payment>> {
        let payments = self
            .payments
            .read()
            .map_err(|_| anyhow!("payment store lock poisoned"))?;
        Ok(payments.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::{PaymentStatus, PostPaymentRequest};

    fn payment(amount: i64) -> Payment {
        let request = PostPaymentRequest {
            card_number: "2222405343248877".to_string(),
            expiry_month: 4,
            expiry_year: 2030,
            currency: "GBP".to_string(),
            amount,
            cvv: "123".to_string(),
        };
        Payment::from_request(&request, PaymentStatus::Declined, None)
    }

    #[test]
    fn get_observes_a_returned_insert() {
        let repo = PaymentsRepo::new();
        let id = repo.insert(payment(100)).unwrap();
        let found = repo.get(&id).unwrap().unwrap();
        assert_eq!(found.amount, 100);
    }

    #[test]
    fn get_of_unknown_id_is_none_not_a_crash() {
        let repo = PaymentsRepo::new();
        assert!(repo.get(&Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn concurrent_inserts_drop_nothing() {
        let repo = PaymentsRepo::new();
        let mut handles = Vec::new();
        for i in 0..16 {
            let repo = repo.clone();
            handles.push(std::thread::spawn(move || {
                repo.insert(payment(i)).unwrap()
            }));
        }
        let ids: Vec<Uuid> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for id in ids {
            assert!(repo.get(&id).unwrap().is_some());
        }
    }
}
