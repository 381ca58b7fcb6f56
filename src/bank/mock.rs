use crate::bank::{AcquiringBank, BankRequest, BankVerdict};

/// Scripted bank used by processor and API tests: always answers with the
/// configured verdict and records the requests it saw.
pub struct MockBank {
    pub verdict: BankVerdict,
    pub seen: std::sync::Mutex<Vec<BankRequest>>,
}

impl MockBank {
    pub fn new(verdict: BankVerdict) -> Self {
        Self {
            verdict,
            seen: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn authorizing(code: &str) -> Self {
        Self::new(BankVerdict::Authorized {
            authorization_code: code.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl AcquiringBank for MockBank {
    async fn authorize(&self, request: &BankRequest) -> BankVerdict {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(request.clone());
        }
        self.verdict.clone()
    }
}
