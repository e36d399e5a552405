use rust_decimal::Decimal;
use serde::Serialize;

/// Payment methods the mock gateway accepts
pub const SUPPORTED_METHODS: [&str; 2] = ["credit_card", "paypal"];

/// Fixed transaction id returned by the mock gateway
pub const MOCK_TRANSACTION_ID: &str = "txn12345";

/// A successful mock charge
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    pub success: bool,
    pub transaction_id: String,
}

/// Mock payment processing: validates the request shape and returns a
/// canned receipt. Not connected to a real provider.
pub struct PaymentProcessor;

impl PaymentProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Charge a positive amount with a supported method
    ///
    /// Returns `None` when the request is rejected.
    pub fn charge(&self, amount: Decimal, method: &str) -> Option<PaymentReceipt> {
        if amount <= Decimal::ZERO || !SUPPORTED_METHODS.contains(&method) {
            return None;
        }

        Some(PaymentReceipt {
            success: true,
            transaction_id: MOCK_TRANSACTION_ID.to_string(),
        })
    }
}

impl Default for PaymentProcessor {
    fn default() -> Self {
        Self::new()
    }
}
