//! Transfer request type.
//!
//! Transfers are accepted and echoed back; no balance is moved.

use serde::{Deserialize, Serialize};

/// Request to move money to another account.
///
/// # JSON Example
///
/// ```json
/// { "toAccount": 2, "amount": 500 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Destination account id
    pub to_account: i32,

    /// Amount in minor currency units
    pub amount: i64,
}
