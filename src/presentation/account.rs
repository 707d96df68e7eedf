/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::presentation::serialization::lenient_string;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Status of one broadband line as reported by the account-info API
///
/// Every field arrives as a string. Rates and quotas are decimal strings, but an
/// empty or non-numeric value is a legitimate "unknown" and is kept as-is; callers
/// parse defensively (see [`crate::presentation::format`]).
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AccountRecord {
    /// Line identifier
    #[serde(rename(deserialize = "ID"), default, deserialize_with = "lenient_string")]
    pub id: String,
    /// Login name of the line
    #[serde(default, deserialize_with = "lenient_string")]
    pub login: String,
    /// Postal code of the installation
    #[serde(default, deserialize_with = "lenient_string")]
    pub postcode: String,
    /// Synced rate towards the customer, in bits/second
    #[serde(default, deserialize_with = "lenient_string")]
    pub tx_rate: String,
    /// Synced rate from the customer, in bits/second
    #[serde(default, deserialize_with = "lenient_string")]
    pub rx_rate: String,
    /// Rate towards the customer after the provider's adjustment, in bits/second
    #[serde(default, deserialize_with = "lenient_string")]
    pub tx_rate_adjusted: String,
    /// Monthly quota, in bytes
    #[serde(default, deserialize_with = "lenient_string")]
    pub quota_monthly: String,
    /// Quota left this month, in bytes
    #[serde(default, deserialize_with = "lenient_string")]
    pub quota_remaining: String,
    /// When the remaining quota was last computed
    #[serde(default, deserialize_with = "lenient_string")]
    pub quota_timestamp: String,
}

impl AccountRecord {
    /// Upload rate in bits/second, `None` when upstream did not report a number
    ///
    /// Upstream names rates from its own side, so the customer's upload is `rx_rate`.
    pub fn upload_bps(&self) -> Option<f64> {
        self.rx_rate.trim().parse().ok()
    }

    /// Download rate in bits/second (`tx_rate`), `None` when not a number
    pub fn download_bps(&self) -> Option<f64> {
        self.tx_rate.trim().parse().ok()
    }
}
