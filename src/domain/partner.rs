use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::money::Money;

/// Fulfillment partner identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartnerId(pub Uuid);

impl PartnerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PartnerId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for PartnerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A fulfillment partner with a revolving credit line.
///
/// Target invariant: `0 <= available <= credit_ceiling`. Order admission only
/// decreases `available`; the operator escape hatch `replace_terms` can set
/// any values, including available above ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub id: PartnerId,
    pub name: String,
    pub contact: String,
    pub credit_ceiling: Money,
    pub available: Money,
    pub onboarded_at: DateTime<Utc>,
}

impl Partner {
    /// Onboards a partner; available credit starts equal to the ceiling.
    pub fn onboard(
        name: impl Into<String>,
        contact: impl Into<String>,
        credit_ceiling: Money,
    ) -> Self {
        Self {
            id: PartnerId::new(),
            name: name.into(),
            contact: contact.into(),
            credit_ceiling,
            available: credit_ceiling,
            onboarded_at: Utc::now(),
        }
    }

    /// Debits available credit. No floor: admission control happens before
    /// this is called, and a stale admission read may still push it negative.
    pub fn debit(&mut self, amount: Money) {
        self.available -= amount;
    }

    /// Unconditional overwrite of all terms. No cross-field validation.
    pub fn replace_terms(
        &mut self,
        name: impl Into<String>,
        contact: impl Into<String>,
        credit_ceiling: Money,
        available: Money,
    ) {
        self.name = name.into();
        self.contact = contact.into();
        self.credit_ceiling = credit_ceiling;
        self.available = available;
    }
}
