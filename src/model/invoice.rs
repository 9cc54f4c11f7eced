use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed status vocabulary for an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    #[serde(rename = "Brouillon")]
    Brouillon,
    #[serde(rename = "Envoyée")]
    Envoyee,
    #[serde(rename = "Payée")]
    Payee,
    #[serde(rename = "En retard")]
    EnRetard,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Brouillon => "Brouillon",
            InvoiceStatus::Envoyee => "Envoyée",
            InvoiceStatus::Payee => "Payée",
            InvoiceStatus::EnRetard => "En retard",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Brouillon" => Ok(InvoiceStatus::Brouillon),
            "Envoyée" => Ok(InvoiceStatus::Envoyee),
            "Payée" => Ok(InvoiceStatus::Payee),
            "En retard" => Ok(InvoiceStatus::EnRetard),
            other => Err(format!(
                "Invalid invoice status: '{}' (expected one of: Brouillon, Envoyée, Payée, En retard)",
                other
            )),
        }
    }
}

impl Default for InvoiceStatus {
    fn default() -> Self {
        InvoiceStatus::Brouillon
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: i32,
    pub amount: f64,
    pub issue_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub status: InvoiceStatus,
    pub intervention_id: i32,
}

/// Read-side join: an invoice with its related intervention attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceWithIntervention {
    #[serde(flatten)]
    pub invoice: Invoice,
    pub intervention: crate::model::intervention::Intervention,
}

#[derive(Debug, Clone)]
pub struct NewInvoice {
    pub amount: f64,
    pub issue_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub status: InvoiceStatus,
    pub intervention_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for s in ["Brouillon", "Envoyée", "Payée", "En retard"] {
            let parsed: InvoiceStatus = s.parse().expect("known status");
            assert_eq!(parsed.as_str(), s);
        }
    }

    #[test]
    fn test_status_rejects_unknown() {
        assert!("Facturée".parse::<InvoiceStatus>().is_err());
        assert!("paid".parse::<InvoiceStatus>().is_err());
    }
}
