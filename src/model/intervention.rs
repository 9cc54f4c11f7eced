use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed status vocabulary for an intervention. Persisted as the French
/// label; unknown labels are rejected at parse time, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterventionStatus {
    #[serde(rename = "Planifiée")]
    Planifiee,
    #[serde(rename = "En cours")]
    EnCours,
    #[serde(rename = "Terminée")]
    Terminee,
    #[serde(rename = "Facturée")]
    Facturee,
}

impl InterventionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterventionStatus::Planifiee => "Planifiée",
            InterventionStatus::EnCours => "En cours",
            InterventionStatus::Terminee => "Terminée",
            InterventionStatus::Facturee => "Facturée",
        }
    }
}

impl fmt::Display for InterventionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InterventionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Planifiée" => Ok(InterventionStatus::Planifiee),
            "En cours" => Ok(InterventionStatus::EnCours),
            "Terminée" => Ok(InterventionStatus::Terminee),
            "Facturée" => Ok(InterventionStatus::Facturee),
            other => Err(format!(
                "Invalid intervention status: '{}' (expected one of: Planifiée, En cours, Terminée, Facturée)",
                other
            )),
        }
    }
}

impl Default for InterventionStatus {
    fn default() -> Self {
        InterventionStatus::Planifiee
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intervention {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub status: InterventionStatus,
    pub client_id: i32,
    pub electrician_id: i32,
}

/// Read-side join: an intervention with its related client and electrician
/// attached, so list consumers need no second round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterventionWithRelations {
    #[serde(flatten)]
    pub intervention: Intervention,
    pub client: crate::model::client::Client,
    pub electrician: crate::model::electrician::Electrician,
}

#[derive(Debug, Clone)]
pub struct NewIntervention {
    pub title: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub status: InterventionStatus,
    pub client_id: i32,
    pub electrician_id: i32,
}
