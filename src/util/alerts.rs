use chrono::{DateTime, Utc};

use crate::model::intervention::{Intervention, InterventionStatus};
use crate::model::invoice::{Invoice, InvoiceStatus};

/// Interventions whose scheduled date has passed without being completed.
///
/// Pure projection: `now` is an explicit input and input order is preserved.
pub fn late_interventions(
    interventions: &[Intervention],
    now: DateTime<Utc>,
) -> Vec<Intervention> {
    interventions
        .iter()
        .filter(|i| i.date < now && i.status != InterventionStatus::Terminee)
        .cloned()
        .collect()
}

/// Invoices past their due date and not yet marked paid.
pub fn overdue_invoices(invoices: &[Invoice], now: DateTime<Utc>) -> Vec<Invoice> {
    invoices
        .iter()
        .filter(|i| i.status != InvoiceStatus::Payee && i.due_date < now)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn intervention(id: i32, date: &str, status: InterventionStatus) -> Intervention {
        Intervention {
            id,
            title: format!("Intervention {}", id),
            description: None,
            date: crate::util::date::parse_flexible(date).unwrap(),
            status,
            client_id: 1,
            electrician_id: 1,
        }
    }

    fn invoice(id: i32, due_date: &str, status: InvoiceStatus) -> Invoice {
        Invoice {
            id,
            amount: 100.0,
            issue_date: crate::util::date::parse_flexible("2025-01-01").unwrap(),
            due_date: crate::util::date::parse_flexible(due_date).unwrap(),
            status,
            intervention_id: 1,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_past_planned_intervention_is_late() {
        let items = vec![intervention(1, "2025-01-01", InterventionStatus::Planifiee)];
        let late = late_interventions(&items, now());
        assert_eq!(late.len(), 1);
        assert_eq!(late[0].id, 1);
    }

    #[test]
    fn test_completed_intervention_is_not_late() {
        let items = vec![intervention(1, "2025-01-01", InterventionStatus::Terminee)];
        assert!(late_interventions(&items, now()).is_empty());
    }

    #[test]
    fn test_future_intervention_is_not_late() {
        let items = vec![intervention(1, "2025-12-01", InterventionStatus::Planifiee)];
        assert!(late_interventions(&items, now()).is_empty());
    }

    #[test]
    fn test_late_interventions_preserve_input_order() {
        let items = vec![
            intervention(3, "2025-02-01", InterventionStatus::EnCours),
            intervention(1, "2025-01-01", InterventionStatus::Planifiee),
            intervention(2, "2025-03-01", InterventionStatus::Facturee),
        ];
        let late = late_interventions(&items, now());
        let ids: Vec<i32> = late.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_sent_invoice_past_due_is_overdue() {
        let items = vec![invoice(1, "2025-01-01", InvoiceStatus::Envoyee)];
        let overdue = overdue_invoices(&items, now());
        assert_eq!(overdue.len(), 1);
    }

    #[test]
    fn test_paid_invoice_is_never_overdue() {
        let items = vec![invoice(1, "2025-01-01", InvoiceStatus::Payee)];
        assert!(overdue_invoices(&items, now()).is_empty());
    }

    #[test]
    fn test_invoice_not_yet_due_is_not_overdue() {
        let items = vec![invoice(1, "2025-12-01", InvoiceStatus::Brouillon)];
        assert!(overdue_invoices(&items, now()).is_empty());
    }

    #[test]
    fn test_same_inputs_yield_same_outputs() {
        let items = vec![
            invoice(1, "2025-01-01", InvoiceStatus::EnRetard),
            invoice(2, "2025-05-01", InvoiceStatus::Brouillon),
        ];
        let first = overdue_invoices(&items, now());
        let second = overdue_invoices(&items, now());
        let first_ids: Vec<i32> = first.iter().map(|i| i.id).collect();
        let second_ids: Vec<i32> = second.iter().map(|i| i.id).collect();
        assert_eq!(first_ids, second_ids);
    }
}
