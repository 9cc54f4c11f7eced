pub mod client_router;
pub mod electrician_router;
pub mod intervention_router;
pub mod invoice_router;
