pub mod client_handler;
pub mod electrician_handler;
pub mod intervention_handler;
pub mod invoice_handler;
