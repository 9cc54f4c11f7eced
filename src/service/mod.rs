pub mod client_service;
pub mod electrician_service;
pub mod intervention_service;
pub mod invoice_service;
