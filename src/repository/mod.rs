pub mod client_repo;
pub mod electrician_repo;
pub mod intervention_repo;
pub mod invoice_repo;
pub mod repository_error;
