pub mod client;
pub mod electrician;
pub mod intervention;
pub mod invoice;
