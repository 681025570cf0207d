// Business domains
pub mod discovery;
