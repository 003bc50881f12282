pub mod aggregate;

pub use aggregate::{Deal, DealId, DEAL_SCHEMA};
