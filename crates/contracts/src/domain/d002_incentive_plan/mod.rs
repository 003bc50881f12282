pub mod aggregate;

pub use aggregate::{IncentivePlan, IncentivePlanId, PlanTier, INCENTIVE_PLAN_SCHEMA};
