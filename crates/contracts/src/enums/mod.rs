//! Domain enumerations shared by the UI and the backend
//!
//! Each enumeration is declared once with [`wire_enum!`]; the generated type
//! and its [`Enumeration`] descriptor are registered in [`registry`].

#[macro_use]
mod wire_enum;

pub mod deal_status;
pub mod finance;
pub mod plan;
pub mod registry;
pub mod workflow_status;

pub use deal_status::DealStatus;
pub use finance::{CurrencyType, PayoutStatus};
pub use plan::{AwardType, CalculationType, MetricType, PeriodType, PlanType, TargetType};
pub use registry::{all, lookup, Code, EnumError, Enumeration};
pub use wire_enum::WireEnum;
pub use workflow_status::WorkflowStatus;
