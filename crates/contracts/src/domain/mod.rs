pub mod d001_deal;
pub mod d002_incentive_plan;
pub mod d003_payout;
pub mod payload_kind;

pub use payload_kind::PayloadKind;
