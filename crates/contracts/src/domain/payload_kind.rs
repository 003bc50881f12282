use serde::Serialize;

use super::d001_deal::DEAL_SCHEMA;
use super::d002_incentive_plan::INCENTIVE_PLAN_SCHEMA;
use super::d003_payout::PAYOUT_SCHEMA;
use crate::shared::normalize::PayloadSchema;

/// Типы payload, для которых объявлена схема enum-полей
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadKind {
    Deal,
    IncentivePlan,
    Payout,
}

impl PayloadKind {
    pub fn all() -> Vec<PayloadKind> {
        vec![
            PayloadKind::Deal,
            PayloadKind::IncentivePlan,
            PayloadKind::Payout,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadKind::Deal => "deal",
            PayloadKind::IncentivePlan => "incentive_plan",
            PayloadKind::Payout => "payout",
        }
    }

    /// Парсинг из сегмента URL
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|kind| kind.as_str() == code)
    }

    pub fn schema(&self) -> &'static PayloadSchema {
        match self {
            PayloadKind::Deal => &DEAL_SCHEMA,
            PayloadKind::IncentivePlan => &INCENTIVE_PLAN_SCHEMA,
            PayloadKind::Payout => &PAYOUT_SCHEMA,
        }
    }
}
