use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::d002_incentive_plan::IncentivePlanId;
use crate::enums::{AwardType, CurrencyType, PayoutStatus, PeriodType};
use crate::shared::normalize::PayloadSchema;

/// Уникальный идентификатор выплаты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayoutId(pub Uuid);

impl PayoutId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

/// Выплата по плану мотивации за период
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payout {
    pub id: PayoutId,
    pub plan_id: IncentivePlanId,
    /// Получатель (сотрудник)
    pub participant: String,
    #[serde(default)]
    pub period_type: PeriodType,
    pub period_start: NaiveDate,
    pub amount: f64,
    #[serde(default)]
    pub currency: CurrencyType,
    #[serde(default)]
    pub award_type: AwardType,
    #[serde(default)]
    pub status: PayoutStatus,
}

pub const PAYOUT_SCHEMA: PayloadSchema = PayloadSchema::new(
    "payout",
    &[
        ("periodType", &PeriodType::ENUMERATION),
        ("currency", &CurrencyType::ENUMERATION),
        ("awardType", &AwardType::ENUMERATION),
        ("status", &PayoutStatus::ENUMERATION),
    ],
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::normalize::Direction;
    use serde_json::json;

    #[test]
    fn test_status_resolves_against_payout_statuses() {
        let out = PAYOUT_SCHEMA.rewrite(&json!({ "status": "Paid" }), Direction::Outbound);
        assert_eq!(out.payload, json!({ "status": 3 }));

        // "CLOSED_WON" - статус сделки, а не выплаты
        let out = PAYOUT_SCHEMA.rewrite(&json!({ "status": "CLOSED_WON" }), Direction::Outbound);
        assert_eq!(out.payload, json!({ "status": 1 }));
        assert_eq!(out.coercions.len(), 1);
    }

    #[test]
    fn test_deserialize_wire_payout() {
        let payout: Payout = serde_json::from_value(json!({
            "id": "9a3f6a52-1c1b-4f43-9d43-0f5a3b7c2d10",
            "planId": "5f1d8c2a-7a0e-4d7b-8f1e-2c9b6a4d3e21",
            "participant": "a.petrova",
            "periodType": 1,
            "periodStart": "2026-07-01",
            "amount": 1250.0,
            "currency": 4,
            "awardType": "0",
            "status": 4
        }))
        .unwrap();
        assert_eq!(payout.period_type, PeriodType::Quarterly);
        assert_eq!(payout.currency, CurrencyType::Rub);
        assert_eq!(payout.award_type, AwardType::Cash);
        assert_eq!(payout.status, PayoutStatus::OnHold);
    }
}
