use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::{
    AwardType, CalculationType, CurrencyType, MetricType, PeriodType, PlanType, TargetType,
    WorkflowStatus,
};
use crate::shared::normalize::PayloadSchema;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор плана мотивации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IncentivePlanId(pub Uuid);

impl IncentivePlanId {
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

// ============================================================================
// Nested table
// ============================================================================

/// Ступень (tier) плана: диапазон выполнения и вознаграждение за него
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanTier {
    /// Нижняя граница выполнения, %
    pub min_achievement: f64,

    /// Верхняя граница выполнения, % (None = без ограничения)
    pub max_achievement: Option<f64>,

    #[serde(default)]
    pub calculation_type: CalculationType,

    #[serde(default)]
    pub award_type: AwardType,

    /// Размер вознаграждения (сумма, процент или баллы, по calculation_type)
    pub payout_value: f64,
}

// ============================================================================
// Aggregate
// ============================================================================

/// План мотивации (только метаданные, расчёт выполняется на backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncentivePlan {
    pub id: IncentivePlanId,

    pub name: String,

    pub description: Option<String>,

    #[serde(default)]
    pub plan_type: PlanType,

    #[serde(default)]
    pub period_type: PeriodType,

    #[serde(default)]
    pub metric_type: MetricType,

    #[serde(default)]
    pub target_type: TargetType,

    /// Целевое значение в единицах target_type
    pub target_value: f64,

    #[serde(default)]
    pub calculation_type: CalculationType,

    #[serde(default)]
    pub award_type: AwardType,

    #[serde(default)]
    pub currency: CurrencyType,

    /// Статус согласования
    #[serde(default)]
    pub status: WorkflowStatus,

    pub effective_from: NaiveDate,

    pub effective_to: Option<NaiveDate>,

    #[serde(default)]
    pub tiers: Vec<PlanTier>,
}

impl IncentivePlan {
    pub fn new_for_insert(
        name: String,
        plan_type: PlanType,
        period_type: PeriodType,
        effective_from: NaiveDate,
    ) -> Self {
        Self {
            id: IncentivePlanId::new_v4(),
            name,
            description: None,
            plan_type,
            period_type,
            metric_type: MetricType::default(),
            target_type: TargetType::default(),
            target_value: 0.0,
            calculation_type: CalculationType::default(),
            award_type: AwardType::default(),
            currency: CurrencyType::default(),
            status: WorkflowStatus::Draft,
            effective_from,
            effective_to: None,
            tiers: Vec::new(),
        }
    }
}

/// Enum-поля плана. Поля ступеней (`tiers[*]`) берутся из той же таблицы.
pub const INCENTIVE_PLAN_SCHEMA: PayloadSchema = PayloadSchema::new(
    "incentive_plan",
    &[
        ("planType", &PlanType::ENUMERATION),
        ("periodType", &PeriodType::ENUMERATION),
        ("metricType", &MetricType::ENUMERATION),
        ("targetType", &TargetType::ENUMERATION),
        ("calculationType", &CalculationType::ENUMERATION),
        ("awardType", &AwardType::ENUMERATION),
        ("currency", &CurrencyType::ENUMERATION),
        ("status", &WorkflowStatus::ENUMERATION),
    ],
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::normalize::Direction;
    use serde_json::json;

    fn ui_payload() -> serde_json::Value {
        json!({
            "id": "5f1d8c2a-7a0e-4d7b-8f1e-2c9b6a4d3e21",
            "name": "Q3 enterprise kicker",
            "description": null,
            "planType": "TieredBased",
            "periodType": "Quarterly",
            "metricType": "Revenue",
            "targetType": "Amount",
            "targetValue": 500000.0,
            "calculationType": "Slab",
            "awardType": "Cash",
            "currency": "USD",
            "status": "Submitted",
            "effectiveFrom": "2026-07-01",
            "effectiveTo": "2026-09-30",
            "tiers": [
                {
                    "minAchievement": 0.0,
                    "maxAchievement": 100.0,
                    "calculationType": "Percentage",
                    "awardType": "Cash",
                    "payoutValue": 2.5
                },
                {
                    "minAchievement": 100.0,
                    "maxAchievement": null,
                    "calculationType": "Flat",
                    "awardType": "Voucher",
                    "payoutValue": 1000.0
                }
            ]
        })
    }

    #[test]
    fn test_outbound_rewrites_plan_and_tiers() {
        let wire = INCENTIVE_PLAN_SCHEMA.rewrite(&ui_payload(), Direction::Outbound);
        assert!(wire.is_exact());
        let p = &wire.payload;
        assert_eq!(p["planType"], json!(4));
        assert_eq!(p["periodType"], json!(1));
        assert_eq!(p["calculationType"], json!(2));
        assert_eq!(p["status"], json!(1));
        assert_eq!(p["tiers"][0]["calculationType"], json!(1));
        assert_eq!(p["tiers"][1]["awardType"], json!(2));
        assert_eq!(p["tiers"][1]["maxAchievement"], json!(null));
        assert_eq!(p["targetValue"], json!(500000.0));
    }

    #[test]
    fn test_wire_payload_deserializes_into_aggregate() {
        let wire = INCENTIVE_PLAN_SCHEMA.to_wire(&ui_payload());
        let plan: IncentivePlan = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(plan.plan_type, PlanType::TieredBased);
        assert_eq!(plan.status, WorkflowStatus::Submitted);
        assert_eq!(plan.tiers.len(), 2);
        assert_eq!(plan.tiers[1].award_type, AwardType::Voucher);

        assert_eq!(serde_json::to_value(&plan).unwrap(), wire);
    }

    #[test]
    fn test_inbound_restores_symbols() {
        let ui = ui_payload();
        let wire = INCENTIVE_PLAN_SCHEMA.to_wire(&ui);
        assert_eq!(INCENTIVE_PLAN_SCHEMA.to_ui(&wire), ui);
    }

    #[test]
    fn test_new_plan_is_draft() {
        let plan = IncentivePlan::new_for_insert(
            "Role plan".into(),
            PlanType::RoleBased,
            PeriodType::Yearly,
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        );
        assert_eq!(plan.status, WorkflowStatus::Draft);
        assert!(plan.tiers.is_empty());
    }
}
