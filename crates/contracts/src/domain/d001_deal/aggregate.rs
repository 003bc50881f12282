use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::{CurrencyType, DealStatus};
use crate::shared::normalize::PayloadSchema;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор сделки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DealId(pub Uuid);

impl DealId {
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
// Aggregate
// ============================================================================

/// Сделка
///
/// Enum-поля сериализуются числовыми кодами (формат backend) и принимаются
/// в любом виде: код, строка с кодом или символ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: DealId,

    /// Название сделки
    pub name: String,

    /// Клиент (аккаунт)
    pub account_name: String,

    /// Сумма сделки
    pub amount: f64,

    #[serde(default)]
    pub currency: CurrencyType,

    #[serde(default)]
    pub status: DealStatus,

    /// Ответственный менеджер
    pub owner: Option<String>,

    /// Ожидаемая дата закрытия
    pub expected_close_date: Option<NaiveDate>,
}

impl Deal {
    pub fn new_for_insert(
        name: String,
        account_name: String,
        amount: f64,
        currency: CurrencyType,
    ) -> Self {
        Self {
            id: DealId::new_v4(),
            name,
            account_name,
            amount,
            currency,
            status: DealStatus::New,
            owner: None,
            expected_close_date: None,
        }
    }
}

/// Enum-поля сделки
pub const DEAL_SCHEMA: PayloadSchema = PayloadSchema::new(
    "deal",
    &[
        ("currency", &CurrencyType::ENUMERATION),
        ("status", &DealStatus::ENUMERATION),
    ],
);
