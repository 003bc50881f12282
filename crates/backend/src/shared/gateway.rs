//! Шлюз нормализации payload между UI и backend
//!
//! Вся логика преобразования живёт в `contracts`; здесь только политика
//! обработки приведённых значений (lenient / warn / strict) и маппинг
//! ошибок в HTTP-ответы.

use axum::http::StatusCode;
use axum::Json;
use contracts::domain::PayloadKind;
use contracts::enums::EnumError;
use contracts::shared::normalize::{Direction, FieldCoercion, RewriteError};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::config::CoercionPolicy;

/// Состояние приложения, общее для всех handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub policy: CoercionPolicy,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("unknown payload kind: {0}")]
    UnknownPayloadKind(String),

    #[error("unknown direction: {0}")]
    UnknownDirection(String),

    #[error(transparent)]
    Enum(#[from] EnumError),

    #[error("payload must be a JSON object")]
    NotAnObject,

    #[error(transparent)]
    Rejected(#[from] RewriteError),
}

/// Тело ответа с ошибкой
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub coercions: Vec<FieldCoercion>,
}

impl From<GatewayError> for (StatusCode, Json<ApiError>) {
    fn from(err: GatewayError) -> Self {
        let status = match &err {
            GatewayError::UnknownPayloadKind(_)
            | GatewayError::UnknownDirection(_)
            | GatewayError::Enum(_) => StatusCode::NOT_FOUND,
            GatewayError::NotAnObject => StatusCode::BAD_REQUEST,
            GatewayError::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        let message = err.to_string();
        let coercions = match err {
            GatewayError::Rejected(RewriteError::Rejected { coercions, .. }) => coercions,
            _ => Vec::new(),
        };
        (status, Json(ApiError { message, coercions }))
    }
}

/// Результат нормализации
#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub kind: PayloadKind,
    pub direction: Direction,
    pub payload: Value,
    pub coercions: Vec<FieldCoercion>,
}

pub fn parse_direction(s: &str) -> Result<Direction, GatewayError> {
    Direction::from_code(s).ok_or_else(|| GatewayError::UnknownDirection(s.to_string()))
}

pub fn parse_kind(s: &str) -> Result<PayloadKind, GatewayError> {
    PayloadKind::from_code(s).ok_or_else(|| GatewayError::UnknownPayloadKind(s.to_string()))
}

/// Переписать enum-поля payload в нужном направлении с учётом политики.
///
/// Приведённые значения возвращаются в ответе при любой политике; `warn`
/// дополнительно пишет каждое в лог, `strict` превращает их в ошибку.
pub fn normalize(
    kind: PayloadKind,
    direction: Direction,
    payload: &Value,
    policy: CoercionPolicy,
) -> Result<NormalizeResponse, GatewayError> {
    if !payload.is_object() {
        return Err(GatewayError::NotAnObject);
    }

    let rewritten = kind.schema().rewrite(payload, direction);

    match policy {
        CoercionPolicy::Lenient => {}
        CoercionPolicy::Warn => {
            for c in &rewritten.coercions {
                tracing::warn!(
                    payload = kind.as_str(),
                    direction = direction.as_str(),
                    path = %c.path,
                    "coerced enum value: {}",
                    c.coercion
                );
            }
        }
        CoercionPolicy::Strict => {
            if !rewritten.is_exact() {
                tracing::warn!(
                    payload = kind.as_str(),
                    direction = direction.as_str(),
                    count = rewritten.coercions.len(),
                    "payload rejected"
                );
            }
            let payload = rewritten.into_strict()?;
            return Ok(NormalizeResponse {
                kind,
                direction,
                payload,
                coercions: Vec::new(),
            });
        }
    }

    Ok(NormalizeResponse {
        kind,
        direction,
        payload: rewritten.payload,
        coercions: rewritten.coercions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_direction() {
        assert_eq!(parse_direction("outbound").unwrap(), Direction::Outbound);
        assert_eq!(parse_direction("inbound").unwrap(), Direction::Inbound);
        assert!(matches!(
            parse_direction("sideways"),
            Err(GatewayError::UnknownDirection(_))
        ));
    }

    #[test]
    fn test_lenient_keeps_coercions_in_response() {
        let res = normalize(
            PayloadKind::Deal,
            Direction::Outbound,
            &json!({ "status": "WON" }),
            CoercionPolicy::Lenient,
        )
        .unwrap();
        assert_eq!(res.payload, json!({ "status": 1 }));
        assert_eq!(res.coercions.len(), 1);
    }

    #[test]
    fn test_strict_rejects_coerced_payload() {
        let err = normalize(
            PayloadKind::Deal,
            Direction::Inbound,
            &json!({ "status": 12 }),
            CoercionPolicy::Strict,
        )
        .unwrap_err();
        let (status, Json(body)) = <(StatusCode, Json<ApiError>)>::from(err);
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.coercions.len(), 1);
        assert_eq!(body.coercions[0].path, "status");
    }

    #[test]
    fn test_strict_accepts_clean_payload() {
        let res = normalize(
            PayloadKind::Deal,
            Direction::Inbound,
            &json!({ "status": 3, "currency": 0 }),
            CoercionPolicy::Strict,
        )
        .unwrap();
        assert_eq!(res.payload, json!({ "status": "CLOSED_WON", "currency": "USD" }));
    }

    #[test]
    fn test_oversized_code_is_out_of_domain() {
        let res = normalize(
            PayloadKind::Deal,
            Direction::Inbound,
            &json!({ "status": "99999999999999999999", "currency": u64::MAX }),
            CoercionPolicy::Lenient,
        )
        .unwrap();
        assert_eq!(res.payload, json!({ "status": "NEW", "currency": "USD" }));
        assert_eq!(res.coercions.len(), 2);
        for c in &res.coercions {
            let body = serde_json::to_value(c).unwrap();
            assert_eq!(body["kind"], json!("out_of_domain"), "path {}", c.path);
        }
        let currency = res.coercions.iter().find(|c| c.path == "currency").unwrap();
        assert_eq!(
            serde_json::to_value(currency).unwrap()["raw"],
            json!("18446744073709551615")
        );
    }

    #[test]
    fn test_non_object_payload() {
        let err = normalize(
            PayloadKind::Payout,
            Direction::Outbound,
            &json!("Paid"),
            CoercionPolicy::Warn,
        )
        .unwrap_err();
        let (status, _) = <(StatusCode, Json<ApiError>)>::from(err);
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
