//! Payload-level rewriting driven by a [`PayloadSchema`]

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::{Coercion, PayloadSchema, RawValue};
use crate::enums::Enumeration;

/// Which side of the boundary the payload is heading to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// UI -> backend: symbols become codes
    Outbound,
    /// backend -> UI: codes become symbols
    Inbound,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Outbound, Direction::Inbound];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Outbound => "outbound",
            Self::Inbound => "inbound",
        }
    }

    /// Inverse of [`Direction::as_str`]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == code)
    }
}

/// One coerced field, addressed by path (`status`, `tiers[1].awardType`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCoercion {
    pub path: String,
    #[serde(flatten)]
    pub coercion: Coercion,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriteError {
    #[error("payload `{schema}` rejected: {} enum field(s) could not be normalized", .coercions.len())]
    Rejected {
        schema: &'static str,
        coercions: Vec<FieldCoercion>,
    },
}

/// Rewritten copy of a payload and every coercion applied to it
#[derive(Debug, Clone, PartialEq)]
pub struct Rewritten {
    pub schema: &'static str,
    pub payload: Value,
    pub coercions: Vec<FieldCoercion>,
}

impl Rewritten {
    pub fn is_exact(&self) -> bool {
        self.coercions.is_empty()
    }

    /// Reject the payload if anything had to be coerced
    pub fn into_strict(self) -> Result<Value, RewriteError> {
        if self.coercions.is_empty() {
            Ok(self.payload)
        } else {
            Err(RewriteError::Rejected {
                schema: self.schema,
                coercions: self.coercions,
            })
        }
    }

    fn into_logged(self) -> Value {
        for c in &self.coercions {
            log::warn!("{}: {} at `{}`", self.schema, c.coercion, c.path);
        }
        self.payload
    }
}

impl PayloadSchema {
    /// Rewrite every declared enum field of `payload`.
    ///
    /// The input is never modified. Fields outside the table, `null` fields and
    /// non-object payloads are copied as-is. Arrays whose items are all
    /// objects are rewritten one level deep with the same table; any other
    /// array is copied untouched.
    pub fn rewrite(&self, payload: &Value, direction: Direction) -> Rewritten {
        let mut coercions = Vec::new();
        let payload = match payload {
            Value::Object(record) => {
                Value::Object(self.rewrite_record(record, direction, None, &mut coercions))
            }
            other => other.clone(),
        };
        Rewritten {
            schema: self.name(),
            payload,
            coercions,
        }
    }

    /// Outbound rewrite, coercions are only logged
    pub fn to_wire(&self, payload: &Value) -> Value {
        self.rewrite(payload, Direction::Outbound).into_logged()
    }

    /// Inbound rewrite, coercions are only logged
    pub fn to_ui(&self, payload: &Value) -> Value {
        self.rewrite(payload, Direction::Inbound).into_logged()
    }

    /// `parent` is `Some` for nested sub-records, which are not descended into.
    fn rewrite_record(
        &self,
        record: &Map<String, Value>,
        direction: Direction,
        parent: Option<&str>,
        coercions: &mut Vec<FieldCoercion>,
    ) -> Map<String, Value> {
        let mut out = Map::with_capacity(record.len());
        for (key, value) in record {
            let path = match parent {
                Some(p) => format!("{p}.{key}"),
                None => key.clone(),
            };
            let rewritten = match (self.enumeration_for(key), value) {
                (_, Value::Null) => Value::Null,
                (Some(e), _) => rewrite_field(e, value, direction, path, coercions),
                (None, Value::Array(items)) if parent.is_none() => {
                    self.rewrite_nested(items, direction, &path, coercions)
                }
                _ => value.clone(),
            };
            out.insert(key.clone(), rewritten);
        }
        out
    }

    fn rewrite_nested(
        &self,
        items: &[Value],
        direction: Direction,
        path: &str,
        coercions: &mut Vec<FieldCoercion>,
    ) -> Value {
        if items.is_empty() || !items.iter().all(Value::is_object) {
            return Value::Array(items.to_vec());
        }
        let rewritten = items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(record) => {
                    let item_path = format!("{path}[{i}]");
                    Value::Object(self.rewrite_record(
                        record,
                        direction,
                        Some(&item_path),
                        coercions,
                    ))
                }
                other => other.clone(),
            })
            .collect();
        Value::Array(rewritten)
    }
}

fn rewrite_field(
    enumeration: &Enumeration,
    value: &Value,
    direction: Direction,
    path: String,
    coercions: &mut Vec<FieldCoercion>,
) -> Value {
    let raw = RawValue::from_json(value);
    let (rewritten, coercion) = match direction {
        Direction::Outbound => {
            let n = enumeration.encode(&raw);
            (Value::from(n.value), n.coercion)
        }
        Direction::Inbound => {
            let n = enumeration.normalize_symbol(&raw);
            (Value::from(n.value), n.coercion)
        }
    };
    if let Some(coercion) = coercion {
        coercions.push(FieldCoercion { path, coercion });
    }
    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{AwardType, CurrencyType, DealStatus, PlanType};
    use serde_json::json;

    const PLAN: PayloadSchema = PayloadSchema::new(
        "plan",
        &[
            ("planType", &PlanType::ENUMERATION),
            ("awardType", &AwardType::ENUMERATION),
        ],
    );

    const DEAL: PayloadSchema = PayloadSchema::new(
        "deal",
        &[
            ("status", &DealStatus::ENUMERATION),
            ("currency", &CurrencyType::ENUMERATION),
        ],
    );

    #[test]
    fn test_direction_codes_match_serde() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_code(d.as_str()), Some(d));
            assert_eq!(serde_json::to_value(d).unwrap(), json!(d.as_str()));
        }
        assert_eq!(Direction::from_code("Outbound"), None);
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        let input = json!({ "a": 1, "planType": "RoleBased" });
        let out = PLAN.rewrite(&input, Direction::Outbound);
        assert_eq!(out.payload, json!({ "a": 1, "planType": 1 }));
        assert!(out.is_exact());
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = json!({ "planType": "KickerBased" });
        let snapshot = input.clone();
        let _ = PLAN.rewrite(&input, Direction::Outbound);
        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_missing_and_null_fields_are_not_set() {
        let out = DEAL.rewrite(&json!({ "name": "x" }), Direction::Outbound);
        assert_eq!(out.payload, json!({ "name": "x" }));

        let out = DEAL.rewrite(&json!({ "status": null }), Direction::Outbound);
        assert_eq!(out.payload, json!({ "status": null }));
        assert!(out.is_exact());
    }

    #[test]
    fn test_inbound_converts_codes_and_numeric_strings() {
        let out = DEAL.rewrite(
            &json!({ "status": 3, "currency": "1" }),
            Direction::Inbound,
        );
        assert_eq!(
            out.payload,
            json!({ "status": "CLOSED_WON", "currency": "EUR" })
        );
    }

    #[test]
    fn test_deal_round_trip() {
        let deal = json!({ "name": "ACME renewal", "amount": 1200.5, "status": "CLOSED_WON" });
        let wire = DEAL.to_wire(&deal);
        assert_eq!(wire["status"], json!(3));
        let back = DEAL.to_ui(&wire);
        assert_eq!(back, deal);
    }

    #[test]
    fn test_nested_tiers_are_rewritten() {
        let input = json!({
            "planType": "TieredBased",
            "tiers": [
                { "awardType": "Cash", "min": 0 },
                { "awardType": "Points", "min": 100 }
            ]
        });
        let out = PLAN.rewrite(&input, Direction::Outbound);
        assert_eq!(
            out.payload,
            json!({
                "planType": 4,
                "tiers": [
                    { "awardType": 0, "min": 0 },
                    { "awardType": 1, "min": 100 }
                ]
            })
        );
    }

    #[test]
    fn test_malformed_nested_array_is_left_as_is() {
        let input = json!({ "tiers": [ { "awardType": "Cash" }, 5 ] });
        let out = PLAN.rewrite(&input, Direction::Outbound);
        assert_eq!(out.payload, input);
        assert!(out.is_exact());
    }

    #[test]
    fn test_nesting_stops_after_one_level() {
        let input = json!({
            "tiers": [ { "awardType": "Cash", "children": [ { "awardType": "Cash" } ] } ]
        });
        let out = PLAN.rewrite(&input, Direction::Outbound);
        assert_eq!(
            out.payload,
            json!({ "tiers": [ { "awardType": 0, "children": [ { "awardType": "Cash" } ] } ] })
        );
    }

    #[test]
    fn test_coercions_are_reported_with_path() {
        let input = json!({
            "planType": "Bogus",
            "tiers": [ { "awardType": 17 } ]
        });
        let out = PLAN.rewrite(&input, Direction::Outbound);
        assert_eq!(out.payload["planType"], json!(1));
        assert_eq!(out.payload["tiers"][0]["awardType"], json!(1));

        let paths: Vec<_> = out.coercions.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(paths, ["planType", "tiers[0].awardType"]);

        let err = out.into_strict().unwrap_err();
        assert_eq!(
            err.to_string(),
            "payload `plan` rejected: 2 enum field(s) could not be normalized"
        );
    }

    #[test]
    fn test_inbound_fallback() {
        let out = PLAN.rewrite(&json!({ "planType": 99 }), Direction::Inbound);
        assert_eq!(out.payload, json!({ "planType": "TargetBased" }));
        assert_eq!(out.coercions.len(), 1);
    }

    #[test]
    fn test_non_object_payload_is_copied() {
        let out = PLAN.rewrite(&json!([1, 2]), Direction::Inbound);
        assert_eq!(out.payload, json!([1, 2]));
        assert!(out.is_exact());
    }

    #[test]
    fn test_field_coercion_serializes_flat() {
        let c = FieldCoercion {
            path: "status".to_string(),
            coercion: Coercion::OutOfDomain {
                enumeration: "DealStatus",
                raw: "9".to_string(),
            },
        };
        assert_eq!(
            serde_json::to_value(&c).unwrap(),
            json!({
                "path": "status",
                "kind": "out_of_domain",
                "enumeration": "DealStatus",
                "raw": "9"
            })
        );
    }
}
