wire_enum! {
    /// Стадия сделки в воронке продаж
    pub enum DealStatus as "DealStatus" {
        New => "NEW",
        Qualified => "QUALIFIED",
        Negotiation => "NEGOTIATION",
        ClosedWon => "CLOSED_WON",
        ClosedLost => "CLOSED_LOST",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(DealStatus::New.code(), 0);
        assert_eq!(DealStatus::ClosedWon.code(), 3);
        assert_eq!(DealStatus::ClosedLost.code(), 4);
        assert_eq!(DealStatus::ENUMERATION.code_of("CLOSED_WON").unwrap(), 3);
    }

    #[test]
    fn test_serde_uses_wire_code() {
        let json = serde_json::to_string(&DealStatus::ClosedWon).unwrap();
        assert_eq!(json, "3");

        let from_code: DealStatus = serde_json::from_str("3").unwrap();
        let from_text: DealStatus = serde_json::from_str("\"3\"").unwrap();
        let from_symbol: DealStatus = serde_json::from_str("\"CLOSED_WON\"").unwrap();
        assert_eq!(from_code, DealStatus::ClosedWon);
        assert_eq!(from_text, DealStatus::ClosedWon);
        assert_eq!(from_symbol, DealStatus::ClosedWon);
    }

    #[test]
    fn test_deserialize_garbage_falls_back() {
        let status: DealStatus = serde_json::from_str("\"won\"").unwrap();
        assert_eq!(status, DealStatus::New);
        let status: DealStatus = serde_json::from_str("42").unwrap();
        assert_eq!(status, DealStatus::New);
    }
}
