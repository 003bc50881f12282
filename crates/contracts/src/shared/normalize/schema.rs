use crate::enums::Enumeration;

/// Field name -> enumeration table of one payload type
///
/// Declared as a constant next to the DTO it describes, e.g.
///
/// ```rust,ignore
/// pub const DEAL_SCHEMA: PayloadSchema = PayloadSchema::new(
///     "deal",
///     &[("status", &DealStatus::ENUMERATION), ("currency", &CurrencyType::ENUMERATION)],
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PayloadSchema {
    name: &'static str,
    fields: &'static [(&'static str, &'static Enumeration)],
}

impl PayloadSchema {
    pub const fn new(
        name: &'static str,
        fields: &'static [(&'static str, &'static Enumeration)],
    ) -> Self {
        Self { name, fields }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &'static [(&'static str, &'static Enumeration)] {
        self.fields
    }

    pub fn enumeration_for(&self, field: &str) -> Option<&'static Enumeration> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, e)| *e)
    }
}
