wire_enum! {
    /// Валюта суммы
    pub enum CurrencyType as "CurrencyType" {
        Usd => "USD",
        Eur => "EUR",
        Gbp => "GBP",
        Inr => "INR",
        Rub => "RUB",
    }
}

wire_enum! {
    /// Статус выплаты вознаграждения
    pub enum PayoutStatus as "PayoutStatus" {
        Pending => "Pending",
        Approved => "Approved",
        Processing => "Processing",
        Paid => "Paid",
        OnHold => "OnHold",
        Cancelled => "Cancelled",
    }
}
