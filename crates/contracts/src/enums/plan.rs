//! Перечисления, описывающие параметры плана мотивации

wire_enum! {
    /// Тип плана мотивации
    pub enum PlanType as "PlanType" {
        TargetBased => "TargetBased",
        RoleBased => "RoleBased",
        ProjectBased => "ProjectBased",
        KickerBased => "KickerBased",
        TieredBased => "TieredBased",
    }
}

wire_enum! {
    /// Период расчёта плана
    pub enum PeriodType as "PeriodType" {
        Monthly => "Monthly",
        Quarterly => "Quarterly",
        HalfYearly => "HalfYearly",
        Yearly => "Yearly",
    }
}

wire_enum! {
    /// Показатель, по которому оценивается выполнение
    pub enum MetricType as "MetricType" {
        Revenue => "Revenue",
        Units => "Units",
        Margin => "Margin",
        DealCount => "DealCount",
        Collections => "Collections",
    }
}

wire_enum! {
    /// Как задана цель: суммой, процентом или количеством
    pub enum TargetType as "TargetType" {
        Amount => "Amount",
        Percentage => "Percentage",
        Count => "Count",
    }
}

wire_enum! {
    /// Способ расчёта вознаграждения
    pub enum CalculationType as "CalculationType" {
        Flat => "Flat",
        Percentage => "Percentage",
        Slab => "Slab",
        Linear => "Linear",
    }
}

wire_enum! {
    /// Форма вознаграждения
    pub enum AwardType as "AwardType" {
        Cash => "Cash",
        Points => "Points",
        Voucher => "Voucher",
        Gift => "Gift",
    }
}
