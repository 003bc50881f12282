wire_enum! {
    /// Статус согласования плана мотивации
    pub enum WorkflowStatus as "WorkflowStatus" {
        Draft => "Draft",
        Submitted => "Submitted",
        Approved => "Approved",
        Rejected => "Rejected",
        Published => "Published",
        Archived => "Archived",
    }
}
