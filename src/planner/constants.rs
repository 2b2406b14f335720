/// Label of the first planned day.
pub const TODAY_LABEL: &str = "Today";

/// Label of the second planned day.
pub const TOMORROW_LABEL: &str = "Tomorrow";

/// Days planned by default, in order.
pub const DEFAULT_DAY_LABELS: [&str; 2] = [TODAY_LABEL, TOMORROW_LABEL];
