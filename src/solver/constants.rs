// Defaults for the solver configuration
pub const DEFAULT_PRUNE_SLACK: usize = 1;
pub const DEFAULT_DIRECT_CAP: usize = 3;
pub const BASIC_DIRECT_CAP: usize = 4;
pub const DEFAULT_NEIGHBOR_RADIUS: i64 = 4;
pub const DEFAULT_WORKERS: usize = 4;
