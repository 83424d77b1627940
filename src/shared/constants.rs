/// Cookie carrying the one-shot notification shown after a mutation
pub const FLASH_COOKIE: &str = "flash";

/// Lifetime of an unread notification cookie
pub const FLASH_MAX_AGE_SECS: u32 = 60;

// =============================================================================
// STORE DEFAULTS
// =============================================================================

/// Status label counted as "running" by the dashboard
pub const EVENT_STATUS_ACTIVE: &str = "Aktif";

/// Contribution kind stored when the sponsorship form leaves it blank
pub const DEFAULT_CONTRIBUTION_KIND: &str = "Maddi";

/// Number of upcoming events listed on the dashboard
pub const UPCOMING_EVENT_LIMIT: i64 = 5;
