/// Storage key holding the signed-in user
pub const SESSION_KEY: &str = "user";

/// Storage key holding the schedule between runs
pub const EVENTS_KEY: &str = "events";

/// Team label given to new events
pub const DEFAULT_TEAM: &str = "All Teams";

/// Simulated latency of login and register calls
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;

/// Simulated latency of user lookups
pub const DEFAULT_FETCH_DELAY_MS: u64 = 500;

/// Days shown on either side of today in the week strip
pub const WEEK_STRIP_RADIUS: i64 = 3;

/// Events shown on the home dashboard
pub const UPCOMING_LIMIT: usize = 5;

/// Storage key holding the mock backend's accounts
pub const USERS_KEY: &str = "users";

/// bcrypt cost for the mock directory's password hashes
pub const DEFAULT_BCRYPT_COST: u32 = 6;
