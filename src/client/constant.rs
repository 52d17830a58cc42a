pub const SITE_NAME: &str = "The Century Screening Room";

/// Local storage key holding the bearer token and the user it belongs to.
pub const SESSION_STORAGE_KEY: &str = "screening-room-session";
