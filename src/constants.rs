// =============================================================================
// Error Messages
// =============================================================================

/// Error message for a failed login (missing email or wrong password)
pub const ERR_INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Error message for a by-id profile fetch with no matching row
pub const ERR_RECORD_NOT_FOUND: &str = "record not found";

// =============================================================================
// Session Storage Keys
// =============================================================================
// These mirror the browser localStorage keys the web client persisted.

/// Role of the signed-in account ("patient" or "doctor")
pub const KEY_USER_TYPE: &str = "userType";

/// Identifier of the signed-in account
pub const KEY_USER_ID: &str = "userId";

/// Email of the signed-in account
pub const KEY_USER_EMAIL: &str = "userEmail";

/// Display name of the signed-in account
pub const KEY_USER_NAME: &str = "userName";

/// Phone number of the signed-in account
pub const KEY_USER_PHONE: &str = "userPhone";
