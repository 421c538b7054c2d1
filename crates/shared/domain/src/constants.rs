//! Domain-level constants.
//!
//! These constants define the storage limits of the user record and the
//! formats shared by every surface that reads or writes one.

// =============================================================================
// Field limits
// =============================================================================

/// Maximum length of the business code
pub const MAX_CODE_LENGTH: usize = 50;

/// Maximum length of the full name
pub const MAX_FULL_NAME_LENGTH: usize = 200;

/// Maximum length of the email address
pub const MAX_EMAIL_LENGTH: usize = 200;

/// Maximum length of the phone number
pub const MAX_PHONE_NUMBER_LENGTH: usize = 20;

/// Maximum length of the postal address
pub const MAX_ADDRESS_LENGTH: usize = 500;

// =============================================================================
// Formats
// =============================================================================

/// Calendar date format used on the wire and in HTML date inputs
pub const DATE_FORMAT: &str = "%Y-%m-%d";
