//! Registration and login input rules.

use crate::error::CoreError;

pub const MSG_REGISTRATION_REQUIRED: &str = "Name, email, and password are required";
pub const MSG_LOGIN_REQUIRED: &str = "Email and password are required";

/// Returned for every failed login so callers cannot tell whether the
/// email or the password was wrong.
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid email or password";

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Name, email and password must be present. Address and phone are optional.
pub fn validate_registration(name: &str, email: &str, password: &str) -> Result<(), CoreError> {
    if is_blank(name) || is_blank(email) || is_blank(password) {
        return Err(CoreError::validation(MSG_REGISTRATION_REQUIRED));
    }
    Ok(())
}

pub fn validate_login(email: &str, password: &str) -> Result<(), CoreError> {
    if is_blank(email) || is_blank(password) {
        return Err(CoreError::validation(MSG_LOGIN_REQUIRED));
    }
    Ok(())
}

/// The error every credential mismatch maps to.
pub fn invalid_credentials() -> CoreError {
    CoreError::Unauthorized(MSG_INVALID_CREDENTIALS.to_string())
}
