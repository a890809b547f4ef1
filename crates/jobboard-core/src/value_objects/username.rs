//! Username rules shared by registration and login

/// Maximum username length in characters
pub const USERNAME_MAX_LEN: usize = 150;

/// Validate a username.
///
/// Usernames are 1-150 characters of letters, digits and `@ . + - _`.
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("Username is required".to_string());
    }

    if username.chars().count() > USERNAME_MAX_LEN {
        return Err(format!(
            "Username must be at most {USERNAME_MAX_LEN} characters"
        ));
    }

    let allowed = |c: char| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_');
    if !username.chars().all(allowed) {
        return Err(
            "Username may only contain letters, digits and @/./+/-/_ characters".to_string(),
        );
    }

    Ok(())
}
