use uuid::Uuid;

/// Generates a session token for a suggest → retrieve sequence.
///
/// The token is a random UUID v4 in lowercase hyphenated form. Reuse the same
/// value for a [`suggest`](crate::SearchBox::suggest) call and the
/// [`retrieve`](crate::SearchBox::retrieve) calls that follow it.
///
/// # Panics
///
/// Panics if the operating system's secure random source is unavailable.
pub fn new_session_token() -> String {
    Uuid::new_v4().hyphenated().to_string()
}
