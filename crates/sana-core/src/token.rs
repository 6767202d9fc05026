use uuid::Uuid;

/// Generate an unguessable session-access token.
///
/// A v4 UUID in simple form: 122 random bits, URL-safe, and opaque. The
/// token is the only credential for joining a session room, so it must
/// never be derived from appointment data.
pub fn new_session_token() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Derive the session room path for a token.
pub fn session_url(token: &str) -> String {
    format!("/sesiones/{token}")
}
