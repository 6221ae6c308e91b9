use poem::session::{CookieConfig, CookieSession};

/// Initialize cookie-backed session storage.
///
/// The cart and the authenticated user id live in the session, so every
/// route that touches the cart goes through this middleware.
pub fn init_session() -> CookieSession {
    CookieSession::new(CookieConfig::default())
}
