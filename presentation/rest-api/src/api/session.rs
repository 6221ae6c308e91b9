use poem::session::Session;
use uuid::Uuid;

use business::domain::cart::model::CartState;
use business::domain::shared::value_objects::UserId;

const CART_KEY: &str = "cart";
const MERGED_KEY: &str = "cart_merged";
const USER_KEY: &str = "user_id";

/// Reads the cart state out of the session. Missing or unreadable keys
/// fall back to an empty, unmerged cart.
pub fn load_cart_state(session: &Session) -> CartState {
    CartState {
        cart: session.get(CART_KEY).unwrap_or_default(),
        merged: session.get(MERGED_KEY).unwrap_or(false),
    }
}

/// Writes the cart state back. Always sets both keys so the session is
/// marked dirty even when only the merge guard changed.
pub fn store_cart_state(session: &Session, state: &CartState) {
    session.set(CART_KEY, &state.cart);
    session.set(MERGED_KEY, state.merged);
}

pub fn current_user(session: &Session) -> Option<UserId> {
    session.get::<Uuid>(USER_KEY).map(UserId::new)
}

/// Marks the session as authenticated and re-arms the merge guard so the
/// next cart operation folds the session cart into the stored one.
pub fn log_in(session: &Session, user_id: UserId) {
    session.set(USER_KEY, user_id.as_uuid());
    session.set(MERGED_KEY, false);
}

/// Drops the whole session, cart included.
pub fn log_out(session: &Session) {
    session.purge();
}
