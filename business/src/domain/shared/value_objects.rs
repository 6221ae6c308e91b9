use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a registered account.
/// Used to isolate cart rows between users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner identifier.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_inner_uuid() {
        let id = Uuid::new_v4();
        let user_id = UserId::new(id);
        assert_eq!(user_id.as_uuid(), id);
    }

    #[test]
    fn should_display_as_uuid_string() {
        let id = Uuid::new_v4();
        let user_id = UserId::new(id);
        assert_eq!(format!("{}", user_id), id.to_string());
    }

    #[test]
    fn should_compare_user_ids_for_equality() {
        let id = Uuid::new_v4();
        let user_id_1 = UserId::new(id);
        let user_id_2 = UserId::new(id);
        let user_id_3 = UserId::new(Uuid::new_v4());

        assert_eq!(user_id_1, user_id_2);
        assert_ne!(user_id_1, user_id_3);
    }

    #[test]
    fn should_convert_from_uuid() {
        let id = Uuid::new_v4();
        let user_id: UserId = id.into();
        assert_eq!(user_id.as_uuid(), id);
    }
}
