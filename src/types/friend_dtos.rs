use serde::{Deserialize, Serialize};
use validator::Validate;

/// Wire-level representation of a friend. The handler layer only ever looks
/// at `id`; the remaining fields pass through to the service untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FriendsDTO {
    pub id: Option<i64>,
    #[validate(length(max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 100))]
    pub relationship: Option<String>,
}

// Two DTOs are the same entity iff both carry the same non-null id. A DTO
// without an id identifies nothing, so it is not equal to anything, itself
// included. Intentionally no `Eq`: the relation is not reflexive.
impl PartialEq for FriendsDTO {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dtos_with_equal_ids_are_equal() {
        let a = FriendsDTO {
            id: Some(1),
            name: Some("Alice".to_string()),
            ..Default::default()
        };
        let b = FriendsDTO {
            id: Some(1),
            name: Some("Bob".to_string()),
            ..Default::default()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn changing_an_id_breaks_equality() {
        let a = FriendsDTO {
            id: Some(1),
            ..Default::default()
        };
        let mut b = FriendsDTO {
            id: Some(1),
            ..Default::default()
        };
        assert_eq!(a, b);
        b.id = Some(2);
        assert_ne!(a, b);
    }

    #[test]
    fn dto_without_id_is_equal_to_nothing() {
        let a = FriendsDTO::default();
        let b = FriendsDTO::default();
        assert_ne!(a, b);
        assert_ne!(a, a.clone());
        let c = FriendsDTO {
            id: Some(2),
            ..Default::default()
        };
        assert_ne!(a, c);
        assert_ne!(c, a);
    }
}
