use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::types::FriendsDTO;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Friend {
    pub id: i64,
    pub name: Option<String>,
    pub relationship: Option<String>,
}

impl Friend {
    /// Applies the non-null fields of `dto` onto this row; null fields leave
    /// the stored value unchanged (merge-patch semantics).
    pub fn merge(&mut self, dto: &FriendsDTO) {
        if let Some(name) = &dto.name {
            self.name = Some(name.clone());
        }
        if let Some(relationship) = &dto.relationship {
            self.relationship = Some(relationship.clone());
        }
    }
}

impl From<Friend> for FriendsDTO {
    fn from(friend: Friend) -> Self {
        FriendsDTO {
            id: Some(friend.id),
            name: friend.name,
            relationship: friend.relationship,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_ignores_null_fields() {
        let mut row = Friend {
            id: 1,
            name: Some("Alice".to_string()),
            relationship: Some("colleague".to_string()),
        };
        row.merge(&FriendsDTO {
            id: Some(1),
            name: Some("Bob".to_string()),
            relationship: None,
        });
        assert_eq!(row.name.as_deref(), Some("Bob"));
        assert_eq!(row.relationship.as_deref(), Some("colleague"));
    }

    #[test]
    fn merge_with_empty_patch_changes_nothing() {
        let mut row = Friend {
            id: 7,
            name: Some("Alice".to_string()),
            relationship: None,
        };
        let before = row.clone();
        row.merge(&FriendsDTO {
            id: Some(7),
            ..Default::default()
        });
        assert_eq!(row, before);
    }
}
