use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{errors::AppError, models::Friend, types::FriendsDTO};

use super::{FriendsRepository, FriendsService};

/// Map-backed store implementing both collaborator traits. Backs local runs
/// without a database and the integration tests.
#[derive(Debug, Default)]
pub struct InMemoryFriends {
    rows: RwLock<BTreeMap<i64, Friend>>,
    next_id: AtomicI64,
}

#[async_trait]
impl FriendsService for InMemoryFriends {
    async fn save(&self, dto: FriendsDTO) -> Result<FriendsDTO, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let row = Friend {
            id,
            name: dto.name,
            relationship: dto.relationship,
        };
        self.rows.write().await.insert(id, row.clone());

        Ok(row.into())
    }

    async fn update(&self, dto: FriendsDTO) -> Result<FriendsDTO, AppError> {
        let id = dto.id.ok_or_else(AppError::id_null)?;
        let row = Friend {
            id,
            name: dto.name,
            relationship: dto.relationship,
        };
        self.rows.write().await.insert(id, row.clone());

        Ok(row.into())
    }

    async fn partial_update(&self, dto: FriendsDTO) -> Result<Option<FriendsDTO>, AppError> {
        let id = dto.id.ok_or_else(AppError::id_null)?;
        let mut rows = self.rows.write().await;
        let Some(row) = rows.get_mut(&id) else {
            return Ok(None);
        };
        row.merge(&dto);

        Ok(Some(row.clone().into()))
    }

    async fn find_all(&self) -> Result<Vec<FriendsDTO>, AppError> {
        let rows = self.rows.read().await;

        Ok(rows.values().cloned().map(Into::into).collect())
    }

    async fn find_one(&self, id: i64) -> Result<Option<FriendsDTO>, AppError> {
        let rows = self.rows.read().await;

        Ok(rows.get(&id).cloned().map(Into::into))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.rows.write().await.remove(&id);

        Ok(())
    }
}

#[async_trait]
impl FriendsRepository for InMemoryFriends {
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.rows.read().await.contains_key(&id))
    }
}
