use std::sync::Arc;

use sqlx::PgPool;

use crate::service::{
    FriendsRepository, FriendsService, InMemoryFriends, PgFriendsRepository, PgFriendsService,
};

#[derive(Clone)]
pub struct AppState {
    pub friends: Arc<dyn FriendsService>,
    pub friends_repository: Arc<dyn FriendsRepository>,
}

impl AppState {
    pub fn postgres(pool: PgPool) -> Self {
        AppState {
            friends: Arc::new(PgFriendsService::new(pool.clone())),
            friends_repository: Arc::new(PgFriendsRepository::new(pool)),
        }
    }

    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryFriends::default());
        AppState {
            friends: store.clone(),
            friends_repository: store,
        }
    }
}
