pub mod friends;

// Re-exports for convenience
pub use friends::{
    create_friends, delete_friends, get_all_friends, get_friends, partial_update_friends,
    update_friends,
};
