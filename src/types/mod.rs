pub mod friend_dtos;

pub use friend_dtos::FriendsDTO;
