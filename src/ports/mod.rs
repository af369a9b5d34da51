pub mod item_repository;
pub mod member_repository;

pub use item_repository::*;
pub use member_repository::*;
