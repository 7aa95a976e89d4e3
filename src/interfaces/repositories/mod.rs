pub mod favorites;
pub mod follows;
pub mod users;
pub mod videos;
