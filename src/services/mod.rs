pub mod favorite_service;
pub mod follow_service;
pub mod user_service;
pub mod video_service;
