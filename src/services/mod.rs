//! Business logic services

pub mod admin_service;
pub mod auth_service;
pub mod review_service;
pub mod session_service;
pub mod session_store;
pub mod skill_service;
pub mod user_service;

pub use admin_service::AdminService;
pub use auth_service::AuthService;
pub use review_service::ReviewService;
pub use session_service::SessionService;
pub use session_store::{AuthSessionStore, RedisSessionStore};
pub use skill_service::SkillService;
pub use user_service::UserService;
