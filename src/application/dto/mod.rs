pub mod audit;
pub mod auth;
pub mod users;

pub use audit::{AuditEventDto, SessionIntervalDto};
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use users::{CapabilityView, UserDto, UserProfileDto};
