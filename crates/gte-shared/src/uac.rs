//! Shared items related to user accounts

mod errors;
mod permissions;
mod registration;
mod responses;
mod user;

pub use errors::{FieldError, RegistrationError, RegistrationField};
pub use permissions::{resolve_permission, PermissionRecord};
pub use registration::validate_registration;
pub use responses::{AvatarResponse, LoginResponse, ServerErrorBody, TokenData};
pub use user::UserRecord;
