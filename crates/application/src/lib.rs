//! Application services for the authorization core.

#![forbid(unsafe_code)]

pub mod access_policy;

mod access_guard;
mod access_service;

pub use access_guard::{AccessGuard, PermissionGuard, RoleGuard};
pub use access_service::{AccessService, RoleSource};
