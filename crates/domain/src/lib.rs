//! Domain entities and invariants for the authorization core.

#![forbid(unsafe_code)]

mod permission;
mod role;
mod role_config;

pub use permission::Permission;
pub use role::Role;
pub use role_config::{RoleConfig, all_role_configs, find_role_config, role_config};
