//! Well-known role name constants.
//!
//! These must match the seed data in the `create_roles_table` migration.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_EDITOR: &str = "editor";
