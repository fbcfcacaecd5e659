//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for patches, where the resource
//!   supports partial updates

pub mod admin_user;
pub mod contact;
pub mod project;
pub mod session;
pub mod tech_stack;
