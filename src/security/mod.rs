// src/security/mod.rs
pub mod permission;

pub use permission::{check_member_role, MemberRole, PermissionError, UnknownRole};
