//! Domain model for clients, projects and issues.
//!
//! # Responsibility
//! - Define the entity records and their validated field types.
//! - Own all entities in one `Model` per session.
//!
//! # Invariants
//! - Entities only exist with valid fields.
//! - The `Model` is the only owner of entity collections; callers borrow.

pub mod book;
pub mod client;
pub mod fields;
pub mod filter;
pub mod issue;
pub mod project;
