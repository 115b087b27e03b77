//! Core business logic - framework-agnostic operations over the database.
//!
//! Each submodule owns the operations for one entity. Functions take a
//! `&DatabaseConnection` and return the crate [`Result`](crate::errors::Result)
//! so they can be driven from the HTTP layer or from tests alike.

/// Medicine type CRUD operations
pub mod medicine_type;
/// Order intake and order CRUD operations
pub mod order;
/// Product CRUD operations
pub mod product;
/// Prescription file storage
pub mod upload;
/// User CRUD operations
pub mod user;
