//! Request handlers, grouped by resource.

/// Medicine type CRUD handlers
pub mod medicine_types;
/// Order intake and order CRUD handlers
pub mod orders;
/// Product CRUD handlers
pub mod products;
/// Prescription upload handler
pub mod uploads;
/// User CRUD handlers
pub mod users;
