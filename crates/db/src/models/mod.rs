//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Serialize` response shape where it differs from the row
//! - A `Deserialize` create DTO for inserts

pub mod history;
pub mod order;
pub mod product;
pub mod user;
