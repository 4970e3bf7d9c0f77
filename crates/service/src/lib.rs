//! Service layer providing business-oriented operations on top of models.
//! - Separates business logic from data access.
//! - Each domain exposes a repository trait plus its SeaORM implementation;
//!   services hold the trait object, so nothing reaches for the pool directly.
//! - Derived order fields (item count, total price) are computed here on
//!   every read and never stored.

pub mod errors;
pub mod validation;
pub mod customer;
pub mod product;
pub mod order;
#[cfg(test)]
pub mod test_support;
