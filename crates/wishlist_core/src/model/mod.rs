//! Wishlist domain model.
//!
//! # Responsibility
//! - Define the entity and value objects used by repositories and services.
//!
//! # Invariants
//! - Every wish is identified by a non-nil `WishId`.
//! - Value objects are validated on construction and on deserialization;
//!   an existing instance is always valid.

pub mod wish;
