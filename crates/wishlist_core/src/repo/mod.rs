//! Repository layer abstractions and implementations.
//!
//! # Responsibility
//! - Define the data access contract for wishes.
//! - Provide the in-memory implementation used until a durable store exists.
//!
//! # Invariants
//! - Every stored wish is keyed by its own `Wish::id()`.
//! - Lookup misses surface as `RepoError::NotFound`, never as a panic.

pub mod wish_repo;
