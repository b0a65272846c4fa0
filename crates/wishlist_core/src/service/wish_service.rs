//! Wish use-case service.
//!
//! # Responsibility
//! - Provide create/get/list entry points for core callers.
//! - Apply pagination defaults before reaching the repository.
//!
//! # Invariants
//! - New wishes always take their id from `WishRepository::next_wish_id`.
//! - Service layer remains storage-agnostic.

use crate::model::wish::{Expense, Wish, WishId, WishName};
use crate::repo::wish_repo::{RepoResult, WishRepository};
use log::info;

/// Page size used when a list query does not set one.
pub const WISHES_DEFAULT_LIMIT: u32 = 10;
/// Upper bound for a single page.
pub const WISHES_LIMIT_MAX: u32 = 50;

/// Query options for wish list use-cases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WishListQuery {
    /// Maximum wishes to return. Defaults to 10 and clamps to `1..=50`.
    pub limit: Option<u32>,
    /// Number of wishes to skip, in insertion order.
    pub offset: u32,
}

/// One page of wishes plus the numbers needed to request the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishPage {
    pub items: Vec<Wish>,
    pub offset: u32,
    pub limit: u32,
    /// Wishes stored in total, not just on this page.
    pub total: usize,
}

impl WishPage {
    pub fn has_more(&self) -> bool {
        (self.offset as usize).saturating_add(self.items.len()) < self.total
    }
}

/// Normalizes a requested page size.
pub fn normalize_wish_limit(limit: Option<u32>) -> u32 {
    limit
        .unwrap_or(WISHES_DEFAULT_LIMIT)
        .clamp(1, WISHES_LIMIT_MAX)
}

/// Use-case service wrapper for wish operations.
pub struct WishService<R: WishRepository> {
    repo: R,
}

impl<R: WishRepository> WishService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and stores a new wish.
    ///
    /// # Contract
    /// - The id comes from the repository, never from the caller.
    /// - Returns the created wish id.
    pub fn create_wish(&mut self, name: WishName, expense: Expense) -> RepoResult<WishId> {
        let id = self.repo.next_wish_id();
        self.repo.put(Wish::new(id, name, expense))?;
        info!(
            "event=wish_create module=service status=ok wish_id={} total={}",
            id,
            self.repo.count()
        );
        Ok(id)
    }

    /// Gets one wish by id.
    ///
    /// Returns `RepoError::NotFound` unchanged when the id is unknown.
    pub fn get_wish(&self, id: WishId) -> RepoResult<Wish> {
        self.repo.get(id)
    }

    pub fn has_wish(&self, id: WishId) -> bool {
        self.repo.contains_id(id)
    }

    pub fn wish_count(&self) -> usize {
        self.repo.count()
    }

    /// Lists wishes in insertion order with pagination.
    pub fn list_wishes(&self, query: &WishListQuery) -> WishPage {
        let limit = normalize_wish_limit(query.limit);
        let items = self
            .repo
            .slice(query.offset as usize, limit as usize)
            .into_iter()
            .map(|(_, wish)| wish)
            .collect();

        WishPage {
            items,
            offset: query.offset,
            limit,
            total: self.repo.count(),
        }
    }

    /// Gives back the underlying repository.
    pub fn into_repository(self) -> R {
        self.repo
    }
}
