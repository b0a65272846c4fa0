//! Wish repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide keyed put/get, membership checks and positional slicing over
//!   stored wishes.
//! - Hand out fresh wish identifiers.
//!
//! # Invariants
//! - Entries keep insertion order; overwriting an id keeps its position.
//! - JSON seeding rejects the whole input before inserting anything.

use crate::model::wish::{Wish, WishId, WishValidationError};
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for wish storage and lookup.
#[derive(Debug)]
pub enum RepoError {
    /// Seed input contained something that is not a wish.
    InvalidArgument(String),
    /// No wish is stored under the given id.
    NotFound(WishId),
    Validation(WishValidationError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Self::NotFound(id) => write!(f, "wish not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidArgument(_) => None,
            Self::NotFound(_) => None,
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<WishValidationError> for RepoError {
    fn from(value: WishValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for wish storage.
pub trait WishRepository {
    /// Inserts `wish`, or replaces the wish already stored under its id.
    fn put(&mut self, wish: Wish) -> RepoResult<()>;
    fn get(&self, id: WishId) -> RepoResult<Wish>;
    fn count(&self) -> usize;
    /// Returns up to `length` entries starting at position `offset`, in
    /// insertion order. Out-of-range input yields a shorter or empty result.
    fn slice(&self, offset: usize, length: usize) -> Vec<(WishId, Wish)>;
    /// Membership by id equality, not by full value.
    fn contains(&self, wish: &Wish) -> bool {
        self.contains_id(wish.id())
    }
    fn contains_id(&self, id: WishId) -> bool;
    fn next_wish_id(&self) -> WishId {
        WishId::next()
    }
}

/// Process-local wish repository.
#[derive(Debug, Default)]
pub struct InMemoryWishRepository {
    entries: Vec<Wish>,
    positions: HashMap<WishId, usize>,
}

impl InMemoryWishRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with `wishes`.
    ///
    /// A later wish with an already seen id replaces the earlier one in place.
    pub fn with_wishes(wishes: impl IntoIterator<Item = Wish>) -> Self {
        let mut repo = Self::new();
        for wish in wishes {
            repo.insert(wish);
        }
        repo
    }

    /// Creates a repository from an untyped JSON seed.
    ///
    /// # Errors
    /// - `RepoError::InvalidArgument` when `seed` is not an array or any
    ///   element does not decode into a `Wish`. Nothing is inserted then.
    pub fn from_json_seed(seed: &serde_json::Value) -> RepoResult<Self> {
        let items = seed.as_array().ok_or_else(|| {
            RepoError::InvalidArgument("wish seed must be a JSON array".to_string())
        })?;

        let wishes = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                Wish::deserialize(item).map_err(|err| {
                    RepoError::InvalidArgument(format!(
                        "seed element {index} is not a wish: {err}"
                    ))
                })
            })
            .collect::<RepoResult<Vec<_>>>()?;

        Ok(Self::with_wishes(wishes))
    }

    fn insert(&mut self, wish: Wish) -> bool {
        let id = wish.id();
        match self.positions.get(&id) {
            Some(&position) => {
                self.entries[position] = wish;
                false
            }
            None => {
                self.positions.insert(id, self.entries.len());
                self.entries.push(wish);
                true
            }
        }
    }
}

impl WishRepository for InMemoryWishRepository {
    fn put(&mut self, wish: Wish) -> RepoResult<()> {
        let id = wish.id();
        let inserted = self.insert(wish);
        debug!(
            "event=wish_put module=repo status=ok wish_id={} inserted={} count={}",
            id,
            inserted,
            self.entries.len()
        );
        Ok(())
    }

    fn get(&self, id: WishId) -> RepoResult<Wish> {
        self.positions
            .get(&id)
            .map(|&position| self.entries[position].clone())
            .ok_or(RepoError::NotFound(id))
    }

    fn count(&self) -> usize {
        self.entries.len()
    }

    fn slice(&self, offset: usize, length: usize) -> Vec<(WishId, Wish)> {
        self.entries
            .iter()
            .skip(offset)
            .take(length)
            .map(|wish| (wish.id(), wish.clone()))
            .collect()
    }

    fn contains_id(&self, id: WishId) -> bool {
        self.positions.contains_key(&id)
    }
}
