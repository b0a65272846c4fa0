//! Core domain logic for the wishlist.
//! Wishes, their value objects, and the repository that stores them.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::wish::{
    Currency, Expense, Wish, WishId, WishName, WishValidationError, WISH_NAME_MAX_CHARS,
};
pub use repo::wish_repo::{InMemoryWishRepository, RepoError, RepoResult, WishRepository};
pub use service::wish_service::{
    normalize_wish_limit, WishListQuery, WishPage, WishService, WISHES_DEFAULT_LIMIT,
    WISHES_LIMIT_MAX,
};
