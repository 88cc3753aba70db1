//! Favorite station aliases.
//!
//! A flat JSON object mapping alias → station name, stored in the user's
//! config directory. Aliases are substituted before station resolution,
//! so `--from home` searches for whatever `home` points at.

mod error;
mod store;

pub use error::FavoritesError;
pub use store::{Favorites, FavoritesStore};
