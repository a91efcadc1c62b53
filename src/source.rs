//! The player lookup boundary.
//!
//! Everything that needs career data takes a `&dyn CareerSource` explicitly.
//! [`StatsClient`](crate::client::StatsClient) is the HTTP implementation; tests
//! substitute an in-memory one.

use crate::error::{Result, StatsError};
use crate::models::{CareerTable, PlayerId};

/// Resolves display names to players and fetches their career rows.
pub trait CareerSource {
    /// Find the player whose display name (`"First Last"`) equals
    /// `display_name` exactly.
    ///
    /// Returns `Ok(None)` when no player matches. Transport failures are
    /// reported as errors, never as `None`.
    fn resolve(&self, display_name: &str) -> Result<Option<PlayerId>>;

    /// Fetch the regular-season career rows for `id`, in chronological order.
    fn career_seasons(&self, id: PlayerId) -> Result<CareerTable>;

    /// Resolve `display_name` and fetch its career rows.
    ///
    /// An unknown name is [`StatsError::PlayerNotFound`] carrying the input
    /// unchanged.
    fn career(&self, display_name: &str) -> Result<CareerTable> {
        match self.resolve(display_name)? {
            Some(id) => self.career_seasons(id),
            None => Err(StatsError::PlayerNotFound(display_name.to_string())),
        }
    }
}

