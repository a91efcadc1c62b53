//! Query modules for the NBA career stats SDK.
//!
//! Each query struct borrows a [`CareerSource`](crate::source::CareerSource)
//! and exposes methods returning `Result<T>` with typed payloads.

pub mod players;

pub use players::{parse_player_list, PlayerQuery};
