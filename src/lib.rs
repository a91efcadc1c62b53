//! NBA career stats SDK for Rust.
//!
//! Looks players up by display name on the NBA stats service and derives
//! display-ready views of their careers: the raw season table, a points +
//! rebounds + assists per game chart, and games-played-weighted career
//! averages compared across several players.
//!
//! # Quick start
//!
//! ```no_run
//! use nba_career_stats::NbaStats;
//!
//! let stats = NbaStats::builder().build().unwrap();
//!
//! // Raw career rows
//! let table = stats.players().career_table("LeBron James").unwrap();
//!
//! // Compare career averages
//! let cmp = stats.players().compare("LeBron James, Kevin Durant").unwrap();
//! ```
//!
//! The computations are also available on their own, without any network
//! access: see [`metrics::derive_series`], [`metrics::average_vector`],
//! [`metrics::compare_averages`] and [`chart::render_line_chart`].

#[cfg(feature = "async")]
pub mod async_client;
pub mod chart;
pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod queries;
pub mod source;

#[cfg(feature = "async")]
pub use async_client::AsyncNbaStats;
pub use chart::{render_line_chart, ChartLabels};
pub use client::StatsClient;
pub use error::{Result, StatsError};
pub use metrics::{average_vector, compare_averages, derive_series};
pub use models::{
    CareerTable, ComparisonTable, DerivedPoint, PlayerAverages, PlayerId, SeasonRecord, Stat,
    TableView,
};
pub use source::CareerSource;

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// NbaStatsBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`NbaStats`] instance.
///
/// Use [`NbaStats::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](NbaStatsBuilder::build) to create the client.
pub struct NbaStatsBuilder {
    base_url: String,
    season: String,
    timeout: Duration,
}

impl Default for NbaStatsBuilder {
    fn default() -> Self {
        Self {
            base_url: config::STATS_BASE.to_string(),
            season: config::DEFAULT_SEASON.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl NbaStatsBuilder {
    /// Override the stats service base URL.
    ///
    /// Defaults to [`config::STATS_BASE`].
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Set the season used when loading the player index, e.g. `"2025-26"`.
    ///
    /// The index always covers every player up to that season.
    pub fn season(mut self, season: &str) -> Self {
        self.season = season.to_string();
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds. The stats service is slow to answer requests
    /// it considers automated, so very short timeouts fail often.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client. No request is made until the first query.
    pub fn build(self) -> Result<NbaStats> {
        if self.base_url.trim().is_empty() {
            return Err(StatsError::InvalidArgument(
                "base URL must not be empty".to_string(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(StatsError::InvalidArgument(
                "timeout must be greater than zero".to_string(),
            ));
        }
        let client = StatsClient::new(&self.base_url, &self.season, self.timeout)?;
        Ok(NbaStats { client })
    }
}

// ---------------------------------------------------------------------------
// NbaStats
// ---------------------------------------------------------------------------

/// The main entry point for the SDK.
///
/// Wraps a [`StatsClient`] and exposes query interfaces as lightweight
/// borrowing wrappers. Holds no mutable state and can be shared across
/// threads.
pub struct NbaStats {
    client: StatsClient,
}

impl NbaStats {
    /// Create a new builder for configuring the client.
    pub fn builder() -> NbaStatsBuilder {
        NbaStatsBuilder::default()
    }

    /// Access the player query interface.
    pub fn players(&self) -> queries::PlayerQuery<'_> {
        queries::PlayerQuery::new(&self.client)
    }

    /// Return a reference to the underlying [`StatsClient`].
    pub fn client(&self) -> &StatsClient {
        &self.client
    }
}

impl fmt::Display for NbaStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NbaStats(base_url={}, season={})",
            self.client.base_url(),
            self.client.season()
        )
    }
}
