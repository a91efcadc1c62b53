//! Async wrapper around [`NbaStats`] for use in async runtimes (Tokio, etc.).
//!
//! Runs every SDK operation on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the stats service answers.
//!
//! # Example
//!
//! ```no_run
//! use nba_career_stats::AsyncNbaStats;
//!
//! async fn example() -> nba_career_stats::Result<()> {
//!     let stats = AsyncNbaStats::builder().build().await?;
//!
//!     let uri = stats.pra_chart_data_uri("Tim Duncan").await?;
//!     let cmp = stats.compare("Tim Duncan, Kevin Garnett").await?;
//!     Ok(())
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::error::{Result, StatsError};
use crate::models::{CareerTable, ComparisonTable};
use crate::NbaStats;

// ---------------------------------------------------------------------------
// AsyncNbaStatsBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncNbaStats`] instance.
#[derive(Default)]
pub struct AsyncNbaStatsBuilder {
    base_url: Option<String>,
    season: Option<String>,
    timeout: Option<Duration>,
}

impl AsyncNbaStatsBuilder {
    /// Override the stats service base URL.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    /// Set the season used when loading the player index.
    pub fn season(mut self, season: &str) -> Self {
        self.season = Some(season.to_string());
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the async client.
    ///
    /// The blocking HTTP client is constructed on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncNbaStats> {
        tokio::task::spawn_blocking(move || {
            let mut builder = NbaStats::builder();
            if let Some(url) = self.base_url {
                builder = builder.base_url(&url);
            }
            if let Some(season) = self.season {
                builder = builder.season(&season);
            }
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            Ok(AsyncNbaStats {
                inner: Arc::new(builder.build()?),
            })
        })
        .await
        .map_err(|e| StatsError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncNbaStats
// ---------------------------------------------------------------------------

/// Async wrapper around [`NbaStats`].
///
/// [`NbaStats`] holds no mutable state, so it is shared through an [`Arc`]
/// without locking and concurrent calls run in parallel.
#[derive(Clone)]
pub struct AsyncNbaStats {
    inner: Arc<NbaStats>,
}

impl AsyncNbaStats {
    /// Create a new builder for configuring the async client.
    pub fn builder() -> AsyncNbaStatsBuilder {
        AsyncNbaStatsBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use nba_career_stats::AsyncNbaStats;
    /// # async fn example() -> nba_career_stats::Result<()> {
    /// # let stats = AsyncNbaStats::builder().build().await?;
    /// let series = stats.run(|s| s.players().pra_series("Tim Duncan")).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&NbaStats) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let stats = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || f(&stats))
            .await
            .map_err(|e| StatsError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Untransformed career rows for `name`.
    pub async fn career_table(&self, name: &str) -> Result<CareerTable> {
        let name = name.to_string();
        self.run(move |s| s.players().career_table(&name)).await
    }

    /// PNG line chart of `name`'s PRA/G by season.
    pub async fn pra_chart(&self, name: &str) -> Result<Vec<u8>> {
        let name = name.to_string();
        self.run(move |s| s.players().pra_chart(&name)).await
    }

    /// The PRA/G chart as a base64 data URI.
    pub async fn pra_chart_data_uri(&self, name: &str) -> Result<String> {
        let name = name.to_string();
        self.run(move |s| s.players().pra_chart_data_uri(&name)).await
    }

    /// Compare career averages for a comma-separated list of names.
    pub async fn compare(&self, names: &str) -> Result<ComparisonTable> {
        let names = names.to_string();
        self.run(move |s| s.players().compare(&names)).await
    }
}
