//! Player lookups exposed to a UI: the raw career table, the PRA/G chart,
//! and the multi-player average comparison.

use tracing::debug;

use crate::chart::{self, ChartLabels};
use crate::error::{Result, StatsError};
use crate::metrics;
use crate::models::{CareerTable, ComparisonTable, DerivedPoint};
use crate::source::CareerSource;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Split a comma-separated list of display names, trimming each entry.
///
/// Entries are kept in order, duplicates included. Returns
/// `Err(InvalidArgument)` if the input contains no names at all.
pub fn parse_player_list(input: &str) -> Result<Vec<String>> {
    if input.trim().is_empty() {
        return Err(StatsError::InvalidArgument(
            "Enter at least one player name".to_string(),
        ));
    }
    Ok(input.split(',').map(|name| name.trim().to_string()).collect())
}

// ---------------------------------------------------------------------------
// PlayerQuery
// ---------------------------------------------------------------------------

/// Query interface for player career data, bound to a [`CareerSource`].
pub struct PlayerQuery<'a> {
    source: &'a dyn CareerSource,
}

impl<'a> PlayerQuery<'a> {
    /// Create a new `PlayerQuery` bound to the given source.
    pub fn new(source: &'a dyn CareerSource) -> Self {
        Self { source }
    }

    /// Untransformed regular-season rows for `name`.
    ///
    /// Call [`CareerTable::to_table_view`] for a table widget; its columns are
    /// exactly the upstream ones.
    pub fn career_table(&self, name: &str) -> Result<CareerTable> {
        self.source.career(name)
    }

    /// PRA/G for each season of `name`'s career.
    pub fn pra_series(&self, name: &str) -> Result<Vec<DerivedPoint>> {
        let seasons = self.source.career(name)?.seasons()?;
        Ok(metrics::derive_series(&seasons))
    }

    /// PNG line chart of `name`'s PRA/G by season.
    pub fn pra_chart(&self, name: &str) -> Result<Vec<u8>> {
        let series = self.pra_series(name)?;
        debug!(player = name, seasons = series.len(), "rendering PRA/G chart");
        chart::render_line_chart(&series, &ChartLabels::pra())
    }

    /// The PRA/G chart as a `data:image/png;base64,...` URI.
    pub fn pra_chart_data_uri(&self, name: &str) -> Result<String> {
        Ok(chart::to_data_uri(&self.pra_chart(name)?))
    }

    /// Compare career averages for a comma-separated list of names.
    ///
    /// Stops at the first unknown name.
    pub fn compare(&self, names: &str) -> Result<ComparisonTable> {
        let players = parse_player_list(names)?;
        metrics::compare_averages(&players, self.source)
    }
}
