//! Per-season and career-level metrics derived from season records.

use tracing::{debug, warn};

use crate::error::Result;
use crate::models::{ComparisonTable, DerivedPoint, PlayerAverages, SeasonRecord, Stat};
use crate::source::CareerSource;

// ---------------------------------------------------------------------------
// PRA/G series
// ---------------------------------------------------------------------------

/// Points + rebounds + assists per game for each season, in input order.
///
/// The k-th record becomes season `k` (1-based). A season with zero games
/// played yields a non-finite value, which is kept rather than dropped.
pub fn derive_series(records: &[SeasonRecord]) -> Vec<DerivedPoint> {
    records
        .iter()
        .zip(1u32..)
        .map(|(record, season)| {
            DerivedPoint::new(season, record.pra() as f64 / f64::from(record.gp))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Career averages
// ---------------------------------------------------------------------------

/// Career per-game averages weighted by games played.
///
/// Each statistic is summed over every season and divided by the total games
/// played across those seasons. This is not a mean of per-season averages.
pub fn average_vector(records: &[SeasonRecord]) -> PlayerAverages {
    let games: u64 = records.iter().map(|r| u64::from(r.gp)).sum();
    let games = games as f64;
    let mut values = [0.0; 5];
    for (slot, stat) in values.iter_mut().zip(Stat::ALL) {
        let total: u64 = records.iter().map(|r| u64::from(r.stat(stat))).sum();
        *slot = total as f64 / games;
    }
    PlayerAverages::from_values(values)
}

/// Compare career averages for `players`, fetched through `source`.
///
/// Players are processed in order and the first unknown name aborts the
/// whole comparison with [`StatsError::PlayerNotFound`](crate::StatsError::PlayerNotFound);
/// later names are not looked up. A player with no games on record gets
/// non-finite averages rather than an error.
pub fn compare_averages<S: AsRef<str>>(
    players: &[S],
    source: &dyn CareerSource,
) -> Result<ComparisonTable> {
    let mut averages = Vec::with_capacity(players.len());
    for player in players {
        let name = player.as_ref();
        let seasons = source.career(name)?.seasons()?;
        let avg = average_vector(&seasons);
        if !avg.is_finite() {
            warn!(player = name, "no games played on record; averages are undefined");
        }
        debug!(player = name, seasons = seasons.len(), "computed career averages");
        averages.push((name.to_string(), avg));
    }
    Ok(ComparisonTable::from_averages(averages))
}
