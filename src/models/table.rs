use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::season::{PlayerId, SeasonRecord, Stat};
use crate::config;
use crate::error::{Result, StatsError};

// ---------------------------------------------------------------------------
// TableView — Row/column structure handed to a table widget
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub id: String,
}

/// Serializable table: a column list plus one JSON object per row, keyed by
/// column id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableView {
    pub columns: Vec<Column>,
    pub data: Vec<Map<String, Value>>,
}

impl TableView {
    /// Column display names, in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Convert a float for display. Non-finite values become `null` (a blank cell).
pub(crate) fn number_or_null(value: f64) -> Value {
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

// ---------------------------------------------------------------------------
// CareerTable — Untransformed career rows for one player
// ---------------------------------------------------------------------------

/// The `SeasonTotalsRegularSeason` result set for one player, as returned by
/// the stats service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerTable {
    pub player_id: PlayerId,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl CareerTable {
    pub fn new(player_id: PlayerId, headers: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self {
            player_id,
            headers,
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the column named `name`, if present.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    fn require_column(&self, name: &str) -> Result<usize> {
        self.column(name).ok_or_else(|| {
            StatsError::MalformedResponse(format!(
                "career stats for player {} have no '{}' column",
                self.player_id, name
            ))
        })
    }

    /// Extract typed season records, preserving row order.
    ///
    /// Null counting stats (steals and blocks were not tracked before 1973-74)
    /// are read as 0. A missing required column, or a cell that is not a
    /// whole non-negative number, is a [`StatsError::MalformedResponse`].
    pub fn seasons(&self) -> Result<Vec<SeasonRecord>> {
        let stat_cols = Stat::ALL
            .iter()
            .map(|s| self.require_column(s.as_str()))
            .collect::<Result<Vec<_>>>()?;
        let gp_col = self.require_column(config::COL_GP)?;
        let season_col = self.column(config::COL_SEASON_ID);
        let team_col = self.column(config::COL_TEAM_ABBREVIATION);

        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let count = |col: usize, name: &str| -> Result<u32> {
                    count_cell(row.get(col).unwrap_or(&Value::Null)).ok_or_else(|| {
                        StatsError::MalformedResponse(format!(
                            "row {} of player {}: '{}' is not a count ({})",
                            i,
                            self.player_id,
                            name,
                            row.get(col).unwrap_or(&Value::Null)
                        ))
                    })
                };
                let text = |col: Option<usize>| {
                    col.and_then(|c| row.get(c))
                        .and_then(|v| v.as_str())
                        .map(|s| s.to_string())
                };
                Ok(SeasonRecord {
                    season_id: text(season_col),
                    team_abbreviation: text(team_col),
                    pts: count(stat_cols[0], "PTS")?,
                    reb: count(stat_cols[1], "REB")?,
                    ast: count(stat_cols[2], "AST")?,
                    stl: count(stat_cols[3], "STL")?,
                    blk: count(stat_cols[4], "BLK")?,
                    gp: count(gp_col, config::COL_GP)?,
                })
            })
            .collect()
    }

    /// Row/column view with exactly the upstream columns, no derived ones.
    pub fn to_table_view(&self) -> TableView {
        let columns = self
            .headers
            .iter()
            .map(|h| Column {
                name: h.clone(),
                id: h.clone(),
            })
            .collect();
        let data = self
            .rows
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned().chain(std::iter::repeat(Value::Null)))
                    .collect()
            })
            .collect();
        TableView { columns, data }
    }
}

fn count_cell(value: &Value) -> Option<u32> {
    match value {
        Value::Null => Some(0),
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                u32::try_from(v).ok()
            } else {
                n.as_f64()
                    .filter(|f| *f >= 0.0 && *f <= f64::from(u32::MAX) && f.fract() == 0.0)
                    .map(|f| f as u32)
            }
        }
        _ => None,
    }
}
