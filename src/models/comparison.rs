use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::season::Stat;
use super::table::{number_or_null, Column, TableView};

/// Label column of a comparison table view.
pub const STAT_COLUMN: &str = "Stat";

// ---------------------------------------------------------------------------
// PlayerAverages — Career per-game averages for one player
// ---------------------------------------------------------------------------

/// Games-played-weighted career averages, one value per [`Stat`].
///
/// Every value shares the same denominator (total games played), so all five
/// are non-finite together when the player has no games on record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerAverages {
    values: [f64; 5],
}

impl PlayerAverages {
    /// Build from values given in [`Stat::ALL`] order.
    pub fn from_values(values: [f64; 5]) -> Self {
        Self { values }
    }

    pub fn get(&self, stat: Stat) -> f64 {
        self.values[stat.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stat, f64)> + '_ {
        Stat::ALL.iter().map(move |s| (*s, self.get(*s)))
    }

    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }
}

// ---------------------------------------------------------------------------
// ComparisonTable — Stat-by-player grid
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub stat: Stat,
    /// One value per player, in the table's player order.
    pub values: Vec<f64>,
}

/// Career averages for several players side by side.
///
/// Rows follow [`Stat::ALL`]; columns follow the order players were supplied
/// in. The same player may appear more than once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTable {
    players: Vec<String>,
    rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    /// Assemble a table from per-player averages, keeping their order.
    pub fn from_averages<S: Into<String>>(averages: Vec<(S, PlayerAverages)>) -> Self {
        let mut players = Vec::with_capacity(averages.len());
        let mut vectors = Vec::with_capacity(averages.len());
        for (name, avg) in averages {
            players.push(name.into());
            vectors.push(avg);
        }
        let rows = Stat::ALL
            .iter()
            .map(|stat| ComparisonRow {
                stat: *stat,
                values: vectors.iter().map(|v| v.get(*stat)).collect(),
            })
            .collect();
        Self { players, rows }
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    /// Value for `stat` in the player column at `index`.
    pub fn value_at(&self, stat: Stat, index: usize) -> Option<f64> {
        self.rows
            .iter()
            .find(|r| r.stat == stat)
            .and_then(|r| r.values.get(index).copied())
    }

    /// Value for `stat` in the first column named `player`.
    pub fn value(&self, stat: Stat, player: &str) -> Option<f64> {
        let index = self.players.iter().position(|p| p == player)?;
        self.value_at(stat, index)
    }

    /// Row/column view: a leading `Stat` label column, then one column per
    /// player. A player whose name is already taken as a column id gets the
    /// first free id among `name.1`, `name.2`, ... so every cell stays
    /// addressable. Non-finite averages become `null`.
    pub fn to_table_view(&self) -> TableView {
        let mut columns = vec![Column {
            name: STAT_COLUMN.to_string(),
            id: STAT_COLUMN.to_string(),
        }];
        let mut used: HashSet<String> = HashSet::from([STAT_COLUMN.to_string()]);
        for player in &self.players {
            let mut id = player.clone();
            let mut suffix = 0;
            while used.contains(&id) {
                suffix += 1;
                id = format!("{}.{}", player, suffix);
            }
            used.insert(id.clone());
            columns.push(Column {
                name: player.clone(),
                id,
            });
        }

        let data = self
            .rows
            .iter()
            .map(|row| {
                let mut record = Map::new();
                record.insert(
                    STAT_COLUMN.to_string(),
                    Value::String(row.stat.as_str().to_string()),
                );
                for (column, value) in columns.iter().skip(1).zip(&row.values) {
                    record.insert(column.id.clone(), number_or_null(*value));
                }
                record
            })
            .collect();

        TableView { columns, data }
    }
}
