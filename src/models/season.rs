use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// PlayerId — Upstream PERSON_ID
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Stat — Counting statistics used for career averages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    #[serde(rename = "PTS")]
    Pts,
    #[serde(rename = "REB")]
    Reb,
    #[serde(rename = "AST")]
    Ast,
    #[serde(rename = "STL")]
    Stl,
    #[serde(rename = "BLK")]
    Blk,
}

impl Stat {
    /// All compared statistics, in comparison table row order.
    pub const ALL: [Stat; 5] = [Stat::Pts, Stat::Reb, Stat::Ast, Stat::Stl, Stat::Blk];

    /// The upstream column name for this statistic.
    pub fn as_str(self) -> &'static str {
        match self {
            Stat::Pts => "PTS",
            Stat::Reb => "REB",
            Stat::Ast => "AST",
            Stat::Stl => "STL",
            Stat::Blk => "BLK",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Stat::Pts => 0,
            Stat::Reb => 1,
            Stat::Ast => 2,
            Stat::Stl => 3,
            Stat::Blk => 4,
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SeasonRecord — One season of box-score totals
// ---------------------------------------------------------------------------

/// Regular-season totals for one row of a player's career.
///
/// Rows are kept in the order the stats service returns them. A player traded
/// mid-season appears once per team plus a combined `TOT` row, exactly as
/// upstream lists them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRecord {
    pub season_id: Option<String>,
    pub team_abbreviation: Option<String>,
    pub pts: u32,
    pub reb: u32,
    pub ast: u32,
    pub stl: u32,
    pub blk: u32,
    pub gp: u32,
}

impl SeasonRecord {
    /// Build a record from bare totals, without season or team labels.
    pub fn new(pts: u32, reb: u32, ast: u32, stl: u32, blk: u32, gp: u32) -> Self {
        Self {
            season_id: None,
            team_abbreviation: None,
            pts,
            reb,
            ast,
            stl,
            blk,
            gp,
        }
    }

    /// Return the season total for `stat`.
    pub fn stat(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Pts => self.pts,
            Stat::Reb => self.reb,
            Stat::Ast => self.ast,
            Stat::Stl => self.stl,
            Stat::Blk => self.blk,
        }
    }

    /// Points + rebounds + assists for the season.
    pub fn pra(&self) -> u64 {
        u64::from(self.pts) + u64::from(self.reb) + u64::from(self.ast)
    }
}
