use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DerivedPoint — One season of a derived per-game metric
// ---------------------------------------------------------------------------

/// A single point of a derived career series.
///
/// `season` is the 1-based position of the source row in the career, not a
/// calendar year. `value` is non-finite when the season had zero games played.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedPoint {
    pub season: u32,
    pub value: f64,
}

impl DerivedPoint {
    pub fn new(season: u32, value: f64) -> Self {
        Self { season, value }
    }

    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}
