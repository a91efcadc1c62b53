//! Blocking HTTP client for the NBA stats service.
//!
//! Looks players up in `commonallplayers` by exact display name and fetches
//! their regular-season totals from `playercareerstats`. Nothing is cached:
//! every call goes to the network.

use crate::config;
use crate::error::{Result, StatsError};
use crate::models::{CareerTable, PlayerId};
use crate::source::CareerSource;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

/// One tabular result set: column headers plus positional rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    fn require_column(&self, name: &str) -> Result<usize> {
        self.column(name).ok_or_else(|| {
            StatsError::MalformedResponse(format!(
                "result set '{}' has no '{}' column",
                self.name, name
            ))
        })
    }

    /// Find the first row whose `DISPLAY_FIRST_LAST` equals `display_name`
    /// exactly (case and whitespace included) and return its `PERSON_ID`.
    pub fn find_player(&self, display_name: &str) -> Result<Option<PlayerId>> {
        let name_col = self.require_column(config::COL_DISPLAY_FIRST_LAST)?;
        let id_col = self.require_column(config::COL_PERSON_ID)?;

        let Some(row) = self
            .row_set
            .iter()
            .find(|row| row.get(name_col).and_then(Value::as_str) == Some(display_name))
        else {
            return Ok(None);
        };

        let id = match row.get(id_col) {
            Some(Value::Number(n)) => n.as_u64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        };
        id.map(|id| Some(PlayerId(id))).ok_or_else(|| {
            StatsError::MalformedResponse(format!(
                "player '{}' has an invalid {}: {:?}",
                display_name,
                config::COL_PERSON_ID,
                row.get(id_col)
            ))
        })
    }
}

/// Top-level payload of a stats endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub result_sets: Vec<ResultSet>,
}

impl StatsResponse {
    /// Decode a raw response body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Return the result set called `name`, falling back to the first one.
    pub fn result_set(&self, name: &str) -> Result<&ResultSet> {
        self.result_sets
            .iter()
            .find(|set| set.name == name)
            .or_else(|| self.result_sets.first())
            .ok_or_else(|| {
                StatsError::MalformedResponse(format!("response has no '{}' result set", name))
            })
    }
}

// ---------------------------------------------------------------------------
// StatsClient
// ---------------------------------------------------------------------------

/// HTTP implementation of [`CareerSource`].
///
/// Holds no mutable state, so one client can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct StatsClient {
    base_url: String,
    season: String,
    client: Client,
}

impl StatsClient {
    /// Create a client against `base_url` (e.g. [`config::STATS_BASE`]).
    ///
    /// `season` is the `Season` parameter sent to the player index, in
    /// `"YYYY-YY"` form.
    pub fn new(base_url: &str, season: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| StatsError::InvalidArgument(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            season: season.to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn season(&self) -> &str {
        &self.season
    }

    /// GET one stats endpoint and decode its result sets.
    ///
    /// Connection failures, timeouts and non-2xx statuses surface as
    /// [`StatsError::ResolverUnavailable`].
    fn get(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<StatsResponse> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, ?params, "requesting stats endpoint");

        let mut request = self.client.get(&url).query(params);
        for (name, value) in config::request_headers() {
            request = request.header(name, value);
        }
        let resp = request.send()?.error_for_status()?;
        let body = resp.bytes()?;
        StatsResponse::from_slice(&body)
    }
}

impl CareerSource for StatsClient {
    fn resolve(&self, display_name: &str) -> Result<Option<PlayerId>> {
        let payload = self.get(
            config::ALL_PLAYERS_ENDPOINT,
            &[
                ("LeagueID", config::NBA_LEAGUE_ID),
                ("Season", self.season.as_str()),
                ("IsOnlyCurrentSeason", "0"),
            ],
        )?;
        let found = payload
            .result_set("CommonAllPlayers")?
            .find_player(display_name)?;
        match found {
            Some(id) => debug!(player = display_name, %id, "resolved player"),
            None => info!(player = display_name, "no player with this display name"),
        }
        Ok(found)
    }

    fn career_seasons(&self, id: PlayerId) -> Result<CareerTable> {
        let player_id = id.to_string();
        let payload = self.get(
            config::CAREER_STATS_ENDPOINT,
            &[
                ("PlayerID", player_id.as_str()),
                ("PerMode", "Totals"),
                ("LeagueID", ""),
            ],
        )?;
        let set = payload.result_set("SeasonTotalsRegularSeason")?;
        debug!(%id, rows = set.row_set.len(), "fetched career rows");
        Ok(CareerTable::new(id, set.headers.clone(), set.row_set.clone()))
    }
}
