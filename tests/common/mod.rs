//! Shared test fixtures for the NBA career stats integration tests.
//!
//! Provides `FixtureSource`, an in-memory `CareerSource` with a handful of
//! players whose rows use the real `SeasonTotalsRegularSeason` layout, and
//! `serve_stats()`, a tiny HTTP server that answers stats endpoint requests
//! with canned JSON.

#![allow(dead_code)]

use nba_career_stats::{CareerSource, CareerTable, PlayerId, Result, StatsError};
use serde_json::{json, Value};
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

/// Column layout of the `SeasonTotalsRegularSeason` result set.
pub const CAREER_HEADERS: &[&str] = &[
    "PLAYER_ID",
    "SEASON_ID",
    "LEAGUE_ID",
    "TEAM_ID",
    "TEAM_ABBREVIATION",
    "PLAYER_AGE",
    "GP",
    "GS",
    "MIN",
    "FGM",
    "FGA",
    "FG_PCT",
    "FG3M",
    "FG3A",
    "FG3_PCT",
    "FTM",
    "FTA",
    "FT_PCT",
    "OREB",
    "DREB",
    "REB",
    "AST",
    "STL",
    "BLK",
    "TOV",
    "PF",
    "PTS",
];

pub fn career_headers() -> Vec<String> {
    CAREER_HEADERS.iter().map(|h| h.to_string()).collect()
}

/// Counting stats for one fixture season. `None` mirrors an upstream null.
#[derive(Clone, Copy)]
pub struct Line {
    pub pts: u32,
    pub reb: u32,
    pub ast: u32,
    pub stl: Option<u32>,
    pub blk: Option<u32>,
    pub gp: u32,
}

pub fn line(pts: u32, reb: u32, ast: u32, stl: u32, blk: u32, gp: u32) -> Line {
    Line {
        pts,
        reb,
        ast,
        stl: Some(stl),
        blk: Some(blk),
        gp,
    }
}

/// One upstream career row, aligned with [`CAREER_HEADERS`].
pub fn career_row(player_id: u64, season: &str, team: &str, l: Line) -> Vec<Value> {
    vec![
        json!(player_id),
        json!(season),
        json!("00"),
        json!(1610612759u64),
        json!(team),
        json!(24.0),
        json!(l.gp),
        json!(l.gp),
        json!(l.gp * 30),
        json!(l.pts / 2),
        json!(l.pts),
        json!(0.5),
        json!(0),
        json!(0),
        Value::Null,
        json!(0),
        json!(0),
        Value::Null,
        json!(l.reb / 3),
        json!(l.reb - l.reb / 3),
        json!(l.reb),
        json!(l.ast),
        l.stl.map(|v| json!(v)).unwrap_or(Value::Null),
        l.blk.map(|v| json!(v)).unwrap_or(Value::Null),
        json!(0),
        json!(l.gp * 2),
        json!(l.pts),
    ]
}

pub fn career_table(player_id: u64, lines: &[Line]) -> CareerTable {
    let rows = lines
        .iter()
        .enumerate()
        .map(|(i, l)| career_row(player_id, &format!("{}-{:02}", 2000 + i, (1 + i) % 100), "SAS", *l))
        .collect();
    CareerTable::new(PlayerId(player_id), career_headers(), rows)
}

// ---------------------------------------------------------------------------
// FixtureSource
// ---------------------------------------------------------------------------

/// In-memory career source that records every call it receives.
pub struct FixtureSource {
    players: Vec<(String, CareerTable)>,
    pub resolved: Mutex<Vec<String>>,
    pub fetches: AtomicUsize,
}

impl FixtureSource {
    pub fn new(players: Vec<(&str, CareerTable)>) -> Self {
        Self {
            players: players
                .into_iter()
                .map(|(name, table)| (name.to_string(), table))
                .collect(),
            resolved: Mutex::new(Vec::new()),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn resolved_names(&self) -> Vec<String> {
        self.resolved.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl CareerSource for FixtureSource {
    fn resolve(&self, display_name: &str) -> Result<Option<PlayerId>> {
        self.resolved.lock().unwrap().push(display_name.to_string());
        Ok(self
            .players
            .iter()
            .find(|(name, _)| name == display_name)
            .map(|(_, table)| table.player_id))
    }

    fn career_seasons(&self, id: PlayerId) -> Result<CareerTable> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.players
            .iter()
            .find(|(_, table)| table.player_id == id)
            .map(|(_, table)| table.clone())
            .ok_or_else(|| StatsError::MalformedResponse(format!("no fixture for {}", id)))
    }
}

/// Players used across the test suite.
///
/// - `Player A` / `Player B`: single seasons with round averages.
/// - `Uneven Minutes`: two seasons with very different games played.
/// - `Zero Games`: one season with no games.
/// - `George Mikan`: pre-1973 rows with null steals and blocks.
/// - `Tim Duncan`: three ordinary seasons.
pub fn sample_source() -> FixtureSource {
    FixtureSource::new(vec![
        ("Player A", career_table(1, &[line(100, 50, 20, 10, 5, 10)])),
        ("Player B", career_table(2, &[line(50, 25, 10, 5, 2, 5)])),
        (
            "Uneven Minutes",
            career_table(3, &[line(100, 40, 20, 10, 10, 10), line(30, 2, 4, 1, 1, 1)]),
        ),
        ("Zero Games", career_table(4, &[line(5, 0, 0, 0, 0, 0)])),
        (
            "George Mikan",
            career_table(
                5,
                &[
                    Line {
                        pts: 1865,
                        reb: 0,
                        ast: 200,
                        stl: None,
                        blk: None,
                        gp: 68,
                    },
                    Line {
                        pts: 1932,
                        reb: 1028,
                        ast: 194,
                        stl: None,
                        blk: None,
                        gp: 68,
                    },
                ],
            ),
        ),
        (
            "Tim Duncan",
            career_table(
                1495,
                &[
                    line(1731, 977, 224, 55, 206, 82),
                    line(1084, 571, 121, 45, 126, 50),
                    line(1868, 918, 247, 66, 198, 74),
                ],
            ),
        ),
    ])
}

// ---------------------------------------------------------------------------
// Local stats server
// ---------------------------------------------------------------------------

/// A canned response for requests whose path contains `path_fragment`.
pub struct Route {
    pub path_fragment: &'static str,
    pub status: u16,
    pub body: String,
}

pub fn route(path_fragment: &'static str, status: u16, body: Value) -> Route {
    Route {
        path_fragment,
        status,
        body: body.to_string(),
    }
}

/// Start a local HTTP server that answers with `routes` and records every
/// request target (path + query). Unmatched paths get a 404.
///
/// Returns the base URL and the shared request log.
pub fn serve_stats(routes: Vec<Route>) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}/stats", listener.local_addr().unwrap());
    let log = Arc::new(Mutex::new(Vec::new()));
    let thread_log = Arc::clone(&log);

    thread::spawn(move || {
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => handle_request(stream, &routes, &thread_log),
                Err(_) => break,
            }
        }
    });

    (base_url, log)
}

fn handle_request(mut stream: TcpStream, routes: &[Route], log: &Mutex<Vec<String>>) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);
        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }

    let request = String::from_utf8_lossy(&buf);
    let target = request.split_whitespace().nth(1).unwrap_or("/").to_string();
    log.lock().unwrap().push(target.clone());

    let (status, body) = routes
        .iter()
        .find(|r| target.contains(r.path_fragment))
        .map(|r| (r.status, r.body.clone()))
        .unwrap_or((404, String::from("{}")));
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        _ => "Error",
    };
    let _ = write!(
        stream,
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    let _ = stream.flush();
}

/// A `commonallplayers` payload listing the given `(PERSON_ID, "First Last")`
/// pairs.
pub fn all_players_payload(players: &[(u64, &str)]) -> Value {
    let rows: Vec<Value> = players
        .iter()
        .map(|&(id, name)| {
            let (first, last) = name.split_once(' ').unwrap_or((name, ""));
            json!([id, format!("{}, {}", last, first), name, 0, "1997", "2016", name.to_lowercase().replace(' ', "_"), 0])
        })
        .collect();
    json!({
        "resource": "commonallplayers",
        "parameters": {"LeagueID": "00", "Season": "2025-26", "IsOnlyCurrentSeason": 0},
        "resultSets": [{
            "name": "CommonAllPlayers",
            "headers": [
                "PERSON_ID",
                "DISPLAY_LAST_COMMA_FIRST",
                "DISPLAY_FIRST_LAST",
                "ROSTERSTATUS",
                "FROM_YEAR",
                "TO_YEAR",
                "PLAYERCODE",
                "TEAM_ID"
            ],
            "rowSet": rows
        }]
    })
}

/// A `playercareerstats` payload with the regular-season totals first, as the
/// service orders them.
pub fn career_payload(table: &CareerTable) -> Value {
    json!({
        "resource": "playercareerstats",
        "parameters": {"PerMode": "Totals", "PlayerID": table.player_id.0, "LeagueID": null},
        "resultSets": [
            {
                "name": "SeasonTotalsRegularSeason",
                "headers": table.headers,
                "rowSet": table.rows
            },
            {
                "name": "CareerTotalsRegularSeason",
                "headers": ["PLAYER_ID", "LEAGUE_ID", "TEAM_ID", "GP", "PTS"],
                "rowSet": []
            }
        ]
    })
}
