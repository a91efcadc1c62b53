use std::time::Duration;

pub const STATS_BASE: &str = "https://stats.nba.com/stats";
pub const ALL_PLAYERS_ENDPOINT: &str = "commonallplayers";
pub const CAREER_STATS_ENDPOINT: &str = "playercareerstats";

/// Season passed to `commonallplayers`. With `IsOnlyCurrentSeason=0` the
/// service returns every player up to and including this season.
pub const DEFAULT_SEASON: &str = "2025-26";
pub const NBA_LEAGUE_ID: &str = "00";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// Upstream column names
pub const COL_PERSON_ID: &str = "PERSON_ID";
pub const COL_DISPLAY_FIRST_LAST: &str = "DISPLAY_FIRST_LAST";
pub const COL_SEASON_ID: &str = "SEASON_ID";
pub const COL_TEAM_ABBREVIATION: &str = "TEAM_ABBREVIATION";
pub const COL_GP: &str = "GP";

/// The service rejects requests that do not look like they come from a browser
/// on nba.com.
pub fn request_headers() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "User-Agent",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/124.0 Safari/537.36",
        ),
        ("Accept", "application/json, text/plain, */*"),
        ("Accept-Language", "en-US,en;q=0.9"),
        ("Origin", "https://www.nba.com"),
        ("Referer", "https://www.nba.com/"),
        ("Connection", "keep-alive"),
    ]
}

// ---------------------------------------------------------------------------
// Chart defaults
// ---------------------------------------------------------------------------

/// Canvas size in pixels (a 10x6 inch figure at 100 dpi).
pub const CHART_SIZE: (u32, u32) = (1000, 600);
pub const CHART_MARGIN: u32 = 12;
pub const CHART_X_LABEL_AREA: u32 = 45;
pub const CHART_Y_LABEL_AREA: u32 = 60;
pub const CHART_CAPTION_SIZE: u32 = 24;
pub const CHART_MARKER_RADIUS: u32 = 4;
/// Line and marker color.
pub const CHART_LINE_RGB: (u8, u8, u8) = (31, 119, 180);
