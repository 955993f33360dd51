// src/params.rs

// Upstream pages
pub const SCHEDULE_URL_BASE: &str = "https://www.espn.com/nba/team/schedule/_/name/";
pub const STANDINGS_URL: &str = "https://www.espn.com/nba/standings";

// Browser-like headers sent with every upstream GET; the page serves a
// different shell to unknown agents.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";
pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

// Markup contract of the schedule page
pub const TABLE_BODY_CLASS: &str = "Table__TBODY";
pub const HEADER_ROW_CLASS: &str = "Table_Headers";
pub const NETWORK_MARKER_PREFIX: &str = "network-";

// Markup contract of the standings page
pub const TEAM_LINK_PREFIX: &str = "/nba/team/_/name/";

// Serving
pub const DEFAULT_TEAM: &str = "LAL";
pub const DEFAULT_BIND: &str = "0.0.0.0:10000";
