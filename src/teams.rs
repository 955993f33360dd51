// src/teams.rs

//! Static franchise reference table.
//!
//! One entry per current NBA franchise. `espn` is the schedule-site path
//! segment (`code/slug`); the code is the site's own vocabulary and differs
//! from the league acronym for several franchises (`gs`, `sa`, `no`, `ny`,
//! `utah`, `wsh`, …), which is why it is carried separately. Lookups are
//! case-insensitive at the boundary; the table itself never changes at
//! runtime.

pub struct TeamInfo {
    /// League-canonical team id.
    pub tid: i64,
    pub acronym: &'static str,
    pub nickname: &'static str,
    pub city: &'static str,
    /// Schedule-site path segment, `code/slug`.
    pub espn: &'static str,
}

impl TeamInfo {
    /// Site team code: the part of the path segment before the slug.
    pub fn espn_code(&self) -> &str {
        match self.espn.split_once('/') {
            Some((code, _)) => code,
            None => self.espn,
        }
    }
}

pub static TEAMS: &[TeamInfo] = &[
    TeamInfo { tid: 1610612737, acronym: "ATL", nickname: "Hawks",         city: "Atlanta",       espn: "atl/atlanta-hawks" },
    TeamInfo { tid: 1610612738, acronym: "BOS", nickname: "Celtics",       city: "Boston",        espn: "bos/boston-celtics" },
    TeamInfo { tid: 1610612751, acronym: "BKN", nickname: "Nets",          city: "Brooklyn",      espn: "bkn/brooklyn-nets" },
    TeamInfo { tid: 1610612766, acronym: "CHA", nickname: "Hornets",       city: "Charlotte",     espn: "cha/charlotte-hornets" },
    TeamInfo { tid: 1610612741, acronym: "CHI", nickname: "Bulls",         city: "Chicago",       espn: "chi/chicago-bulls" },
    TeamInfo { tid: 1610612739, acronym: "CLE", nickname: "Cavaliers",     city: "Cleveland",     espn: "cle/cleveland-cavaliers" },
    TeamInfo { tid: 1610612742, acronym: "DAL", nickname: "Mavericks",     city: "Dallas",        espn: "dal/dallas-mavericks" },
    TeamInfo { tid: 1610612743, acronym: "DEN", nickname: "Nuggets",       city: "Denver",        espn: "den/denver-nuggets" },
    TeamInfo { tid: 1610612765, acronym: "DET", nickname: "Pistons",       city: "Detroit",       espn: "det/detroit-pistons" },
    TeamInfo { tid: 1610612744, acronym: "GSW", nickname: "Warriors",      city: "Golden State",  espn: "gs/golden-state-warriors" },
    TeamInfo { tid: 1610612745, acronym: "HOU", nickname: "Rockets",       city: "Houston",       espn: "hou/houston-rockets" },
    TeamInfo { tid: 1610612754, acronym: "IND", nickname: "Pacers",        city: "Indiana",       espn: "ind/indiana-pacers" },
    TeamInfo { tid: 1610612746, acronym: "LAC", nickname: "Clippers",      city: "LA",            espn: "lac/la-clippers" },
    TeamInfo { tid: 1610612747, acronym: "LAL", nickname: "Lakers",        city: "Los Angeles",   espn: "lal/los-angeles-lakers" },
    TeamInfo { tid: 1610612763, acronym: "MEM", nickname: "Grizzlies",     city: "Memphis",       espn: "mem/memphis-grizzlies" },
    TeamInfo { tid: 1610612748, acronym: "MIA", nickname: "Heat",          city: "Miami",         espn: "mia/miami-heat" },
    TeamInfo { tid: 1610612749, acronym: "MIL", nickname: "Bucks",         city: "Milwaukee",     espn: "mil/milwaukee-bucks" },
    TeamInfo { tid: 1610612750, acronym: "MIN", nickname: "Timberwolves",  city: "Minnesota",     espn: "min/minnesota-timberwolves" },
    TeamInfo { tid: 1610612740, acronym: "NOP", nickname: "Pelicans",      city: "New Orleans",   espn: "no/new-orleans-pelicans" },
    TeamInfo { tid: 1610612752, acronym: "NYK", nickname: "Knicks",        city: "New York",      espn: "ny/new-york-knicks" },
    TeamInfo { tid: 1610612760, acronym: "OKC", nickname: "Thunder",       city: "Oklahoma City", espn: "okc/oklahoma-city-thunder" },
    TeamInfo { tid: 1610612753, acronym: "ORL", nickname: "Magic",         city: "Orlando",       espn: "orl/orlando-magic" },
    TeamInfo { tid: 1610612755, acronym: "PHI", nickname: "76ers",         city: "Philadelphia",  espn: "phi/philadelphia-76ers" },
    TeamInfo { tid: 1610612756, acronym: "PHX", nickname: "Suns",          city: "Phoenix",       espn: "phx/phoenix-suns" },
    TeamInfo { tid: 1610612757, acronym: "POR", nickname: "Trail Blazers", city: "Portland",      espn: "por/portland-trail-blazers" },
    TeamInfo { tid: 1610612758, acronym: "SAC", nickname: "Kings",         city: "Sacramento",    espn: "sac/sacramento-kings" },
    TeamInfo { tid: 1610612759, acronym: "SAS", nickname: "Spurs",         city: "San Antonio",   espn: "sa/san-antonio-spurs" },
    TeamInfo { tid: 1610612761, acronym: "TOR", nickname: "Raptors",       city: "Toronto",       espn: "tor/toronto-raptors" },
    TeamInfo { tid: 1610612762, acronym: "UTA", nickname: "Jazz",          city: "Utah",          espn: "utah/utah-jazz" },
    TeamInfo { tid: 1610612764, acronym: "WAS", nickname: "Wizards",       city: "Washington",    espn: "wsh/washington-wizards" },
];

pub fn by_acronym(acronym: &str) -> Option<&'static TeamInfo> {
    TEAMS.iter().find(|t| t.acronym.eq_ignore_ascii_case(acronym))
}

/// City lookup for opponent resolution. "LA" and "Los Angeles" are distinct
/// franchises.
pub fn by_city(city: &str) -> Option<&'static TeamInfo> {
    TEAMS.iter().find(|t| t.city.eq_ignore_ascii_case(city))
}

pub fn by_espn_code(code: &str) -> Option<&'static TeamInfo> {
    TEAMS.iter().find(|t| t.espn_code().eq_ignore_ascii_case(code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn thirty_franchises_with_unique_aliases() {
        assert_eq!(TEAMS.len(), 30);
        let codes: HashSet<&str> = TEAMS.iter().map(|t| t.espn_code()).collect();
        assert_eq!(codes.len(), 30);
        let acronyms: HashSet<&str> = TEAMS.iter().map(|t| t.acronym).collect();
        assert_eq!(acronyms.len(), 30);
        let tids: HashSet<i64> = TEAMS.iter().map(|t| t.tid).collect();
        assert_eq!(tids.len(), 30);
    }

    #[test]
    fn lookups_fold_case() {
        assert_eq!(by_acronym("lal").map(|t| t.tid), Some(1610612747));
        assert_eq!(by_city("boston").map(|t| t.acronym), Some("BOS"));
        assert_eq!(by_espn_code("UTAH").map(|t| t.acronym), Some("UTA"));
    }

    #[test]
    fn both_la_franchises_resolve() {
        assert_eq!(by_city("LA").map(|t| t.acronym), Some("LAC"));
        assert_eq!(by_city("Los Angeles").map(|t| t.acronym), Some("LAL"));
    }

    #[test]
    fn espn_code_diverges_from_acronym_where_the_site_does() {
        assert_eq!(by_acronym("GSW").map(|t| t.espn_code()), Some("gs"));
        assert_eq!(by_acronym("NOP").map(|t| t.espn_code()), Some("no"));
        assert_eq!(by_acronym("WAS").map(|t| t.espn_code()), Some("wsh"));
    }
}
