// Match-V5 lives on the regional routing hosts, not the platform hosts.
pub const MATCH_ENDPOINT: &str = "https://{routing}.api.riotgames.com/lol/match/v5/matches/{match_id}";

pub const USER_AGENT: &str = concat!("penta_score/", env!("CARGO_PKG_VERSION"));

/// Maps a platform region (`na1`, `euw1`, ...) to its routing cluster.
pub fn regional_routing(region: &str) -> &'static str {
    match region.to_ascii_lowercase().as_str() {
        "na1" | "br1" | "la1" | "la2" => "americas",
        "euw1" | "eun1" | "tr1" | "ru" | "me1" => "europe",
        "kr" | "jp1" => "asia",
        "oc1" | "ph2" | "sg2" | "th2" | "tw2" | "vn2" => "sea",
        _ => "americas", // default
    }
}

pub fn match_url(region: &str, match_id: &str) -> String {
    MATCH_ENDPOINT
        .replace("{routing}", regional_routing(region))
        .replace("{match_id}", match_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_platforms_to_clusters() {
        assert_eq!(regional_routing("na1"), "americas");
        assert_eq!(regional_routing("EUW1"), "europe");
        assert_eq!(regional_routing("kr"), "asia");
        assert_eq!(regional_routing("oc1"), "sea");
        assert_eq!(regional_routing("unknown"), "americas");
    }

    #[test]
    fn builds_match_url() {
        assert_eq!(
            match_url("euw1", "EUW1_123"),
            "https://europe.api.riotgames.com/lol/match/v5/matches/EUW1_123"
        );
    }
}
