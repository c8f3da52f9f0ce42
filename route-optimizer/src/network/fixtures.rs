//! Test networks shared by the network, planner and web tests.

use crate::domain::{Line, LineId, LineKind, StationKey, ThroughService};

use super::{Network, RideTimeModel};

pub fn key(s: &str) -> StationKey {
    StationKey::normalize(s).unwrap()
}

pub fn lid(s: &str) -> LineId {
    LineId::new(s)
}

/// A 30 km/h line named after its id.
pub fn line(id: &str, stations: &[&str], kind: LineKind, operator: &str) -> Line {
    Line::new(
        lid(id),
        id,
        stations.iter().map(|s| s.to_string()).collect(),
        kind,
        30.0,
        operator,
    )
}

/// A small slice of the Tokyo network around Shibuya, Ikebukuro and
/// Tokorozawa, with the Fukutoshin/Yurakucho through-service.
pub fn tokyo_sample() -> Network {
    let fukutoshin = Line::new(
        lid("TokyoMetro.Fukutoshin"),
        "Fukutoshin Line",
        [
            "Shibuya",
            "Meiji-Jingumae",
            "Kita-Sando",
            "Shinjuku-Sanchome",
            "Higashi-Shinjuku",
            "Nishi-Waseda",
            "Zoshigaya",
            "Ikebukuro",
            "Kanamecho",
            "Senkawa",
            "Kotake-Mukaihara",
        ]
        .map(String::from)
        .to_vec(),
        LineKind::Linear,
        35.0,
        "TokyoMetro",
    )
    .with_color("#9C5E31");

    let yurakucho = Line::new(
        lid("Seibu.Yurakucho"),
        "Seibu Yurakucho Line",
        ["Kotake-Mukaihara", "Shin-Sakuradai", "Nerima"]
            .map(String::from)
            .to_vec(),
        LineKind::Linear,
        40.0,
        "Seibu",
    );

    let seibu_ikebukuro = Line::new(
        lid("Seibu.Ikebukuro"),
        "Seibu Ikebukuro Line",
        [
            "Ikebukuro",
            "Shiinamachi",
            "Ekoda",
            "Sakuradai",
            "Nerima",
            "Nakamurabashi",
            "Shakujii-Koen",
            "Hibarigaoka",
            "Tokorozawa",
        ]
        .map(String::from)
        .to_vec(),
        LineKind::Linear,
        45.0,
        "Seibu",
    );

    let yamanote = Line::new(
        lid("JR-East.Yamanote"),
        "Yamanote Line",
        [
            "Shibuya",
            "Harajuku",
            "Yoyogi",
            "Shinjuku",
            "Takadanobaba",
            "Mejiro",
            "Ikebukuro",
            "Otsuka",
            "Ueno",
            "Akihabara",
            "Tokyo",
            "Shimbashi",
            "Shinagawa",
            "Ebisu",
        ]
        .map(String::from)
        .to_vec(),
        LineKind::Loop,
        34.0,
        "JR-East",
    )
    .with_name_ja("山手線");

    Network::from_lines(
        vec![fukutoshin, yurakucho, seibu_ikebukuro, yamanote],
        vec![ThroughService::new(
            [lid("TokyoMetro.Fukutoshin"), lid("Seibu.Yurakucho")],
            key("Kotake-Mukaihara"),
        )],
        RideTimeModel::default(),
    )
}
