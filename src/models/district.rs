use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
    East,
    West,
    Central,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::North,
        Region::South,
        Region::East,
        Region::West,
        Region::Central,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
            Region::Central => "Central",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "north" | "northern" => Some(Region::North),
            "south" | "southern" => Some(Region::South),
            "east" | "eastern" => Some(Region::East),
            "west" | "western" => Some(Region::West),
            "central" | "kigali" => Some(Region::Central),
            _ => None,
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// An administrative district with its approximate center point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct District {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub region: Region,
}

impl District {
    pub const fn new(name: &'static str, latitude: f64, longitude: f64, region: Region) -> Self {
        Self {
            name,
            latitude,
            longitude,
            region,
        }
    }

    /// Case-insensitive name comparison, ignoring surrounding whitespace.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

impl std::fmt::Display for District {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} Region)", self.name, self.region)
    }
}
