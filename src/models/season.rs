use serde::{Deserialize, Serialize};

/// Rwanda's three agricultural seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonId {
    A,
    B,
    C,
}

impl SeasonId {
    pub const ALL: [SeasonId; 3] = [SeasonId::A, SeasonId::B, SeasonId::C];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonId::A => "A",
            SeasonId::B => "B",
            SeasonId::C => "C",
        }
    }

    /// Season for a calendar month (1 = January). `None` outside 1..=12.
    ///
    /// - A: September through January (short rains)
    /// - B: February through June (long rains)
    /// - C: July and August (dry season)
    pub fn for_month(month: u32) -> Option<Self> {
        match month {
            9..=12 | 1 => Some(SeasonId::A),
            2..=6 => Some(SeasonId::B),
            7 | 8 => Some(SeasonId::C),
            _ => None,
        }
    }
}

impl std::fmt::Display for SeasonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonDescriptor {
    pub id: SeasonId,
    pub name: &'static str,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_outside_calendar_have_no_season() {
        assert_eq!(SeasonId::for_month(0), None);
        assert_eq!(SeasonId::for_month(13), None);
    }

    #[test]
    fn season_boundaries() {
        assert_eq!(SeasonId::for_month(1), Some(SeasonId::A));
        assert_eq!(SeasonId::for_month(2), Some(SeasonId::B));
        assert_eq!(SeasonId::for_month(6), Some(SeasonId::B));
        assert_eq!(SeasonId::for_month(7), Some(SeasonId::C));
        assert_eq!(SeasonId::for_month(8), Some(SeasonId::C));
        assert_eq!(SeasonId::for_month(9), Some(SeasonId::A));
        assert_eq!(SeasonId::for_month(12), Some(SeasonId::A));
    }
}
