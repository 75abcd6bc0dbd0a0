use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString};

/// Time-control category of a game, as displayed by the site.
/// Determines which regression model applies to a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
pub enum TimeControl {
    Bullet,
    Blitz,
    Rapid,
    Classical,
    Correspondence,
    Unknown
}

impl TimeControl {
    /// Parses the category slug from a profile `/perf/<slug>` link.
    /// Slugs the dataset knows nothing about (e.g. `ultraBullet`) yield `None`.
    pub fn from_perf_slug(slug: &str) -> Option<TimeControl> {
        match TimeControl::from_str(slug) {
            Ok(TimeControl::Unknown) => None,
            Ok(tc) => Some(tc),
            Err(_) => None
        }
    }

    /// The category whose regression model a game page should use.
    /// Categories without a fitted model of their own (correspondence games
    /// are the practical case) borrow the classical fit.
    pub fn model_fallback(self) -> TimeControl {
        match self {
            TimeControl::Bullet | TimeControl::Blitz | TimeControl::Rapid => self,
            _ => TimeControl::Classical
        }
    }
}
