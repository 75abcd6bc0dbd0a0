// Annotation constants
pub const ACCENT_COLOR: &str = "#769656";
pub const MARKER_ATTR: &str = "data-l2c";
pub const UNKNOWN_PLACEHOLDER: char = '?';
// Selector constants for the site's markup
pub const GAME_META_CLASS: &str = "game__meta__infos";
pub const GAME_PLAYER_CLASS: &str = "ruser";
pub const PROFILE_RATINGS_CLASS: &str = "sub-ratings";
pub const RATING_TAG: &str = "rating";
pub const PERF_HREF_SEGMENT: &str = "/perf/";
