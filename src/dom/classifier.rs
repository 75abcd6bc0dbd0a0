use tracing::debug;

use crate::{
    dom::html,
    model::{
        constants::GAME_META_CLASS,
        structures::{page_context::PageContext, time_control::TimeControl}
    }
};

/// Marker texts checked against the setup/meta node, highest priority
/// first. Some page layouts run the markers together in one container, so
/// the order is fixed data rather than site-driven: "Correspondence" must
/// win over the shorter markers it can co-occur with.
pub const MARKERS: &[(&str, TimeControl)] = &[
    ("Correspondence", TimeControl::Correspondence),
    ("Blitz", TimeControl::Blitz),
    ("Bullet", TimeControl::Bullet),
    ("Rapid", TimeControl::Rapid),
    ("Classical", TimeControl::Classical)
];

/// Classifies the current document in one synchronous read.
///
/// The game setup/meta element is the anchor; its `data-icon` and `title`
/// attributes are consulted before its visible text. A missing anchor or an
/// anchor matching no marker yields `Unknown`, which routes the evaluation
/// to the profile layout.
pub fn classify(doc: &str) -> PageContext {
    let time_control = detect_time_control(doc);
    debug!(?time_control, "classified document");

    PageContext::from_time_control(time_control)
}

fn detect_time_control(doc: &str) -> TimeControl {
    let meta = match html::next_element_with_class(doc, GAME_META_CLASS, 0) {
        Some(el) => el,
        None => return TimeControl::Unknown
    };

    let open_tag = meta.open_tag(doc);
    let icon = html::attr(open_tag, "data-icon").unwrap_or("");
    let title = html::attr(open_tag, "title").unwrap_or("");
    let text = html::text(meta.inner(doc));

    for (marker, category) in MARKERS {
        if contains_ci(icon, marker) || contains_ci(title, marker) || contains_ci(&text, marker) {
            return *category;
        }
    }

    TimeControl::Unknown
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_ascii_lowercase().contains(&needle.to_ascii_lowercase())
}
