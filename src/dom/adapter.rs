use crate::{
    dom::html,
    model::{
        constants::{GAME_PLAYER_CLASS, PERF_HREF_SEGMENT, PROFILE_RATINGS_CLASS, RATING_TAG},
        structures::time_control::TimeControl
    }
};

/// A rating element found in the document: where it sits, what it displays,
/// and (on profile pages) which category its row belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingObservation {
    /// Byte offset of the element's open tag.
    pub start: usize,
    /// Byte offset just past the element's close tag; annotations are
    /// spliced here.
    pub end: usize,
    /// Visible text of the element, whitespace-normalized.
    pub text: String,
    /// Per-node category resolved from the row's perf link. `None` on game
    /// pages, where the page-level classification applies to every node.
    pub category: Option<TimeControl>
}

/// One page layout's way of finding rating elements. Selected from the
/// classifier's output so the layout branch happens exactly once.
pub trait DomAdapter {
    /// All rating elements for this layout, in document order. An empty
    /// vector means the selectors matched nothing; that is a miss, not an
    /// error.
    fn locate(&self, doc: &str) -> Vec<RatingObservation>;
}

/// Live-game layout: one rating per participant, nested under the
/// opponent-display containers.
pub struct GameAdapter;

impl DomAdapter for GameAdapter {
    fn locate(&self, doc: &str) -> Vec<RatingObservation> {
        let mut out = Vec::new();
        let mut pos = 0usize;

        while let Some(player) = html::next_element_with_class(doc, GAME_PLAYER_CLASS, pos) {
            let inner = player.inner(doc);
            let mut rpos = 0usize;

            while let Some(rating) = html::next_element(inner, RATING_TAG, rpos) {
                out.push(RatingObservation {
                    start: player.open_end + rating.start,
                    end: player.open_end + rating.end,
                    text: html::text(rating.inner(inner)),
                    category: None
                });
                rpos = rating.end;
            }

            pos = player.end;
        }

        out
    }
}

/// Profile layout: one rating per time-control row inside the sub-ratings
/// summary, each wrapped in a link to that category's perf page.
pub struct ProfileAdapter;

impl DomAdapter for ProfileAdapter {
    fn locate(&self, doc: &str) -> Vec<RatingObservation> {
        let container = match html::next_element_with_class(doc, PROFILE_RATINGS_CLASS, 0) {
            Some(el) => el,
            None => return Vec::new()
        };

        let base = container.open_end;
        let inner = container.inner(doc);
        let mut out = Vec::new();
        let mut pos = 0usize;

        while let Some(link) = html::next_element(inner, "a", pos) {
            pos = link.end;

            let category = html::attr(link.open_tag(inner), "href").and_then(category_from_href);
            let row = link.inner(inner);

            if let Some(rating) = html::next_element(row, RATING_TAG, 0) {
                out.push(RatingObservation {
                    start: base + link.open_end + rating.start,
                    end: base + link.open_end + rating.end,
                    text: html::text(rating.inner(row)),
                    category
                });
            }
        }

        out
    }
}

/// `/@/user/perf/bullet` → `Bullet`. Rows linking anywhere else (puzzles,
/// variants the dataset has no fit for) resolve to `None` and are skipped
/// downstream.
fn category_from_href(href: &str) -> Option<TimeControl> {
    let at = href.find(PERF_HREF_SEGMENT)?;
    let slug = &href[at + PERF_HREF_SEGMENT.len()..];
    let slug = slug.split(['/', '?', '#']).next().unwrap_or("");

    TimeControl::from_perf_slug(slug)
}
