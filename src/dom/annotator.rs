use tracing::debug;

use crate::{
    dom::adapter::RatingObservation,
    model::{
        constants::{ACCENT_COLOR, MARKER_ATTR, UNKNOWN_PLACEHOLDER},
        convert,
        store::RegressionStore,
        structures::page_context::{PageContext, PageKind}
    }
};

/// Splices converted-rating spans into the document, one after each
/// observation that survives the skip rules.
///
/// Skips are per-observation and silent: placeholder text, unparseable
/// text, a category that cannot be resolved, a category with no model, a
/// conversion the model declines, or a node that already carries an
/// annotation from an earlier run. Returns the annotated document and the
/// number of spans inserted.
pub fn annotate(
    doc: &str,
    observations: &[RatingObservation],
    context: PageContext,
    store: &RegressionStore
) -> (String, usize) {
    let mut out = String::with_capacity(doc.len() + observations.len() * 48);
    let mut cursor = 0usize;
    let mut inserted = 0usize;

    for obs in observations {
        // Locators produce document-order spans; anything else is a bug in
        // the adapter, treated as a miss here.
        if obs.start < cursor || obs.end > doc.len() {
            continue;
        }

        let converted = match converted_rating(obs, context, store) {
            Some(v) => v,
            None => continue
        };

        if already_annotated(&doc[obs.end..]) {
            debug!(start = obs.start, "rating node already annotated, skipping");
            continue;
        }

        out.push_str(&doc[cursor..obs.end]);
        out.push_str(&format!(
            r#"<span style="color: {ACCENT_COLOR}" {MARKER_ATTR}="1"> ({converted})</span>"#
        ));
        cursor = obs.end;
        inserted += 1;
    }

    out.push_str(&doc[cursor..]);
    (out, inserted)
}

fn converted_rating(obs: &RatingObservation, context: PageContext, store: &RegressionStore) -> Option<i64> {
    // Provisional/unknown ratings are displayed with a leading placeholder
    if obs.text.starts_with(UNKNOWN_PLACEHOLDER) {
        return None;
    }

    let rating = parse_leading_int(&obs.text)?;

    let category = match context.kind {
        PageKind::Game => context.time_control.model_fallback(),
        PageKind::Profile => obs.category?
    };

    let model = store.model_for(category)?;
    convert(model, rating)
}

/// Leading integer of the displayed text, e.g. `1500` out of `"1500?"`.
fn parse_leading_int(text: &str) -> Option<i64> {
    let digits: String = text.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// True when the markup immediately following a rating element is an
/// annotation span from a previous run. Keeps repeated invocations on the
/// same document from stacking duplicates.
fn already_annotated(following: &str) -> bool {
    let rest = following.trim_start();
    if !rest.starts_with("<span") {
        return false;
    }

    match rest.find('>') {
        Some(gt) => rest[..gt].contains(MARKER_ATTR),
        None => false
    }
}

#[cfg(test)]
mod tests {
    use super::{annotate, parse_leading_int};
    use crate::{
        dom::adapter::{DomAdapter, GameAdapter, ProfileAdapter},
        model::{
            store::RegressionStore,
            structures::{page_context::PageContext, time_control::TimeControl}
        }
    };

    fn blitz_store() -> RegressionStore {
        RegressionStore::from_json(r#"{ "BLITZ": { "type": "linear", "params": [0.77735, 581.148] } }"#).unwrap()
    }

    fn game_doc() -> &'static str {
        r#"<div class="ruser"><rating>1500</rating></div><div class="ruser"><rating>1800</rating></div>"#
    }

    #[test]
    fn test_inserts_marked_spans_after_ratings() {
        let doc = game_doc();
        let obs = GameAdapter.locate(doc);
        let ctx = PageContext::from_time_control(TimeControl::Blitz);

        let (html, inserted) = annotate(doc, &obs, ctx, &blitz_store());

        assert_eq!(inserted, 2);
        assert!(html.contains(r#"</rating><span style="color: #769656" data-l2c="1"> (1747)</span>"#));
        assert!(html.contains("> (1980)</span>"));
    }

    #[test]
    fn test_second_run_is_a_no_op() {
        let doc = game_doc();
        let obs = GameAdapter.locate(doc);
        let ctx = PageContext::from_time_control(TimeControl::Blitz);
        let store = blitz_store();

        let (first, _) = annotate(doc, &obs, ctx, &store);
        let obs_again = GameAdapter.locate(&first);
        let (second, inserted) = annotate(&first, &obs_again, ctx, &store);

        assert_eq!(inserted, 0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_placeholder_rating_is_skipped() {
        let doc = r#"<div class="ruser"><rating>?</rating></div><div class="ruser"><rating>1500</rating></div>"#;
        let obs = GameAdapter.locate(doc);
        let ctx = PageContext::from_time_control(TimeControl::Blitz);

        let (html, inserted) = annotate(doc, &obs, ctx, &blitz_store());

        assert_eq!(inserted, 1);
        assert!(html.contains("<rating>?</rating></div>"));
        assert!(html.contains("(1747)"));
    }

    #[test]
    fn test_unparseable_rating_is_skipped() {
        let doc = r#"<div class="ruser"><rating>n/a</rating></div>"#;
        let obs = GameAdapter.locate(doc);
        let ctx = PageContext::from_time_control(TimeControl::Blitz);

        let (html, inserted) = annotate(doc, &obs, ctx, &blitz_store());

        assert_eq!(inserted, 0);
        assert_eq!(html, doc);
    }

    #[test]
    fn test_absent_model_is_skipped() {
        let doc = r#"<div class="sub-ratings"><a href="/@/a/perf/rapid"><rating>1430</rating></a></div>"#;
        let obs = ProfileAdapter.locate(doc);
        let ctx = PageContext::from_time_control(TimeControl::Unknown);

        // Store only knows blitz; the rapid row has no model
        let (html, inserted) = annotate(doc, &obs, ctx, &blitz_store());

        assert_eq!(inserted, 0);
        assert_eq!(html, doc);
    }

    #[test]
    fn test_correspondence_game_borrows_classical_model() {
        let store =
            RegressionStore::from_json(r#"{ "CLASSICAL": { "type": "linear", "params": [1.0, 50.0] } }"#).unwrap();
        let doc = r#"<div class="ruser"><rating>1600</rating></div>"#;
        let obs = GameAdapter.locate(doc);
        let ctx = PageContext::from_time_control(TimeControl::Correspondence);

        let (html, inserted) = annotate(doc, &obs, ctx, &store);

        assert_eq!(inserted, 1);
        assert!(html.contains("(1650)"));
    }

    #[test]
    fn test_provisional_suffix_still_parses() {
        // "1500?" is a provisional but displayed rating; the leading digits count
        let doc = r#"<div class="ruser"><rating>1500?</rating></div>"#;
        let obs = GameAdapter.locate(doc);
        let ctx = PageContext::from_time_control(TimeControl::Blitz);

        let (_, inserted) = annotate(doc, &obs, ctx, &blitz_store());

        assert_eq!(inserted, 1);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("1500"), Some(1500));
        assert_eq!(parse_leading_int("1500?"), Some(1500));
        assert_eq!(parse_leading_int("?"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
    }
}
