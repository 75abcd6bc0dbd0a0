use lichess2chess::{
    model::{store, store::RegressionStore},
    pipeline::annotate_document
};

fn game_page() -> &'static str {
    include_str!("../test_data/game_blitz.html")
}

fn profile_page() -> &'static str {
    include_str!("../test_data/profile.html")
}

#[test]
fn test_blitz_game_page_annotates_both_opponents() {
    let result = annotate_document(game_page(), store::bundled());

    assert_eq!(result.inserted, 2);
    assert!(result
        .html
        .contains(r#"<rating>1800</rating><span style="color: #769656" data-l2c="1"> (1980)</span>"#));
    assert!(result
        .html
        .contains(r#"<rating>1500</rating><span style="color: #769656" data-l2c="1"> (1747)</span>"#));
}

#[test]
fn test_profile_page_with_bundled_store() {
    let result = annotate_document(profile_page(), store::bundled());

    // Bullet 2000 -> round(0.93111 * 2000 + 113.672) = 1976
    // Rapid 1430 -> round(0.00004671 * 1430^2 + 0.51774 * 1430 + 438.443) = 1274
    // Blitz "?" is a placeholder, puzzles row has no perf category
    assert_eq!(result.inserted, 2);
    assert!(result.html.contains("<rating>2000</rating><span"));
    assert!(result.html.contains("> (1976)</span>"));
    assert!(result.html.contains("<rating>1430</rating><span"));
    assert!(result.html.contains("> (1274)</span>"));
    assert!(result.html.contains("<rating>?</rating></a>"));
    assert!(result.html.contains("<rating>2200</rating></a>"));
}

#[test]
fn test_profile_bullet_row_through_cubic_model() {
    // Four bare coefficients imply a cubic fit
    let store = RegressionStore::from_json(r#"{ "BULLET": [0.00000001, -0.00002, 1.05, 18.0] }"#).unwrap();
    let result = annotate_document(profile_page(), &store);

    // round(1e-8 * 2000^3 - 2e-5 * 2000^2 + 1.05 * 2000 + 18) = 2118;
    // every other row has no model in this store
    assert_eq!(result.inserted, 1);
    assert!(result.html.contains("<rating>2000</rating><span"));
    assert!(result.html.contains("> (2118)</span>"));
}

#[test]
fn test_placeholder_row_inserts_nothing_and_does_not_panic() {
    let store = RegressionStore::from_json(r#"{ "BLITZ": [0.77735, 581.148] }"#).unwrap();
    let result = annotate_document(profile_page(), &store);

    assert_eq!(result.inserted, 0);
    assert_eq!(result.html, profile_page());
}

#[test]
fn test_profile_without_sub_ratings_passes_through() {
    let doc = "<html><body><main class=\"page-menu\"></main></body></html>";
    let result = annotate_document(doc, store::bundled());

    assert_eq!(result.inserted, 0);
    assert_eq!(result.html, doc);
}

#[test]
fn test_annotation_is_idempotent() {
    let first = annotate_document(game_page(), store::bundled());
    let second = annotate_document(&first.html, store::bundled());

    assert_eq!(first.inserted, 2);
    assert_eq!(second.inserted, 0);
    assert_eq!(second.html, first.html);
}

#[test]
fn test_correspondence_game_uses_classical_fit() {
    let doc = r#"
        <div class="game__meta__infos">Correspondence &bull; Rated &bull; Blitz rating shown</div>
        <div class="ruser"><rating>2000</rating></div>"#;
    let result = annotate_document(doc, store::bundled());

    // Priority puts Correspondence ahead of the Blitz marker; correspondence
    // games borrow the classical fit: round(0.86423 * 2000 + 361.919) = 2090
    assert_eq!(result.inserted, 1);
    assert!(result.html.contains("> (2090)</span>"));
}

#[test]
fn test_dataset_load_failure_is_an_error_not_a_fallback() {
    assert!(RegressionStore::from_json("{ definitely not json").is_err());
}
