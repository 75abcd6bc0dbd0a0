use tracing::debug;

use crate::{
    dom::{
        adapter::{DomAdapter, GameAdapter, ProfileAdapter},
        annotator, classifier
    },
    model::{
        store::RegressionStore,
        structures::page_context::{PageContext, PageKind}
    }
};

/// Result of one pipeline run over a document.
#[derive(Debug, Clone)]
pub struct Annotated {
    pub html: String,
    pub inserted: usize,
    pub context: PageContext
}

/// Runs the whole pipeline once: classify the page, locate its rating
/// elements through the matching layout adapter, convert each rating and
/// splice in the annotations. A step with nothing to offer ends the run
/// with the document unchanged; there are no retries.
pub fn annotate_document(doc: &str, store: &RegressionStore) -> Annotated {
    let context = classifier::classify(doc);

    let adapter: &dyn DomAdapter = match context.kind {
        PageKind::Game => &GameAdapter,
        PageKind::Profile => &ProfileAdapter
    };

    let observations = adapter.locate(doc);
    debug!(count = observations.len(), "located rating elements");

    if observations.is_empty() {
        return Annotated {
            html: doc.to_string(),
            inserted: 0,
            context
        };
    }

    let (html, inserted) = annotator::annotate(doc, &observations, context, store);

    Annotated {
        html,
        inserted,
        context
    }
}
