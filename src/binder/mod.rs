//! Grammatical binder: relationship-assignment passes over a reified
//! document.
//!
//! The binder is a protocol, not a type: a set of binding passes that must
//! run strictly sequentially over a given document, because later passes read
//! state written by earlier ones and binding mutates shared word/phrase
//! state. Distinct documents share nothing and may be bound concurrently.

pub mod modifier;
pub mod predicate;
pub mod reference;

pub use modifier::bind_modifiers;
pub use predicate::bind_predicates;
pub use reference::bind_references;

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use crate::error::{GlossaError, Result};
use crate::lexicon::document::Document;
use crate::thesaurus::Thesaurus;

/// Run every binding pass over one document, in order.
pub fn bind(document: &mut Document, thesaurus: &Thesaurus) {
    bind_predicates(document, thesaurus);
    bind_modifiers(document);
    bind_references(document);
}

/// Bind multiple distinct documents concurrently on a worker pool.
///
/// Passes within each document stay sequential; only whole documents run in
/// parallel.
pub fn bind_all(documents: &mut [Document], thesaurus: &Thesaurus) -> Result<()> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(num_cpus::get())
        .thread_name(|i| format!("glossa-bind-{i}"))
        .build()
        .map_err(|e| {
            GlossaError::invalid_operation(format!("failed to create thread pool: {e}"))
        })?;
    pool.install(|| {
        documents
            .par_iter_mut()
            .for_each(|document| bind(document, thesaurus));
    });
    Ok(())
}
