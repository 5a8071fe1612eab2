//! The synonym lookup engine and its load state machine.

use std::collections::{BTreeSet, VecDeque};
use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use ahash::AHashSet;
use crossbeam_channel::Sender;
use log::{debug, info};

use crate::error::{GlossaError, Result};
use crate::morphology::Resolver;
use crate::thesaurus::index::SynsetIndex;
use crate::thesaurus::parser::{DATA_HEADER_LINES, parse_data_line};
use crate::thesaurus::progress::{CancelToken, LoadProgress, ProgressReporter};
use crate::thesaurus::synset::{PartOfSpeech, RelationKind};

/// Lines between cancellation checks and progress ticks.
const PROGRESS_EVERY: usize = 512;

/// Lifecycle of a synonym engine. `Loaded` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Unloaded,
    Loading,
    Loaded,
}

impl LoadState {
    fn from_u8(value: u8) -> LoadState {
        match value {
            1 => LoadState::Loading,
            2 => LoadState::Loaded,
            _ => LoadState::Unloaded,
        }
    }
}

/// Configuration for a synonym engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Part of speech this engine serves; determines the relation allow-list
    /// and category parsing.
    pub part_of_speech: PartOfSpeech,
    /// Fixed-size header skipped at the top of the data file.
    pub header_lines: usize,
    /// Maximum traversal depth from the containing synset.
    pub traversal_depth: usize,
}

impl EngineConfig {
    /// Configuration for a noun engine.
    pub fn noun() -> EngineConfig {
        EngineConfig {
            part_of_speech: PartOfSpeech::Noun,
            header_lines: DATA_HEADER_LINES,
            traversal_depth: 3,
        }
    }

    /// Configuration for a verb engine.
    pub fn verb() -> EngineConfig {
        EngineConfig {
            part_of_speech: PartOfSpeech::Verb,
            header_lines: DATA_HEADER_LINES,
            traversal_depth: 3,
        }
    }

    /// Override the header size (mock databases in tests have none).
    pub fn with_header_lines(mut self, header_lines: usize) -> EngineConfig {
        self.header_lines = header_lines;
        self
    }

    /// Override the traversal depth bound.
    pub fn with_traversal_depth(mut self, traversal_depth: usize) -> EngineConfig {
        self.traversal_depth = traversal_depth;
        self
    }
}

/// Parses the external relation database into an indexed synset graph and
/// answers synonym/root/conjugation queries.
///
/// State machine: `Unloaded -> Loading -> Loaded`. The index structures are
/// safe to populate and read concurrently, so querying during `Loading` does
/// not corrupt state; it may simply under-return results until the load
/// completes. That eventual consistency is an accepted trade-off, not a bug.
pub struct SynonymEngine {
    config: EngineConfig,
    allowed: &'static [RelationKind],
    index: SynsetIndex,
    resolver: Arc<Resolver>,
    state: AtomicU8,
}

impl SynonymEngine {
    /// Create an engine with the given configuration and morphological
    /// resolver.
    pub fn new(config: EngineConfig, resolver: Arc<Resolver>) -> SynonymEngine {
        let allowed = config.part_of_speech.synonym_relations();
        SynonymEngine {
            config,
            allowed,
            index: SynsetIndex::new(),
            resolver,
            state: AtomicU8::new(0),
        }
    }

    /// Noun engine with default configuration.
    pub fn noun(resolver: Arc<Resolver>) -> SynonymEngine {
        SynonymEngine::new(EngineConfig::noun(), resolver)
    }

    /// Verb engine with default configuration.
    pub fn verb(resolver: Arc<Resolver>) -> SynonymEngine {
        SynonymEngine::new(EngineConfig::verb(), resolver)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LoadState {
        LoadState::from_u8(self.state.load(Ordering::SeqCst))
    }

    /// Number of distinct synset ids indexed so far.
    pub fn synset_count(&self) -> usize {
        self.index.len()
    }

    /// Load the relation database from a file.
    ///
    /// Progress notifications are emitted at a bounded rate over `progress`;
    /// `cancel` is honored between progress ticks. An I/O failure aborts the
    /// load and leaves the engine not-`Loaded`; it must not be queried as if
    /// complete.
    pub fn load_from_file(
        &self,
        path: impl AsRef<Path>,
        progress: Option<Sender<LoadProgress>>,
        cancel: &CancelToken,
    ) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            GlossaError::resource(format!(
                "failed to open relation database '{}': {e}",
                path.display()
            ))
        })?;
        let total_bytes = file.metadata().ok().map(|m| m.len());
        info!(
            "loading {} relation database from {}",
            self.resolver.name(),
            path.display()
        );
        self.load_from_reader(std::io::BufReader::new(file), total_bytes, progress, cancel)
    }

    /// Load the relation database from any buffered reader.
    pub fn load_from_reader<R: BufRead>(
        &self,
        reader: R,
        total_bytes: Option<u64>,
        progress: Option<Sender<LoadProgress>>,
        cancel: &CancelToken,
    ) -> Result<()> {
        self.begin_load()?;
        match self.run_load(reader, total_bytes, progress, cancel) {
            Ok(loaded) => {
                self.state.store(2, Ordering::SeqCst);
                info!("loaded {loaded} {} synsets", self.resolver.name());
                Ok(())
            }
            Err(e) => {
                // Partially loaded is not loaded.
                self.state.store(0, Ordering::SeqCst);
                Err(e)
            }
        }
    }

    fn begin_load(&self) -> Result<()> {
        match self
            .state
            .compare_exchange(0, 1, Ordering::SeqCst, Ordering::SeqCst)
        {
            Ok(_) => Ok(()),
            Err(current) => Err(GlossaError::invalid_operation(format!(
                "load already {}",
                match LoadState::from_u8(current) {
                    LoadState::Loading => "in progress",
                    _ => "complete",
                }
            ))),
        }
    }

    fn run_load<R: BufRead>(
        &self,
        reader: R,
        total_bytes: Option<u64>,
        progress: Option<Sender<LoadProgress>>,
        cancel: &CancelToken,
    ) -> Result<usize> {
        let phase = format!("Loading {} relations", self.resolver.name());
        let mut reporter = ProgressReporter::new(progress);
        let mut bytes_read = 0u64;
        let mut loaded = 0usize;
        for (line_number, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                GlossaError::resource(format!("failed to read relation database: {e}"))
            })?;
            bytes_read += line.len() as u64 + 1;
            if line_number < self.config.header_lines {
                continue;
            }
            match parse_data_line(&line, self.config.part_of_speech, self.allowed) {
                Ok(synset) => {
                    self.index.insert(synset);
                    loaded += 1;
                }
                Err(e) => {
                    // Skip-and-continue: one bad line never aborts the load.
                    debug!("skipping line {}: {e}", line_number + 1);
                }
            }
            if line_number % PROGRESS_EVERY == 0 {
                if cancel.is_cancelled() {
                    return Err(GlossaError::cancelled(format!(
                        "{} load cancelled at line {}",
                        self.resolver.name(),
                        line_number + 1
                    )));
                }
                let fraction = total_bytes
                    .map(|total| bytes_read as f64 / total.max(1) as f64)
                    .unwrap_or(0.0);
                reporter.tick(&phase, fraction);
            }
        }
        reporter.finish(&format!("Loaded {loaded} {} synsets", self.resolver.name()));
        Ok(loaded)
    }

    /// Root form of a word, per the morphological resolver.
    pub fn root_of(&self, word: &str) -> String {
        self.resolver.find_root(word)
    }

    /// Conjugated/inflected forms of a word's root.
    pub fn forms_of(&self, word: &str) -> Vec<String> {
        self.resolver.get_forms(&self.resolver.find_root(word))
    }

    /// Synonym lookup by depth-bounded traversal over the allow-listed
    /// relation graph.
    ///
    /// The result is never empty: it always contains the (lowercased) search
    /// term itself, even when no matching synset exists.
    pub fn lookup(&self, word: &str) -> BTreeSet<String> {
        let term = word.trim().to_lowercase();
        let mut results = BTreeSet::new();
        results.insert(term.clone());
        if term.is_empty() {
            return results;
        }

        let root = self.resolver.find_root(&term);
        let candidates = self.resolver.candidate_roots(&term);
        let start = candidates
            .iter()
            .find_map(|candidate| self.index.by_word(candidate))
            .or_else(|| {
                // Fallback for terms that were not dictionary entries.
                candidates
                    .iter()
                    .find_map(|candidate| self.index.scan_for_word(candidate))
            });

        let mut collected: AHashSet<String> = AHashSet::new();
        collected.insert(root.clone());

        if let Some(start) = start {
            // Visited set keyed by synset id: the relation graph is not
            // guaranteed acyclic.
            let mut visited: AHashSet<u32> = AHashSet::new();
            let mut queue: VecDeque<(Vec<String>, Vec<(RelationKind, u32)>, usize)> =
                VecDeque::new();
            {
                let guard = start.read();
                visited.insert(guard.id);
                queue.push_back((
                    guard.words.iter().cloned().collect(),
                    guard.relations.iter().copied().collect(),
                    0,
                ));
            }
            while let Some((words, relations, depth)) = queue.pop_front() {
                collected.extend(words);
                if depth >= self.config.traversal_depth {
                    continue;
                }
                for (_kind, target) in relations {
                    if !visited.insert(target) {
                        continue;
                    }
                    if let Some(next) = self.index.by_id(target) {
                        // Snapshot under the lock, traverse outside it.
                        let guard = next.read();
                        if guard.id != target && !visited.insert(guard.id) {
                            continue;
                        }
                        queue.push_back((
                            guard.words.iter().cloned().collect(),
                            guard.relations.iter().copied().collect(),
                            depth + 1,
                        ));
                    }
                }
            }
        }

        // Expand every collected word-form through the form generator.
        for word_form in collected {
            if !word_form.contains(' ') {
                for form in self.resolver.get_forms(&word_form) {
                    results.insert(form);
                }
            }
            results.insert(word_form);
        }
        results
    }
}

/// Facade bundling the noun and verb engines.
pub struct Thesaurus {
    pub nouns: SynonymEngine,
    pub verbs: SynonymEngine,
}

impl Thesaurus {
    /// Create a thesaurus from per-part-of-speech resolvers.
    pub fn new(noun_resolver: Arc<Resolver>, verb_resolver: Arc<Resolver>) -> Thesaurus {
        Thesaurus {
            nouns: SynonymEngine::noun(noun_resolver),
            verbs: SynonymEngine::verb(verb_resolver),
        }
    }

    /// Create a thesaurus from preconfigured engines.
    pub fn with_engines(nouns: SynonymEngine, verbs: SynonymEngine) -> Thesaurus {
        Thesaurus { nouns, verbs }
    }

    /// Is `word` (in any of its forms) a synonym of the verb `target`?
    pub fn is_verb_synonym(&self, word: &str, target: &str) -> bool {
        self.verbs.lookup(word).contains(&target.to_lowercase())
    }

    /// Is `word` (in any of its forms) a synonym of the noun `target`?
    pub fn is_noun_synonym(&self, word: &str, target: &str) -> bool {
        self.nouns.lookup(word).contains(&target.to_lowercase())
    }
}

impl Default for Thesaurus {
    /// A thesaurus with empty exception tables and unloaded databases.
    /// Lookups degrade to morphology-only expansion.
    fn default() -> Thesaurus {
        use crate::morphology::ExceptionTable;
        Thesaurus::new(
            Arc::new(Resolver::noun(ExceptionTable::new())),
            Arc::new(Resolver::verb(ExceptionTable::new())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::ExceptionTable;
    use std::io::Cursor;

    fn verb_engine() -> SynonymEngine {
        let resolver = Arc::new(Resolver::verb(ExceptionTable::from_lines([
            "ran run",
            "running run",
        ])));
        SynonymEngine::new(EngineConfig::verb().with_header_lines(0), resolver)
    }

    fn load(engine: &SynonymEngine, data: &str) {
        engine
            .load_from_reader(Cursor::new(data.to_string()), None, None, &CancelToken::new())
            .unwrap();
    }

    #[test]
    fn test_state_machine() {
        let engine = verb_engine();
        assert_eq!(engine.state(), LoadState::Unloaded);
        load(&engine, "00000001 29 v 01 walk 0 000\n");
        assert_eq!(engine.state(), LoadState::Loaded);
        // Loaded is terminal.
        let err = engine
            .load_from_reader(Cursor::new(String::new()), None, None, &CancelToken::new())
            .unwrap_err();
        assert!(matches!(err, GlossaError::InvalidOperation(_)));
    }

    #[test]
    fn test_lookup_floor_without_any_data() {
        let engine = verb_engine();
        let results = engine.lookup("Xyzzy");
        assert!(results.contains("xyzzy"));
        assert!(!results.is_empty());
    }

    #[test]
    fn test_lookup_traverses_hypernyms() {
        let engine = verb_engine();
        load(
            &engine,
            "00000001 29 v 02 walk 0 stroll 0 000\n\
             00000002 29 v 01 run 0 001 @ 00000001 v 0000\n",
        );
        let results = engine.lookup("run");
        assert!(results.contains("run"));
        assert!(results.contains("walk"));
        assert!(results.contains("stroll"));
        // Conjugations of collected forms are included.
        assert!(results.contains("walks"));
        assert!(results.contains("running"));
    }

    #[test]
    fn test_cyclic_graph_terminates() {
        let engine = verb_engine();
        load(
            &engine,
            "00000001 29 v 01 walk 0 001 @ 00000002 v 0000\n\
             00000002 29 v 01 march 0 001 @ 00000001 v 0000\n",
        );
        let results = engine.lookup("walk");
        assert!(results.contains("march"));
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let engine = verb_engine();
        load(
            &engine,
            "this line is garbage\n00000001 29 v 01 walk 0 000\nmore garbage\n",
        );
        assert_eq!(engine.synset_count(), 1);
        assert_eq!(engine.state(), LoadState::Loaded);
    }

    #[test]
    fn test_missing_file_leaves_engine_unloaded() {
        let engine = verb_engine();
        let err = engine
            .load_from_file("/nonexistent/data.verb", None, &CancelToken::new())
            .unwrap_err();
        assert!(matches!(err, GlossaError::Resource(_)));
        assert_eq!(engine.state(), LoadState::Unloaded);
    }

    #[test]
    fn test_cancellation_between_units() {
        let engine = verb_engine();
        let cancel = CancelToken::new();
        cancel.cancel();
        let err = engine
            .load_from_reader(
                Cursor::new("00000001 29 v 01 walk 0 000\n".to_string()),
                None,
                None,
                &cancel,
            )
            .unwrap_err();
        assert!(matches!(err, GlossaError::OperationCancelled(_)));
        assert_eq!(engine.state(), LoadState::Unloaded);
    }

    #[test]
    fn test_lookup_inflected_search_term() {
        let engine = verb_engine();
        load(
            &engine,
            "00000001 29 v 02 walk 0 stroll 0 000\n\
             00000002 29 v 01 run 0 001 @ 00000001 v 0000\n",
        );
        // "ran" resolves to "run" through the exception table first.
        let results = engine.lookup("ran");
        assert!(results.contains("walk"));
        assert!(results.contains("ran"));
    }
}
