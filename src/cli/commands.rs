//! Command implementations for the Glossa CLI.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crossbeam_channel::unbounded;
use log::debug;

use crate::binder;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::lexicon::parser::DocumentParser;
use crate::morphology::{ExceptionTable, Resolver};
use crate::thesaurus::{CancelToken, EngineConfig, LoadProgress, SynonymEngine, Thesaurus};

/// Execute a CLI command.
pub fn execute_command(args: GlossaArgs) -> Result<()> {
    match &args.command {
        Command::Synonyms(synonyms_args) => lookup_synonyms(synonyms_args.clone(), &args),
        Command::Root(root_args) => find_root(root_args.clone(), &args),
        Command::Forms(forms_args) => generate_forms(forms_args.clone(), &args),
        Command::Bind(bind_args) => bind_document(bind_args.clone(), &args),
    }
}

/// Look up synonyms of a word.
fn lookup_synonyms(args: SynonymsArgs, cli_args: &GlossaArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Looking up {:?} as a {:?}", args.word, args.part_of_speech);
        println!("Data directory: {}", args.data_dir.display());
    }

    let engine = load_engine(
        args.part_of_speech,
        &args.data_dir,
        args.depth,
        args.progress && cli_args.verbosity() > 0,
    )?;

    let start_time = Instant::now();
    let synonyms = engine.lookup(&args.word);
    let duration = start_time.elapsed();

    output_result(
        "Synonyms found",
        &SynonymResults {
            word: args.word.clone(),
            root: engine.root_of(&args.word),
            part_of_speech: part_name(args.part_of_speech).to_string(),
            synonyms: synonyms.into_iter().collect(),
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )?;

    Ok(())
}

/// Find the morphological root of a word.
fn find_root(args: RootArgs, cli_args: &GlossaArgs) -> Result<()> {
    let resolver = build_resolver(args.part_of_speech, args.data_dir.as_deref())?;

    output_result(
        "Root resolved",
        &RootResult {
            word: args.word.clone(),
            part_of_speech: part_name(args.part_of_speech).to_string(),
            root: resolver.find_root(&args.word),
        },
        cli_args,
    )?;

    Ok(())
}

/// Generate the inflected forms of a word's root.
fn generate_forms(args: FormsArgs, cli_args: &GlossaArgs) -> Result<()> {
    let resolver = build_resolver(args.part_of_speech, args.data_dir.as_deref())?;
    let root = resolver.find_root(&args.word);

    output_result(
        "Forms generated",
        &FormsResult {
            word: args.word.clone(),
            forms: resolver.get_forms(&root),
            root,
            part_of_speech: part_name(args.part_of_speech).to_string(),
        },
        cli_args,
    )?;

    Ok(())
}

/// Parse a tagged document, bind it, and report its predicates.
fn bind_document(args: BindArgs, cli_args: &GlossaArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Binding document: {}", args.document_file.display());
    }

    let text = fs::read_to_string(&args.document_file)?;
    let title = args.title.clone().unwrap_or_else(|| {
        args.document_file
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| "document".to_string())
    });

    let thesaurus = match &args.data_dir {
        Some(data_dir) => {
            let show_progress = args.progress && cli_args.verbosity() > 0;
            Thesaurus::with_engines(
                load_engine(PartOfSpeechArg::Noun, data_dir, None, show_progress)?,
                load_engine(PartOfSpeechArg::Verb, data_dir, None, show_progress)?,
            )
        }
        None => Thesaurus::default(),
    };

    let start_time = Instant::now();
    let mut document = DocumentParser::new().parse_tagged_text(&title, &text);
    binder::bind(&mut document, &thesaurus);
    let duration = start_time.elapsed();

    let predicates = document
        .verbals()
        .into_iter()
        .map(|verbal| {
            let relations = document.relations(verbal);
            BoundPredicate {
                verbal: document.construct_text(verbal),
                subjects: texts(&document, &relations.subjects),
                direct_objects: texts(&document, &relations.direct_objects),
                indirect_objects: texts(&document, &relations.indirect_objects),
                modifiers: texts(&document, &relations.modifiers),
            }
        })
        .collect();

    output_result(
        "Document bound",
        &BindResults {
            title,
            paragraphs: document.paragraphs().len(),
            sentences: document.sentences().len(),
            words: document.words().len(),
            predicates,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )?;

    Ok(())
}

fn texts(
    document: &crate::lexicon::document::Document,
    constructs: &[crate::lexicon::binding::ConstructId],
) -> Vec<String> {
    constructs
        .iter()
        .map(|&construct| document.construct_text(construct))
        .collect()
}

fn part_name(part: PartOfSpeechArg) -> &'static str {
    match part {
        PartOfSpeechArg::Noun => "noun",
        PartOfSpeechArg::Verb => "verb",
    }
}

/// Build a resolver, loading the part's exception file when a data directory
/// is given and the file exists.
fn build_resolver(part: PartOfSpeechArg, data_dir: Option<&Path>) -> Result<Resolver> {
    let exception_file = match part {
        PartOfSpeechArg::Noun => "noun.exc",
        PartOfSpeechArg::Verb => "verb.exc",
    };
    let exceptions = match data_dir {
        Some(dir) => {
            let path = dir.join(exception_file);
            if path.exists() {
                ExceptionTable::load(&path)?
            } else {
                debug!("no exception file at {}", path.display());
                ExceptionTable::new()
            }
        }
        None => ExceptionTable::new(),
    };
    Ok(match part {
        PartOfSpeechArg::Noun => Resolver::noun(exceptions),
        PartOfSpeechArg::Verb => Resolver::verb(exceptions),
    })
}

/// Build and load a synonym engine from a WordNet-layout data directory
/// (`data.noun`/`data.verb` plus `noun.exc`/`verb.exc`).
fn load_engine(
    part: PartOfSpeechArg,
    data_dir: &Path,
    depth: Option<usize>,
    show_progress: bool,
) -> Result<SynonymEngine> {
    let resolver = Arc::new(build_resolver(part, Some(data_dir))?);
    let mut config = match part {
        PartOfSpeechArg::Noun => EngineConfig::noun(),
        PartOfSpeechArg::Verb => EngineConfig::verb(),
    };
    if let Some(depth) = depth {
        config = config.with_traversal_depth(depth);
    }
    let engine = SynonymEngine::new(config, resolver);

    let data_file = match part {
        PartOfSpeechArg::Noun => "data.noun",
        PartOfSpeechArg::Verb => "data.verb",
    };
    let data_path = data_dir.join(data_file);

    let cancel = CancelToken::new();
    if show_progress {
        let (sender, receiver) = unbounded::<LoadProgress>();
        let printer = std::thread::spawn(move || {
            for progress in receiver {
                eprintln!(
                    "{} ({:.0}%)",
                    progress.message,
                    progress.fraction_complete * 100.0
                );
            }
        });
        let result = engine.load_from_file(&data_path, Some(sender), &cancel);
        // The sender is dropped by load_from_file's reporter going away.
        let _ = printer.join();
        result?;
    } else {
        engine.load_from_file(&data_path, None, &cancel)?;
    }
    Ok(engine)
}
