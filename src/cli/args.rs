//! Command line argument parsing for the Glossa CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Glossa - grammatical analysis for written English text
#[derive(Parser, Debug, Clone)]
#[command(name = "glossa")]
#[command(about = "Grammatical analysis and lexical-relation lookup for English text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct GlossaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl GlossaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Look up synonyms of a word
    Synonyms(SynonymsArgs),

    /// Find the morphological root of a word
    Root(RootArgs),

    /// Generate the inflected forms of a word
    Forms(FormsArgs),

    /// Bind grammatical relationships in a tagged document
    Bind(BindArgs),
}

/// Arguments for synonym lookup
#[derive(Parser, Debug, Clone)]
pub struct SynonymsArgs {
    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Part of speech to search under
    #[arg(short, long, default_value = "noun")]
    pub part_of_speech: PartOfSpeechArg,

    /// Directory holding the relation database and exception files
    #[arg(short, long, value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Maximum relation-graph traversal depth
    #[arg(long)]
    pub depth: Option<usize>,

    /// Show load progress
    #[arg(long)]
    pub progress: bool,
}

/// Arguments for root finding
#[derive(Parser, Debug, Clone)]
pub struct RootArgs {
    /// Word to resolve
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Part of speech to resolve under
    #[arg(short, long, default_value = "noun")]
    pub part_of_speech: PartOfSpeechArg,

    /// Directory holding the exception files (omit for suffix rules only)
    #[arg(short, long, value_name = "DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

/// Arguments for form generation
#[derive(Parser, Debug, Clone)]
pub struct FormsArgs {
    /// Word whose root's forms to generate
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Part of speech to generate under
    #[arg(short, long, default_value = "noun")]
    pub part_of_speech: PartOfSpeechArg,

    /// Directory holding the exception files (omit for suffix rules only)
    #[arg(short, long, value_name = "DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

/// Arguments for document binding
#[derive(Parser, Debug, Clone)]
pub struct BindArgs {
    /// Tagged text file ("word/TAG" tokens, one sentence per line, blank
    /// line between paragraphs)
    #[arg(value_name = "DOCUMENT_FILE")]
    pub document_file: PathBuf,

    /// Directory holding the relation database and exception files
    /// (omit for morphology-only verb inference)
    #[arg(short, long, value_name = "DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Document title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Show load progress
    #[arg(long)]
    pub progress: bool,
}

/// Parts of speech selectable from the CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeechArg {
    /// Noun database and morphology
    Noun,
    /// Verb database and morphology
    Verb,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_basic_synonyms_command() {
        let args = GlossaArgs::try_parse_from([
            "glossa",
            "synonyms",
            "run",
            "--part-of-speech",
            "verb",
            "--data-dir",
            "/usr/share/wordnet",
        ])
        .unwrap();

        if let Command::Synonyms(synonyms_args) = args.command {
            assert_eq!(synonyms_args.word, "run");
            assert_eq!(synonyms_args.part_of_speech, PartOfSpeechArg::Verb);
            assert_eq!(
                synonyms_args.data_dir,
                PathBuf::from("/usr/share/wordnet")
            );
            assert_eq!(synonyms_args.depth, None);
        } else {
            panic!("Expected Synonyms command");
        }
    }

    #[test]
    fn test_root_command_defaults_to_noun() {
        let args = GlossaArgs::try_parse_from(["glossa", "root", "books"]).unwrap();

        if let Command::Root(root_args) = args.command {
            assert_eq!(root_args.word, "books");
            assert_eq!(root_args.part_of_speech, PartOfSpeechArg::Noun);
            assert!(root_args.data_dir.is_none());
        } else {
            panic!("Expected Root command");
        }
    }

    #[test]
    fn test_bind_command() {
        let args = GlossaArgs::try_parse_from([
            "glossa",
            "bind",
            "doc.txt",
            "--title",
            "My Document",
        ])
        .unwrap();

        if let Command::Bind(bind_args) = args.command {
            assert_eq!(bind_args.document_file, PathBuf::from("doc.txt"));
            assert_eq!(bind_args.title.as_deref(), Some("My Document"));
        } else {
            panic!("Expected Bind command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = GlossaArgs::try_parse_from(["glossa", "root", "books"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = GlossaArgs::try_parse_from(["glossa", "-vv", "root", "books"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = GlossaArgs::try_parse_from(["glossa", "--quiet", "root", "books"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            GlossaArgs::try_parse_from(["glossa", "--format", "json", "root", "books"]).unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
