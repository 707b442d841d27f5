//! Command line argument parsing for the Stednavn CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::GazetteerConfig;
use crate::error::Result;
use crate::gazetteer::source::TextEncoding;

/// Stednavn - extract place names from text
#[derive(Parser, Debug, Clone)]
#[command(name = "stednavn")]
#[command(about = "Extract known place names from free-form text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct StednavnArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "STEDNAVN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Tab-separated catalog of place-name labels
    #[arg(long, value_name = "CATALOG_FILE", env = "STEDNAVN_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Stopword file, one word per line
    #[arg(long, value_name = "STOPWORDS_FILE", env = "STEDNAVN_STOPWORDS")]
    pub stopwords: Option<PathBuf>,

    /// Header of the catalog column holding the labels
    #[arg(long)]
    pub label_column: Option<String>,

    /// Language tag suffix of eligible labels, e.g. "@da"
    #[arg(long)]
    pub language: Option<String>,

    /// Keep place names that are also stopwords
    #[arg(long)]
    pub keep_stopwords: bool,

    /// Encoding of input files
    #[arg(short, long)]
    pub encoding: Option<TextEncoding>,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "text", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl StednavnArgs {
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

    /// Build the effective configuration: the config file, if any, with
    /// command line flags applied on top.
    pub fn resolve_config(&self) -> Result<GazetteerConfig> {
        let mut config = match &self.config {
            Some(path) => GazetteerConfig::load(path)?,
            None => GazetteerConfig::default(),
        };

        if let Some(catalog) = &self.catalog {
            config.catalog_path = Some(catalog.clone());
        }
        if let Some(stopwords) = &self.stopwords {
            config.stopwords_path = Some(stopwords.clone());
        }
        if let Some(label_column) = &self.label_column {
            config.label_column = label_column.clone();
        }
        if let Some(language) = &self.language {
            config.language_tag = language.clone();
        }
        if self.keep_stopwords {
            config.exclude_stopwords = false;
        }
        if let Some(encoding) = self.encoding {
            config.encoding = encoding;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Extract place names from text files
    Extract(ExtractArgs),

    /// Print the compiled dictionary in match-precedence order
    Dictionary(DictionaryArgs),
}

/// Arguments for extraction
#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    /// Text files to extract place names from
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Include byte offsets in the raw text (text format)
    #[arg(long)]
    pub offsets: bool,
}

/// Arguments for printing the dictionary
#[derive(Parser, Debug, Clone)]
pub struct DictionaryArgs {
    /// Print at most this many names
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One place name per line
    Text,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use clap::Parser;

    #[test]
    fn test_extract_command() {
        let args = StednavnArgs::try_parse_from([
            "stednavn",
            "--catalog",
            "data/stednavne.tsv",
            "extract",
            "a.txt",
            "b.txt",
            "--offsets",
        ])
        .unwrap();

        assert_eq!(args.catalog, Some(PathBuf::from("data/stednavne.tsv")));
        assert_eq!(args.output_format, OutputFormat::Text);
        if let Command::Extract(extract_args) = args.command {
            assert_eq!(
                extract_args.files,
                vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]
            );
            assert!(extract_args.offsets);
        } else {
            panic!("Expected Extract command");
        }
    }

    #[test]
    fn test_extract_requires_files() {
        let result = StednavnArgs::try_parse_from(["stednavn", "extract"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_dictionary_command() {
        let args = StednavnArgs::try_parse_from([
            "stednavn",
            "dictionary",
            "--limit",
            "10",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Json);
        if let Command::Dictionary(dictionary_args) = args.command {
            assert_eq!(dictionary_args.limit, Some(10));
        } else {
            panic!("Expected Dictionary command");
        }
    }

    #[test]
    fn test_encoding_values() {
        let args =
            StednavnArgs::try_parse_from(["stednavn", "-e", "latin-1", "extract", "a.txt"])
                .unwrap();
        assert_eq!(args.encoding, Some(TextEncoding::Latin1));

        let result =
            StednavnArgs::try_parse_from(["stednavn", "-e", "ebcdic", "extract", "a.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity() {
        let args = StednavnArgs::try_parse_from(["stednavn", "extract", "a.txt"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args =
            StednavnArgs::try_parse_from(["stednavn", "-vvv", "extract", "a.txt"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args =
            StednavnArgs::try_parse_from(["stednavn", "-vv", "-q", "extract", "a.txt"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "catalog_path": "from-config.tsv", "language_tag": "@sv" }}"#
        )
        .unwrap();
        file.flush().unwrap();

        let config_path = file.path().to_string_lossy().to_string();
        let args = StednavnArgs::try_parse_from([
            "stednavn",
            "--config",
            config_path.as_str(),
            "--language",
            "@da",
            "--keep-stopwords",
            "extract",
            "a.txt",
        ])
        .unwrap();

        let config = args.resolve_config().unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("from-config.tsv")));
        assert_eq!(config.language_tag, "@da");
        assert!(!config.exclude_stopwords);
    }
}
