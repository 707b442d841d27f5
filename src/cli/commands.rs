//! Command implementations for the Stednavn CLI.

use std::time::Instant;

use log::info;
use rayon::prelude::*;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::GazetteerConfig;
use crate::error::Result;
use crate::gazetteer::extractor::Extractor;

/// Execute a CLI command.
pub fn execute_command(args: StednavnArgs) -> Result<()> {
    let config = args.resolve_config()?;
    let extractor = build_extractor(&config)?;

    match &args.command {
        Command::Extract(extract_args) => extract(&extractor, &config, extract_args, &args),
        Command::Dictionary(dictionary_args) => show_dictionary(&extractor, dictionary_args, &args),
    }
}

/// Load the catalog and stopwords and compile the matcher.
fn build_extractor(config: &GazetteerConfig) -> Result<Extractor> {
    let start_time = Instant::now();
    let extractor = Extractor::from_config(config)?;
    info!(
        "Compiled {} place names in {} ms",
        extractor.dictionary().len(),
        start_time.elapsed().as_millis()
    );
    Ok(extractor)
}

/// Extract place names from every file, in parallel, and print them in
/// command line order.
fn extract(
    extractor: &Extractor,
    config: &GazetteerConfig,
    args: &ExtractArgs,
    cli_args: &StednavnArgs,
) -> Result<()> {
    let start_time = Instant::now();

    let results = args
        .files
        .par_iter()
        .map(|path| -> Result<FileMatches> {
            let matches = extractor.extract_matches_from_path(path, config.encoding)?;
            Ok(FileMatches {
                path: path.to_string_lossy().to_string(),
                matches,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    info!(
        "Found {} place names in {} files in {} ms",
        results.iter().map(|r| r.matches.len()).sum::<usize>(),
        results.len(),
        start_time.elapsed().as_millis()
    );

    output_matches(&results, args.offsets, cli_args)
}

/// Print the dictionary.
fn show_dictionary(
    extractor: &Extractor,
    args: &DictionaryArgs,
    cli_args: &StednavnArgs,
) -> Result<()> {
    let names = extractor.dictionary().names();
    let names = match args.limit {
        Some(limit) => &names[..limit.min(names.len())],
        None => names,
    };
    output_dictionary(names, cli_args)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;

    use super::*;
    use crate::error::StednavnError;

    #[test]
    fn test_execute_extract() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("stednavne.tsv");
        let text = dir.path().join("tekst.txt");
        fs::write(&catalog, "?place\t?placeLabel\nQ1\tOdense@da\nQ2\tFyn@da\n").unwrap();
        fs::write(&text, "We drove from Odense to Fyn yesterday.").unwrap();

        let args = StednavnArgs::try_parse_from([
            "stednavn".to_string(),
            "-q".to_string(),
            "--catalog".to_string(),
            catalog.to_string_lossy().to_string(),
            "extract".to_string(),
            text.to_string_lossy().to_string(),
        ])
        .unwrap();

        assert!(execute_command(args).is_ok());
    }

    #[test]
    fn test_execute_missing_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("stednavne.tsv");
        fs::write(&catalog, "?place\t?placeLabel\nQ1\tOdense@da\n").unwrap();

        let args = StednavnArgs::try_parse_from([
            "stednavn".to_string(),
            "--catalog".to_string(),
            catalog.to_string_lossy().to_string(),
            "extract".to_string(),
            dir.path().join("missing.txt").to_string_lossy().to_string(),
        ])
        .unwrap();

        assert!(matches!(
            execute_command(args),
            Err(StednavnError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn test_execute_without_catalog() {
        let args = StednavnArgs::try_parse_from(["stednavn", "dictionary"]).unwrap();
        if args.catalog.is_none() && args.config.is_none() {
            assert!(matches!(
                execute_command(args),
                Err(StednavnError::InvalidConfig(_))
            ));
        }
    }
}
