//! survey-clean CLI - Clean a raw survey CSV export
//!
//! # Commands
//!
//! ```bash
//! survey-clean clean ankieta.csv          # Full pipeline, writes two JSON files
//! survey-clean split ankieta.csv          # Just partition into cohorts
//! survey-clean parse ankieta.csv          # Just parse CSV to JSON rows
//! survey-clean vocabulary                 # Show the tool-name vocabulary
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use survey_clean::logs::log_error;
use survey_clean::{
    clean_csv, parse_csv_file, parse_csv_file_auto, split_dataset, CleanOptions, Dataset,
    DEFAULT_VOCABULARY,
};

#[derive(Parser)]
#[command(name = "survey-clean")]
#[command(about = "Clean and normalize the data-industry survey CSV export", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a CSV file and output JSON rows
    Parse {
        /// Input CSV file
        input: PathBuf,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Full cleaning pipeline: partition, project and normalize
    Clean {
        /// Input CSV file
        input: PathBuf,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Directory for the two output files (default: current directory)
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Partition into cohorts without normalizing
    Split {
        /// Input CSV file
        input: PathBuf,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Output file for the working cohort
        #[arg(long, default_value = "working.json")]
        working: PathBuf,

        /// Output file for the job-seeking cohort
        #[arg(long, default_value = "jobseekers.json")]
        jobseekers: PathBuf,
    },

    /// Show the tool-name synonym and special-case tables
    Vocabulary,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input,
            delimiter,
            output,
        } => cmd_parse(&input, delimiter, output.as_deref()),

        Commands::Clean {
            input,
            delimiter,
            out_dir,
        } => cmd_clean(&input, delimiter, &out_dir),

        Commands::Split {
            input,
            delimiter,
            working,
            jobseekers,
        } => cmd_split(&input, delimiter, &working, &jobseekers),

        Commands::Vocabulary => cmd_vocabulary(),
    };

    if let Err(e) = result {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

fn load_dataset(
    input: &Path,
    delimiter: Option<char>,
) -> Result<Dataset, Box<dyn std::error::Error>> {
    match delimiter {
        Some(d) => Ok(parse_csv_file(input, d)?),
        None => {
            let result = parse_csv_file_auto(input)?;
            eprintln!("   Encoding: {}", result.encoding);
            eprintln!(
                "   Delimiter: '{}' (auto-detected)",
                match result.delimiter {
                    '\t' => "\\t".to_string(),
                    c => c.to_string(),
                }
            );
            Ok(result.dataset)
        }
    }
}

fn cmd_parse(
    input: &Path,
    delimiter: Option<char>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Parsing CSV: {}", input.display());

    let dataset = load_dataset(input, delimiter)?;
    eprintln!("   Columns: {}", dataset.headers().join(", "));
    eprintln!("✅ Parsed {} rows", dataset.row_count());

    let json = serde_json::to_string_pretty(&dataset.to_records())?;
    write_output(&json, output)?;

    Ok(())
}

fn cmd_clean(
    input: &Path,
    delimiter: Option<char>,
    out_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Cleaning: {}", input.display());

    let options = CleanOptions { delimiter };
    let result = clean_csv(input, &options)?;

    eprintln!("   Columns: {}", result.csv_info.headers.join(", "));
    eprintln!("   Rows: {}", result.csv_info.row_count);

    let outcome = &result.outcome;
    if outcome.dropped_rows > 0 {
        eprintln!(
            "   ⚠️  {} rows matched neither cohort literal",
            outcome.dropped_rows
        );
    }

    fs::create_dir_all(out_dir)?;
    let working_path = out_dir.join("working.json");
    let jobseekers_path = out_dir.join("jobseekers.json");

    let working_json = serde_json::to_string_pretty(&outcome.working.to_records())?;
    fs::write(&working_path, working_json)?;
    eprintln!(
        "💾 Working cohort ({} rows) → {}",
        outcome.working.row_count(),
        working_path.display()
    );

    let jobseekers_json = serde_json::to_string_pretty(&outcome.jobseekers.to_records())?;
    fs::write(&jobseekers_path, jobseekers_json)?;
    eprintln!(
        "💾 Job-seeking cohort ({} rows) → {}",
        outcome.jobseekers.row_count(),
        jobseekers_path.display()
    );

    eprintln!("✨ Done!");
    Ok(())
}

fn cmd_split(
    input: &Path,
    delimiter: Option<char>,
    working_path: &Path,
    jobseekers_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Splitting: {}", input.display());

    let dataset = load_dataset(input, delimiter)?;
    let (working, jobseekers) = split_dataset(&dataset)?;

    eprintln!(
        "   {} working with data, {} seeking work ({} dropped)",
        working.row_count(),
        jobseekers.row_count(),
        dataset.row_count() - working.row_count() - jobseekers.row_count()
    );

    fs::write(
        working_path,
        serde_json::to_string_pretty(&working.to_records())?,
    )?;
    eprintln!("💾 {}", working_path.display());

    fs::write(
        jobseekers_path,
        serde_json::to_string_pretty(&jobseekers.to_records())?,
    )?;
    eprintln!("💾 {}", jobseekers_path.display());

    Ok(())
}

fn cmd_vocabulary() -> Result<(), Box<dyn std::error::Error>> {
    let vocabulary = &*DEFAULT_VOCABULARY;

    println!("Synonyms (raw → canonical, before casing):");
    let mut synonyms: Vec<_> = vocabulary.synonym_pairs().collect();
    synonyms.sort();
    for (raw, canonical) in synonyms {
        println!("  {} → {}", raw, canonical);
    }

    println!("\nSpecial cases (title-cased → display form):");
    let mut special_cases: Vec<_> = vocabulary.special_case_pairs().collect();
    special_cases.sort();
    for (cased, display) in special_cases {
        println!("  {} → {}", cased, display);
    }

    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
