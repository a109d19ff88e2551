//! ietf_keywords_to_page - build the keyword -> WG page from a CSV matrix
//!
//! ```bash
//! ietf_keywords_to_page -i keywords.csv > page.html       # detail page
//! ietf_keywords_to_page -i keywords.csv -o > index.html   # overview page
//! ```
//!
//! Flags may also come from `IETF_KEYWORDS_*` environment variables (a
//! `.env` file is honored) or from `config.yaml` in `~/.ietf_keywords_to_page/`
//! or the current directory.

use clap::builder::BoolishValueParser;
use clap::{CommandFactory, Parser};
use ietf_keywords::{
    generate_page, logging, ConfigError, Flags, LoadedConfig, PageError, Settings, Verbosity,
};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::{debug, info};

const AFTER_HELP: &str = "\
Reads a CSV file of WGs and keywords, and outputs a webpage of keyword -> WG.

It reads a YAML config file called 'config.yaml' in ~/.ietf_keywords_to_page/
or in the current directory.

Example config:
  infile: keywords.csv
  overview: true";

#[derive(Parser)]
#[command(name = "ietf_keywords_to_page")]
#[command(about = "Generate the IETF keyword -> working group page", long_about = None)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Input CSV file
    #[arg(short, long, env = "IETF_KEYWORDS_INFILE")]
    infile: Option<PathBuf>,

    /// Generate overview page only (keywords containing *); `--overview=false` forces the detail page
    #[arg(
        short,
        long,
        env = "IETF_KEYWORDS_OVERVIEW",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    overview: Option<bool>,

    /// Be more verbose
    #[arg(
        short,
        long,
        env = "IETF_KEYWORDS_VERBOSE",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    verbose: Option<bool>,

    /// Print debug information
    #[arg(
        short,
        long,
        env = "IETF_KEYWORDS_DEBUG",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    debug: Option<bool>,
}

impl Cli {
    fn into_flags(self) -> Flags {
        Flags {
            infile: self.infile,
            overview: self.overview,
            verbose: self.verbose,
            debug: self.debug,
        }
    }
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        if matches!(e, PageError::Config(ConfigError::MissingInput)) {
            eprintln!();
            eprintln!("{}", Cli::command().render_help());
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), PageError> {
    let flags = cli.into_flags();

    let loaded = LoadedConfig::discover()?;
    let file = loaded.as_ref().map(|l| &l.config);

    logging::init(Verbosity::resolve(&flags, file));
    match &loaded {
        Some(l) => info!("Using config file {}", l.path.display()),
        None => debug!("No config file (config.yaml) found."),
    }

    let settings = Settings::resolve(flags, file)?;
    info!(
        "Generating {} page from {}",
        settings.options.page_name(),
        settings.infile.display()
    );

    let stdout = io::stdout();
    let summary = generate_page(
        &settings.infile,
        &settings.options,
        BufWriter::new(stdout.lock()),
    )?;
    debug!(?summary, "Done");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Flags {
        let mut argv = vec!["ietf_keywords_to_page"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().into_flags()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_switches_absent_by_default() {
        let flags = parse(&["-i", "kw.csv"]);

        assert_eq!(flags.infile, Some(PathBuf::from("kw.csv")));
        assert_eq!(flags.overview, None);
        assert_eq!(flags.verbose, None);
        assert_eq!(flags.debug, None);
    }

    #[test]
    fn test_bare_switch_turns_on() {
        let flags = parse(&["-i", "kw.csv", "-o", "--debug"]);

        assert_eq!(flags.overview, Some(true));
        assert_eq!(flags.debug, Some(true));
    }

    #[test]
    fn test_switch_can_be_turned_off() {
        let flags = parse(&["--infile", "kw.csv", "--overview=false", "-v=no"]);

        assert_eq!(flags.overview, Some(false));
        assert_eq!(flags.verbose, Some(false));
    }
}
