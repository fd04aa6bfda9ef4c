use lett_compiler::config::runtime::LoggingPreferences;
use lett_compiler::config::{ConfigError, RuntimeConfig};
use lett_compiler::lexical::{self, LexicalAnalyzer};
use lett_compiler::logging;
use lett_compiler::reader::ReaderError;
use lett_compiler::tokens::{self, Token};
use std::env;
use std::path::PathBuf;

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Help,
    Version,
    Scan(ScanOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ScanOptions {
    source: PathBuf,
    json: bool,
    summary: bool,
    config: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Reader(#[from] ReaderError),

    #[error("Cannot serialize tokens: {0}")]
    Output(#[from] serde_json::Error),
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("lett");

    let command = match parse_args(args.get(1..).unwrap_or(&[])) {
        Ok(command) => command,
        Err(error) => {
            eprintln!("Error: {}", error);
            eprintln!("Usage: {} [OPTIONS] <source_file>", program);
            eprintln!("       {} --help", program);
            std::process::exit(1);
        }
    };

    match command {
        Command::Help => print_help(program),
        Command::Version => println!("lett {}", env!("CARGO_PKG_VERSION")),
        Command::Scan(options) => {
            if let Err(error) = run(&options) {
                eprintln!("Error: {}", error);
                std::process::exit(1);
            }
        }
    }
}

fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let mut options = ScanOptions::default();
    let mut source = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-v" | "--version" => return Ok(Command::Version),
            "--json" => options.json = true,
            "--summary" => options.summary = true,
            "--config" => {
                let Some(path) = args.get(i + 1) else {
                    return Err(CliError::Usage("--config requires a file".to_string()));
                };
                options.config = Some(PathBuf::from(path));
                i += 1;
            }
            flag if flag.starts_with('-') => {
                return Err(CliError::Usage(format!("Unknown option '{}'", flag)));
            }
            path => {
                if source.is_some() {
                    return Err(CliError::Usage(format!("Unexpected argument '{}'", path)));
                }
                source = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    options.source = source.ok_or_else(|| CliError::Usage("Missing source file".to_string()))?;
    Ok(Command::Scan(options))
}

fn run(options: &ScanOptions) -> Result<(), CliError> {
    let config = match &options.config {
        Some(path) => RuntimeConfig::from_file(path)?,
        None => RuntimeConfig::default(),
    };

    init_logging(&config.logging);

    let mut analyzer = LexicalAnalyzer::with_preferences(config.lexical.clone());
    let tokens = lexical::scan_file_with(&mut analyzer, &options.source, &config.reader)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else {
        print!("{}", tokens::dump_tokens(&tokens));
    }

    if options.summary {
        print_summary(&tokens, &analyzer);
    }

    Ok(())
}

/// Install logging preferences and the global logger. Failures are reported
/// and returned; scanning proceeds either way.
fn init_logging(preferences: &LoggingPreferences) -> Vec<String> {
    // Preferences must be in place before the logger reads them
    let failures: Vec<String> = [
        logging::config::init_runtime_preferences(preferences.clone()),
        logging::init_global_logging(),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    for failure in &failures {
        logging::safe_log_error(
            logging::codes::system::INITIALIZATION_FAILURE,
            &format!("Logging unavailable: {}", failure),
        );
    }

    failures
}

fn print_summary(tokens: &[Token], analyzer: &LexicalAnalyzer) {
    let metrics = analyzer.metrics();

    println!();
    println!("Summary:");
    println!("  Tokens: {}", metrics.total_tokens);
    for (category, count) in tokens::count_by_category(tokens) {
        println!("    {:<12} {}", category, count);
    }
    println!("  Comments discarded: {}", metrics.comments_discarded);
    println!("  Characters read: {}", metrics.characters_consumed);
    println!("  Longest lexeme: {}", metrics.max_lexeme_length);

    if analyzer.has_errors() {
        println!("  Lexical errors: {}", analyzer.errors().len());
        for error in analyzer.errors() {
            println!("    [{}] {}", error.error_code(), error);
        }
    }
}

fn print_help(program_name: &str) {
    println!("lett v{}", env!("CARGO_PKG_VERSION"));
    println!("Lexical scanner for the lett language");
    println!();
    println!("USAGE:");
    println!("    {} [OPTIONS] <source_file>", program_name);
    println!();
    println!("OPTIONS:");
    println!("    -h, --help          Show this help message");
    println!("    -v, --version       Show version information");
    println!("    --json              Print tokens as JSON");
    println!("    --summary           Print token counts and lexical errors");
    println!("    --config <file>     Load runtime preferences from a TOML file");
    println!();
    println!("OUTPUT:");
    println!("    One token per line as (TYPE, lexeme, line:column).");
    println!("    Lexical errors appear as UNKNOWN tokens and do not change the exit code.");
    println!();
    println!("ENVIRONMENT:");
    println!("    LETT_READER_CHUNK_SIZE            File read chunk size in bytes");
    println!("    LETT_LEXICAL_RECOVERY_DELIMITER   drop | include");
    println!("    LETT_LOGGING_MIN_LEVEL            error | warning | info | debug");
    println!();
    println!("BUILD:");
    println!("    {}", lett_compiler::config::build_info::source_info());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_scan_options() {
        let command = parse_args(&args(&["--json", "main.lett", "--config", "lett.toml"])).unwrap();
        assert_eq!(
            command,
            Command::Scan(ScanOptions {
                source: PathBuf::from("main.lett"),
                json: true,
                summary: false,
                config: Some(PathBuf::from("lett.toml")),
            })
        );
    }

    #[test]
    fn test_parse_help_and_version() {
        assert_eq!(parse_args(&args(&["-h"])).unwrap(), Command::Help);
        assert_eq!(parse_args(&args(&["x.lett", "--version"])).unwrap(), Command::Version);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_args(&args(&[])), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(&args(&["--bogus", "a"])), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(&args(&["a", "b"])), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(&args(&["a", "--config"])), Err(CliError::Usage(_))));
    }

    #[test]
    fn test_run_reports_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let options = ScanOptions {
            source: dir.path().join("absent.lett"),
            ..ScanOptions::default()
        };
        assert!(matches!(run(&options), Err(CliError::Reader(ReaderError::FileNotFound { .. }))));
    }

    #[test]
    fn test_repeated_logging_setup_is_reported() {
        let preferences = LoggingPreferences::default();
        init_logging(&preferences);

        let failures = init_logging(&preferences);
        assert_eq!(failures.len(), 2);
        assert!(failures.iter().all(|failure| failure.contains("already initialized")));
    }
}
