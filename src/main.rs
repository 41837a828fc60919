use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{info, Dispatch};
use tracing_subscriber::EnvFilter;
use wtf::{Engine, Language, Query, Report, SourceConfig, WtfError};

#[derive(Parser, Debug)]
#[command(name = "wtf", version, about = "Look up words in an online dictionary")]
struct Cli {
    /// Show verbose debug information
    #[arg(short, long)]
    verbose: bool,

    /// Search word in specific engine
    #[arg(short, long, value_enum, default_value_t = Engine::Youdao)]
    engine: Engine,

    /// Destination language
    #[arg(short, long = "lang", value_enum, default_value_t = Language::Chs)]
    language: Language,

    /// Enable web translations based on website data
    #[arg(short, long = "web")]
    web_translation: bool,

    /// Request timeout in seconds, 0 to wait indefinitely
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Word(s) to search for
    #[arg(required = true)]
    words: Vec<String>,
}

fn log_dispatch(verbose: bool) -> Dispatch {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("off")
    };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    Dispatch::new(subscriber)
}

fn run(cli: Cli) -> Result<Report, WtfError> {
    info!(verbose = cli.verbose, engine = %cli.engine, language = %cli.language, "starting");
    info!(words = ?cli.words, "words");

    let query = Query::new(cli.words, cli.language)?
        .with_web_translation(cli.web_translation)
        .with_engine(cli.engine);
    let config = SourceConfig {
        timeout: (cli.timeout > 0).then(|| Duration::from_secs(cli.timeout)),
        ..SourceConfig::default()
    };
    wtf::lookup(&query, &config)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let dispatch = log_dispatch(cli.verbose);

    match tracing::dispatcher::with_default(&dispatch, || run(cli)) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("wtf: {err}");
            ExitCode::FAILURE
        }
    }
}
