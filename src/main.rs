use chrono::Utc;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;

use gh_strength::config::Config;
use gh_strength::github::FetchError;
use gh_strength::password::{PasswordOptions, DEFAULT_LENGTH};

const EXIT_SUCCESS: i32 = 0;
const EXIT_AUTH: i32 = 1;
const EXIT_NETWORK: i32 = 2;
const EXIT_RATE_LIMIT: i32 = 3;
const EXIT_CONFIG: i32 = 4;
const EXIT_NOT_FOUND: i32 = 5;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
enum OutputFormat {
    /// Strength meters and recommendations
    #[default]
    Text,
    /// The full report as JSON
    Json,
}

#[derive(Args, Debug, Default)]
struct AnalyzeArgs {
    /// GitHub username to analyze (prompted for when omitted)
    username: Option<String>,

    /// GitHub token (defaults to GH_STRENGTH_TOKEN or GITHUB_TOKEN)
    #[arg(long)]
    token: Option<String>,

    /// Prompt for a token if none is set
    #[arg(long)]
    ask_token: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Password length (8-128, default 16)
    #[arg(short, long)]
    length: Option<usize>,

    /// How many passwords to generate (1-10)
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Leave out lowercase letters
    #[arg(long)]
    no_lowercase: bool,

    /// Leave out uppercase letters
    #[arg(long)]
    no_uppercase: bool,

    /// Leave out digits
    #[arg(long)]
    no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    no_symbols: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum PasswordCommand {
    /// Generate random passwords and show their strength
    Generate(GenerateArgs),
    /// Rate a password typed at a hidden prompt
    Check {
        /// Disable coloured output
        #[arg(long)]
        no_color: bool,
    },
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a GitHub account (default if no subcommand)
    Analyze(AnalyzeArgs),
    /// Password generator and strength meter
    #[command(subcommand)]
    Password(PasswordCommand),
}

#[derive(Parser, Debug)]
#[command(name = "gh-strength")]
#[command(about = "GitHub profile strength analyzer and password generator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/gh-strength/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for rustls 0.23+)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let cli = Cli::parse();
    gh_strength::logging::init(cli.verbose);

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match gh_strength::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate config at startup
    if let Err(errors) = gh_strength::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Analyze(AnalyzeArgs::default()));

    let code = match command {
        Commands::Analyze(args) => run_analyze(args, &config).await,
        Commands::Password(command) => run_password(command, &config),
    };

    std::process::exit(code);
}

fn exit_code_for(error: &FetchError) -> i32 {
    match error {
        FetchError::NotFound(_) => EXIT_NOT_FOUND,
        FetchError::RateLimited => EXIT_RATE_LIMIT,
        FetchError::Unauthorized => EXIT_AUTH,
        FetchError::Network(_) => EXIT_NETWORK,
    }
}

async fn run_analyze(args: AnalyzeArgs, config: &Config) -> i32 {
    let username = match args.username {
        Some(username) => username.trim().to_string(),
        None => match gh_strength::prompt::prompt_for_username() {
            Ok(username) => username,
            Err(e) => {
                eprintln!("{:#}", e);
                return EXIT_CONFIG;
            }
        },
    };

    if !gh_strength::github::is_valid_username(&username) {
        eprintln!("Invalid GitHub username: '{}'", username);
        return EXIT_CONFIG;
    }

    let token = match gh_strength::credentials::resolve_token(args.token.as_deref(), args.ask_token) {
        Ok(token) => token,
        Err(e) => {
            eprintln!("Credential error: {:#}", e);
            return EXIT_AUTH;
        }
    };

    match &token {
        Some((_, source)) => debug!(?source, "using GitHub token"),
        None => debug!("no token, requests are anonymous"),
    }

    let client = match gh_strength::github::create_client(token.as_ref().map(|(t, _)| t.as_str())) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create GitHub client: {:#}", e);
            return EXIT_NETWORK;
        }
    };

    let scoring = config.scoring.clone().unwrap_or_default();
    let use_colors = gh_strength::output::should_use_colors(args.no_color);

    if args.format == OutputFormat::Text {
        println!("Analyzing GitHub account: {}...", username);
    }

    let start_time = Instant::now();
    let (data, report) =
        match gh_strength::fetch::fetch_and_score(&client, &username, &scoring, Utc::now()).await {
            Ok(result) => result,
            Err(e) => {
                eprintln!("{}", e);
                return exit_code_for(&e);
            }
        };
    debug!(elapsed = ?start_time.elapsed(), "analysis finished");

    match args.format {
        OutputFormat::Text => {
            println!();
            println!(
                "{}",
                gh_strength::output::format_report(&data.profile.login, &report, use_colors)
            );
        }
        OutputFormat::Json => match gh_strength::output::format_json(&data.profile.login, &report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize report: {}", e);
                return EXIT_CONFIG;
            }
        },
    }

    EXIT_SUCCESS
}

fn run_password(command: PasswordCommand, config: &Config) -> i32 {
    let defaults = config.password.clone().unwrap_or_default();

    match command {
        PasswordCommand::Generate(args) => {
            let length = args.length.or(defaults.length).unwrap_or(DEFAULT_LENGTH);
            let count = args.count.or(defaults.count).unwrap_or(1);

            if let Err(errors) = gh_strength::password::validate_password_options(length, count) {
                for error in errors {
                    eprintln!("{}", error);
                }
                return EXIT_CONFIG;
            }

            let options = PasswordOptions {
                length,
                lowercase: !args.no_lowercase,
                uppercase: !args.no_uppercase,
                digits: !args.no_digits,
                symbols: !args.no_symbols,
            };
            let use_colors = gh_strength::output::should_use_colors(args.no_color);

            let mut rng = rand::rng();
            let rendered: Vec<String> = (1..=count)
                .map(|index| {
                    let password = gh_strength::password::generate(&options, &mut rng);
                    let strength = gh_strength::password::analyze_strength(&password);
                    gh_strength::output::format_password(index, &password, &strength, use_colors)
                })
                .collect();
            println!("{}", rendered.join("\n\n"));
            EXIT_SUCCESS
        }
        PasswordCommand::Check { no_color } => {
            let password = match gh_strength::prompt::prompt_hidden("Enter password to test: ") {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("{:#}", e);
                    return EXIT_CONFIG;
                }
            };
            if password.is_empty() {
                eprintln!("No password entered.");
                return EXIT_CONFIG;
            }

            let strength = gh_strength::password::analyze_strength(&password);
            let use_colors = gh_strength::output::should_use_colors(no_color);
            println!("{}", gh_strength::output::format_strength(&strength, use_colors));
            EXIT_SUCCESS
        }
    }
}
