use cipherforge::api::Session;
use cipherforge::config::Config;
use cipherforge::error::CfResult;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    config: Config,

    /// JSON file with search, scoring and data settings
    #[arg(global = true, long = "config")]
    config_file: Option<PathBuf>,

    /// Seed for every random draw; entropy when omitted
    #[arg(global = true, short = 'S', long)]
    seed: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rotate every letter by a fixed amount
    CaesarEncrypt(cmd::caesar::EncryptArgs),
    /// Try all 26 rotations against the dictionary
    CaesarDecrypt(cmd::caesar::DecryptArgs),
    /// Quadgram English-ness score of a text
    Score(cmd::score::ScoreArgs),
    /// Encrypt with a random substitution key
    Encrypt(cmd::substitution::EncryptArgs),
    /// Recover a substitution key from ciphertext alone
    Decrypt(cmd::substitution::DecryptArgs),
    /// Decrypt a whole file and write the plaintext to another
    DecryptFile(cmd::substitution::FileArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

/// File settings first, then anything typed on the command line on top.
fn resolve_config(cli: &Cli, matches: &ArgMatches) -> CfResult<Config> {
    let Some(path) = &cli.config_file else {
        return Ok(cli.config.clone());
    };

    info!("⚖️  Loading Config from: {}", path.display());
    let mut config = Config::load_from_file(path)?;
    config.merge_from_cli(&cli.config, matches);
    if let Some((_, sub_matches)) = matches.subcommand() {
        config.merge_from_cli(&cli.config, sub_matches);
    }
    Ok(config)
}

fn run(cli: Cli, matches: &ArgMatches) -> CfResult<()> {
    let config = resolve_config(&cli, matches)?;
    let mut session = Session::new(config, None)?;
    if let Some(raw) = &cli.seed {
        let seed = session.set_seed(raw)?;
        info!("🎲 Seed: {}", seed);
    }

    match cli.command {
        Commands::CaesarEncrypt(args) => cmd::caesar::encrypt(args),
        Commands::CaesarDecrypt(args) => cmd::caesar::decrypt(args, &session),
        Commands::Score(args) => cmd::score::run(args, &session),
        Commands::Encrypt(args) => cmd::substitution::encrypt(args, &mut session),
        Commands::Decrypt(args) => cmd::substitution::decrypt(args, &mut session),
        Commands::DecryptFile(args) => cmd::substitution::decrypt_file(args, &mut session),
    }
}
