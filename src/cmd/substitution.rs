use crate::reports;
use clap::Args;
use cipherforge::api::{self, Decryption, Session};
use cipherforge::breaker::{RunSummary, SearchObserver};
use cipherforge::error::CfResult;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct EncryptArgs {
    /// Plaintext; read from stdin when omitted
    pub text: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct DecryptArgs {
    /// Ciphertext; read from stdin when omitted
    pub text: Option<String>,

    /// Emit the key, score and per-run summaries as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Print the per-run table and the recovered key
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone)]
pub struct FileArgs {
    /// File holding the ciphertext
    pub input: PathBuf,

    /// Where the decrypted text is written
    pub output: PathBuf,
}

struct CliLogger;
impl SearchObserver for CliLogger {
    fn on_run_complete(&self, summary: &RunSummary) {
        info!(
            "Run {:2} | Score: {:.2} | Trials: {}",
            summary.run, summary.score, summary.trials
        );
    }
}

pub fn encrypt(args: EncryptArgs, session: &mut Session) -> CfResult<()> {
    let text = super::resolve_text(args.text)?;
    let (key, ciphertext) = api::encrypt_random(&mut session.rng, &text);
    info!("🔑 Key: {}", key);
    println!("{}", ciphertext);
    Ok(())
}

pub fn decrypt(args: DecryptArgs, session: &mut Session) -> CfResult<()> {
    let scorer = session.load_scorer()?;
    let text = super::resolve_text(args.text)?;

    let decryption = api::decrypt_text(
        &scorer,
        &mut session.rng,
        &session.config.search,
        &text,
        &CliLogger,
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&decryption)?);
        return Ok(());
    }

    println!("{}", decryption.plaintext.trim_end_matches('\n'));
    if args.verbose {
        print_summary(&decryption);
    }
    Ok(())
}

pub fn decrypt_file(args: FileArgs, session: &mut Session) -> CfResult<()> {
    let scorer = session.load_scorer()?;
    let decryption = api::decrypt_file(
        &scorer,
        &mut session.rng,
        &session.config.search,
        &args.input,
        &args.output,
        &CliLogger,
    )?;

    println!("Score: {:.2}", decryption.result.score);
    println!("Key: {}", decryption.result.key);
    Ok(())
}

fn print_summary(decryption: &Decryption) {
    let result = &decryption.result;
    println!("\n=== 🏆 FINAL RESULT ===");
    println!("Score: {:.2}", result.score);
    reports::print_key_grid("RECOVERED", &result.key);
    reports::print_run_table(&result.runs, result.score);
}
