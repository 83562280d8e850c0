use crate::reports;
use clap::Args;
use cipherforge::api::{self, Session};
use cipherforge::error::CfResult;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct EncryptArgs {
    /// Plaintext; read from stdin when omitted
    pub text: Option<String>,

    /// Letters to rotate by, negative values rotate backwards
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: String,
}

#[derive(Args, Debug, Clone)]
pub struct DecryptArgs {
    /// Ciphertext; read from stdin when omitted
    pub text: Option<String>,

    /// Show every accepted rotation with its dictionary hit count
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

pub fn encrypt(args: EncryptArgs) -> CfResult<()> {
    let amount = api::parse_rotation(&args.amount)?;
    let text = super::resolve_text(args.text)?;
    println!("{}", api::caesar_encrypt(&text, amount));
    Ok(())
}

pub fn decrypt(args: DecryptArgs, session: &Session) -> CfResult<()> {
    let dictionary = session.load_dictionary()?;
    let text = super::resolve_text(args.text)?;

    let report = api::caesar_decrypt(&dictionary, &text);
    if !report.found() {
        println!("No good decryptions found");
        return Ok(());
    }

    info!(
        "🔓 {} rotation(s) matched the dictionary",
        report.candidates.len()
    );
    for candidate in &report.candidates {
        println!("{}", candidate.text);
    }
    if args.verbose {
        reports::print_caesar_report(&report);
    }
    Ok(())
}
