use crate::reports;
use clap::Args;
use cipherforge::api::{self, Session};
use cipherforge::error::CfResult;
use tracing::debug;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Text to score; read from stdin when omitted
    pub text: Option<String>,

    /// Print the score of every quadgram window
    #[arg(short, long, default_value_t = false)]
    pub breakdown: bool,
}

pub fn run(args: ScoreArgs, session: &Session) -> CfResult<()> {
    let scorer = session.load_scorer()?;
    let stats = scorer.stats();
    debug!(
        "Quadgrams: {} distinct, total {}, floor {:.4}",
        stats.distinct, stats.total, stats.floor
    );

    let text = super::resolve_text(args.text)?;
    let score = api::englishness(&scorer, &text)?;
    println!("Score: {:.4}", score);

    if args.breakdown {
        reports::print_window_breakdown(&scorer.window_scores(&text)?);
    }
    Ok(())
}
