use crate::cipher::{CipherKey, ALPHABET_LEN};
use crate::config::SearchParams;
use crate::error::{CfResult, CipherError};
use crate::random::RandomSource;
use crate::scorer::{require_quadgram, QuadgramScorer};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

/// Outcome of one hill-climbing run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub run: usize,
    pub score: f64,
    pub key: CipherKey,
    pub trials: usize,
    pub accepted: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BreakResult {
    /// Best decryption key found across all runs
    pub key: CipherKey,
    pub score: f64,
    pub runs: Vec<RunSummary>,
}

/// Receives updates while the search runs. Called from worker threads when
/// runs execute in parallel.
pub trait SearchObserver: Send + Sync {
    fn on_improvement(&self, _run: usize, _score: f64) {}
    fn on_run_complete(&self, _summary: &RunSummary) {}
}

pub struct NoopObserver;
impl SearchObserver for NoopObserver {}

/// Random-restart hill climber over alphabet permutations, maximizing the
/// quadgram score of the decrypted text.
pub struct SubstitutionBreaker<'a> {
    scorer: &'a QuadgramScorer,
    params: SearchParams,
}

impl<'a> SubstitutionBreaker<'a> {
    pub fn new(scorer: &'a QuadgramScorer, params: SearchParams) -> CfResult<Self> {
        params.validate()?;
        Ok(Self { scorer, params })
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// One greedy run from a fresh random key. A run ends after `patience`
    /// consecutive swaps fail to strictly improve the score.
    pub fn climb<O: SearchObserver + ?Sized>(
        &self,
        rng: &mut RandomSource,
        letters: &[u8],
        run: usize,
        observer: &O,
    ) -> RunSummary {
        let mut key = rng.random_permutation();
        let mut score = self.scorer.score_with_key(letters, &key);
        let mut stale = 0;
        let mut trials = 0;
        let mut accepted = 0;

        while stale < self.params.patience {
            let (a, b) = rng.distinct_pair(ALPHABET_LEN);
            key.swap(a, b);
            let candidate = self.scorer.score_with_key(letters, &key);
            trials += 1;

            // Ties are rejected
            if candidate > score {
                score = candidate;
                stale = 0;
                accepted += 1;
                observer.on_improvement(run, score);
            } else {
                key.swap(a, b);
                stale += 1;
            }
        }

        let summary = RunSummary {
            run,
            score,
            key,
            trials,
            accepted,
        };
        debug!(
            "Run {:2} | Score: {:.2} | Trials: {} | Accepted: {}",
            run, score, trials, accepted
        );
        observer.on_run_complete(&summary);
        summary
    }

    /// Breaks `text` and returns the best key over all restarts.
    ///
    /// One seed per run is drawn from `rng` up front, in run order, and the
    /// results are merged in run order, so the outcome depends only on the
    /// state of `rng` and not on how runs are scheduled.
    pub fn solve<O: SearchObserver + ?Sized>(
        &self,
        rng: &mut RandomSource,
        text: &str,
        observer: &O,
    ) -> CfResult<BreakResult> {
        let letters = require_quadgram(text)?;
        let seeds: Vec<u64> = (0..self.params.restarts).map(|_| rng.next_seed()).collect();

        let run_one = |(run, seed): (usize, u64)| {
            let mut local = RandomSource::new(seed);
            self.climb(&mut local, &letters, run, observer)
        };

        let runs: Vec<RunSummary> = if self.params.parallel {
            seeds.into_par_iter().enumerate().map(run_one).collect()
        } else {
            seeds.into_iter().enumerate().map(run_one).collect()
        };

        let best = runs
            .iter()
            .fold(None::<&RunSummary>, |best, r| match best {
                Some(b) if r.score <= b.score => Some(b),
                _ => Some(r),
            })
            .ok_or_else(|| CipherError::Config("no runs were executed".into()))?;

        info!(
            "🏆 Best score {:.2} from run {} of {}",
            best.score,
            best.run,
            runs.len()
        );
        let (key, score) = (best.key, best.score);

        Ok(BreakResult { key, score, runs })
    }
}
