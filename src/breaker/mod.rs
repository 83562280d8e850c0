//! Caesar and substitution breakers. The Caesar search is exhaustive with a
//! fixed acceptance threshold; the substitution search climbs to a local
//! optimum from random starting keys.

pub mod caesar;
pub mod substitution;

pub use self::caesar::{CaesarBreaker, CaesarCandidate, CaesarReport};
pub use self::substitution::{
    BreakResult, NoopObserver, RunSummary, SearchObserver, SubstitutionBreaker,
};
