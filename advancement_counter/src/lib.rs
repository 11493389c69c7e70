use nom::multi::count;
use thiserror::Error;
use util::{parse_number, ws, ParseResult, Span};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StandingsError {
    #[error("rank threshold {k} is outside of 1..={n}")]
    RankOutOfRange { k: usize, n: usize },
}

/// Final contest scores, best first, and the rank whose score is the bar for
/// advancing.
#[derive(Debug, Clone)]
pub struct Standings {
    scores: Vec<i64>,
    threshold_rank: usize,
}

impl Standings {
    /// `threshold_rank` is 1-based. Scores are expected in non-increasing
    /// order; that is not checked.
    pub fn new(scores: Vec<i64>, threshold_rank: usize) -> Result<Self, StandingsError> {
        if threshold_rank == 0 || threshold_rank > scores.len() {
            return Err(StandingsError::RankOutOfRange {
                k: threshold_rank,
                n: scores.len(),
            });
        }

        Ok(Self {
            scores,
            threshold_rank,
        })
    }

    pub fn min_score(&self) -> i64 {
        self.scores[self.threshold_rank - 1]
    }

    /// Participants at or above the bar. A non-positive score never advances.
    pub fn advancing(&self) -> usize {
        let min_score = self.min_score();
        let n = self
            .scores
            .iter()
            .filter(|&&s| s >= min_score && s > 0)
            .count();

        log::debug!(
            "{} of {} advance with bar {min_score}",
            n,
            self.scores.len()
        );

        n
    }
}

/// `n k` followed by `n` scores.
pub fn parse_standings(i: Span) -> ParseResult<(Vec<i64>, usize)> {
    let (i, n) = ws(parse_number::<usize>)(i)?;
    let (i, k) = ws(parse_number::<usize>)(i)?;
    let (i, scores) = count(ws(parse_number::<i64>), n)(i)?;

    Ok((i, (scores, k)))
}
