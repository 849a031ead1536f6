//! Game orchestration
//!
//! Repeated select → observe feedback → filter rounds, either against a
//! known answer ([`play_game`]) or driven by external feedback
//! ([`Session`]). Batch simulation over a whole answer list lives in
//! [`simulate`].

mod simulate;

pub use simulate::{SimulationSummary, simulate_games};

use crate::core::{Pattern, WORD_LEN, Word};
use crate::error::SolverError;
use crate::solver::{EntropyCache, entropy_of_guess, filter_candidates, select_guess};

/// Solver configuration recognized by the game loop
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Letters per word; only [`WORD_LEN`] is accepted
    pub word_length: usize,
    /// Round limit per game
    pub max_rounds: usize,
    /// Fixed round-1 guess; `None` lets the selector choose
    pub opening_guess: Option<Word>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: WORD_LEN,
            max_rounds: 6,
            opening_guess: None,
        }
    }
}

impl GameConfig {
    /// # Errors
    /// Returns `SolverError::InvalidLength` for any word length other than
    /// [`WORD_LEN`].
    pub const fn validate(&self) -> Result<(), SolverError> {
        if self.word_length != WORD_LEN {
            return Err(SolverError::InvalidLength {
                expected: WORD_LEN,
                got: self.word_length,
            });
        }
        Ok(())
    }
}

/// Where a game stands after a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// More rounds to play
    InProgress { round: usize, remaining: usize },
    /// The answer was hit in `rounds` rounds
    Solved { rounds: usize },
    /// Round limit reached without an exact match
    Exhausted,
}

/// One completed game: the guesses played, the feedback each received,
/// and how it ended.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub answer: Word,
    pub turns: Vec<(Word, Pattern)>,
    pub state: GameState,
}

impl GameRecord {
    /// Number of rounds played
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub const fn solved(&self) -> bool {
        matches!(self.state, GameState::Solved { .. })
    }
}

/// Play one full game against a known answer.
///
/// Evaluates feedback directly (no precomputed table), which is the right
/// trade-off for solving a single word. The entropy cache is caller-owned
/// so repeated games over the same universe can share it.
///
/// # Errors
/// Propagates selection errors, and returns
/// `SolverError::InconsistentFeedback` if filtering ever empties the
/// candidate set mid-game (impossible when `answer` is in `answers`).
pub fn play_game(
    config: &GameConfig,
    allowed: &[Word],
    answers: &[Word],
    answer: &Word,
    cache: &mut EntropyCache,
) -> Result<GameRecord, SolverError> {
    config.validate()?;

    let mut candidates: Vec<Word> = answers.to_vec();
    let mut turns = Vec::new();

    for round in 1..=config.max_rounds {
        let guess = if round == 1
            && let Some(opening) = &config.opening_guess
        {
            opening.clone()
        } else if candidates.len() == 1
            && let Some(only) = allowed.iter().find(|word| *word == &candidates[0])
        {
            // One candidate left and it is guessable: no scoring needed
            only.clone()
        } else {
            select_guess(allowed, &candidates, cache)?.0.clone()
        };

        let pattern = Pattern::evaluate(&guess, answer);
        turns.push((guess.clone(), pattern));

        if pattern.is_perfect() {
            return Ok(GameRecord {
                answer: answer.clone(),
                turns,
                state: GameState::Solved { rounds: round },
            });
        }

        candidates = filter_candidates(&candidates, &guess, pattern);
        if candidates.is_empty() {
            return Err(SolverError::InconsistentFeedback {
                guess: guess.text().to_string(),
            });
        }
    }

    Ok(GameRecord {
        answer: answer.clone(),
        turns,
        state: GameState::Exhausted,
    })
}

/// Interactive solving session
///
/// Drives one game where feedback comes from outside (a human playing the
/// real game). Feedback that eliminates every candidate is reported as an
/// error and leaves the session untouched, so the caller can re-ask.
pub struct Session<'a> {
    config: GameConfig,
    allowed: &'a [Word],
    answers: &'a [Word],
    candidates: Vec<Word>,
    round: usize,
    cache: EntropyCache,
}

impl<'a> Session<'a> {
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn new(
        config: GameConfig,
        allowed: &'a [Word],
        answers: &'a [Word],
    ) -> Result<Self, SolverError> {
        config.validate()?;
        Ok(Self {
            config,
            allowed,
            answers,
            candidates: answers.to_vec(),
            round: 1,
            cache: EntropyCache::new(),
        })
    }

    /// Current round number, starting at 1
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    /// Candidates still consistent with all feedback so far
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Entropy-maximizing suggestion for the current round (the fixed
    /// opening guess on round 1, when configured).
    ///
    /// # Errors
    /// Propagates selection errors.
    pub fn suggest(&mut self) -> Result<(Word, f64), SolverError> {
        if self.round == 1
            && let Some(opening) = &self.config.opening_guess
        {
            let entropy = entropy_of_guess(opening, &self.candidates);
            return Ok((opening.clone(), entropy));
        }

        let (word, entropy) = select_guess(self.allowed, &self.candidates, &mut self.cache)?;
        Ok((word.clone(), entropy))
    }

    /// Record one played round: the guess and the feedback it received.
    ///
    /// # Errors
    /// Returns `SolverError::InconsistentFeedback` if the feedback rules
    /// out every remaining candidate; the session state is unchanged in
    /// that case.
    pub fn advance(&mut self, guess: &Word, observed: Pattern) -> Result<GameState, SolverError> {
        if observed.is_perfect() {
            return Ok(GameState::Solved { rounds: self.round });
        }

        let next = filter_candidates(&self.candidates, guess, observed);
        if next.is_empty() {
            return Err(SolverError::InconsistentFeedback {
                guess: guess.text().to_string(),
            });
        }

        if self.round >= self.config.max_rounds {
            return Ok(GameState::Exhausted);
        }

        self.candidates = next;
        self.round += 1;
        Ok(GameState::InProgress {
            round: self.round,
            remaining: self.candidates.len(),
        })
    }

    /// Start over with the full candidate set and a cold cache
    pub fn reset(&mut self) {
        self.candidates = self.answers.to_vec();
        self.round = 1;
        self.cache.clear();
    }
}
