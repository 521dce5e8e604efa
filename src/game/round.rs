//! Round Coordinator
//!
//! Owns one round from commitment to reveal:
//!
//! ```text
//!  Initialized ──commit()──► Committed ──open_prompt()──► AwaitingHumanInput
//!                                                           │   ▲
//!                                          help / invalid ──┘───┘
//!                                                           │
//!                                     move ──► Resolved     │ exit ──► Aborted
//! ```
//!
//! The key stays inside the coordinator until the round resolves. An aborted
//! round drops it unrevealed.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use rand::RngCore;

use crate::config::{ConfigError, RoundConfig};
use crate::proof::commitment::{self, Commitment, CommitmentError, CommitmentScheme, SecretKey};

use super::moves::MoveSet;
use super::outcome::{resolve, Outcome};
use super::rules::{RuleError, RuleMatrix};
use super::table::RulesTable;

/// Round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Moves accepted and rules built.
    Initialized,
    /// Automated move chosen and digest computed.
    Committed,
    /// Digest disclosed, waiting for the human.
    AwaitingHumanInput,
    /// Outcome computed and key disclosed.
    Resolved,
    /// Human left; nothing disclosed.
    Aborted,
}

impl RoundState {
    /// No further transitions are possible.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Resolved | Self::Aborted)
    }
}

/// Unusable human input. Recoverable: the round re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidChoice {
    /// Blank line.
    #[error("Invalid input: empty line. Please try again.")]
    Empty,

    /// Line is not valid UTF-8 text.
    #[error("Invalid input: not readable text. Please try again.")]
    NotText,

    /// Neither a number nor a control token.
    #[error("Invalid input {0:?}. Please try again.")]
    NotANumber(String),

    /// Number outside the menu.
    #[error("Invalid input: {choice} is not between 1 and {max}. Please try again.")]
    OutOfRange {
        /// Number entered.
        choice: u64,
        /// Highest valid move number.
        max: usize,
    },
}

/// Fatal round failures.
#[derive(Debug, Error)]
pub enum RoundError {
    /// Bad move list or control tokens.
    #[error("configuration rejected: {0}")]
    Config(#[from] ConfigError),

    /// Rules could not be derived.
    #[error(transparent)]
    Rules(#[from] RuleError),

    /// Entropy failed while committing.
    #[error("cannot commit: {0}")]
    Commitment(#[from] CommitmentError),

    /// Operation called in the wrong state.
    #[error("operation not allowed in state {actual:?} (expected {expected:?})")]
    InvalidState {
        /// State the operation needs.
        expected: RoundState,
        /// State the round is in.
        actual: RoundState,
    },
}

/// Parsed human input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumanInput {
    /// Leave without a reveal.
    Exit,
    /// Show the rules table.
    Help,
    /// Zero-based move index.
    Move(usize),
}

/// Parse one trimmed line against `config` tokens and `move_count` moves.
pub fn parse_input(line: &str, move_count: usize, config: &RoundConfig) -> Result<HumanInput, InvalidChoice> {
    let line = line.trim();

    if line == config.exit_token.trim() {
        return Ok(HumanInput::Exit);
    }
    if line == config.help_token.trim() {
        return Ok(HumanInput::Help);
    }
    if line.is_empty() {
        return Err(InvalidChoice::Empty);
    }

    let choice: u64 = line
        .parse()
        .map_err(|_| InvalidChoice::NotANumber(line.to_string()))?;

    match usize::try_from(choice) {
        Ok(n) if (1..=move_count).contains(&n) => Ok(HumanInput::Move(n - 1)),
        _ => Err(InvalidChoice::OutOfRange { choice, max: move_count }),
    }
}

/// What is shown before the human moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Hex digest of the automated move.
    pub digest_hex: String,
    /// Menu lines: (number shown, label).
    pub menu: Vec<(usize, String)>,
    /// Token that exits.
    pub exit_token: String,
    /// Token that shows help.
    pub help_token: String,
}

/// Everything disclosed once the round resolves.
///
/// Enough for anyone to recompute the digest with
/// [`commitment::verify`] and compare it to the one shown before the move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundDisclosure {
    /// Human's move label.
    pub human_move: String,
    /// Automated move label.
    pub automated_move: String,
    /// Result for the human.
    pub outcome: Outcome,
    /// Commitment key, hex.
    pub key: String,
    /// Digest published before the human moved, hex.
    pub digest: String,
}

impl RoundDisclosure {
    /// Recompute the digest from the disclosed key and automated move.
    pub fn verify(&self) -> Result<bool, CommitmentError> {
        commitment::verify_hex(&self.key, &self.automated_move, &self.digest)
    }
}

/// Result of feeding one input line to the round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Rules table requested; still awaiting input.
    Help(RulesTable),
    /// Input rejected; still awaiting input.
    Invalid(InvalidChoice),
    /// Round finished with a reveal.
    Resolved(RoundDisclosure),
    /// Round abandoned; nothing revealed.
    Aborted,
}

/// Drives a single round.
///
/// Generic over the entropy source so tests can inject a seeded one.
#[derive(Debug)]
pub struct RoundCoordinator<R> {
    state: RoundState,
    moves: MoveSet,
    matrix: RuleMatrix,
    config: RoundConfig,
    scheme: CommitmentScheme<R>,
    /// Chosen once committed.
    automated: Option<usize>,
    /// Held until reveal; dropped on abort.
    commitment: Option<Commitment>,
}

impl<R: RngCore> RoundCoordinator<R> {
    /// Accept the moves, build the rules, and enter `Initialized`.
    pub fn new(moves: MoveSet, rng: R, config: RoundConfig) -> Result<Self, RoundError> {
        config.validate(moves.len())?;
        let matrix = RuleMatrix::build(moves.len())?;

        debug!(moves = moves.len(), "round initialized");

        Ok(Self {
            state: RoundState::Initialized,
            moves,
            matrix,
            config,
            scheme: CommitmentScheme::new(rng),
            automated: None,
            commitment: None,
        })
    }

    /// Current state.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Moves in play.
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Rules in play.
    pub fn matrix(&self) -> &RuleMatrix {
        &self.matrix
    }

    /// Control tokens in play.
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    fn expect_state(&self, expected: RoundState) -> Result<(), RoundError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(RoundError::InvalidState {
                expected,
                actual: self.state,
            })
        }
    }

    /// Pick the automated move and commit to it.
    ///
    /// Returns the hex digest. On entropy failure the round stays
    /// `Initialized` with nothing committed.
    pub fn commit(&mut self) -> Result<String, RoundError> {
        self.expect_state(RoundState::Initialized)?;

        let automated = self.scheme.draw_index(self.moves.len())?;
        let commitment = self.scheme.commit_move(&self.moves[automated])?;
        let digest_hex = commitment.digest_hex();

        self.automated = Some(automated);
        self.commitment = Some(commitment);
        self.state = RoundState::Committed;

        info!(digest = %digest_hex, "automated move committed");
        Ok(digest_hex)
    }

    /// Build the prompt and start waiting for the human.
    ///
    /// Callable again while awaiting input to re-show the menu.
    pub fn open_prompt(&mut self) -> Result<Prompt, RoundError> {
        if self.state != RoundState::AwaitingHumanInput {
            self.expect_state(RoundState::Committed)?;
        }

        let digest_hex = self
            .commitment
            .as_ref()
            .map(Commitment::digest_hex)
            .ok_or(RoundError::InvalidState {
                expected: RoundState::Committed,
                actual: self.state,
            })?;

        self.state = RoundState::AwaitingHumanInput;
        debug!("awaiting human input");

        Ok(Prompt {
            digest_hex,
            menu: self
                .moves
                .iter()
                .enumerate()
                .map(|(i, label)| (i + 1, label.to_string()))
                .collect(),
            exit_token: self.config.exit_token.clone(),
            help_token: self.config.help_token.clone(),
        })
    }

    /// Feed one line of human input.
    pub fn submit(&mut self, line: &str) -> Result<Step, RoundError> {
        self.expect_state(RoundState::AwaitingHumanInput)?;

        match parse_input(line, self.moves.len(), &self.config) {
            Ok(HumanInput::Exit) => Ok(self.abort()),
            Ok(HumanInput::Help) => {
                debug!("rules table requested");
                Ok(Step::Help(RulesTable::new(&self.moves, &self.matrix)))
            }
            Ok(HumanInput::Move(human)) => self.resolve(human).map(Step::Resolved),
            Err(invalid) => {
                warn!(error = %invalid, "invalid choice");
                Ok(Step::Invalid(invalid))
            }
        }
    }

    /// Feed one raw input line, which may not be valid UTF-8.
    ///
    /// Undecodable bytes are an [`InvalidChoice::NotText`]; the round keeps
    /// waiting.
    pub fn submit_bytes(&mut self, raw: &[u8]) -> Result<Step, RoundError> {
        self.expect_state(RoundState::AwaitingHumanInput)?;

        match std::str::from_utf8(raw) {
            Ok(line) => self.submit(line),
            Err(err) => {
                warn!(error = %err, "input is not UTF-8");
                Ok(Step::Invalid(InvalidChoice::NotText))
            }
        }
    }

    /// Abandon the round. The key is discarded unrevealed.
    ///
    /// No-op once the round is terminal.
    pub fn abort(&mut self) -> Step {
        if !self.state.is_terminal() {
            self.commitment = None;
            self.automated = None;
            self.state = RoundState::Aborted;
            info!("round aborted, key withheld");
        }
        Step::Aborted
    }

    fn resolve(&mut self, human: usize) -> Result<RoundDisclosure, RoundError> {
        let (Some(automated), Some(commitment)) = (self.automated, self.commitment.take()) else {
            return Err(RoundError::InvalidState {
                expected: RoundState::AwaitingHumanInput,
                actual: self.state,
            });
        };

        let outcome = resolve(human, automated, &self.matrix);
        let digest = commitment.digest_hex();
        let key: SecretKey = commitment.reveal();

        self.state = RoundState::Resolved;
        info!(?outcome, human, automated, "round resolved");

        Ok(RoundDisclosure {
            human_move: self.moves[human].to_string(),
            automated_move: self.moves[automated].to_string(),
            outcome,
            key: key.to_hex(),
            digest,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::DeterministicRng;

    fn rps() -> MoveSet {
        MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap()
    }

    fn committed_round(seed: u64) -> RoundCoordinator<DeterministicRng> {
        let mut round =
            RoundCoordinator::new(rps(), DeterministicRng::new(seed), RoundConfig::default()).unwrap();
        round.commit().unwrap();
        round.open_prompt().unwrap();
        round
    }

    struct DeadRng;

    impl RngCore for DeadRng {
        fn next_u32(&mut self) -> u32 {
            unreachable!()
        }
        fn next_u64(&mut self) -> u64 {
            unreachable!()
        }
        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unreachable!()
        }
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("no entropy"))
        }
    }

    #[test]
    fn test_parse_input() {
        let config = RoundConfig::default();

        assert_eq!(parse_input(" 0 ", 3, &config), Ok(HumanInput::Exit));
        assert_eq!(parse_input("?", 3, &config), Ok(HumanInput::Help));
        assert_eq!(parse_input("1", 3, &config), Ok(HumanInput::Move(0)));
        assert_eq!(parse_input("3\n", 3, &config), Ok(HumanInput::Move(2)));
        assert_eq!(parse_input("", 3, &config), Err(InvalidChoice::Empty));
        assert_eq!(
            parse_input("4", 3, &config),
            Err(InvalidChoice::OutOfRange { choice: 4, max: 3 })
        );
        assert_eq!(
            parse_input("rock", 3, &config),
            Err(InvalidChoice::NotANumber("rock".into()))
        );
        assert!(matches!(parse_input("-1", 3, &config), Err(InvalidChoice::NotANumber(_))));
        assert!(matches!(parse_input("1.5", 3, &config), Err(InvalidChoice::NotANumber(_))));
    }

    #[test]
    fn test_state_transitions() {
        let mut round =
            RoundCoordinator::new(rps(), DeterministicRng::new(1), RoundConfig::default()).unwrap();
        assert_eq!(round.state(), RoundState::Initialized);

        let digest = round.commit().unwrap();
        assert_eq!(round.state(), RoundState::Committed);
        assert_eq!(digest.len(), 64);

        let prompt = round.open_prompt().unwrap();
        assert_eq!(round.state(), RoundState::AwaitingHumanInput);
        assert_eq!(prompt.digest_hex, digest);
        assert_eq!(prompt.menu[0], (1, "Rock".to_string()));
        assert_eq!(prompt.menu.len(), 3);

        assert!(matches!(round.submit("2").unwrap(), Step::Resolved(_)));
        assert_eq!(round.state(), RoundState::Resolved);
    }

    #[test]
    fn test_out_of_order_calls_rejected() {
        let mut round =
            RoundCoordinator::new(rps(), DeterministicRng::new(1), RoundConfig::default()).unwrap();

        assert!(matches!(
            round.submit("1"),
            Err(RoundError::InvalidState { expected: RoundState::AwaitingHumanInput, .. })
        ));
        assert!(matches!(round.open_prompt(), Err(RoundError::InvalidState { .. })));

        round.commit().unwrap();
        assert!(matches!(round.commit(), Err(RoundError::InvalidState { .. })));
    }

    #[test]
    fn test_help_and_invalid_keep_waiting() {
        let mut round = committed_round(5);

        match round.submit("?").unwrap() {
            Step::Help(table) => assert_eq!(table.cell(0, 2), Some("Win")),
            other => panic!("expected help, got {:?}", other),
        }
        assert_eq!(round.state(), RoundState::AwaitingHumanInput);

        assert!(matches!(round.submit("banana").unwrap(), Step::Invalid(_)));
        assert!(matches!(round.submit("9").unwrap(), Step::Invalid(_)));
        assert_eq!(round.state(), RoundState::AwaitingHumanInput);

        assert!(matches!(round.submit("1").unwrap(), Step::Resolved(_)));
    }

    #[test]
    fn test_undecodable_bytes_keep_waiting() {
        let mut round = committed_round(31);

        assert_eq!(
            round.submit_bytes(b"\xff\xfe\n").unwrap(),
            Step::Invalid(InvalidChoice::NotText)
        );
        assert_eq!(round.state(), RoundState::AwaitingHumanInput);
        assert!(round.commitment.is_some());

        assert!(matches!(round.submit_bytes(b"2\r\n").unwrap(), Step::Resolved(ref d) if d.human_move == "Paper"));
    }

    #[test]
    fn test_disclosure_verifies_against_prompt_digest() {
        let mut round = committed_round(77);
        let shown = round.open_prompt().unwrap().digest_hex;

        let disclosure = match round.submit("1").unwrap() {
            Step::Resolved(d) => d,
            other => panic!("expected resolution, got {:?}", other),
        };

        assert_eq!(disclosure.digest, shown);
        assert_eq!(disclosure.human_move, "Rock");
        assert!(disclosure.verify().unwrap());

        let expected = {
            let moves = rps();
            let human = 0;
            let automated = moves.position(&disclosure.automated_move).unwrap();
            resolve(human, automated, &RuleMatrix::build(3).unwrap())
        };
        assert_eq!(disclosure.outcome, expected);

        let mut forged = disclosure.clone();
        forged.automated_move = if forged.automated_move == "Rock" { "Paper".into() } else { "Rock".into() };
        assert!(!forged.verify().unwrap());
    }

    #[test]
    fn test_abort_discloses_nothing() {
        let mut round = committed_round(9);

        assert_eq!(round.submit("0").unwrap(), Step::Aborted);
        assert_eq!(round.state(), RoundState::Aborted);
        assert!(round.commitment.is_none());
        assert!(round.automated.is_none());
        assert!(matches!(round.submit("1"), Err(RoundError::InvalidState { .. })));
    }

    #[test]
    fn test_entropy_failure_leaves_round_uncommitted() {
        let mut round = RoundCoordinator::new(rps(), DeadRng, RoundConfig::default()).unwrap();

        assert!(matches!(
            round.commit(),
            Err(RoundError::Commitment(CommitmentError::EntropyUnavailable(_)))
        ));
        assert_eq!(round.state(), RoundState::Initialized);
        assert!(round.commitment.is_none());
    }

    #[test]
    fn test_bad_tokens_rejected_before_round() {
        let config = RoundConfig {
            exit_token: "2".into(),
            ..Default::default()
        };
        assert!(matches!(
            RoundCoordinator::new(rps(), DeterministicRng::new(0), config),
            Err(RoundError::Config(ConfigError::TokenShadowsMove { .. }))
        ));
    }

    #[test]
    fn test_automated_move_is_spread() {
        let mut seen = [false; 3];
        for seed in 0..60 {
            let mut round = committed_round(seed);
            seen[round.automated.unwrap()] = true;
            round.abort();
        }
        assert!(seen.iter().all(|s| *s));
    }
}
