//! Round Configuration
//!
//! Tokens the human types to leave the round or ask for the rules table.
//! Defaults match the classic prompt (`0` exits, `?` shows help).

use thiserror::Error;

/// Default token that aborts the round.
pub const DEFAULT_EXIT_TOKEN: &str = "0";

/// Default token that prints the rules table.
pub const DEFAULT_HELP_TOKEN: &str = "?";

/// Rejected setup. Fatal: no round starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Fewer than three moves supplied.
    #[error("Please provide 3 or more moves (got {count})")]
    TooFewMoves {
        /// Number of moves supplied.
        count: usize,
    },

    /// Even number of moves supplied.
    #[error("Please provide an odd number of moves (got {count})")]
    EvenMoveCount {
        /// Number of moves supplied.
        count: usize,
    },

    /// The same label appears twice.
    #[error("Please provide unique moves ({label:?} is repeated)")]
    DuplicateMove {
        /// First repeated label.
        label: String,
    },

    /// A control token is empty.
    #[error("The {name} token must not be empty")]
    EmptyToken {
        /// Which token ("exit" or "help").
        name: &'static str,
    },

    /// Exit and help tokens are identical.
    #[error("Exit and help tokens must differ (both are {token:?})")]
    TokenClash {
        /// The shared token.
        token: String,
    },

    /// A control token would shadow a move number.
    #[error("The {name} token {token:?} collides with a move number")]
    TokenShadowsMove {
        /// Which token ("exit" or "help").
        name: &'static str,
        /// The offending token.
        token: String,
    },
}

/// Control tokens for one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundConfig {
    /// Input that aborts the round without reveal.
    pub exit_token: String,
    /// Input that prints the rules table and re-prompts.
    pub help_token: String,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            exit_token: DEFAULT_EXIT_TOKEN.to_string(),
            help_token: DEFAULT_HELP_TOKEN.to_string(),
        }
    }
}

impl RoundConfig {
    /// Create config from environment variables.
    ///
    /// Reads `FAIR_RPS_EXIT_TOKEN` and `FAIR_RPS_HELP_TOKEN`; unset
    /// variables keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            exit_token: std::env::var("FAIR_RPS_EXIT_TOKEN").unwrap_or(defaults.exit_token),
            help_token: std::env::var("FAIR_RPS_HELP_TOKEN").unwrap_or(defaults.help_token),
        }
    }

    /// Check the tokens against a round of `move_count` moves.
    pub fn validate(&self, move_count: usize) -> Result<(), ConfigError> {
        for (name, token) in [("exit", &self.exit_token), ("help", &self.help_token)] {
            let token = token.trim();
            if token.is_empty() {
                return Err(ConfigError::EmptyToken { name });
            }
            if matches!(token.parse::<usize>(), Ok(n) if (1..=move_count).contains(&n)) {
                return Err(ConfigError::TokenShadowsMove {
                    name,
                    token: token.to_string(),
                });
            }
        }

        if self.exit_token.trim() == self.help_token.trim() {
            return Err(ConfigError::TokenClash {
                token: self.exit_token.trim().to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tokens_are_valid() {
        assert!(RoundConfig::default().validate(7).is_ok());
    }

    #[test]
    fn test_token_clash() {
        let config = RoundConfig {
            exit_token: "q".into(),
            help_token: "q".into(),
        };
        assert_eq!(
            config.validate(3),
            Err(ConfigError::TokenClash { token: "q".into() })
        );
    }

    #[test]
    fn test_token_shadowing_move_number() {
        let config = RoundConfig {
            exit_token: "3".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(3),
            Err(ConfigError::TokenShadowsMove { name: "exit", .. })
        ));
        // 5 is out of range for three moves, so it is free to use.
        let config = RoundConfig {
            exit_token: "5".into(),
            ..Default::default()
        };
        assert!(config.validate(3).is_ok());
    }

    #[test]
    fn test_empty_token() {
        let config = RoundConfig {
            help_token: "  ".into(),
            ..Default::default()
        };
        assert_eq!(config.validate(3), Err(ConfigError::EmptyToken { name: "help" }));
    }
}
