//! Outcome of a finished session.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One bowler has the strictly greatest score.
    Winner(PlayerId),
    /// Every bowler has the same score.
    Draw,
    /// Some, but not all, bowlers share the top score.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Decide the result from final scores.
    ///
    /// No tie-breaking: equal top scores are reported as shared.
    #[must_use]
    pub fn from_scores(scores: &PlayerMap<u32>) -> Self {
        let best = scores.iter().map(|(_, &s)| s).max().unwrap_or(0);
        let top: Vec<PlayerId> = scores
            .iter()
            .filter(|(_, &s)| s == best)
            .map(|(p, _)| p)
            .collect();

        match top.as_slice() {
            [single] => GameResult::Winner(*single),
            _ if top.len() == scores.player_count() => GameResult::Draw,
            _ => GameResult::Winners(top),
        }
    }

    /// Check if a bowler won or shares the win.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_winner() {
        let scores = PlayerMap::from_values(vec![120, 145]);
        let result = GameResult::from_scores(&scores);
        assert_eq!(result, GameResult::Winner(PlayerId::new(1)));
        assert!(result.is_winner(PlayerId::new(1)));
        assert!(!result.is_winner(PlayerId::new(0)));
    }

    #[test]
    fn test_two_player_tie_is_draw() {
        let scores = PlayerMap::from_values(vec![99, 99]);
        let result = GameResult::from_scores(&scores);
        assert_eq!(result, GameResult::Draw);
        assert!(!result.is_winner(PlayerId::new(0)));
    }

    #[test]
    fn test_shared_top_score() {
        let scores = PlayerMap::from_values(vec![200, 150, 200]);
        let result = GameResult::from_scores(&scores);
        assert_eq!(
            result,
            GameResult::Winners(vec![PlayerId::new(0), PlayerId::new(2)])
        );
        assert!(result.is_winner(PlayerId::new(2)));
        assert!(!result.is_winner(PlayerId::new(1)));
    }

    #[test]
    fn test_solo_bowler_wins() {
        let scores = PlayerMap::from_values(vec![0]);
        assert_eq!(
            GameResult::from_scores(&scores),
            GameResult::Winner(PlayerId::new(0))
        );
    }
}
