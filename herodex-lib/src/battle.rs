//! The battle predictor: combined-stat aggregation, winner determination,
//! and the three-step prediction flow.

use thiserror::Error;

use crate::repository::{Repository, entities, entities::HeroRecord};

pub type Result<T> = std::result::Result<T, Error>;

/// Validation gates of the flow, plus pass-through store faults. A gate
/// violation is recoverable and leaves the flow exactly where it was.
#[derive(Debug, Error)]
pub enum Error {
    #[error("two heroes must be selected")]
    MissingSelection,
    #[error("a hero cannot battle itself")]
    DuplicateSelection,
    #[error("a predicted winner must be chosen")]
    MissingPrediction,
    #[error(transparent)]
    Store(#[from] entities::Error),
}

/// Outcome of a one-on-one duel. When either combatant failed to resolve,
/// both slots stay empty and only the message remains.
#[derive(Debug, Clone)]
pub struct DuelResult {
    pub winner: Option<HeroRecord>,
    pub loser: Option<HeroRecord>,
    pub prediction_correct: Option<bool>,
    pub message: String,
}

/// Decide a duel by combined stat.
///
/// Equal totals go to the first combatant, so the outcome is deterministic.
/// An unresolved combatant on either side skips the comparison entirely.
pub fn duel(
    first: Option<HeroRecord>,
    second: Option<HeroRecord>,
    predicted_id: Option<&str>,
) -> DuelResult {
    let (Some(first), Some(second)) = (first, second) else {
        return DuelResult {
            winner: None,
            loser: None,
            prediction_correct: None,
            message: "The matchup could not be resolved; no outcome was decided.".to_string(),
        };
    };

    let (winner, loser) = if second.score() > first.score() {
        (second, first)
    } else {
        (first, second)
    };

    let prediction_correct = predicted_id.map(|id| winner.id.as_str() == id);
    let message = match prediction_correct {
        Some(true) => format!("{} takes the fight. You called it!", winner.title),
        Some(false) => format!("{} takes the fight. Your prediction missed.", winner.title),
        None => format!("{} takes the fight.", winner.title),
    };

    DuelResult {
        winner: Some(winner),
        loser: Some(loser),
        prediction_correct,
        message,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    SelectHeroes,
    VoteWinner,
    ShowResult,
}

/// The three-step battle flow: pick two heroes, predict the winner, see the
/// result.
///
/// Gate violations surface as [`Error`] values and leave the state unchanged.
/// Unknown hero ids are not gate violations: the flow carries the empty
/// slots through to an unresolved result rather than failing.
#[derive(Debug, Default)]
pub struct BattleFlow {
    stage: Stage,
    first: Option<HeroRecord>,
    second: Option<HeroRecord>,
    result: Option<DuelResult>,
}

impl BattleFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The loaded combatants, for display while voting.
    pub fn combatants(&self) -> (Option<&HeroRecord>, Option<&HeroRecord>) {
        (self.first.as_ref(), self.second.as_ref())
    }

    pub fn result(&self) -> Option<&DuelResult> {
        self.result.as_ref()
    }

    /// First gate: both ids present and distinct. Loads whatever the lookups
    /// return; a miss is kept as an empty slot.
    pub fn select_heroes(
        &mut self,
        repo: &Repository,
        first_id: &str,
        second_id: &str,
    ) -> Result<()> {
        if self.stage == Stage::ShowResult {
            // Terminal; nothing left to select
            return Ok(());
        }

        let (first_id, second_id) = (first_id.trim(), second_id.trim());
        if first_id.is_empty() || second_id.is_empty() {
            return Err(Error::MissingSelection);
        }
        if first_id == second_id {
            return Err(Error::DuplicateSelection);
        }

        self.first = repo.hero(first_id)?;
        self.second = repo.hero(second_id)?;
        self.stage = Stage::VoteWinner;

        Ok(())
    }

    /// Second gate: a non-empty prediction. On success the duel is decided
    /// and the flow reaches its terminal step.
    pub fn vote_winner(&mut self, predicted_id: &str) -> Result<()> {
        match self.stage {
            Stage::SelectHeroes => return Err(Error::MissingSelection),
            Stage::ShowResult => return Ok(()),
            Stage::VoteWinner => {}
        }

        let predicted_id = predicted_id.trim();
        if predicted_id.is_empty() {
            return Err(Error::MissingPrediction);
        }

        self.result = Some(duel(
            self.first.clone(),
            self.second.clone(),
            Some(predicted_id),
        ));
        self.stage = Stage::ShowResult;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::repository::entities::{HeroDraft, HeroId, StatBlock};

    fn record(id: &str, title: &str, strength: u32) -> HeroRecord {
        HeroRecord {
            id: HeroId::from(id),
            title: title.to_string(),
            full_name: "-".to_string(),
            birthplace: "-".to_string(),
            work: "-".to_string(),
            first_appearance: "-".to_string(),
            image_url: "-".to_string(),
            alignment: "good".to_string(),
            gender: "Male".to_string(),
            role: "Core Avenger".to_string(),
            stats: StatBlock {
                intelligence: 50,
                strength,
                speed: 50,
                durability: 50,
                power: 50,
                combat: 50,
            },
            ratings: None,
        }
    }

    fn draft(title: &str, strength: u32) -> HeroDraft {
        HeroDraft {
            title: title.to_string(),
            stats: StatBlock {
                intelligence: 50,
                strength,
                speed: 50,
                durability: 50,
                power: 50,
                combat: 50,
            },
            ..HeroDraft::default()
        }
    }

    #[test]
    fn test_winner_has_the_greater_combined_stat() {
        let iron_man = record("1", "Iron Man", 50); // 300
        let cap = record("2", "Captain America", 70); // 320

        let result = duel(Some(iron_man.clone()), Some(cap.clone()), None);

        assert_eq!(result.winner, Some(cap));
        assert_eq!(result.loser, Some(iron_man));
        assert_eq!(result.prediction_correct, None);
    }

    #[test]
    fn test_winner_does_not_depend_on_argument_order() {
        let weaker = record("1", "Iron Man", 50);
        let stronger = record("2", "Captain America", 70);

        let forward = duel(Some(weaker.clone()), Some(stronger.clone()), None);
        let reversed = duel(Some(stronger.clone()), Some(weaker.clone()), None);

        assert_eq!(forward.winner, reversed.winner);
        assert_eq!(forward.loser, reversed.loser);
        assert_eq!(forward.winner, Some(stronger));
    }

    #[test]
    fn test_equal_totals_go_to_the_first_combatant() {
        let first = record("1", "Vision", 60);
        let second = record("2", "Wonder Man", 60);

        let result = duel(Some(first.clone()), Some(second), None);

        assert_eq!(result.winner, Some(first));
    }

    #[test]
    fn test_prediction_is_checked_against_the_actual_winner() {
        let iron_man = record("1", "Iron Man", 50);
        let cap = record("2", "Captain America", 70);

        let called = duel(Some(iron_man.clone()), Some(cap.clone()), Some("2"));
        assert_eq!(called.prediction_correct, Some(true));

        let missed = duel(Some(iron_man), Some(cap), Some("1"));
        assert_eq!(missed.prediction_correct, Some(false));
    }

    #[test]
    fn test_unresolved_combatant_skips_the_comparison() {
        let cap = record("2", "Captain America", 70);

        let result = duel(None, Some(cap), Some("2"));

        assert_eq!(result.winner, None);
        assert_eq!(result.loser, None);
        assert_eq!(result.prediction_correct, None);
    }

    #[test]
    fn test_selection_gate_requires_two_distinct_ids() {
        let repo = Repository::mock();
        let mut flow = BattleFlow::new();

        assert!(matches!(
            flow.select_heroes(&repo, "", "2"),
            Err(Error::MissingSelection)
        ));
        assert!(matches!(
            flow.select_heroes(&repo, "2", "2"),
            Err(Error::DuplicateSelection)
        ));
        assert_eq!(flow.stage(), Stage::SelectHeroes);
    }

    #[test]
    fn test_vote_gate_requires_a_prediction_and_keeps_combatants() {
        let repo = Repository::mock();
        repo.add_hero(draft("Iron Man", 50)).unwrap();
        repo.add_hero(draft("Captain America", 70)).unwrap();

        let mut flow = BattleFlow::new();
        flow.select_heroes(&repo, "1", "2").unwrap();

        assert!(matches!(
            flow.vote_winner("  "),
            Err(Error::MissingPrediction)
        ));
        assert_eq!(flow.stage(), Stage::VoteWinner);

        // Both stay loaded for display while the voter retries
        let (first, second) = flow.combatants();
        assert_eq!(first.map(|hero| hero.title.as_str()), Some("Iron Man"));
        assert_eq!(
            second.map(|hero| hero.title.as_str()),
            Some("Captain America")
        );
    }

    #[test]
    fn test_voting_before_selecting_is_rejected() {
        let mut flow = BattleFlow::new();

        assert!(matches!(
            flow.vote_winner("1"),
            Err(Error::MissingSelection)
        ));
    }

    #[test]
    fn test_full_flow_with_a_correct_prediction() {
        let repo = Repository::mock();
        repo.add_hero(draft("Iron Man", 50)).unwrap();
        repo.add_hero(draft("Captain America", 70)).unwrap();

        let mut flow = BattleFlow::new();
        flow.select_heroes(&repo, "1", "2").unwrap();
        flow.vote_winner("2").unwrap();

        assert_eq!(flow.stage(), Stage::ShowResult);
        let result = flow.result().unwrap();
        assert_eq!(
            result.winner.as_ref().map(|hero| hero.id.as_str()),
            Some("2")
        );
        assert_eq!(result.prediction_correct, Some(true));
    }

    #[test]
    fn test_unknown_ids_still_reach_the_terminal_stage() {
        let repo = Repository::mock();
        repo.add_hero(draft("Captain America", 70)).unwrap();

        let mut flow = BattleFlow::new();
        flow.select_heroes(&repo, "unknown-999", "1").unwrap();
        flow.vote_winner("1").unwrap();

        assert_eq!(flow.stage(), Stage::ShowResult);
        let result = flow.result().unwrap();
        assert_eq!(result.winner, None);
        assert_eq!(result.loser, None);
    }

    #[test]
    fn test_terminal_stage_is_idempotent() {
        let repo = Repository::mock();
        repo.add_hero(draft("Iron Man", 50)).unwrap();
        repo.add_hero(draft("Captain America", 70)).unwrap();

        let mut flow = BattleFlow::new();
        flow.select_heroes(&repo, "1", "2").unwrap();
        flow.vote_winner("2").unwrap();
        let decided = flow.result().unwrap().message.clone();

        // Further advances change nothing
        flow.vote_winner("1").unwrap();
        flow.select_heroes(&repo, "2", "1").unwrap();

        assert_eq!(flow.stage(), Stage::ShowResult);
        assert_eq!(flow.result().unwrap().message, decided);
    }
}
