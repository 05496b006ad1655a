//! Core data models and the turn-resolution reducer for Ad-Opoly.
//!
//! `GameState` is the single read model the presentation layer renders from.
//! All mutation goes through `GameAction` dispatched into the `Reducible`
//! implementation, so every transition derives from the latest state at the
//! moment it is applied. Nothing in here touches the browser; the timer that
//! separates `BeginMove` from `FinishMove` lives at the component boundary.

use crate::constants::{
    POINTS_PER_AD, POINTS_PER_LAP, STARTING_TOKENS, TOKENS_PER_LAP, initial_leaderboard,
};
use crate::rank::project_player;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdData {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub description: String,
    pub logo: String,
    pub cta: String,
    pub link: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_challenge: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement_score: Option<u32>,
}

impl AdData {
    pub fn challenge(&self) -> bool {
        self.is_challenge.unwrap_or(false)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdCategory {
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub is_custom: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RewardKind {
    Credits,
    Token,
    // Declared in the reward vocabulary but not granted by any current rule.
    Badge,
    Mystery,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Reward {
    pub kind: RewardKind,
    pub amount: u32,
    pub label: String,
    /// Extra unlock text shown under the main reward (e.g. a badge).
    pub bonus: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerRank {
    pub name: String,
    pub score: u32,
    pub loops: u32,
    pub referrals: u32,
    pub is_player: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChallengeKind {
    Clicker,
}

/// Insertion-ordered set of visited square indices. Membership drives the
/// "new square" bonus; order is kept so the history reads in visit order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisitSet(Vec<usize>);

impl VisitSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// Returns true when the index was not present before.
    pub fn insert(&mut self, index: usize) -> bool {
        if self.contains(index) {
            false
        } else {
            self.0.push(index);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<usize> for VisitSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::new();
        for i in iter {
            set.insert(i);
        }
        set
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub current_position: usize,
    pub score: u32,
    pub tokens: u32,
    pub loops_completed: u32,
    pub streak: u32,
    pub visited_count: u32,
    pub history: VisitSet,
    pub selected_ad: Option<AdData>,
    pub pending_reward: Option<Reward>,
    pub active_challenge: Option<ChallengeKind>,
    pub is_moving: bool,
    /// Position the token left when the in-flight move began. Only meaningful
    /// while `is_moving` is true; lap detection reads it at resolution.
    pub move_from: usize,
    pub leaderboard: Vec<PlayerRank>,
    pub referral_code: String,
}

impl GameState {
    pub fn new(referral_code: String) -> Self {
        Self {
            current_position: 0,
            score: 0,
            tokens: STARTING_TOKENS,
            loops_completed: 0,
            streak: 0,
            visited_count: 1,
            history: VisitSet::from_iter([0]),
            selected_ad: None,
            pending_reward: None,
            active_challenge: None,
            is_moving: false,
            move_from: 0,
            leaderboard: initial_leaderboard(),
            referral_code,
        }
    }
}

/// A move from `from` completes a lap when the index wraps backwards, or when
/// it lands exactly on the start square from the final quadrant.
pub fn completes_lap(from: usize, target: usize) -> bool {
    target < from || (from > 30 && target == 0)
}

fn lap_reward(total_tokens: u32, streak: u32) -> Reward {
    Reward {
        kind: RewardKind::Token,
        amount: total_tokens,
        label: "Cycle Rewards & Bonus Credits".to_string(),
        bonus: (streak > 2).then(|| "New Challenger Badge Unlocked".to_string()),
    }
}

#[derive(Clone, Debug)]
pub enum GameAction {
    /// Start the timed transition towards a square. Rejected while a move is
    /// already in flight.
    BeginMove { target: usize },
    /// Resolve the in-flight move with the advertisement on the landing
    /// square. Dispatched by the board view's timer.
    FinishMove { ad: AdData },
    CompleteChallenge { bonus: u32 },
    CancelChallenge,
    DismissAd,
    DismissReward,
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        let mut new = (*self).clone();
        match action {
            BeginMove { target } => {
                if new.is_moving {
                    return self;
                }
                new.move_from = new.current_position;
                new.current_position = target;
                new.is_moving = true;
                new.selected_ad = None;
            }
            FinishMove { ad } => {
                // A stray timer after resolution must not re-apply the move.
                if !new.is_moving {
                    return self;
                }
                let target = new.current_position;
                let is_new_square = !new.history.contains(target);
                new.score += if is_new_square {
                    POINTS_PER_AD
                } else {
                    POINTS_PER_AD / 5
                };

                if completes_lap(new.move_from, target) {
                    new.loops_completed += 1;
                    new.streak += 1;
                    let streak_bonus = TOKENS_PER_LAP * (new.streak - 1) / 2;
                    let total = TOKENS_PER_LAP + streak_bonus;
                    new.tokens += total;
                    new.score += POINTS_PER_LAP * new.streak;
                    new.pending_reward = Some(lap_reward(total, new.streak));
                }

                if new.history.insert(target) {
                    new.visited_count += 1;
                }
                new.active_challenge = ad.challenge().then_some(ChallengeKind::Clicker);
                new.selected_ad = Some(ad);
                new.leaderboard = project_player(&new.leaderboard, new.score, new.loops_completed);
                new.is_moving = false;
            }
            CompleteChallenge { bonus } => {
                new.score += bonus;
                new.active_challenge = None;
                // A lap reward earned by the same move takes precedence.
                if bonus > 0 && new.pending_reward.is_none() {
                    new.pending_reward = Some(Reward {
                        kind: RewardKind::Credits,
                        amount: bonus,
                        label: "Flash Challenge Bonus".to_string(),
                        bonus: None,
                    });
                }
                new.leaderboard = project_player(&new.leaderboard, new.score, new.loops_completed);
            }
            CancelChallenge => {
                new.active_challenge = None;
            }
            DismissAd => {
                new.selected_ad = None;
            }
            DismissReward => {
                new.pending_reward = None;
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::default_ad;

    fn dispatch(state: GameState, action: GameAction) -> GameState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn resolve(state: GameState, target: usize) -> GameState {
        let ad = default_ad(target);
        let state = dispatch(state, GameAction::BeginMove { target });
        dispatch(state, GameAction::FinishMove { ad })
    }

    fn fresh() -> GameState {
        GameState::new("AD-TEST01".to_string())
    }

    #[test]
    fn begin_move_sets_intermediate_state() {
        let state = dispatch(fresh(), GameAction::BeginMove { target: 5 });
        assert!(state.is_moving);
        assert_eq!(state.current_position, 5);
        assert_eq!(state.move_from, 0);
        assert!(state.selected_ad.is_none());
        // Nothing scored until resolution.
        assert_eq!(state.score, 0);
    }

    #[test]
    fn begin_move_while_moving_is_a_noop() {
        let moving = dispatch(fresh(), GameAction::BeginMove { target: 5 });
        let again = dispatch(moving.clone(), GameAction::BeginMove { target: 9 });
        assert_eq!(again, moving);
    }

    #[test]
    fn finish_move_without_begin_is_a_noop() {
        let state = fresh();
        let after = dispatch(state.clone(), GameAction::FinishMove { ad: default_ad(3) });
        assert_eq!(after, state);
    }

    #[test]
    fn new_square_awards_full_points() {
        let state = resolve(fresh(), 5);
        assert_eq!(state.score, POINTS_PER_AD);
        assert_eq!(state.visited_count, 2);
        assert!(!state.is_moving);
        assert_eq!(state.selected_ad.as_ref().map(|a| a.id), Some(5));
    }

    #[test]
    fn revisited_square_awards_one_fifth() {
        let state = resolve(fresh(), 5);
        let state = resolve(state, 9);
        let base = state.score;
        // Same square again: not new, and 9 -> 9 completes no lap.
        let state = resolve(state, 9);
        assert_eq!(state.score, base + POINTS_PER_AD / 5);
        assert_eq!(state.visited_count, 3);
    }

    #[test]
    fn history_grows_monotonically_and_matches_visited_count() {
        let mut state = fresh();
        let mut last_len = state.history.len();
        for target in [3, 17, 3, 29, 0, 17, 11] {
            state = resolve(state, target);
            assert!(state.history.len() >= last_len);
            last_len = state.history.len();
            assert_eq!(state.visited_count as usize, state.history.len());
        }
    }

    #[test]
    fn lap_predicate_wraps_and_counts_exact_start_landing() {
        assert!(completes_lap(35, 2));
        assert!(!completes_lap(5, 20));
        assert!(completes_lap(31, 0));
        assert!(!completes_lap(30, 31));
        assert!(completes_lap(20, 0));
    }

    #[test]
    fn first_lap_awards_base_tokens_without_streak_bonus() {
        let state = resolve(fresh(), 35);
        let tokens_before = state.tokens;
        let state = resolve(state, 2);
        assert_eq!(state.loops_completed, 1);
        assert_eq!(state.streak, 1);
        assert_eq!(state.tokens, tokens_before + TOKENS_PER_LAP);
        let reward = state.pending_reward.expect("lap reward");
        assert_eq!(reward.kind, RewardKind::Token);
        assert_eq!(reward.amount, TOKENS_PER_LAP);
        assert!(reward.bonus.is_none());
    }

    #[test]
    fn second_lap_adds_half_base_streak_bonus() {
        let state = resolve(fresh(), 35);
        let state = resolve(state, 2); // lap 1
        let state = resolve(state, 38);
        let tokens_before = state.tokens;
        let state = resolve(state, 1); // lap 2
        assert_eq!(state.streak, 2);
        assert_eq!(
            state.tokens,
            tokens_before + TOKENS_PER_LAP + TOKENS_PER_LAP / 2
        );
    }

    #[test]
    fn third_lap_reward_carries_badge_bonus() {
        let mut state = fresh();
        for target in [35, 2, 38, 1, 39, 3] {
            state = resolve(state, target);
        }
        assert_eq!(state.streak, 3);
        let reward = state.pending_reward.expect("lap reward");
        assert!(reward.bonus.is_some());
    }

    #[test]
    fn streak_holds_on_non_lap_moves() {
        let state = resolve(fresh(), 35);
        let state = resolve(state, 2); // lap 1, streak 1
        let state = resolve(state, 10); // forward, no lap
        assert_eq!(state.streak, 1);
        let state = resolve(state, 20);
        assert_eq!(state.streak, 1);
    }

    #[test]
    fn lap_score_scales_with_streak() {
        let state = resolve(fresh(), 35);
        let score_before = state.score;
        let state = resolve(state, 2);
        // full ad points + lap points * streak(1)
        assert_eq!(state.score, score_before + POINTS_PER_AD + POINTS_PER_LAP);
    }

    #[test]
    fn landing_on_challenge_square_activates_clicker() {
        let state = resolve(fresh(), 7);
        assert_eq!(state.active_challenge, Some(ChallengeKind::Clicker));
        let state = resolve(state, 8);
        assert_eq!(state.active_challenge, None);
    }

    #[test]
    fn lap_and_challenge_can_both_be_set_from_one_move() {
        // 35 -> 14 wraps (lap) and square 14 is challenge-flagged.
        let state = resolve(fresh(), 35);
        let state = resolve(state, 14);
        assert!(state.pending_reward.is_some());
        assert_eq!(state.active_challenge, Some(ChallengeKind::Clicker));
    }

    #[test]
    fn complete_challenge_adds_bonus_and_projects_leaderboard() {
        let state = resolve(fresh(), 7);
        let score_before = state.score;
        let state = dispatch(state, GameAction::CompleteChallenge { bonus: 450 });
        assert_eq!(state.score, score_before + 450);
        assert_eq!(state.active_challenge, None);
        let player = state.leaderboard.iter().find(|r| r.is_player).unwrap();
        assert_eq!(player.score, state.score);
    }

    #[test]
    fn challenge_bonus_queues_a_credits_reward() {
        let state = resolve(fresh(), 7);
        let state = dispatch(state, GameAction::CompleteChallenge { bonus: 350 });
        let reward = state.pending_reward.expect("challenge reward");
        assert_eq!(reward.kind, RewardKind::Credits);
        assert_eq!(reward.amount, 350);
    }

    #[test]
    fn zero_click_challenge_yields_no_reward() {
        let state = resolve(fresh(), 7);
        let state = dispatch(state, GameAction::CompleteChallenge { bonus: 0 });
        assert!(state.pending_reward.is_none());
    }

    #[test]
    fn lap_reward_survives_challenge_completion() {
        // 35 -> 14 is both a lap and a challenge square.
        let state = resolve(fresh(), 35);
        let state = resolve(state, 14);
        let state = dispatch(state, GameAction::CompleteChallenge { bonus: 200 });
        let reward = state.pending_reward.expect("lap reward");
        assert_eq!(reward.kind, RewardKind::Token);
    }

    #[test]
    fn cancel_challenge_discards_without_scoring() {
        let state = resolve(fresh(), 7);
        let score_before = state.score;
        let state = dispatch(state, GameAction::CancelChallenge);
        assert_eq!(state.score, score_before);
        assert_eq!(state.active_challenge, None);
    }

    #[test]
    fn dismissals_only_clear_their_field() {
        let state = resolve(fresh(), 35);
        let state = resolve(state, 2);
        let state = dispatch(state, GameAction::DismissReward);
        assert!(state.pending_reward.is_none());
        assert!(state.selected_ad.is_some());
        let state = dispatch(state, GameAction::DismissAd);
        assert!(state.selected_ad.is_none());
    }

    #[test]
    fn leaderboard_keeps_exactly_one_player_entry() {
        let mut state = fresh();
        for target in [5, 12, 35, 2, 7] {
            state = resolve(state, target);
            assert_eq!(state.leaderboard.iter().filter(|r| r.is_player).count(), 1);
        }
    }

    #[test]
    fn non_player_entries_never_change() {
        let initial = fresh().leaderboard;
        let mut state = fresh();
        for target in [5, 35, 2] {
            state = resolve(state, target);
        }
        for (before, after) in initial
            .iter()
            .zip(state.leaderboard.iter())
            .filter(|(b, _)| !b.is_player)
        {
            assert_eq!(before, after);
        }
    }

    #[test]
    fn visit_set_ignores_duplicates_and_keeps_order() {
        let mut set = VisitSet::new();
        assert!(set.insert(4));
        assert!(set.insert(2));
        assert!(!set.insert(4));
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert!(set.contains(2));
        assert!(!set.contains(7));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![4, 2]);
    }
}
