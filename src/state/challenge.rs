//! Transient clicker state for the flash-challenge overlay.

use crate::constants::{CHALLENGE_SECS, POINTS_PER_CLICK};

/// One run of the 5-second clicker. Created when the overlay mounts and
/// destroyed with it; nothing here outlives the challenge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChallengeRun {
    pub time_left: u32,
    pub clicks: u32,
}

impl ChallengeRun {
    pub fn new() -> Self {
        Self {
            time_left: CHALLENGE_SECS,
            clicks: 0,
        }
    }

    pub fn click(&mut self) {
        if !self.finished() {
            self.clicks += 1;
        }
    }

    /// One countdown second. Saturates at zero.
    pub fn tick(&mut self) {
        self.time_left = self.time_left.saturating_sub(1);
    }

    pub fn finished(&self) -> bool {
        self.time_left == 0
    }

    pub fn payout(&self) -> u32 {
        self.clicks * POINTS_PER_CLICK
    }
}

impl Default for ChallengeRun {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_runs_out_and_saturates() {
        let mut run = ChallengeRun::new();
        assert_eq!(run.time_left, CHALLENGE_SECS);
        for _ in 0..CHALLENGE_SECS {
            assert!(!run.finished());
            run.tick();
        }
        assert!(run.finished());
        run.tick();
        assert_eq!(run.time_left, 0);
    }

    #[test]
    fn payout_is_fifty_points_per_click() {
        let mut run = ChallengeRun::new();
        for _ in 0..7 {
            run.click();
        }
        assert_eq!(run.payout(), 7 * POINTS_PER_CLICK);
    }

    #[test]
    fn clicks_after_the_buzzer_do_not_count() {
        let mut run = ChallengeRun::new();
        run.click();
        for _ in 0..CHALLENGE_SECS {
            run.tick();
        }
        run.click();
        assert_eq!(run.clicks, 1);
    }
}
