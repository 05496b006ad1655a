//! Board Model: merges user-registered advertisements into the default board.
//!
//! Pure and deterministic given the two inputs, so the app can memoize the
//! result keyed on the custom-ad list.

use crate::constants::{TOTAL_SQUARES, is_corner};
use crate::model::AdData;

/// Square index for the `n`-th non-corner slot (zero-based), counting upward
/// from index 1. Returns `None` once the board runs out of slots.
fn nth_non_corner(n: usize) -> Option<usize> {
    (1..TOTAL_SQUARES).filter(|i| !is_corner(*i)).nth(n)
}

/// A custom ad replaces the square's content but inherits the square identity
/// and any per-square attributes the submission left unset.
fn place(default: &AdData, custom: &AdData, index: usize) -> AdData {
    AdData {
        id: index as u32,
        name: custom.name.clone(),
        category: custom.category.clone(),
        description: custom.description.clone(),
        logo: custom.logo.clone(),
        cta: custom.cta.clone(),
        link: custom.link.clone(),
        color: custom.color.clone(),
        price: custom.price.or(default.price),
        is_challenge: custom.is_challenge.or(default.is_challenge),
        engagement_score: custom.engagement_score.or(default.engagement_score),
    }
}

/// Effective 40-entry board: defaults with custom ads slotted into non-corner
/// squares in registration order. Excess customs are silently dropped.
pub fn effective_board(defaults: &[AdData], customs: &[AdData]) -> Vec<AdData> {
    let mut board = defaults.to_vec();
    for (n, custom) in customs.iter().enumerate() {
        let Some(index) = nth_non_corner(n) else {
            break;
        };
        board[index] = place(&defaults[index], custom, index);
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::default_board;

    fn custom(name: &str) -> AdData {
        AdData {
            id: 1000,
            name: name.to_string(),
            category: "Tech".to_string(),
            description: String::new(),
            logo: "data:image/png;base64,xyz".to_string(),
            cta: "Visit Website".to_string(),
            link: "https://example.com".to_string(),
            color: "#3b82f6".to_string(),
            price: None,
            is_challenge: None,
            engagement_score: Some(0),
        }
    }

    #[test]
    fn no_customs_yields_the_default_board() {
        let defaults = default_board();
        assert_eq!(effective_board(&defaults, &[]), defaults);
    }

    #[test]
    fn first_custom_lands_on_square_one() {
        let defaults = default_board();
        let board = effective_board(&defaults, &[custom("Pixel Coffee")]);
        assert_eq!(board[1].name, "Pixel Coffee");
        assert_eq!(board[1].id, 1);
        assert_eq!(board[0], defaults[0]);
    }

    #[test]
    fn corners_are_never_overwritten() {
        let defaults = default_board();
        let customs: Vec<AdData> = (0..12).map(|i| custom(&format!("Shop {}", i))).collect();
        let board = effective_board(&defaults, &customs);
        for corner in [0, 10, 20, 30] {
            assert_eq!(board[corner], defaults[corner]);
        }
        // Twelve customs occupy squares 1..=9 and 11..=13.
        assert_eq!(board[9].name, "Shop 8");
        assert_eq!(board[11].name, "Shop 9");
        assert_eq!(board[13].name, "Shop 11");
    }

    #[test]
    fn placement_follows_registration_order() {
        let defaults = default_board();
        let board = effective_board(&defaults, &[custom("First"), custom("Second")]);
        assert_eq!(board[1].name, "First");
        assert_eq!(board[2].name, "Second");
    }

    #[test]
    fn excess_customs_are_silently_dropped() {
        let defaults = default_board();
        // 36 non-corner slots exist; overflow past them is ignored.
        let customs: Vec<AdData> = (0..40).map(|i| custom(&format!("Shop {}", i))).collect();
        let board = effective_board(&defaults, &customs);
        assert_eq!(board.len(), TOTAL_SQUARES);
        assert_eq!(board[39].name, "Shop 35");
        for corner in [0, 10, 20, 30] {
            assert_eq!(board[corner], defaults[corner]);
        }
    }

    #[test]
    fn unset_custom_fields_fall_back_to_the_square() {
        let defaults = default_board();
        let board = effective_board(&defaults, &[custom("Minimal")]);
        // price and challenge flag come from default square 1.
        assert_eq!(board[1].price, defaults[1].price);
        assert_eq!(board[1].is_challenge, defaults[1].is_challenge);
        // engagement was set on the custom ad and wins.
        assert_eq!(board[1].engagement_score, Some(0));
    }

    #[test]
    fn non_corner_slots_enumerate_in_board_order() {
        assert_eq!(nth_non_corner(0), Some(1));
        assert_eq!(nth_non_corner(8), Some(9));
        assert_eq!(nth_non_corner(9), Some(11));
        assert_eq!(nth_non_corner(35), Some(39));
        assert_eq!(nth_non_corner(36), None);
    }
}
