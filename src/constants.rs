//! Board and scoring constants, plus the generated default board content.

use crate::model::{AdCategory, AdData, PlayerRank};

pub const TOTAL_SQUARES: usize = 40;

pub const POINTS_PER_AD: u32 = 100;
pub const POINTS_PER_LAP: u32 = 1000;
pub const TOKENS_PER_LAP: u32 = 50;
pub const STARTING_TOKENS: u32 = 100;

/// Delay between clicking a square and resolving the move.
pub const MOVE_RESOLVE_MS: i32 = 1200;

pub const CHALLENGE_SECS: u32 = 5;
pub const POINTS_PER_CLICK: u32 = 50;

pub const CATEGORY_COLORS: [(&str, &str); 7] = [
    ("Tech", "#3b82f6"),
    ("Fashion", "#ec4899"),
    ("Food", "#f59e0b"),
    ("Travel", "#10b981"),
    ("Health", "#8b5cf6"),
    ("Finance", "#64748b"),
    ("Special", "#f8fafc"),
];

/// Categories a default (non-corner) square can carry.
const BRAND_CATEGORIES: [&str; 6] = ["Tech", "Fashion", "Food", "Travel", "Health", "Finance"];

pub fn category_color(name: &str) -> Option<&'static str> {
    CATEGORY_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, c)| *c)
}

pub fn default_categories() -> Vec<AdCategory> {
    CATEGORY_COLORS
        .iter()
        .map(|(name, color)| AdCategory {
            name: (*name).to_string(),
            color: (*color).to_string(),
            is_custom: false,
        })
        .collect()
}

pub fn initial_leaderboard() -> Vec<PlayerRank> {
    let npc = |name: &str, score: u32, loops: u32, referrals: u32| PlayerRank {
        name: name.to_string(),
        score,
        loops,
        referrals,
        is_player: false,
    };
    vec![
        npc("EcoExplorer_99", 28_400, 12, 4),
        npc("BrandMaster", 22_200, 9, 10),
        npc("AdVenturer", 18_800, 7, 2),
        npc("PixelTraveler", 12_500, 6, 5),
        PlayerRank {
            name: "You".to_string(),
            score: 0,
            loops: 0,
            referrals: 0,
            is_player: true,
        },
    ]
}

pub fn is_corner(index: usize) -> bool {
    index % 10 == 0
}

fn corner_name(index: usize) -> &'static str {
    match index {
        0 => "GO START",
        10 => "LOUNGE",
        20 => "FREE PARKING",
        _ => "REVENUE",
    }
}

/// Default advertisement for one square, derived entirely from the index so the
/// board is identical every session.
pub fn default_ad(index: usize) -> AdData {
    let corner = is_corner(index);
    let is_challenge = !corner && (index % 7 == 0 || index % 13 == 0);
    let category = if corner {
        "Special"
    } else {
        BRAND_CATEGORIES[index % BRAND_CATEGORIES.len()]
    };
    AdData {
        id: index as u32,
        name: if corner {
            corner_name(index).to_string()
        } else {
            format!("Brand {}", index)
        },
        category: category.to_string(),
        description: format!(
            "Engage with {} to earn rewards and discover exclusive deals.",
            if corner { "our platform" } else { "this brand" }
        ),
        logo: format!("https://picsum.photos/seed/{}/200", index + 50),
        cta: if is_challenge { "Start Challenge" } else { "Learn More" }.to_string(),
        link: "https://google.com".to_string(),
        color: category_color(category).unwrap_or("#3b82f6").to_string(),
        price: Some(if corner { 0 } else { 100 + 10 * index as u32 }),
        is_challenge: Some(is_challenge),
        engagement_score: Some(100 + (index as u32 * 137) % 500),
    }
}

pub fn default_board() -> Vec<AdData> {
    (0..TOTAL_SQUARES).map(default_ad).collect()
}
