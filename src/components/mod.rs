pub mod ad_manager;
pub mod ad_modal;
pub mod app;
pub mod board_view;
pub mod challenge_overlay;
pub mod hud;
pub mod leaderboard_panel;
pub mod referral_modal;
pub mod reward_modal;
