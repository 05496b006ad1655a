use super::{
    ad_manager::AdManagerPanel, ad_modal::AdModal, board_view::BoardView,
    challenge_overlay::ChallengeOverlay, hud::Hud, leaderboard_panel::LeaderboardPanel,
    referral_modal::ReferralModal, reward_modal::RewardModal,
};
use crate::board::effective_board;
use crate::constants::{MOVE_RESOLVE_MS, default_board};
use crate::model::{AdData, GameAction, GameState};
use crate::registry::AdRegistry;
use crate::storage::BrowserStorage;
use crate::util::{clog, random_jump, referral_code};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

/// Kick off a timed move: optimistic position now, resolution after the
/// fixed delay. The reducer rejects overlapping moves, so a stale timer can
/// never double-resolve.
fn begin_move(game_state: &UseReducerHandle<GameState>, board: &Rc<Vec<AdData>>, target: usize) {
    if game_state.is_moving {
        return;
    }
    let ad = board[target].clone();
    game_state.dispatch(GameAction::BeginMove { target });

    let handle = game_state.clone();
    let resolve = Closure::once_into_js(move || {
        handle.dispatch(GameAction::FinishMove { ad });
    });
    if let Some(win) = web_sys::window() {
        if win
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                resolve.unchecked_ref(),
                MOVE_RESOLVE_MS,
            )
            .is_err()
        {
            clog("failed to schedule move resolution");
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let game_state =
        use_reducer(|| GameState::new(referral_code(|| js_sys::Math::random())));
    let show_leaderboard = use_state(|| false);
    let show_referral = use_state(|| false);
    let show_manager = use_state(|| false);
    let custom_ads = use_state(Vec::<AdData>::new);

    // Load registered ads once on mount.
    {
        let custom_ads = custom_ads.clone();
        use_effect_with((), move |_| {
            custom_ads.set(AdRegistry::new(BrowserStorage).ads());
            || ()
        });
    }

    let board = use_memo((*custom_ads).clone(), |ads| {
        effective_board(&default_board(), ads)
    });

    let on_select_square = {
        let game_state = game_state.clone();
        let board = board.clone();
        Callback::from(move |index: usize| begin_move(&game_state, &board, index))
    };
    let on_random_move = {
        let game_state = game_state.clone();
        let board = board.clone();
        Callback::from(move |_: ()| {
            let target = random_jump(game_state.current_position, js_sys::Math::random());
            begin_move(&game_state, &board, target);
        })
    };
    let on_complete_challenge = {
        let game_state = game_state.clone();
        Callback::from(move |bonus: u32| {
            game_state.dispatch(GameAction::CompleteChallenge { bonus })
        })
    };
    let on_cancel_challenge = {
        let game_state = game_state.clone();
        Callback::from(move |_| game_state.dispatch(GameAction::CancelChallenge))
    };
    let on_dismiss_ad = {
        let game_state = game_state.clone();
        Callback::from(move |_| game_state.dispatch(GameAction::DismissAd))
    };
    let on_dismiss_reward = {
        let game_state = game_state.clone();
        Callback::from(move |_| game_state.dispatch(GameAction::DismissReward))
    };

    let on_toggle_leaderboard = {
        let show_leaderboard = show_leaderboard.clone();
        Callback::from(move |_| show_leaderboard.set(!*show_leaderboard))
    };
    let on_open_referral = {
        let show_referral = show_referral.clone();
        Callback::from(move |_| show_referral.set(true))
    };
    let on_close_referral = {
        let show_referral = show_referral.clone();
        Callback::from(move |_| show_referral.set(false))
    };
    let on_open_manager = {
        let show_manager = show_manager.clone();
        Callback::from(move |_| show_manager.set(true))
    };
    let on_close_manager = {
        let show_manager = show_manager.clone();
        Callback::from(move |_| show_manager.set(false))
    };
    // Re-read the registry after any CRUD so the board reflects it.
    let on_registry_update = {
        let custom_ads = custom_ads.clone();
        Callback::from(move |_| custom_ads.set(AdRegistry::new(BrowserStorage).ads()))
    };

    let state = (*game_state).clone();
    // Presentation exclusivity: reward and challenge each suppress the ad
    // modal; reward and challenge never start from the same move's UI at once
    // because the challenge overlay renders above a pending reward.
    let show_ad_modal =
        state.selected_ad.is_some() && state.pending_reward.is_none() && state.active_challenge.is_none();

    html! {
        <div style="position:relative; width:100vw; height:100vh; background:#0d1117; color:#e6edf3; overflow:hidden;">
            <BoardView game_state={game_state.clone()} board={board.clone()} on_select_square={on_select_square} />
            <Hud
                score={state.score}
                tokens={state.tokens}
                streak={state.streak}
                loops_completed={state.loops_completed}
                visited_count={state.visited_count}
                current_position={state.current_position}
                is_moving={state.is_moving}
                on_random_move={on_random_move}
                on_toggle_leaderboard={on_toggle_leaderboard}
                on_open_referral={on_open_referral}
                on_open_manager={on_open_manager}
            />
            <div style="position:absolute; top:16px; left:50%; transform:translateX(-50%); text-align:center; pointer-events:none;">
                <h1 style="margin:0; font-size:28px; letter-spacing:-1px;">
                    {"AD"}<span style="color:#58a6ff;">{"OPOLY"}</span>
                </h1>
                <div style="font-size:10px; letter-spacing:4px; opacity:0.6; text-transform:uppercase;">{"Interactive Ads Redefined"}</div>
            </div>

            { if show_ad_modal {
                if let Some(ad) = state.selected_ad.clone() {
                    html! { <AdModal ad={ad} on_close={on_dismiss_ad} /> }
                } else { html! {} }
            } else { html! {} } }

            { if state.active_challenge.is_some() {
                html! { <ChallengeOverlay on_complete={on_complete_challenge} on_cancel={on_cancel_challenge} /> }
            } else { html! {} } }

            { if let Some(reward) = state.pending_reward.clone() {
                if state.active_challenge.is_none() {
                    html! { <RewardModal reward={reward} streak={state.streak} on_close={on_dismiss_reward} /> }
                } else { html! {} }
            } else { html! {} } }

            { if *show_leaderboard {
                html! { <LeaderboardPanel ranks={state.leaderboard.clone()} on_close={{
                    let show_leaderboard = show_leaderboard.clone();
                    Callback::from(move |_| show_leaderboard.set(false))
                }} /> }
            } else { html! {} } }

            { if *show_referral {
                html! { <ReferralModal code={state.referral_code.clone()} on_close={on_close_referral} /> }
            } else { html! {} } }

            { if *show_manager {
                html! { <AdManagerPanel on_update={on_registry_update} on_close={on_close_manager} /> }
            } else { html! {} } }
        </div>
    }
}
