use crate::constants::TOTAL_SQUARES;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HudProps {
    pub score: u32,
    pub tokens: u32,
    pub streak: u32,
    pub loops_completed: u32,
    pub visited_count: u32,
    pub current_position: usize,
    pub is_moving: bool,
    pub on_random_move: Callback<()>,
    pub on_toggle_leaderboard: Callback<()>,
    pub on_open_referral: Callback<()>,
    pub on_open_manager: Callback<()>,
}

#[function_component]
pub fn Hud(props: &HudProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;";
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let button_style = "padding:8px 12px; background:#21262d; color:#e6edf3; border:1px solid #30363d; border-radius:8px; cursor:pointer; font-size:13px; text-align:left;";

    let lap_progress = (props.current_position * 100) / TOTAL_SQUARES;

    let roll_cb = {
        let cb = props.on_random_move.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let leaderboard_cb = {
        let cb = props.on_toggle_leaderboard.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let referral_cb = {
        let cb = props.on_open_referral.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let manager_cb = {
        let cb = props.on_open_manager.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <>
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style={row_style}>
                <span style={format!("{} color:#d4af37;", icon_style)}>{"⭐"}</span>
                <span style={format!("{} color:#d4af37;", label_style)}>{"Score"}</span>
                <span style={format!("{} color:#d4af37;", value_style)}>{ props.score }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", icon_style)}>{"🪙"}</span>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Tokens"}</span>
                <span style={format!("{} color:#58a6ff;", value_style)}>{ props.tokens }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#a5d6ff;", icon_style)}>{"🔁"}</span>
                <span style={format!("{} color:#a5d6ff;", label_style)}>{"Laps"}</span>
                <span style={format!("{} color:#a5d6ff;", value_style)}>{ props.loops_completed }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#7ee787;", icon_style)}>{"📍"}</span>
                <span style={format!("{} color:#7ee787;", label_style)}>{"Visited"}</span>
                <span style={format!("{} color:#7ee787;", value_style)}>
                    { format!("{}/{}", props.visited_count, TOTAL_SQUARES) }
                </span>
            </div>
            { if props.streak > 1 {
                html! {
                    <div style="background:linear-gradient(90deg,#f0883e,#f85149); border-radius:6px; padding:4px 8px; font-size:12px; font-weight:700; text-align:center;">
                        { format!("🔥 COMBO x{}", props.streak) }
                    </div>
                }
            } else { html! {} } }
            <div>
                <div style="font-size:11px; opacity:0.7; margin-bottom:4px;">{"Lap progress"}</div>
                <div style="height:6px; background:#21262d; border-radius:3px; overflow:hidden;">
                    <div style={format!("height:100%; width:{}%; background:#58a6ff; transition:width 0.3s;", lap_progress)}></div>
                </div>
            </div>
        </div>

        <div style="position:absolute; bottom:12px; left:12px; display:flex; flex-direction:column; gap:8px;">
            <button
                onclick={roll_cb}
                disabled={props.is_moving}
                style={format!(
                    "width:72px; height:72px; border-radius:50%; border:2px solid #1f6feb; background:radial-gradient(circle at 35% 35%, #58a6ff, #1f6feb); color:#fff; font-size:13px; font-weight:700; cursor:pointer; {}",
                    if props.is_moving { "opacity:0.4; cursor:default;" } else { "" }
                )}
            >
                { if props.is_moving { "..." } else { "MOVE" } }
            </button>
            <button onclick={leaderboard_cb} style={button_style}>{"🏆 Leaderboard"}</button>
            <button onclick={referral_cb} style={button_style}>{"🎁 Refer a Friend"}</button>
            <button onclick={manager_cb} style={button_style}>{"🛠 Manage Ads"}</button>
        </div>
        </>
    }
}
