use crate::model::PlayerRank;
use crate::rank::sorted_for_display;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LeaderboardPanelProps {
    pub ranks: Vec<PlayerRank>,
    pub on_close: Callback<()>,
}

fn medal(position: usize) -> String {
    match position {
        0 => "🥇".to_string(),
        1 => "🥈".to_string(),
        2 => "🥉".to_string(),
        n => format!("{}.", n + 1),
    }
}

#[function_component]
pub fn LeaderboardPanel(props: &LeaderboardPanelProps) -> Html {
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let rows = sorted_for_display(&props.ranks);
    html! {
        <div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.95); border:1px solid #30363d; border-radius:8px; padding:14px; min-width:300px; z-index:30; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:16px;">{"🏆 Leaderboard"}</h3>
                <button onclick={close_cb} style="padding:4px 8px; background:#21262d; color:#e6edf3; border:1px solid #30363d; border-radius:6px; cursor:pointer;">{"Close"}</button>
            </div>
            { for rows.iter().enumerate().map(|(position, rank)| {
                let highlight = if rank.is_player {
                    "background:rgba(31,111,235,0.18); border:1px solid #1f6feb;"
                } else {
                    "border:1px solid transparent;"
                };
                html! {
                    <div style={format!("display:flex; align-items:center; gap:10px; padding:6px 8px; border-radius:6px; {}", highlight)}>
                        <span style="width:28px; text-align:center; flex-shrink:0;">{ medal(position) }</span>
                        <div style="flex:1; min-width:0;">
                            <div style="font-weight:600; overflow:hidden; text-overflow:ellipsis; white-space:nowrap;">{ &rank.name }</div>
                            <div style="font-size:11px; opacity:0.65;">
                                { format!("{} laps · {} referrals", rank.loops, rank.referrals) }
                            </div>
                        </div>
                        <span style="font-weight:700; font-variant-numeric:tabular-nums;">{ rank.score }</span>
                    </div>
                }
            }) }
        </div>
    }
}
