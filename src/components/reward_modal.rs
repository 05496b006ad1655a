use crate::model::{Reward, RewardKind};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RewardModalProps {
    pub reward: Reward,
    pub streak: u32,
    pub on_close: Callback<()>,
}

fn reward_icon(kind: RewardKind) -> &'static str {
    match kind {
        RewardKind::Credits => "💰",
        RewardKind::Token => "🪙",
        RewardKind::Badge => "🏅",
        RewardKind::Mystery => "🎁",
    }
}

#[function_component]
pub fn RewardModal(props: &RewardModalProps) -> Html {
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let reward = &props.reward;
    html! {
        <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.6); z-index:45;">
            <div style="background:#161b22; border:1px solid #d4af37; border-radius:12px; padding:24px 28px; min-width:300px; max-width:400px; text-align:center; display:flex; flex-direction:column; gap:12px;">
                <div style="font-size:48px;">{ reward_icon(reward.kind) }</div>
                <h3 style="margin:0; font-size:20px; color:#d4af37;">{ &reward.label }</h3>
                <div style="font-size:28px; font-weight:700;">{ format!("+{}", reward.amount) }</div>
                { if props.streak > 1 {
                    html! {
                        <div style="font-size:13px; color:#f0883e; font-weight:600;">
                            { format!("🔥 Lap streak x{}", props.streak) }
                        </div>
                    }
                } else { html! {} } }
                { if let Some(bonus) = &reward.bonus {
                    html! {
                        <div style="font-size:13px; background:rgba(212,175,55,0.12); border:1px solid rgba(212,175,55,0.4); border-radius:8px; padding:8px;">
                            { bonus.clone() }
                        </div>
                    }
                } else { html! {} } }
                <button
                    onclick={close_cb}
                    style="padding:10px; background:#1f6feb; color:#fff; border:none; border-radius:8px; cursor:pointer; font-weight:600;"
                >
                    {"Claim"}
                </button>
            </div>
        </div>
    }
}
