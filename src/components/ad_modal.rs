use crate::model::AdData;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AdModalProps {
    pub ad: AdData,
    pub on_close: Callback<()>,
}

/// Full-screen ad card shown after a move resolves on a plain square.
#[function_component]
pub fn AdModal(props: &AdModalProps) -> Html {
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let ad = &props.ad;
    html! {
        <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:40;">
            <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:20px 24px; min-width:320px; max-width:440px; display:flex; flex-direction:column; gap:12px;">
                <div style="display:flex; align-items:center; gap:12px;">
                    <span style="font-size:36px;">{ &ad.logo }</span>
                    <div style="flex:1;">
                        <h3 style="margin:0; font-size:20px;">{ &ad.name }</h3>
                        <span style={format!("font-size:11px; font-weight:600; padding:2px 8px; border-radius:10px; background:{}; color:#0d1117;", ad.color)}>
                            { &ad.category }
                        </span>
                    </div>
                </div>
                <p style="margin:0; font-size:14px; opacity:0.85; line-height:1.5;">{ &ad.description }</p>
                { if let Some(score) = ad.engagement_score {
                    html! {
                        <div style="font-size:12px; opacity:0.7;">
                            { format!("📈 Engagement score: {}", score) }
                        </div>
                    }
                } else { html! {} } }
                <div style="display:flex; gap:10px;">
                    <a
                        href={ad.link.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        style="flex:1; text-align:center; padding:10px; background:#1f6feb; color:#fff; border-radius:8px; text-decoration:none; font-weight:600;"
                    >
                        { &ad.cta }
                    </a>
                    <button
                        onclick={close_cb}
                        style="padding:10px 16px; background:#21262d; color:#e6edf3; border:1px solid #30363d; border-radius:8px; cursor:pointer;"
                    >
                        {"Continue"}
                    </button>
                </div>
            </div>
        </div>
    }
}
