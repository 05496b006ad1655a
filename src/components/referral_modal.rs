use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ReferralModalProps {
    pub code: String,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn ReferralModal(props: &ReferralModalProps) -> Html {
    let copied = use_state(|| false);

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let copy_cb = {
        let code = props.code.clone();
        let copied = copied.clone();
        Callback::from(move |_| {
            if let Some(win) = web_sys::window() {
                let _ = win.navigator().clipboard().write_text(&code);
            }
            copied.set(true);
            // Flash "Copied!" briefly, then fall back to the copy label.
            let copied = copied.clone();
            let reset = Closure::once_into_js(move || copied.set(false));
            if let Some(win) = web_sys::window() {
                let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                    reset.unchecked_ref(),
                    2000,
                );
            }
        })
    };

    html! {
        <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
            <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:24px 28px; min-width:320px; max-width:420px; text-align:center; display:flex; flex-direction:column; gap:14px;">
                <div style="font-size:40px;">{"🎁"}</div>
                <h3 style="margin:0; font-size:20px;">{"Refer a Friend"}</h3>
                <p style="margin:0; font-size:13px; opacity:0.8;">
                    {"Share your code and you both earn bonus tokens when they join."}
                </p>
                <div style="background:#0d1117; border:1px dashed #58a6ff; border-radius:8px; padding:12px; font-size:22px; font-weight:700; letter-spacing:3px; font-variant-numeric:tabular-nums;">
                    { &props.code }
                </div>
                <div style="display:flex; gap:10px;">
                    <button
                        onclick={copy_cb}
                        style="flex:1; padding:10px; background:#1f6feb; color:#fff; border:none; border-radius:8px; cursor:pointer; font-weight:600;"
                    >
                        { if *copied { "✓ Copied!" } else { "📋 Copy Code" } }
                    </button>
                    <button
                        onclick={close_cb}
                        style="padding:10px 16px; background:#21262d; color:#e6edf3; border:1px solid #30363d; border-radius:8px; cursor:pointer;"
                    >
                        {"Close"}
                    </button>
                </div>
            </div>
        </div>
    }
}
