use crate::constants::POINTS_PER_CLICK;
use crate::state::ChallengeRun;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ChallengeOverlayProps {
    pub on_complete: Callback<u32>,
    pub on_cancel: Callback<()>,
}

/// Five-second clicker shown when a move lands on a challenge square. The
/// countdown lives in a RefCell so the interval closure always ticks the
/// current run; the `use_state` copy only drives rendering.
#[function_component(ChallengeOverlay)]
pub fn challenge_overlay(props: &ChallengeOverlayProps) -> Html {
    let run = use_state(ChallengeRun::new);
    let run_ref = use_mut_ref(ChallengeRun::new);
    let done_ref = use_mut_ref(|| false);

    {
        let run = run.clone();
        let run_ref = run_ref.clone();
        let done_ref = done_ref.clone();
        let on_complete = props.on_complete.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            let tick = Closure::wrap(Box::new(move || {
                let mut current = run_ref.borrow_mut();
                current.tick();
                run.set(*current);
                if current.finished() && !*done_ref.borrow() {
                    *done_ref.borrow_mut() = true;
                    on_complete.emit(current.payout());
                }
            }) as Box<dyn FnMut()>);
            let tick_id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    1000,
                )
                .unwrap();

            let window_clone = window.clone();
            move || {
                window_clone.clear_interval_with_handle(tick_id);
                drop(tick);
            }
        });
    }

    let click_cb = {
        let run = run.clone();
        let run_ref = run_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let mut current = run_ref.borrow_mut();
            current.click();
            run.set(*current);
        })
    };
    let cancel_cb = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.7); z-index:48;">
            <div style="background:#161b22; border:2px solid #fbbf24; border-radius:12px; padding:24px 28px; min-width:320px; text-align:center; display:flex; flex-direction:column; gap:14px;">
                <h3 style="margin:0; font-size:20px; color:#fbbf24;">{"⚡ Flash Challenge"}</h3>
                <div style="font-size:13px; opacity:0.8;">
                    { format!("Click as fast as you can! {} pts per click.", POINTS_PER_CLICK) }
                </div>
                <div style="font-size:36px; font-variant-numeric:tabular-nums; font-weight:700;">
                    { format!("{}s", run.time_left) }
                </div>
                <button
                    onclick={click_cb}
                    style="padding:22px; background:linear-gradient(135deg,#fbbf24,#f0883e); border:none; border-radius:12px; font-size:18px; font-weight:700; cursor:pointer; color:#0d1117;"
                >
                    { format!("CLICK! ({})", run.clicks) }
                </button>
                <div style="font-size:14px; color:#d4af37; font-weight:600;">
                    { format!("Bonus so far: {}", run.payout()) }
                </div>
                <button
                    onclick={cancel_cb}
                    style="padding:6px; background:none; border:none; color:#8b949e; cursor:pointer; font-size:12px; text-decoration:underline;"
                >
                    {"Skip challenge"}
                </button>
            </div>
        </div>
    }
}
