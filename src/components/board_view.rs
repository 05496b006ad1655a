use crate::model::{AdData, GameState};
use crate::state::layout::{GRID, cell_square, square_cell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BoardViewProps {
    pub game_state: UseReducerHandle<GameState>,
    pub board: Rc<Vec<AdData>>,
    pub on_select_square: Callback<usize>,
}

/// Pixel geometry of the rendered ring, derived from the canvas size.
struct BoardMetrics {
    cell: f64,
    origin_x: f64,
    origin_y: f64,
}

impl BoardMetrics {
    fn for_canvas(width: f64, height: f64) -> Self {
        let cell = (width.min(height) * 0.92) / GRID as f64;
        let span = cell * GRID as f64;
        Self {
            cell,
            origin_x: (width - span) / 2.0,
            origin_y: (height - span) / 2.0,
        }
    }

    fn cell_at(&self, x: f64, y: f64) -> Option<(u32, u32)> {
        let col = (x - self.origin_x) / self.cell;
        let row = (y - self.origin_y) / self.cell;
        if col < 0.0 || row < 0.0 {
            return None;
        }
        Some((col as u32, row as u32))
    }
}

fn draw_board(
    ctx: &CanvasRenderingContext2d,
    width: f64,
    height: f64,
    state: &GameState,
    board: &[AdData],
) {
    let m = BoardMetrics::for_canvas(width, height);
    ctx.set_fill_style_str("#0d1117");
    ctx.fill_rect(0.0, 0.0, width, height);

    let pad = m.cell * 0.06;
    for (index, ad) in board.iter().enumerate() {
        let (col, row) = square_cell(index);
        let x = m.origin_x + col as f64 * m.cell + pad;
        let y = m.origin_y + row as f64 * m.cell + pad;
        let size = m.cell - 2.0 * pad;

        ctx.set_fill_style_str(&ad.color);
        ctx.fill_rect(x, y, size, size);

        // Dim squares not yet visited so progress is readable at a glance.
        if !state.history.contains(index) {
            ctx.set_fill_style_str("rgba(13,17,23,0.55)");
            ctx.fill_rect(x, y, size, size);
        }

        let active = state.current_position == index;
        ctx.set_stroke_style_str(if active { "#f0883e" } else { "#30363d" });
        ctx.set_line_width(if active { 3.0 } else { 1.0 });
        ctx.stroke_rect(x, y, size, size);

        if ad.challenge() {
            ctx.set_fill_style_str("#fbbf24");
            ctx.set_font(&format!("{}px sans-serif", (m.cell * 0.3) as u32));
            let _ = ctx.fill_text("\u{26a1}", x + size * 0.08, y + size * 0.34);
        }
    }

    // Player token on the current square; hollow while the move is in flight.
    let (col, row) = square_cell(state.current_position);
    let cx = m.origin_x + (col as f64 + 0.5) * m.cell;
    let cy = m.origin_y + (row as f64 + 0.5) * m.cell;
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, m.cell * 0.26, 0.0, std::f64::consts::PI * 2.0);
    if state.is_moving {
        ctx.set_stroke_style_str("#58a6ff");
        ctx.set_line_width(3.0);
        ctx.stroke();
    } else {
        ctx.set_fill_style_str("#58a6ff");
        ctx.fill();
        ctx.set_stroke_style_str("#1f6feb");
        ctx.set_line_width(2.0);
        ctx.stroke();
    }
}

#[function_component(BoardView)]
pub fn board_view(props: &BoardViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let draw_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);
    // Latest props for the long-lived closures; refreshed every render.
    let state_ref = use_mut_ref(|| props.game_state.clone());
    let board_ref = use_mut_ref(|| props.board.clone());
    let select_ref = use_mut_ref(|| props.on_select_square.clone());
    *state_ref.borrow_mut() = props.game_state.clone();
    *board_ref.borrow_mut() = props.board.clone();
    *select_ref.borrow_mut() = props.on_select_square.clone();

    // Redraw whenever the rendered state or board changes.
    {
        let draw_ref = draw_ref.clone();
        let deps = ((*props.game_state).clone(), props.board.clone());
        use_effect_with(deps, move |_| {
            if let Some(draw) = &*draw_ref.borrow() {
                draw();
            }
            || ()
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        let draw_ref_setup = draw_ref.clone();
        let state_ref = state_ref.clone();
        let board_ref = board_ref.clone();
        let select_ref = select_ref.clone();

        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            let canvas: HtmlCanvasElement =
                canvas_ref.cast::<HtmlCanvasElement>().expect("canvas");

            let apply_canvas_size = {
                let canvas = canvas.clone();
                let window = window.clone();
                move || {
                    let width = window
                        .inner_width()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(800.0);
                    let height = window
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(600.0);
                    canvas.set_width(width.max(0.0) as u32);
                    canvas.set_height(height.max(0.0) as u32);
                }
            };
            apply_canvas_size();

            let draw_closure: Rc<dyn Fn()> = {
                let canvas = canvas.clone();
                let state_ref = state_ref.clone();
                let board_ref = board_ref.clone();
                Rc::new(move || {
                    if !canvas.is_connected() {
                        return;
                    }
                    let ctx = match canvas.get_context("2d").ok().flatten() {
                        Some(c) => match c.dyn_into::<CanvasRenderingContext2d>() {
                            Ok(ctx) => ctx,
                            Err(_) => return,
                        },
                        None => return,
                    };
                    let state = (**state_ref.borrow()).clone();
                    let board = board_ref.borrow().clone();
                    draw_board(
                        &ctx,
                        canvas.width() as f64,
                        canvas.height() as f64,
                        &state,
                        &board,
                    );
                })
            };
            *draw_ref_setup.borrow_mut() = Some(draw_closure.clone());
            (draw_closure)();

            // Click -> square selection via ring hit-testing.
            let click_cb = {
                let canvas = canvas.clone();
                let select_ref = select_ref.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    let metrics = BoardMetrics::for_canvas(
                        canvas.width() as f64,
                        canvas.height() as f64,
                    );
                    if let Some((col, row)) =
                        metrics.cell_at(e.offset_x() as f64, e.offset_y() as f64)
                    {
                        if let Some(index) = cell_square(col, row) {
                            select_ref.borrow().emit(index);
                        }
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref())
                .unwrap();

            let resize_cb = {
                let apply_canvas_size = apply_canvas_size.clone();
                let draw_ref = draw_ref_setup.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    apply_canvas_size();
                    if let Some(draw) = &*draw_ref.borrow() {
                        draw();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .unwrap();

            let window_clone = window.clone();
            move || {
                let _ = canvas
                    .remove_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref());
                let _ = window_clone.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
                drop(click_cb);
                drop(resize_cb);
            }
        });
    }

    html! {
        <canvas ref={canvas_ref} id="board-canvas" style="display:block; width:100%; height:100%;"></canvas>
    }
}
