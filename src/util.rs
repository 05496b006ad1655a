//! Small helpers shared across components.
//!
//! Randomness is injected as plain `f64` samples so everything here stays
//! testable off-wasm; callers pass `js_sys::Math::random` output in.

use crate::constants::TOTAL_SQUARES;
use wasm_bindgen::JsValue;

const CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CODE_LEN: usize = 6;

/// Session referral code: `AD-` plus six uppercase alphanumerics.
pub fn referral_code(mut rand: impl FnMut() -> f64) -> String {
    let mut code = String::with_capacity(3 + CODE_LEN);
    code.push_str("AD-");
    for _ in 0..CODE_LEN {
        let sample = rand().clamp(0.0, 1.0 - f64::EPSILON);
        let idx = (sample * CODE_CHARSET.len() as f64) as usize;
        code.push(CODE_CHARSET[idx] as char);
    }
    code
}

/// Forward jump of 3 to 11 squares, wrapped onto the board.
pub fn random_jump(position: usize, rand: f64) -> usize {
    let sample = rand.clamp(0.0, 1.0 - f64::EPSILON);
    let jump = (sample * 9.0) as usize + 3;
    (position + jump) % TOTAL_SQUARES
}

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}
