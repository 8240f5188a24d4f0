//! Board drawing on a HiDPI 2d canvas.
//!
//! Layout is in CSS pixels: each tile is `TILE_SIZE` wide with a one pixel
//! grid line before it, plus a closing line after the last tile.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::model::{Minefield, Tile};

pub const TILE_SIZE: f64 = 20.0;
pub const GRID_COLOR: &str = "#CCCCCC";
pub const HIDDEN_TILE_COLOR: &str = "#626262";
pub const VISIBLE_TILE_COLOR: &str = "#FFFFFF";
pub const FLAGGED_COLOR: &str = "#3e53aa";
pub const BOMB_COLOR: &str = "#bd2823";
pub const TEXT_COLOR: &str = "#000000";
const FONT: &str = "15px serif";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Appearance {
    Flagged,
    Hidden,
    Bomb,
    Revealed(i32),
}

impl Appearance {
    pub fn of(tile: &Tile) -> Self {
        if !tile.visible && tile.flagged {
            Appearance::Flagged
        } else if !tile.visible {
            Appearance::Hidden
        } else if tile.bomb {
            Appearance::Bomb
        } else {
            Appearance::Revealed(tile.num_bombs)
        }
    }

    pub fn fill(self) -> &'static str {
        match self {
            Appearance::Flagged => FLAGGED_COLOR,
            Appearance::Hidden => HIDDEN_TILE_COLOR,
            Appearance::Bomb => BOMB_COLOR,
            Appearance::Revealed(_) => VISIBLE_TILE_COLOR,
        }
    }

    /// Count drawn on the tile; empty tiles stay blank.
    pub fn label(self) -> Option<String> {
        match self {
            Appearance::Revealed(n) if n > 0 => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Position of the `i`th grid line, which is also where tile `i` starts.
pub fn line_offset(i: u32) -> f64 {
    i as f64 * (TILE_SIZE + 1.0) + 1.0
}

pub fn canvas_css_size(cols: u32, rows: u32) -> (f64, f64) {
    (
        (TILE_SIZE + 1.0) * cols as f64 + 1.0,
        (TILE_SIZE + 1.0) * rows as f64 + 1.0,
    )
}

pub fn text_origin(row: u32, col: u32) -> (f64, f64) {
    (
        col as f64 * (TILE_SIZE + 1.0) + TILE_SIZE / 2.0 - 3.0,
        (row + 1) as f64 * (TILE_SIZE + 1.0) - (TILE_SIZE / 2.0 - 5.0),
    )
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

/// Size the backing store at `ratio` device pixels per CSS pixel while
/// keeping the on-screen size at `css_w` x `css_h`.
pub fn apply_hidpi(canvas: &HtmlCanvasElement, css_w: f64, css_h: f64, ratio: f64) -> Result<(), JsValue> {
    canvas.set_width((css_w * ratio).round() as u32);
    canvas.set_height((css_h * ratio).round() as u32);
    canvas.set_attribute(
        "style",
        &format!("display:block; width:{}px; height:{}px;", css_w, css_h),
    )?;
    context_2d(canvas)?.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0)
}

pub fn draw(canvas: &HtmlCanvasElement, field: &Minefield, ratio: f64) -> Result<(), JsValue> {
    let ctx = context_2d(canvas)?;
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0)?;
    draw_grid(&ctx, field);
    draw_tiles(&ctx, field)
}

pub fn draw_grid(ctx: &CanvasRenderingContext2d, field: &Minefield) {
    let (w, h) = canvas_css_size(field.width(), field.height());
    ctx.begin_path();
    ctx.set_stroke_style_str(GRID_COLOR);
    for i in 0..=field.width() {
        ctx.move_to(line_offset(i), 0.0);
        ctx.line_to(line_offset(i), h);
    }
    for j in 0..=field.height() {
        ctx.move_to(0.0, line_offset(j));
        ctx.line_to(w, line_offset(j));
    }
    ctx.stroke();
}

pub fn draw_tiles(ctx: &CanvasRenderingContext2d, field: &Minefield) -> Result<(), JsValue> {
    ctx.set_font(FONT);
    for (idx, tile) in field.tiles().iter().enumerate() {
        let (row, col) = field.coordinates(idx);
        let look = Appearance::of(tile);
        ctx.set_fill_style_str(look.fill());
        ctx.fill_rect(line_offset(col), line_offset(row), TILE_SIZE, TILE_SIZE);
        if let Some(text) = look.label() {
            let (x, y) = text_origin(row, col);
            ctx.set_fill_style_str(TEXT_COLOR);
            ctx.fill_text(&text, x, y)?;
        }
    }
    Ok(())
}
