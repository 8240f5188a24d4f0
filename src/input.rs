//! Mouse position to grid cell mapping for the board canvas.

use web_sys::HtmlCanvasElement;

use crate::render::TILE_SIZE;

/// What the click mapping needs to know about the canvas on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasGeometry {
    pub left: f64,
    pub top: f64,
    pub rect_width: f64,
    pub rect_height: f64,
    /// Backing store size in device pixels.
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub pixel_ratio: f64,
}

impl CanvasGeometry {
    /// `css_width` is the on-screen width the canvas was sized for; the
    /// ratio comes from the backing store, not the live `devicePixelRatio`.
    pub fn from_canvas(canvas: &HtmlCanvasElement, css_width: f64) -> Self {
        let rect = canvas.get_bounding_client_rect();
        Self::new(
            (rect.left(), rect.top()),
            (rect.width(), rect.height()),
            (canvas.width() as f64, canvas.height() as f64),
            css_width,
        )
    }

    pub fn new(origin: (f64, f64), rect: (f64, f64), backing: (f64, f64), css_width: f64) -> Self {
        Self {
            left: origin.0,
            top: origin.1,
            rect_width: rect.0,
            rect_height: rect.1,
            canvas_width: backing.0,
            canvas_height: backing.1,
            pixel_ratio: backing_ratio(backing.0, css_width),
        }
    }

    fn scale(backing: f64, on_screen: f64, ratio: f64) -> f64 {
        let denom = on_screen * ratio;
        if denom > 0.0 { backing / denom } else { 1.0 }
    }
}

pub fn pixel_ratio() -> f64 {
    web_sys::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|r| *r > 0.0)
        .unwrap_or(1.0)
}

/// Device pixels per CSS pixel of a backing store `canvas_width` wide.
pub fn backing_ratio(canvas_width: f64, css_width: f64) -> f64 {
    if canvas_width > 0.0 && css_width > 0.0 { canvas_width / css_width } else { 1.0 }
}

/// Grid `(row, col)` under a click at client coordinates, clamped to the grid.
pub fn cell_at(client_x: f64, client_y: f64, geom: &CanvasGeometry, rows: u32, cols: u32) -> (u32, u32) {
    let scale_x = CanvasGeometry::scale(geom.canvas_width, geom.rect_width, geom.pixel_ratio);
    let scale_y = CanvasGeometry::scale(geom.canvas_height, geom.rect_height, geom.pixel_ratio);
    let x = (client_x - geom.left) * scale_x;
    let y = (client_y - geom.top) * scale_y;
    (axis_cell(y, rows), axis_cell(x, cols))
}

fn axis_cell(offset: f64, len: u32) -> u32 {
    let cell = (offset / (TILE_SIZE + 1.0)).floor();
    let max = len.saturating_sub(1) as f64;
    if cell.is_nan() { 0 } else { cell.clamp(0.0, max) as u32 }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 6x6 board: 127 css px square, drawn at 2x.
    fn geometry(ratio: f64) -> CanvasGeometry {
        CanvasGeometry {
            left: 10.0,
            top: 20.0,
            rect_width: 127.0,
            rect_height: 127.0,
            canvas_width: 127.0 * ratio,
            canvas_height: 127.0 * ratio,
            pixel_ratio: ratio,
        }
    }

    #[test]
    fn maps_client_point_to_cell() {
        let g = geometry(2.0);
        assert_eq!(cell_at(10.0 + 47.0, 20.0 + 64.0, &g, 6, 6), (3, 2));
        assert_eq!(cell_at(10.0 + 5.0, 20.0 + 5.0, &g, 6, 6), (0, 0));
    }

    #[test]
    fn ratio_does_not_change_the_cell() {
        for ratio in [1.0, 1.5, 2.0, 3.0] {
            assert_eq!(cell_at(10.0 + 47.0, 20.0 + 64.0, &geometry(ratio), 6, 6), (3, 2));
        }
    }

    #[test]
    fn css_stretch_is_undone() {
        // Same backing store shown at twice the css size.
        let mut g = geometry(1.0);
        g.rect_width = 254.0;
        g.rect_height = 254.0;
        assert_eq!(cell_at(10.0 + 100.0, 20.0 + 10.0, &g, 6, 6), (0, 2));
    }

    #[test]
    fn clamps_to_grid_edges() {
        let g = geometry(1.0);
        assert_eq!(cell_at(10.0 + 126.9, 20.0 + 126.9, &g, 6, 6), (5, 5));
        assert_eq!(cell_at(10.0 - 3.0, 20.0 - 3.0, &g, 6, 6), (0, 0));
    }

    #[test]
    fn ratio_comes_from_the_backing_store() {
        // Sized at 1x, then the page is zoomed to 2x: the mapping must not move.
        let zoomed = CanvasGeometry::new((10.0, 20.0), (127.0, 127.0), (127.0, 127.0), 127.0);
        assert_eq!(zoomed.pixel_ratio, 1.0);
        assert_eq!(cell_at(10.0 + 47.0, 20.0 + 64.0, &zoomed, 6, 6), (3, 2));
        let sharp = CanvasGeometry::new((10.0, 20.0), (127.0, 127.0), (254.0, 254.0), 127.0);
        assert_eq!(sharp.pixel_ratio, 2.0);
        assert_eq!(cell_at(10.0 + 47.0, 20.0 + 64.0, &sharp, 6, 6), (3, 2));
    }

    #[test]
    fn backing_ratio_falls_back_to_one() {
        assert_eq!(backing_ratio(381.0, 127.0), 3.0);
        assert_eq!(backing_ratio(0.0, 127.0), 1.0);
        assert_eq!(backing_ratio(127.0, 0.0), 1.0);
    }

    #[test]
    fn zero_sized_rect_falls_back_to_unit_scale() {
        let mut g = geometry(1.0);
        g.rect_width = 0.0;
        assert_eq!(cell_at(10.0 + 22.0, 20.0, &g, 6, 6), (0, 1));
    }
}
