//! Paints a [`SceneView`] onto the canvas.

use crate::flyer::WingPhase;
use crate::session::Phase;
use crate::view::{FlyerPose, ObstacleGeometry, SceneView};

use super::canvas::{Canvas, Rgb};
use super::font::{GLYPH_H, draw_text, text_width};
use super::viewport::Viewport;

// ── Palette ─────────────────────────────────────────────────────────────────

const LETTERBOX: Rgb = Rgb(18, 22, 28);
const SKY_TOP: Rgb = Rgb(96, 140, 190);
const SKY_BOT: Rgb = Rgb(230, 196, 150);
const SILVER_LIGHT: Rgb = Rgb(236, 240, 241);
const SILVER_MID: Rgb = Rgb(189, 195, 199);
const SILVER_DARK: Rgb = Rgb(149, 165, 166);
const SILVER_EDGE: Rgb = Rgb(127, 140, 141);
const CROW_BODY: Rgb = Rgb(44, 62, 80);
const CROW_WING: Rgb = Rgb(70, 96, 122);
const CROW_BEAK: Rgb = Rgb(243, 156, 18);
const CROW_EYE: Rgb = Rgb(255, 255, 255);
const CROW_PUPIL: Rgb = Rgb(0, 0, 0);
const PANEL: Rgb = Rgb(52, 73, 94);
const PANEL_EDGE: Rgb = Rgb(26, 36, 47);
const TEXT: Rgb = Rgb(255, 255, 255);
const TEXT_ACCENT: Rgb = Rgb(243, 156, 18);
const SHADOW: Rgb = Rgb(30, 30, 30);

/// Draw one frame. The canvas is fully overwritten.
pub fn paint(canvas: &mut Canvas, view: &SceneView) {
    let vp = Viewport::fit(
        canvas.width(),
        canvas.height(),
        view.world_width,
        view.world_height,
    );

    canvas.set_clip(None);
    canvas.fill(LETTERBOX);
    canvas.set_clip(Some(vp.rect()));

    draw_sky(canvas, &vp);
    for o in &view.obstacles {
        draw_obstacle(canvas, &vp, o);
    }
    draw_crow(canvas, &vp, &view.flyer);

    // overlays may spill into the letterbox
    canvas.set_clip(None);
    let text_scale = (vp.height / 48).max(1);
    match view.phase {
        Phase::Idle => draw_title(canvas, &vp, text_scale),
        Phase::Running => draw_score(canvas, &vp, view.score, text_scale),
        Phase::GameOver => draw_game_over(canvas, &vp, view, text_scale),
    }
}

fn draw_sky(canvas: &mut Canvas, vp: &Viewport) {
    let r = vp.rect();
    let h = vp.height.max(1);
    for y in r.y0..r.y1 {
        let t = ((y - r.y0) * 256 / h) as u16;
        canvas.fill_rect(r.x0, y, vp.width, 1, Rgb::mix(SKY_TOP, SKY_BOT, t));
    }
}

// ── Obstacles ───────────────────────────────────────────────────────────────

/// Silver shading across the obstacle's width, edges outlined.
fn silver(col: i32, width: i32) -> Rgb {
    if col == 0 || col == width - 1 {
        return SILVER_EDGE;
    }
    let t = (col * 512 / width.max(1)) as u16;
    if t < 256 {
        Rgb::mix(SILVER_LIGHT, SILVER_MID, t)
    } else {
        Rgb::mix(SILVER_MID, SILVER_DARK, t - 256)
    }
}

/// Columns to skip on each side of a row `depth` pixels from the rounded
/// tip (0 = the tip row) of a segment `width` pixels wide.
fn petal_inset(depth: i32, width: i32) -> i32 {
    let r = width / 2;
    if r == 0 || depth >= r {
        return 0;
    }
    let d = (r - depth) as f64;
    let r = r as f64;
    (r - (r * r - d * d).max(0.0).sqrt()).round() as i32
}

fn draw_obstacle(canvas: &mut Canvas, vp: &Viewport, o: &ObstacleGeometry) {
    let x0 = vp.x(o.x);
    let width = vp.len(o.width);
    let top_end = vp.y(o.top_height);
    let bottom_start = vp.y(o.bottom_y);
    let floor = vp.y(o.bottom_y + o.bottom_height);

    // top segment, rounded toward the gap (downward)
    for y in vp.top..top_end {
        let inset = petal_inset(top_end - 1 - y, width);
        draw_obstacle_row(canvas, x0, y, width, inset);
    }
    // bottom segment, rounded toward the gap (upward)
    for y in bottom_start..floor {
        let inset = petal_inset(y - bottom_start, width);
        draw_obstacle_row(canvas, x0, y, width, inset);
    }
}

fn draw_obstacle_row(canvas: &mut Canvas, x0: i32, y: i32, width: i32, inset: i32) {
    for col in inset..width - inset {
        let edge = col == inset || col == width - inset - 1;
        let c = if edge { SILVER_EDGE } else { silver(col, width) };
        canvas.put(x0 + col, y, c);
    }
}

// ── Crow ────────────────────────────────────────────────────────────────────

fn in_ellipse(x: f64, y: f64, cx: f64, cy: f64, rx: f64, ry: f64) -> bool {
    let dx = (x - cx) / rx;
    let dy = (y - cy) / ry;
    dx * dx + dy * dy <= 1.0
}

fn in_triangle(p: (f64, f64), a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> bool {
    let side = |p: (f64, f64), q: (f64, f64), r: (f64, f64)| {
        (p.0 - r.0) * (q.1 - r.1) - (q.0 - r.0) * (p.1 - r.1)
    };
    let d1 = side(p, a, b);
    let d2 = side(p, b, c);
    let d3 = side(p, c, a);
    let neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(neg && pos)
}

/// Color of the crow at `(x, y)` in its own unrotated frame, scaled so the
/// body box is 40x30 with the origin at its top-left. Later parts paint
/// over earlier ones.
pub fn crow_pixel(x: f64, y: f64, wing: WingPhase) -> Option<Rgb> {
    let p = (x, y);
    let mut c = None;

    if in_ellipse(x, y, 20.0, 15.0, 20.0, 15.0)
        || in_ellipse(x, y, 35.0, 5.0, 10.0, 10.0)
        || in_triangle(p, (0.0, 15.0), (-15.0, 5.0), (-15.0, 25.0))
    {
        c = Some(CROW_BODY);
    }
    let wing_tri = match wing {
        WingPhase::Up => ((20.0, 15.0), (0.0, -5.0), (30.0, 0.0)),
        WingPhase::Down => ((20.0, 15.0), (0.0, 30.0), (30.0, 35.0)),
    };
    if in_triangle(p, wing_tri.0, wing_tri.1, wing_tri.2) {
        c = Some(CROW_WING);
    }
    if in_triangle(p, (45.0, 5.0), (55.0, 10.0), (45.0, 15.0)) {
        c = Some(CROW_BEAK);
    }
    if in_ellipse(x, y, 38.0, 8.0, 3.0, 3.0) {
        c = Some(CROW_EYE);
    }
    if in_ellipse(x, y, 38.5, 8.0, 1.5, 1.5) {
        c = Some(CROW_PUPIL);
    }
    c
}

/// Sample the crow shape per pixel, rotating about the body center by the
/// pose's tilt.
fn draw_crow(canvas: &mut Canvas, vp: &Viewport, pose: &FlyerPose) {
    // local units -> world units
    let sx = pose.width / 40.0;
    let sy = pose.height / 30.0;
    let cx = pose.x + pose.width / 2.0;
    let cy = pose.y + pose.height / 2.0;
    let (sin, cos) = pose.tilt.sin_cos();

    // shape reaches at most ~40 local units from the body center
    let reach = 42.0 * sx.max(sy);
    let (px0, py0) = (vp.x(cx - reach), vp.y(cy - reach));
    let (px1, py1) = (vp.x(cx + reach) + 1, vp.y(cy + reach) + 1);

    for py in py0..py1 {
        for px in px0..px1 {
            let (wx, wy) = vp.to_world(px, py);
            let (dx, dy) = (wx - cx, wy - cy);
            let lx = dx * cos + dy * sin;
            let ly = -dx * sin + dy * cos;
            if let Some(c) = crow_pixel(lx / sx + 20.0, ly / sy + 15.0, pose.wing) {
                canvas.put(px, py, c);
            }
        }
    }
}

// ── Overlays ────────────────────────────────────────────────────────────────

/// Largest scale up to `preferred` at which `text` fits in `max_w` pixels.
fn fitted(text: &str, max_w: i32, preferred: i32) -> i32 {
    (1..=preferred.max(1))
        .rev()
        .find(|&s| text_width(text, s) <= max_w)
        .unwrap_or(1)
}

fn draw_score(canvas: &mut Canvas, vp: &Viewport, score: u32, scale: i32) {
    let cx = vp.left + vp.width / 2;
    let text = score.to_string();
    let scale = fitted(&text, vp.width, scale * 2);
    draw_text(canvas, cx, vp.top + 2 * scale, &text, scale, TEXT, Some(SHADOW));
}

fn draw_title(canvas: &mut Canvas, vp: &Viewport, scale: i32) {
    let max_w = canvas.width() as i32 - 2;
    let cx = vp.left + vp.width / 2;
    let mut y = vp.top + vp.height / 5;
    for (text, preferred, color) in [("KAAGTALI", scale * 2, TEXT_ACCENT), ("SPACE TO FLAP", scale, TEXT)] {
        let s = fitted(text, max_w, preferred);
        draw_text(canvas, cx, y, text, s, color, Some(SHADOW));
        y += (GLYPH_H + 3) * s;
    }
}

fn draw_game_over(canvas: &mut Canvas, vp: &Viewport, view: &SceneView, scale: i32) {
    canvas.dim_rect(vp.rect());

    let lines = [
        ("GAME OVER".to_string(), TEXT_ACCENT),
        (format!("SCORE {}", view.score), TEXT),
        (format!("BEST {}", view.best), TEXT),
        (String::new(), TEXT),
        ("R TO RESTART".to_string(), TEXT),
    ];
    let max_w = canvas.width() as i32 - 6;
    let scale = lines
        .iter()
        .map(|(text, _)| fitted(text, max_w, scale))
        .min()
        .unwrap_or(1);
    let widest = lines
        .iter()
        .map(|(text, _)| text_width(text, scale))
        .max()
        .unwrap_or(0);

    let line = (GLYPH_H + 3) * scale;
    let panel_w = widest + 4 * scale;
    let panel_h = line * lines.len() as i32 + scale;
    let cx = vp.left + vp.width / 2;
    let x0 = cx - panel_w / 2;
    let y0 = vp.top + (vp.height - panel_h) / 2;
    canvas.fill_rect(x0 - 1, y0 - 1, panel_w + 2, panel_h + 2, PANEL_EDGE);
    canvas.fill_rect(x0, y0, panel_w, panel_h, PANEL);

    let mut y = y0 + 2 * scale;
    for (text, color) in &lines {
        draw_text(canvas, cx, y, text, scale, *color, Some(SHADOW));
        y += line;
    }
}
