//! 3x5 bitmap font, just the glyphs the screens need.

use super::canvas::{Canvas, Rgb};

/// Rows top to bottom, three bits each, most significant bit leftmost.
#[rustfmt::skip]
fn glyph(ch: char) -> Option<[u8; 5]> {
    let rows = match ch {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b011, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b110, 0b101, 0b101, 0b101, 0b101],
        'O' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'Q' => [0b010, 0b101, 0b101, 0b110, 0b011],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        ' ' => [0; 5],
        _ => return None,
    };
    Some(rows)
}

pub const GLYPH_W: i32 = 3;
pub const GLYPH_H: i32 = 5;

/// Pixel width of `text` at `scale` (one blank column between glyphs).
pub fn text_width(text: &str, scale: i32) -> i32 {
    let n = text.chars().count() as i32;
    if n == 0 { 0 } else { (n * (GLYPH_W + 1) - 1) * scale }
}

/// Draw `text` horizontally centered on `cx`, top edge at `y`. Unknown
/// characters render as blanks. `shadow` is offset one pixel down-right.
pub fn draw_text(
    canvas: &mut Canvas,
    cx: i32,
    y: i32,
    text: &str,
    scale: i32,
    fg: Rgb,
    shadow: Option<Rgb>,
) {
    let scale = scale.max(1);
    let x0 = cx - text_width(text, scale) / 2;
    let passes = shadow.map(|s| (1, s)).into_iter().chain([(0, fg)]);
    for (offset, color) in passes {
        for (i, ch) in text.chars().enumerate() {
            let Some(rows) = glyph(ch.to_ascii_uppercase()) else {
                continue;
            };
            let gx = x0 + i as i32 * (GLYPH_W + 1) * scale;
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_W {
                    if bits & (0b100 >> col) != 0 {
                        canvas.fill_rect(
                            gx + col * scale + offset,
                            y + row as i32 * scale + offset,
                            scale,
                            scale,
                            color,
                        );
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 1), 0);
        assert_eq!(text_width("7", 1), 3);
        assert_eq!(text_width("42", 1), 7);
        assert_eq!(text_width("42", 2), 14);
    }

    #[test]
    fn test_every_screen_string_has_glyphs() {
        for s in ["KAAGTALI", "SPACE TO FLAP", "GAME OVER", "SCORE", "BEST", "R TO RESTART", "Q TO QUIT", "0123456789"] {
            assert!(s.chars().all(|c| glyph(c).is_some()), "{s}");
        }
    }

    #[test]
    fn test_draws_digit_one() {
        let mut c = Canvas::new(5, 4);
        let white = Rgb(255, 255, 255);
        // "1" spans x 0..3 when centered on 1
        draw_text(&mut c, 1, 0, "1", 1, white, None);
        assert_eq!(c.get(1, 0), Some(white));
        assert_eq!(c.get(0, 0), Some(Rgb(0, 0, 0)));
        assert_eq!(c.get(0, 4), Some(white));
        assert_eq!(c.get(2, 4), Some(white));
    }
}
