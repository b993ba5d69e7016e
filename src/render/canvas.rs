//! Pixel canvas drawn to the terminal with half-block characters: every
//! cell shows two vertically stacked pixels.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{self, Color},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Blend `a` toward `b`; `t` runs 0..=256.
    pub const fn mix(a: Rgb, b: Rgb, t: u16) -> Rgb {
        let t = t as i32;
        Rgb(
            (a.0 as i32 + (b.0 as i32 - a.0 as i32) * t / 256) as u8,
            (a.1 as i32 + (b.1 as i32 - a.1 as i32) * t / 256) as u8,
            (a.2 as i32 + (b.2 as i32 - a.2 as i32) * t / 256) as u8,
        )
    }

    pub const fn dim(self) -> Rgb {
        Rgb(self.0 / 2, self.1 / 2, self.2 / 2)
    }

    fn color(self) -> Color {
        Color::Rgb {
            r: self.0,
            g: self.1,
            b: self.2,
        }
    }
}

/// Pixel rectangle, `x0..x1` by `y0..y1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }
}

pub struct Canvas {
    width: usize,
    /// Always twice the terminal row count.
    height: usize,
    pixels: Vec<Rgb>,
    clip: Option<Rect>,
}

impl Canvas {
    /// Canvas covering a terminal of `cols` x `rows` cells.
    pub fn new(cols: u16, rows: u16) -> Self {
        let (width, height) = (cols as usize, rows as usize * 2);
        Self {
            width,
            height,
            pixels: vec![Rgb(0, 0, 0); width * height],
            clip: None,
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.width = cols as usize;
        self.height = rows as usize * 2;
        self.pixels.resize(self.width * self.height, Rgb(0, 0, 0));
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Restrict drawing to `rect` (`None` lifts the restriction).
    pub fn set_clip(&mut self, rect: Option<Rect>) {
        self.clip = rect;
    }

    pub fn put(&mut self, x: i32, y: i32, c: Rgb) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        if self.clip.is_some_and(|r| !r.contains(x, y)) {
            return;
        }
        self.pixels[y as usize * self.width + x as usize] = c;
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width + x as usize])
    }

    pub fn fill(&mut self, c: Rgb) {
        self.fill_rect(0, 0, self.width as i32, self.height as i32, c);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgb) {
        for py in y..y + h {
            for px in x..x + w {
                self.put(px, py, c);
            }
        }
    }

    /// Halve the brightness of every pixel inside `rect`.
    pub fn dim_rect(&mut self, rect: Rect) {
        for y in rect.y0..rect.y1 {
            for x in rect.x0..rect.x1 {
                if let Some(c) = self.get(x, y) {
                    self.put(x, y, c.dim());
                }
            }
        }
    }

    /// Write the whole canvas, skipping color escapes that would repeat the
    /// current color.
    pub fn flush(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 0))?;
        let rows = self.height / 2;
        for row in 0..rows {
            let mut fg: Option<Rgb> = None;
            let mut bg: Option<Rgb> = None;
            for col in 0..self.width {
                let upper = self.pixels[row * 2 * self.width + col];
                let lower = self.pixels[(row * 2 + 1) * self.width + col];
                if bg != Some(lower) {
                    queue!(out, style::SetBackgroundColor(lower.color()))?;
                    bg = Some(lower);
                }
                if upper == lower {
                    queue!(out, style::Print(' '))?;
                    continue;
                }
                if fg != Some(upper) {
                    queue!(out, style::SetForegroundColor(upper.color()))?;
                    fg = Some(upper);
                }
                queue!(out, style::Print('\u{2580}'))?; // ▀
            }
            queue!(out, style::ResetColor)?;
            if row + 1 < rows {
                queue!(out, style::Print("\r\n"))?;
            }
        }
        out.flush()
    }
}
