use ratatui::prelude::*;

use crate::sim::geometry::Point;
use crate::surface::{Rgb, Surface};

#[derive(Clone, Copy, Default)]
struct Cell {
    bits: u8,
    fg: Option<Rgb>,
}

/// Rasterises canvas-space drawing onto terminal cells, 2x4 braille dots each.
pub struct BrailleCanvas {
    canvas_w: f64,
    canvas_h: f64,
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
    background: Rgb,
    fill: Rgb,
    stroke: Rgb,
    line_width: f64,
}

impl BrailleCanvas {
    pub fn new(canvas_w: f64, canvas_h: f64) -> Self {
        Self {
            canvas_w,
            canvas_h,
            cols: 0,
            rows: 0,
            cells: Vec::new(),
            background: Rgb::BLACK,
            fill: Rgb::BLACK,
            stroke: Rgb::WHITE,
            line_width: 1.0,
        }
    }

    /// Match the terminal area. Contents are dropped when the size changes.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        if cols == self.cols && rows == self.rows {
            return;
        }
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![Cell::default(); cols * rows];
    }

    fn dots_w(&self) -> i32 {
        (self.cols * 2) as i32
    }

    fn dots_h(&self) -> i32 {
        (self.rows * 4) as i32
    }

    fn scale(&self) -> (f64, f64) {
        (
            self.dots_w() as f64 / self.canvas_w,
            self.dots_h() as f64 / self.canvas_h,
        )
    }

    fn to_dot(&self, p: Point) -> (i32, i32) {
        let (sx, sy) = self.scale();
        ((p.x * sx).floor() as i32, (p.y * sy).floor() as i32)
    }

    fn braille_bit(sub_x: usize, sub_y: usize) -> u8 {
        match (sub_x, sub_y) {
            (0, 0) => 0x01,
            (0, 1) => 0x02,
            (0, 2) => 0x04,
            (0, 3) => 0x40,
            (1, 0) => 0x08,
            (1, 1) => 0x10,
            (1, 2) => 0x20,
            (1, 3) => 0x80,
            _ => 0,
        }
    }

    fn set_dot(&mut self, bx: i32, by: i32, color: Rgb) {
        if bx < 0 || by < 0 || bx >= self.dots_w() || by >= self.dots_h() {
            return;
        }
        let (bx, by) = (bx as usize, by as usize);
        let cell = &mut self.cells[(by / 4) * self.cols + bx / 2];
        cell.bits |= Self::braille_bit(bx % 2, by % 4);
        cell.fg = Some(color);
    }

    /// Square brush `size` dots wide centred on the dot.
    fn stamp(&mut self, bx: i32, by: i32, size: i32, color: Rgb) {
        let lo = -(size - 1) / 2;
        for dy in lo..lo + size {
            for dx in lo..lo + size {
                self.set_dot(bx + dx, by + dy, color);
            }
        }
    }

    fn line_cells(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
        let mut cells = Vec::new();
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let mut cx = x0;
        let mut cy = y0;
        loop {
            cells.push((cx, cy));
            if cx == x1 && cy == y1 { break; }
            let e2 = 2 * err;
            if e2 >= dy { err += dy; cx += sx; }
            if e2 <= dx { err += dx; cy += sy; }
        }
        cells
    }

    fn brush_size(&self) -> i32 {
        let (sx, sy) = self.scale();
        let dots = self.line_width * (sx + sy) / 2.0;
        dots.round().max(1.0) as i32
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let bg = Color::from(self.background);
        self.cells
            .chunks(self.cols.max(1))
            .take(self.rows)
            .map(|row| {
                let spans: Vec<Span<'static>> = row
                    .iter()
                    .map(|cell| {
                        let ch = char::from_u32(0x2800 + cell.bits as u32).unwrap_or(' ');
                        let mut style = Style::default().bg(bg);
                        if let Some(fg) = cell.fg {
                            style = style.fg(fg.into());
                        }
                        Span::styled(String::from(ch), style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

impl Surface for BrailleCanvas {
    fn set_fill_color(&mut self, color: Rgb) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Rgb) {
        self.stroke = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        // A fill over the whole canvas is a clear.
        if x <= 0.0 && y <= 0.0 && x + w >= self.canvas_w && y + h >= self.canvas_h {
            self.background = self.fill;
            self.cells.iter_mut().for_each(|c| *c = Cell::default());
            return;
        }
        let (x0, y0) = self.to_dot(Point::new(x, y));
        let (x1, y1) = self.to_dot(Point::new(x + w, y + h));
        let color = self.fill;
        // Always light at least one dot so tiny markers stay visible.
        for by in y0..=y1.max(y0 + 1) - 1 {
            for bx in x0..=x1.max(x0 + 1) - 1 {
                self.set_dot(bx, by, color);
            }
        }
    }

    fn fill_path(&mut self, points: &[Point]) {
        if points.len() < 3 {
            return;
        }
        let (sx, sy) = self.scale();
        let pts: Vec<(f64, f64)> = points.iter().map(|p| (p.x * sx, p.y * sy)).collect();
        let min_y = pts.iter().map(|p| p.1).fold(f64::INFINITY, f64::min).floor().max(0.0) as i32;
        let max_y = pts.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max).ceil() as i32;
        let color = self.fill;
        for by in min_y..=max_y.min(self.dots_h() - 1) {
            let yc = by as f64 + 0.5;
            let mut xs: Vec<f64> = Vec::new();
            for i in 0..pts.len() {
                let (ax, ay) = pts[i];
                let (bx, bby) = pts[(i + 1) % pts.len()];
                if (ay <= yc) != (bby <= yc) {
                    xs.push(ax + (yc - ay) / (bby - ay) * (bx - ax));
                }
            }
            xs.sort_by(|a, b| a.total_cmp(b));
            for span in xs.chunks_exact(2) {
                let start = (span[0] - 0.5).ceil() as i32;
                let end = (span[1] - 0.5).floor() as i32;
                for bx in start..=end {
                    self.set_dot(bx, by, color);
                }
            }
        }
    }

    fn stroke_path(&mut self, points: &[Point]) {
        if points.len() < 2 {
            return;
        }
        let dots: Vec<(i32, i32)> = points.iter().map(|&p| self.to_dot(p)).collect();
        let size = self.brush_size();
        let color = self.stroke;
        for i in 0..dots.len() {
            let (x0, y0) = dots[i];
            let (x1, y1) = dots[(i + 1) % dots.len()];
            for (px, py) in Self::line_cells(x0, y0, x1, y1) {
                self.stamp(px, py, size, color);
            }
        }
    }
}
