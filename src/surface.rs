use ratatui::style::Color;

use crate::sim::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
    pub const SLATE_GREY: Rgb = Rgb(112, 128, 144);
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c.0, c.1, c.2)
    }
}

/// Immediate-mode 2D drawing target, in canvas pixel coordinates.
///
/// Paths are always closed. Filling the whole canvas is how a frame is cleared.
pub trait Surface {
    fn set_fill_color(&mut self, color: Rgb);
    fn set_stroke_color(&mut self, color: Rgb);
    fn set_line_width(&mut self, width: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_path(&mut self, points: &[Point]);
    fn stroke_path(&mut self, points: &[Point]);
}

#[cfg(test)]
pub mod recording {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub enum DrawCmd {
        FillColor(Rgb),
        StrokeColor(Rgb),
        LineWidth(f64),
        FillRect(f64, f64, f64, f64),
        FillPath(Vec<Point>),
        StrokePath(Vec<Point>),
    }

    /// Test double that records every call in order.
    #[derive(Default)]
    pub struct RecordingSurface {
        pub cmds: Vec<DrawCmd>,
    }

    impl RecordingSurface {
        pub fn strokes(&self) -> Vec<&Vec<Point>> {
            self.cmds
                .iter()
                .filter_map(|c| match c {
                    DrawCmd::StrokePath(p) => Some(p),
                    _ => None,
                })
                .collect()
        }

        pub fn fills(&self) -> Vec<&Vec<Point>> {
            self.cmds
                .iter()
                .filter_map(|c| match c {
                    DrawCmd::FillPath(p) => Some(p),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn set_fill_color(&mut self, color: Rgb) {
            self.cmds.push(DrawCmd::FillColor(color));
        }
        fn set_stroke_color(&mut self, color: Rgb) {
            self.cmds.push(DrawCmd::StrokeColor(color));
        }
        fn set_line_width(&mut self, width: f64) {
            self.cmds.push(DrawCmd::LineWidth(width));
        }
        fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
            self.cmds.push(DrawCmd::FillRect(x, y, w, h));
        }
        fn fill_path(&mut self, points: &[Point]) {
            self.cmds.push(DrawCmd::FillPath(points.to_vec()));
        }
        fn stroke_path(&mut self, points: &[Point]) {
            self.cmds.push(DrawCmd::StrokePath(points.to_vec()));
        }
    }
}
