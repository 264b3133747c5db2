use crate::chart::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

/// Axis-aligned rectangle in surface coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// The drawing capability the renderer needs from a backend.
///
/// Backends own all pixel- or markup-level concerns; the renderer only issues
/// these calls. State setters follow the usual immediate-mode convention: a
/// setting applies to every subsequent primitive until changed.
pub trait DrawSurface {
    fn fill_rect(&mut self, rect: Rect);
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);
    fn draw_polyline(&mut self, points: &[(f32, f32)]);
    fn draw_text(&mut self, text: &str, rect: Rect, halign: HorizontalAlign, valign: VerticalAlign);

    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_stroke_width(&mut self, width: f32);
    fn set_font_color(&mut self, color: Color);
    fn set_font_size(&mut self, size: f32);
}

/// One recorded drawing call, with the state it was issued under.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Color,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        color: Color,
        width: f32,
    },
    Polyline {
        points: Vec<(f32, f32)>,
        color: Color,
        width: f32,
    },
    Text {
        text: String,
        rect: Rect,
        halign: HorizontalAlign,
        valign: VerticalAlign,
        color: Color,
        size: f32,
    },
}

/// Surface that records every call instead of rasterizing, for inspection in
/// tests and debugging.
#[derive(Debug)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    fill_color: Color,
    stroke_color: Color,
    stroke_width: f32,
    font_color: Color,
    font_size: f32,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            fill_color: Color::BLACK,
            stroke_color: Color::BLACK,
            stroke_width: 1.0,
            font_color: Color::BLACK,
            font_size: 12.0,
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn polylines(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Polyline { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::FillRect {
            rect,
            color: self.fill_color,
        });
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.ops.push(DrawOp::Line {
            from: (x1, y1),
            to: (x2, y2),
            color: self.stroke_color,
            width: self.stroke_width,
        });
    }

    fn draw_polyline(&mut self, points: &[(f32, f32)]) {
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
            color: self.stroke_color,
            width: self.stroke_width,
        });
    }

    fn draw_text(
        &mut self,
        text: &str,
        rect: Rect,
        halign: HorizontalAlign,
        valign: VerticalAlign,
    ) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            rect,
            halign,
            valign,
            color: self.font_color,
            size: self.font_size,
        });
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
    }

    fn set_font_color(&mut self, color: Color) {
        self.font_color = color;
    }

    fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }
}
