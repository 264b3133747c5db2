use crate::chart::color::Color;
use crate::chart::surface::{DrawSurface, HorizontalAlign, Rect, VerticalAlign};

/// [`DrawSurface`] backend that emits an SVG document.
///
/// Keeps the crate renderable without any UI framework: draw through it, then
/// take the markup with [`finish`](SvgSurface::finish) and write it wherever.
#[derive(Debug)]
pub struct SvgSurface {
    width: f32,
    height: f32,
    body: String,
    fill_color: Color,
    stroke_color: Color,
    stroke_width: f32,
    font_color: Color,
    font_size: f32,
}

impl SvgSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
            fill_color: Color::BLACK,
            stroke_color: Color::BLACK,
            stroke_width: 1.0,
            font_color: Color::BLACK,
            font_size: 12.0,
        }
    }

    /// Close the document and return the markup.
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n{}</svg>\n",
            self.width, self.height, self.width, self.height, self.body
        )
    }

    fn escape(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    fn opacity_attr(kind: &str, color: Color) -> String {
        if color.a == u8::MAX {
            String::new()
        } else {
            format!(" {}-opacity=\"{:.3}\"", kind, color.a as f32 / 255.0)
        }
    }
}

impl DrawSurface for SvgSurface {
    fn fill_rect(&mut self, rect: Rect) {
        self.body.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"{}/>\n",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            self.fill_color.to_hex(),
            Self::opacity_attr("fill", self.fill_color),
        ));
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.body.push_str(&format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"{}/>\n",
            x1,
            y1,
            x2,
            y2,
            self.stroke_color.to_hex(),
            self.stroke_width,
            Self::opacity_attr("stroke", self.stroke_color),
        ));
    }

    fn draw_polyline(&mut self, points: &[(f32, f32)]) {
        let coords: Vec<String> = points.iter().map(|(x, y)| format!("{},{}", x, y)).collect();
        self.body.push_str(&format!(
            "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"{}/>\n",
            coords.join(" "),
            self.stroke_color.to_hex(),
            self.stroke_width,
            Self::opacity_attr("stroke", self.stroke_color),
        ));
    }

    fn draw_text(
        &mut self,
        text: &str,
        rect: Rect,
        halign: HorizontalAlign,
        valign: VerticalAlign,
    ) {
        let (x, anchor) = match halign {
            HorizontalAlign::Left => (rect.x, "start"),
            HorizontalAlign::Center => (rect.x + rect.width / 2.0, "middle"),
            HorizontalAlign::Right => (rect.x + rect.width, "end"),
        };
        // Approximate baseline placement from the font size.
        let y = match valign {
            VerticalAlign::Top => rect.y + self.font_size,
            VerticalAlign::Center => rect.y + rect.height / 2.0 + self.font_size * 0.35,
            VerticalAlign::Bottom => rect.y + rect.height,
        };
        self.body.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" text-anchor=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>\n",
            x,
            y,
            anchor,
            self.font_size,
            self.font_color.to_hex(),
            Self::escape(text),
        ));
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
