use serde::{Deserialize, Serialize};

use crate::chart::color::Color;
use crate::chart::scale::{AxisScale, GRID_DIVISIONS};
use crate::chart::surface::{DrawSurface, HorizontalAlign, Rect, VerticalAlign};
use crate::simulation::gbm::SimulationResultSet;

/// Per-render inputs: the stroke color for all paths and the surface size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub line_color: Color,
    pub width: f32,
    pub height: f32,
}

impl RenderConfig {
    pub fn new(line_color: Color, width: f32, height: f32) -> Self {
        Self {
            line_color,
            width,
            height,
        }
    }
}

const BACKGROUND_COLOR: Color = Color::WHITE;
const AXIS_COLOR: Color = Color::BLACK;
const PLACEHOLDER_COLOR: Color = Color::GRAY;
const FONT_SIZE: f32 = 10.0;
const MARGIN: f32 = 5.0;
const PATH_STROKE_WIDTH: f32 = 2.0;
const PLACEHOLDER_TEXT: &str = "Run a simulation";

/// Draws a result set as overlaid polylines over labeled, auto-scaled axes.
///
/// Pure apart from the calls it issues on the surface; never mutates the
/// result set and never fails on empty or flat data.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartRenderer;

impl ChartRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        results: &SimulationResultSet,
        config: &RenderConfig,
        surface: &mut dyn DrawSurface,
    ) {
        let bounds = Rect::new(0.0, 0.0, config.width, config.height);
        surface.set_fill_color(BACKGROUND_COLOR);
        surface.fill_rect(bounds);

        // Must short-circuit before any min/max work.
        let Some(scale) = AxisScale::from_paths(results, config.width, config.height) else {
            surface.set_font_color(PLACEHOLDER_COLOR);
            surface.draw_text(
                PLACEHOLDER_TEXT,
                bounds,
                HorizontalAlign::Center,
                VerticalAlign::Center,
            );
            return;
        };

        surface.set_stroke_color(AXIS_COLOR);
        surface.set_stroke_width(1.0);
        surface.set_font_color(AXIS_COLOR);
        surface.set_font_size(FONT_SIZE);

        self.draw_y_axis(&scale, surface);
        let total_days = results.first().map(Vec::len).unwrap_or(0);
        self.draw_x_axis(&scale, total_days, config, surface);

        // Axis frame: bottom border, then left border.
        surface.draw_line(0.0, config.height, config.width, config.height);
        surface.draw_line(0.0, 0.0, 0.0, config.height);

        surface.set_stroke_color(config.line_color);
        surface.set_stroke_width(PATH_STROKE_WIDTH);
        for path in results {
            let points: Vec<(f32, f32)> = path
                .iter()
                .enumerate()
                .map(|(day, value)| scale.map(day, *value))
                .collect();
            surface.draw_polyline(&points);
        }
    }

    fn draw_y_axis(&self, scale: &AxisScale, surface: &mut dyn DrawSurface) {
        for i in 0..=GRID_DIVISIONS {
            let (y, price) = scale.y_gridline(i);
            surface.draw_text(
                &format!("{:.2}", price),
                Rect::new(MARGIN, y - 20.0, 50.0, 20.0),
                HorizontalAlign::Left,
                VerticalAlign::Center,
            );
            surface.draw_line(0.0, y, MARGIN, y);
        }
    }

    fn draw_x_axis(
        &self,
        scale: &AxisScale,
        total_days: usize,
        config: &RenderConfig,
        surface: &mut dyn DrawSurface,
    ) {
        for i in 0..=GRID_DIVISIONS {
            let (x, day) = scale.x_gridline(i, total_days);
            surface.draw_text(
                &day.to_string(),
                Rect::new(x - 25.0, config.height, 50.0, MARGIN * 2.0),
                HorizontalAlign::Center,
                VerticalAlign::Top,
            );
            surface.draw_line(x, config.height, x, config.height - MARGIN);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::surface::{DrawOp, RecordingSurface};

    fn config() -> RenderConfig {
        RenderConfig::new(Color::BLUE, 100.0, 100.0)
    }

    fn render(results: &SimulationResultSet) -> RecordingSurface {
        let mut surface = RecordingSurface::new();
        ChartRenderer::new().render(results, &config(), &mut surface);
        surface
    }

    #[test]
    fn empty_set_draws_the_placeholder() {
        let surface = render(&vec![]);
        assert!(!surface.ops().is_empty());
        assert!(surface.texts().any(|t| t == PLACEHOLDER_TEXT));
        assert_eq!(surface.polylines().count(), 0);
    }

    #[test]
    fn all_empty_paths_draw_the_placeholder() {
        let surface = render(&vec![vec![], vec![]]);
        assert!(surface.texts().any(|t| t == PLACEHOLDER_TEXT));
    }

    #[test]
    fn background_is_filled_first() {
        let surface = render(&vec![vec![1.0, 2.0, 3.0]]);
        match &surface.ops()[0] {
            DrawOp::FillRect { rect, color } => {
                assert_eq!(*color, Color::WHITE);
                assert_eq!(*rect, Rect::new(0.0, 0.0, 100.0, 100.0));
            }
            op => panic!("expected background fill, got {:?}", op),
        }
    }

    #[test]
    fn one_polyline_per_path_in_the_configured_color() {
        let results = vec![vec![1.0, 2.0, 3.0], vec![3.0, 2.0, 1.0], vec![2.0, 2.0, 2.0]];
        let surface = render(&results);

        let polylines: Vec<_> = surface.polylines().collect();
        assert_eq!(polylines.len(), 3);
        for op in polylines {
            match op {
                DrawOp::Polyline { color, width, points } => {
                    assert_eq!(*color, Color::BLUE);
                    assert_eq!(*width, PATH_STROKE_WIDTH);
                    assert_eq!(points.len(), 3);
                }
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn shared_scale_maps_extremes_to_the_edges() {
        let results = vec![vec![1.0, 2.0, 3.0], vec![3.0, 2.0, 1.0]];
        let surface = render(&results);

        let polylines: Vec<_> = surface.polylines().collect();
        let (first, second) = match (polylines[0], polylines[1]) {
            (DrawOp::Polyline { points: a, .. }, DrawOp::Polyline { points: b, .. }) => (a, b),
            _ => unreachable!(),
        };
        // Path 1 starts at the global min (bottom edge), path 2 at the global
        // max (top edge).
        assert_eq!(first[0], (0.0, 100.0));
        assert_eq!(second[0], (0.0, 0.0));
    }

    #[test]
    fn six_labels_per_axis() {
        let surface = render(&vec![vec![1.0, 2.0, 3.0, 4.0]]);
        assert_eq!(surface.texts().count(), 12);
        // Highest price label sits on the gridline count boundary.
        assert!(surface.texts().any(|t| t == "4.00"));
        assert!(surface.texts().any(|t| t == "1.00"));
        // Day labels are integer, last one is the full day count.
        assert!(surface.texts().any(|t| t == "0"));
        assert!(surface.texts().any(|t| t == "4"));
    }

    #[test]
    fn frame_lines_are_drawn() {
        let surface = render(&vec![vec![5.0, 6.0]]);
        let lines: Vec<_> = surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect();
        assert!(lines.contains(&((0.0, 100.0), (100.0, 100.0))), "bottom border");
        assert!(lines.contains(&((0.0, 0.0), (0.0, 100.0))), "left border");
    }

    #[test]
    fn flat_data_renders_without_panicking() {
        let results = vec![vec![100.0; 10], vec![100.0; 10]];
        let surface = render(&results);
        assert_eq!(surface.polylines().count(), 2);
        for op in surface.polylines() {
            if let DrawOp::Polyline { points, .. } = op {
                assert!(points.iter().all(|(_, y)| y.is_finite()));
                // Unit fallback scale puts the flat line on the bottom edge.
                assert!(points.iter().all(|(_, y)| *y == 100.0));
            }
        }
    }

    #[test]
    fn degenerate_labels_repeat_the_flat_price() {
        let surface = render(&vec![vec![42.0; 4]]);
        assert_eq!(surface.texts().filter(|t| *t == "42.00").count(), 6);
    }
}
