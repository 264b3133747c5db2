use crate::simulation::gbm::PricePath;

/// Number of axis divisions; gridlines sit at indices `0..=GRID_DIVISIONS`.
pub const GRID_DIVISIONS: usize = 5;

/// Mapping from (day index, price) to surface coordinates, recomputed from
/// the current result set and surface size on every draw.
///
/// `min_value` and `max_value` are global across every value of every path,
/// so all paths share one vertical scale and stay visually comparable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    pub min_value: f64,
    pub max_value: f64,
    pub x_step: f32,
    pub y_scale: f32,
    width: f32,
    height: f32,
}

impl AxisScale {
    /// Compute the shared scale for a result set. Returns `None` when the set
    /// is empty or every path is empty, which is the renderer's signal to show
    /// the placeholder instead.
    pub fn from_paths(paths: &[PricePath], width: f32, height: f32) -> Option<Self> {
        let mut values = paths.iter().flatten().copied();
        let first = values.next()?;
        let (min_value, max_value) = values.fold((first, first), |(lo, hi), v| {
            (f64::min(lo, v), f64::max(hi, v))
        });

        // Equal-length precondition: the first path's length drives the
        // horizontal step for the whole set.
        let path_len = paths.iter().map(Vec::len).find(|len| *len > 0)?;
        let x_step = width / path_len as f32;

        // Flat data would divide by zero here; fall back to a unit scale and
        // let the paths draw as a flat line.
        let range = max_value - min_value;
        let y_scale = if range > 0.0 {
            height / range as f32
        } else {
            1.0
        };

        Some(Self {
            min_value,
            max_value,
            x_step,
            y_scale,
            width,
            height,
        })
    }

    /// Surface coordinates for a value at a day index. The minimum maps to the
    /// bottom edge and the maximum to the top (surface y grows downward).
    pub fn map(&self, day: usize, value: f64) -> (f32, f32) {
        let x = day as f32 * self.x_step;
        let y = self.height - (value - self.min_value) as f32 * self.y_scale;
        (x, y)
    }

    /// Vertical position and price value of horizontal gridline `i`
    /// (`0` = bottom edge, `GRID_DIVISIONS` = top edge).
    pub fn y_gridline(&self, i: usize) -> (f32, f64) {
        let y = self.height - self.height * i as f32 / GRID_DIVISIONS as f32;
        let value =
            self.min_value + (self.max_value - self.min_value) * i as f64 / GRID_DIVISIONS as f64;
        (y, value)
    }

    /// Horizontal position and day label of vertical gridline `i`.
    pub fn x_gridline(&self, i: usize, total_days: usize) -> (f32, usize) {
        let x = self.width * i as f32 / GRID_DIVISIONS as f32;
        let day = total_days * i / GRID_DIVISIONS;
        (x, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_path_scale_on_a_square_surface() {
        let paths = vec![vec![1.0, 2.0, 3.0], vec![3.0, 2.0, 1.0]];
        let scale = AxisScale::from_paths(&paths, 100.0, 100.0).unwrap();

        assert_eq!(scale.min_value, 1.0);
        assert_eq!(scale.max_value, 3.0);
        assert!((scale.x_step - 100.0 / 3.0).abs() < 1e-6);
        assert_eq!(scale.y_scale, 50.0);

        // Max lands on the top edge, min on the bottom edge.
        assert_eq!(scale.map(0, 3.0), (0.0, 0.0));
        assert_eq!(scale.map(0, 1.0), (0.0, 100.0));
        assert_eq!(scale.map(1, 2.0).1, 50.0);
    }

    #[test]
    fn empty_set_has_no_scale() {
        assert!(AxisScale::from_paths(&[], 100.0, 100.0).is_none());
        let all_empty: Vec<Vec<f64>> = vec![vec![], vec![]];
        assert!(AxisScale::from_paths(&all_empty, 100.0, 100.0).is_none());
    }

    #[test]
    fn flat_data_falls_back_to_unit_scale() {
        let paths = vec![vec![100.0; 5]];
        let scale = AxisScale::from_paths(&paths, 200.0, 100.0).unwrap();
        assert_eq!(scale.y_scale, 1.0);
        let (_, y) = scale.map(2, 100.0);
        assert!(y.is_finite());
        assert_eq!(y, 100.0);
    }

    #[test]
    fn y_gridlines_span_bottom_to_top() {
        let paths = vec![vec![10.0, 20.0]];
        let scale = AxisScale::from_paths(&paths, 100.0, 80.0).unwrap();

        let (y0, v0) = scale.y_gridline(0);
        assert_eq!((y0, v0), (80.0, 10.0));
        let (y5, v5) = scale.y_gridline(GRID_DIVISIONS);
        assert_eq!((y5, v5), (0.0, 20.0));
        let (_, v2) = scale.y_gridline(2);
        assert_eq!(v2, 14.0);
    }

    #[test]
    fn x_gridline_days_use_integer_steps() {
        let paths = vec![vec![1.0; 252]];
        let scale = AxisScale::from_paths(&paths, 500.0, 100.0).unwrap();

        assert_eq!(scale.x_gridline(0, 252), (0.0, 0));
        assert_eq!(scale.x_gridline(5, 252), (500.0, 252));
        // 252 * 2 / 5 truncates.
        assert_eq!(scale.x_gridline(2, 252).1, 100);
    }
}
