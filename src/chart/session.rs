use crate::chart::color::Color;
use crate::chart::renderer::{ChartRenderer, RenderConfig};
use crate::chart::surface::DrawSurface;
use crate::simulation::gbm::{PathModel, SimulationResultSet};
use crate::simulation::params::SimulationParameters;
use crate::utils::errors::Result;

/// Caller-driven simulate-then-draw loop.
///
/// Holds the current parameters, the selected line color and the latest
/// result set. [`run`](ChartSession::run) regenerates the paths;
/// [`draw`](ChartSession::draw) renders whatever is current, which before the
/// first run is the placeholder state. There is no notification plumbing:
/// the caller decides when to rerun and when to redraw.
pub struct ChartSession<M: PathModel> {
    model: M,
    params: SimulationParameters,
    line_color: Color,
    results: SimulationResultSet,
    renderer: ChartRenderer,
}

impl<M: PathModel> ChartSession<M> {
    pub fn new(model: M, params: SimulationParameters) -> Self {
        Self {
            model,
            params,
            line_color: Color::BLUE,
            results: SimulationResultSet::new(),
            renderer: ChartRenderer::new(),
        }
    }

    pub fn set_line_color(&mut self, color: Color) {
        self.line_color = color;
    }

    /// Replace the parameters. The previous result set stays on screen until
    /// the next [`run`](ChartSession::run).
    pub fn set_params(&mut self, params: SimulationParameters) {
        self.params = params;
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn results(&self) -> &SimulationResultSet {
        &self.results
    }

    /// Validate the current parameters and regenerate the result set.
    /// On error the previous result set is left untouched.
    pub fn run(&mut self) -> Result<()> {
        self.params.validate()?;
        self.results = self.model.generate_many(&self.params)?;
        Ok(())
    }

    /// Render the current result set onto a surface of the given size.
    pub fn draw(&self, width: f32, height: f32, surface: &mut dyn DrawSurface) {
        let config = RenderConfig::new(self.line_color, width, height);
        self.renderer.render(&self.results, &config, surface);
    }
}
