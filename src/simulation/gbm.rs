use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::*;

use crate::simulation::params::SimulationParameters;
use crate::simulation::random::{standard_normal, UniformSource};
use crate::utils::errors::Result;

/// One simulated price series, `num_days` long, day zero at the initial price.
pub type PricePath = Vec<f64>;

/// All paths of one simulation run. Equal length, shared parameters.
pub type SimulationResultSet = Vec<PricePath>;

/// Trait for models capable of generating independent price paths.
pub trait PathModel: Send + Sync {
    /// Generate the path at the given index of a run. Indices only matter for
    /// seeded models, where each index maps to its own random stream.
    fn generate_indexed(
        &self,
        params: &SimulationParameters,
        path_index: usize,
    ) -> Result<PricePath>;

    /// Generate a single path.
    fn generate(&self, params: &SimulationParameters) -> Result<PricePath> {
        self.generate_indexed(params, 0)
    }

    /// Generate `params.num_simulations` independent paths.
    fn generate_many(&self, params: &SimulationParameters) -> Result<SimulationResultSet> {
        params.validate()?;
        (0..params.num_simulations)
            .map(|i| self.generate_indexed(params, i))
            .collect()
    }

    /// Parallel variant of [`generate_many`](PathModel::generate_many).
    /// Path generation is stateless per index, so this is a pure throughput
    /// optimization; a seeded model yields the same result set either way.
    fn par_generate_many(&self, params: &SimulationParameters) -> Result<SimulationResultSet> {
        params.validate()?;
        (0..params.num_simulations)
            .into_par_iter()
            .map(|i| self.generate_indexed(params, i))
            .collect()
    }
}

/// Discrete-time Geometric Brownian Motion generator.
///
/// Day-over-day log-returns are `mu + sigma * z` with `z` a Box-Muller
/// standard-normal sample, compounded through `exp()` so every price stays
/// strictly positive whenever the initial price is.
#[derive(Debug, Clone, Default)]
pub struct GbmModel {
    seed: Option<u64>,
}

impl GbmModel {
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Fix the random streams for reproducible runs. Each path index gets its
    /// own stream derived from the seed, so paths stay mutually independent.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng_for_path(&self, path_index: usize) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(path_index as u64)),
            None => StdRng::from_entropy(),
        }
    }

    /// Fill one path from an explicit uniform source.
    pub fn generate_with_source<S: UniformSource + ?Sized>(
        params: &SimulationParameters,
        source: &mut S,
    ) -> Result<PricePath> {
        params.validate()?;
        let mut path = Vec::with_capacity(params.num_days);
        path.push(params.initial_price);
        for i in 1..params.num_days {
            let z = standard_normal(source);
            let daily_return = params.mean_return + params.volatility * z;
            path.push(path[i - 1] * daily_return.exp());
        }
        Ok(path)
    }
}

impl PathModel for GbmModel {
    fn generate_indexed(
        &self,
        params: &SimulationParameters,
        path_index: usize,
    ) -> Result<PricePath> {
        let mut rng = self.rng_for_path(path_index);
        Self::generate_with_source(params, &mut rng)
    }
}
