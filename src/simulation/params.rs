use serde::{Deserialize, Serialize};

use crate::utils::errors::{ChartError, Result};

/// Largest number of days the input boundary accepts.
pub const MAX_NUM_DAYS: usize = 365;

/// Scalar inputs for one simulation run. Immutable once handed to a model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Volatility of the daily log-return (sigma, >= 0).
    pub volatility: f64,
    /// Expected daily log-return (mu).
    pub mean_return: f64,
    /// Price at day zero.
    pub initial_price: f64,
    /// Number of days per path, including day zero.
    pub num_days: usize,
    /// Number of independent paths per run.
    pub num_simulations: usize,
}

impl SimulationParameters {
    pub fn new(
        volatility: f64,
        mean_return: f64,
        initial_price: f64,
        num_days: usize,
        num_simulations: usize,
    ) -> Self {
        Self {
            volatility,
            mean_return,
            initial_price,
            num_days,
            num_simulations,
        }
    }

    /// Fail fast on parameters that cannot yield a well-formed result set.
    pub fn validate(&self) -> Result<()> {
        if self.num_days < 1 {
            return Err(ChartError::InvalidParameter(
                "num_days must be at least 1".to_string(),
            ));
        }
        if self.num_simulations < 1 {
            return Err(ChartError::InvalidParameter(
                "num_simulations must be at least 1".to_string(),
            ));
        }
        if self.volatility < 0.0 {
            return Err(ChartError::InvalidParameter(
                "volatility must be non-negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Deserialize a parameter set from a JSON request and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let params: SimulationParameters = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }
}

/// Parse the day-count text field of the input form.
///
/// Accepts integers in `1..=365`; everything else yields the user-facing
/// message the form displays next to the field.
pub fn parse_num_days(text: &str) -> Result<usize> {
    match text.trim().parse::<usize>() {
        Ok(days) if (1..=MAX_NUM_DAYS).contains(&days) => Ok(days),
        Ok(_) => Err(ChartError::InvalidParameter(
            "The value must be between 1 and 365.".to_string(),
        )),
        Err(_) => Err(ChartError::InvalidParameter(
            "Invalid input. Please enter a number.".to_string(),
        )),
    }
}
