use std::fmt::{Display, Debug, Formatter, Result};


/// Error set for arguments that cannot produce a well defined simulation,
/// checked up front before any stepping occurs
pub enum SimulationError {
    /// Timestep must be positive and finite
    NonPositiveTimeStep,
    /// Total duration must be positive and finite
    NonPositiveDuration,
    /// Injected current trace must cover every simulation step
    CurrentTraceTooShort,
}

impl Display for SimulationError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let err_msg = match self {
            SimulationError::NonPositiveTimeStep => "Timestep must be a positive value",
            SimulationError::NonPositiveDuration => "Duration must be a positive value",
            SimulationError::CurrentTraceTooShort => "Current trace must be at least as long as the number of simulation steps",
        };

        write!(f, "{}", err_msg)
    }
}

impl Debug for SimulationError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}
