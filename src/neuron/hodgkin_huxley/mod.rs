//! A single compartment Hodgkin Huxley neuron with a slow potassium
//! adaptation current, integrated with an exponential Euler scheme and driven
//! by an injected current trace plus seeded Gaussian voltage noise.

use crate::distribution::NoiseStream;
use crate::error::SimulationError;
use super::kinetics;


/// Tunable channel parameters, a snapshot of one 8 dimensional sample from
/// whatever fitting pipeline is driving the simulator, kept separate from the
/// fixed physical constants in [`PhysicalConstants`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeuronParameters {
    /// Maximum sodium conductance (mS/cm^2)
    pub gbar_na: f64,
    /// Maximum potassium conductance (mS/cm^2)
    pub gbar_k: f64,
    /// Maximum conductance of the slow adaptive potassium current (mS/cm^2)
    pub gbar_m: f64,
    /// Leak conductance (mS/cm^2)
    pub g_leak: f64,
    /// Scale of the adaptation time constant (ms)
    pub tau_max: f64,
    /// Threshold voltage shifting the dynamics of every fast channel (mV)
    pub v_t: f64,
    /// Leak reversal potential (mV)
    pub e_leak: f64,
    /// Global scaling of the fast gating time constants, values above `1.`
    /// slow the gate dynamics and values below `1.` speed them up
    pub rate_to_steady_state_factor: f64,
}

impl Default for NeuronParameters {
    fn default() -> Self {
        NeuronParameters {
            gbar_na: 50.,
            gbar_k: 50.,
            gbar_m: 0.,
            g_leak: 0.1,
            tau_max: 100.,
            v_t: -60.,
            e_leak: -65.,
            rate_to_steady_state_factor: 1.,
        }
    }
}

impl NeuronParameters {
    /// Builds parameters from the order significant 8 element vector used at
    /// the fitting boundary: `[gbar_na, gbar_k, gbar_m, g_leak, tau_max, v_t,
    /// e_leak, rate_to_steady_state_factor]`
    pub fn from_vector(values: &[f64; 8]) -> Self {
        NeuronParameters {
            gbar_na: values[0],
            gbar_k: values[1],
            gbar_m: values[2],
            g_leak: values[3],
            tau_max: values[4],
            v_t: values[5],
            e_leak: values[6],
            rate_to_steady_state_factor: values[7],
        }
    }
}

/// Fixed physical constants of the preparation, not subject to fitting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Scale of the Gaussian voltage noise (uA/cm^2), set to `0.` for a
    /// fully deterministic simulation
    pub noise_factor: f64,
    /// Membrane capacitance (uF/cm^2)
    pub membrane_capacitance: f64,
    /// Sodium reversal potential (mV)
    pub e_na: f64,
    /// Potassium reversal potential (mV), shared by the fast and adaptive
    /// potassium currents
    pub e_k: f64,
    /// Q10 temperature coefficient of the gating kinetics
    pub q10: f64,
    /// Temperature the channel kinetics were characterized at (degrees C)
    pub reference_temperature: f64,
    /// Temperature the experiment was performed at (degrees C)
    pub experiment_temperature: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        PhysicalConstants {
            noise_factor: 0.1,
            membrane_capacitance: 1.,
            e_na: 53.,
            e_k: -90.,
            q10: 3.,
            reference_temperature: 36.,
            experiment_temperature: 34.,
        }
    }
}

impl PhysicalConstants {
    /// Multiplicative correction applied to every gating time constant to
    /// account for the experiment running colder than the temperature the
    /// kinetics were characterized at
    pub fn temperature_adjustment(&self) -> f64 {
        let temperature_difference = self.experiment_temperature - self.reference_temperature;
        self.q10.powf(temperature_difference / 10.)
    }
}

/// A gating variable advanced by integrating the locally linearized gate
/// equation exactly over one step
#[derive(Debug, Clone, Copy)]
pub struct GatingVariable {
    /// Fraction of open gates, within `[0, 1]` for any physical trajectory
    /// though never clamped
    pub state: f64,
}

impl GatingVariable {
    /// Relaxes the state toward `steady_state` with time constant `tau` over
    /// a step of length `scaled_dt`
    pub fn exponential_update(&mut self, steady_state: f64, tau: f64, scaled_dt: f64) {
        self.state = steady_state + (self.state - steady_state) * (-scaled_dt / tau).exp();
    }
}

/// A Hodgkin Huxley neuron with fast sodium and potassium channels, a leak
/// channel, and a slow non inactivating potassium adaptation channel
#[derive(Debug, Clone)]
pub struct HodgkinHuxleyNeuron {
    /// Membrane potential (mV)
    pub current_voltage: f64,
    /// Timestep (ms)
    pub dt: f64,
    /// Sodium activation gate
    pub m: GatingVariable,
    /// Sodium inactivation gate
    pub h: GatingVariable,
    /// Potassium activation gate
    pub n: GatingVariable,
    /// Slow potassium adaptation gate
    pub p: GatingVariable,
    /// Tunable channel parameters
    pub parameters: NeuronParameters,
    /// Fixed physical constants
    pub constants: PhysicalConstants,
    /// Gating time constant correction derived once from the constants
    pub temperature_adjustment: f64,
}

impl HodgkinHuxleyNeuron {
    /// Creates a neuron at membrane potential `v0` with every gating variable
    /// at its steady state for `v0`, using the default physical constants
    pub fn new(parameters: NeuronParameters, v0: f64, dt: f64) -> Self {
        Self::with_constants(parameters, PhysicalConstants::default(), v0, dt)
    }

    /// Creates a neuron at membrane potential `v0` with explicit physical
    /// constants, every gating variable starts at its steady state for `v0`
    pub fn with_constants(
        parameters: NeuronParameters,
        constants: PhysicalConstants,
        v0: f64,
        dt: f64,
    ) -> Self {
        HodgkinHuxleyNeuron {
            current_voltage: v0,
            dt,
            m: GatingVariable { state: kinetics::m_inf(v0, parameters.v_t) },
            h: GatingVariable { state: kinetics::h_inf(v0, parameters.v_t) },
            n: GatingVariable { state: kinetics::n_inf(v0, parameters.v_t) },
            p: GatingVariable { state: kinetics::p_inf(v0) },
            temperature_adjustment: constants.temperature_adjustment(),
            parameters,
            constants,
        }
    }

    /// Advances voltage and gating state by one step given the injected
    /// current (uA/cm^2) and a standard normal noise draw
    ///
    /// The voltage update treats the conductances as frozen at their previous
    /// step values and solves the resulting linear membrane equation exactly,
    /// while the gate updates relax toward their steady states at the freshly
    /// updated voltage. The mixed explicit/semi-implicit ordering is
    /// deliberate and must not be reordered
    pub fn iterate(&mut self, input_current: f64, noise: f64) {
        let parameters = &self.parameters;
        let constants = &self.constants;

        let na_conductance = self.m.state.powi(3) * parameters.gbar_na * self.h.state;
        let k_conductance = self.n.state.powi(4) * parameters.gbar_k;
        let adaptation_conductance = parameters.gbar_m * self.p.state;

        // inverse membrane time constant with conductances frozen at the
        // previous step
        let tau_v_inv = (
            na_conductance
            + k_conductance
            + parameters.g_leak
            + adaptation_conductance
        ) / constants.membrane_capacitance;

        // voltage the membrane would settle to under those conductances,
        // noise enters scaled by 1/sqrt(dt) so its integrated variance is
        // independent of the timestep
        let v_inf = (
            na_conductance * constants.e_na
            + k_conductance * constants.e_k
            + parameters.g_leak * parameters.e_leak
            + adaptation_conductance * constants.e_k
            + input_current
            + constants.noise_factor * noise / self.dt.sqrt()
        ) / (tau_v_inv * constants.membrane_capacitance);

        self.current_voltage = v_inf + (self.current_voltage - v_inf) * (-self.dt * tau_v_inv).exp();

        let v = self.current_voltage;
        let scaled_dt = self.dt * self.temperature_adjustment;
        let rate_factor = parameters.rate_to_steady_state_factor;

        self.m.exponential_update(
            kinetics::m_inf(v, parameters.v_t),
            kinetics::tau_m(v, parameters.v_t, rate_factor),
            scaled_dt,
        );
        self.h.exponential_update(
            kinetics::h_inf(v, parameters.v_t),
            kinetics::tau_h(v, parameters.v_t, rate_factor),
            scaled_dt,
        );
        self.n.exponential_update(
            kinetics::n_inf(v, parameters.v_t),
            kinetics::tau_n(v, parameters.v_t, rate_factor),
            scaled_dt,
        );
        self.p.exponential_update(
            kinetics::p_inf(v),
            kinetics::tau_p(v, parameters.tau_max),
            scaled_dt,
        );
    }
}

fn number_of_steps(dt: f64, tfin: f64) -> Result<usize, SimulationError> {
    if !(dt > 0.) || !dt.is_finite() {
        return Err(SimulationError::NonPositiveTimeStep);
    }
    if !(tfin > 0.) || !tfin.is_finite() {
        return Err(SimulationError::NonPositiveDuration);
    }

    Ok((tfin / dt) as usize)
}

/// Simulates the neuron from `v0` for `floor(tfin / dt)` steps of length `dt`
/// (ms) under the injected current trace (uA/cm^2) and returns the voltage
/// trace (mV), one sample per step with the first sample equal to `v0`
///
/// The noise stream is created fresh from `seed`, so identical arguments
/// reproduce the identical trace. Gating trajectories are internal working
/// state and are not returned
///
/// # Errors
///
/// Returns [`SimulationError::NonPositiveTimeStep`] or
/// [`SimulationError::NonPositiveDuration`] for degenerate step sizes and
/// durations, and [`SimulationError::CurrentTraceTooShort`] if the current
/// trace has fewer samples than the simulation has steps
pub fn simulate(
    parameters: &NeuronParameters,
    seed: u64,
    v0: f64,
    input_current: &[f64],
    dt: f64,
    tfin: f64,
) -> Result<Vec<f64>, SimulationError> {
    simulate_with_constants(
        parameters,
        PhysicalConstants::default(),
        seed,
        v0,
        input_current,
        dt,
        tfin,
    )
}

/// [`simulate`] with explicit physical constants, for preparations with
/// different reversal potentials or temperatures and for noiseless runs
pub fn simulate_with_constants(
    parameters: &NeuronParameters,
    constants: PhysicalConstants,
    seed: u64,
    v0: f64,
    input_current: &[f64],
    dt: f64,
    tfin: f64,
) -> Result<Vec<f64>, SimulationError> {
    let total_steps = number_of_steps(dt, tfin)?;

    if input_current.len() < total_steps {
        return Err(SimulationError::CurrentTraceTooShort);
    }

    let mut voltages: Vec<f64> = Vec::with_capacity(total_steps);
    if total_steps == 0 {
        return Ok(voltages);
    }

    let mut neuron = HodgkinHuxleyNeuron::with_constants(*parameters, constants, v0, dt);
    let mut noise = NoiseStream::new(seed);

    voltages.push(neuron.current_voltage);
    for step in 1..total_steps {
        neuron.iterate(input_current[step - 1], noise.standard_normal());
        voltages.push(neuron.current_voltage);
    }

    Ok(voltages)
}
