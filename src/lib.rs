//! # Hodgkin Huxley Simulation
//!
//! `hodgkin_huxley_simulation` is a package for simulating a conductance based
//! single compartment neuron model (Hodgkin Huxley formalism with a slow
//! potassium adaptation current) given a time varying injected current and a
//! set of biophysical channel parameters. The simulator is written as a forward
//! model for electrophysiology fitting pipelines: callers sample parameter
//! vectors, run the simulator with an explicit noise seed, and compare the
//! returned voltage trace against recorded traces. Voltage and gating dynamics
//! are advanced with an exponential Euler scheme, the exact solution of the
//! locally linearized membrane and gate equations over each step.
//!
//! Each call owns its parameter snapshot and its own seeded noise stream, so
//! simulations with different seeds can run concurrently without interfering
//! with one another and any single simulation can be replayed bit for bit.
//!
//! ## Example Code
//!
//! ### Simulating a neuron at rest
//!
//! ```rust
//! use hodgkin_huxley_simulation::neuron::hodgkin_huxley::{simulate, NeuronParameters};
//!
//! let parameters = NeuronParameters::default();
//! let input_current = vec![0.; 1000];
//!
//! // 50 ms of simulation at a 0.1 ms timestep yields 500 samples
//! let voltages = simulate(&parameters, 42, -65., &input_current, 0.1, 50.)
//!     .expect("Could not run simulation");
//!
//! assert_eq!(voltages.len(), 500);
//! assert_eq!(voltages[0], -65.);
//! ```
//!
//! ### Driving the neuron directly with a current step
//!
//! ```rust
//! use hodgkin_huxley_simulation::distribution::NoiseStream;
//! use hodgkin_huxley_simulation::neuron::hodgkin_huxley::{HodgkinHuxleyNeuron, NeuronParameters};
//!
//! let mut neuron = HodgkinHuxleyNeuron::new(NeuronParameters::default(), -65., 0.1);
//! let mut noise = NoiseStream::new(0);
//!
//! let mut voltages: Vec<f64> = vec![neuron.current_voltage];
//! for _ in 0..1000 {
//!     neuron.iterate(5., noise.standard_normal());
//!     voltages.push(neuron.current_voltage);
//! }
//! ```
//!
//! ### Summarizing a trace for comparison against a recording
//!
//! ```rust
//! use hodgkin_huxley_simulation::neuron::hodgkin_huxley::{simulate, NeuronParameters};
//! use hodgkin_huxley_simulation::summary::{find_peaks, get_summary, compare_summary};
//!
//! let parameters = NeuronParameters::default();
//! let input_current = vec![10.; 5000];
//!
//! let voltages = simulate(&parameters, 1, -65., &input_current, 0.1, 500.)
//!     .expect("Could not run simulation");
//!
//! let peaks = find_peaks(&voltages, 0.1);
//! let summary = get_summary(&voltages, &peaks);
//!
//! // a summary compared against itself has distance zero
//! assert_eq!(compare_summary(&summary, &summary), 0.);
//! ```

pub mod distribution;
pub mod error;
pub mod neuron;
pub mod summary;
