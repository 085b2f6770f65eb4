//! Conductance based neuron dynamics, split into voltage dependent channel
//! kinetics and the exponential Euler integration that advances them.

pub mod kinetics;
pub mod hodgkin_huxley;
