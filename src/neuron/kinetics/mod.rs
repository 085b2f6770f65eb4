//! Voltage dependent rate constants, steady states, and time constants for
//! the fast sodium and potassium gates (m, h, n) and the slow potassium
//! adaptation gate (p), using the Pospischil parameterization where each rate
//! is a function of the membrane potential offset by the threshold parameter.
//!
//! Every function here is total over real inputs, with one caveat: the steady
//! state and time constant pairs divide by `alpha + beta`, which can in
//! principle vanish if both rates underflow to zero at extreme voltages. The
//! division is left unguarded, a degenerate trace is preferable to silently
//! substituting values.


/// Numerically stable evaluation of `z / (exp(z) - 1)`, switching to the
/// first order Taylor expansion `1 - z / 2` for `|z| < 1e-4` to step over
/// the removable singularity at `z = 0`
pub fn efun(z: f64) -> f64 {
    if z.abs() < 1e-4 {
        1. - z / 2.
    } else {
        z / (z.exp() - 1.)
    }
}

/// Sodium activation opening rate
pub fn alpha_m(x: f64, v_t: f64) -> f64 {
    let v1 = x - v_t - 13.;
    0.32 * efun(-0.25 * v1) / 0.25
}

/// Sodium activation closing rate
pub fn beta_m(x: f64, v_t: f64) -> f64 {
    let v1 = x - v_t - 40.;
    0.28 * efun(0.2 * v1) / 0.2
}

/// Sodium inactivation opening rate
pub fn alpha_h(x: f64, v_t: f64) -> f64 {
    let v1 = x - v_t - 17.;
    0.128 * (-v1 / 18.).exp()
}

/// Sodium inactivation closing rate
pub fn beta_h(x: f64, v_t: f64) -> f64 {
    let v1 = x - v_t - 40.;
    4. / (1. + (-0.2 * v1).exp())
}

/// Potassium activation opening rate
pub fn alpha_n(x: f64, v_t: f64) -> f64 {
    let v1 = x - v_t - 15.;
    0.032 * efun(-0.2 * v1) / 0.2
}

/// Potassium activation closing rate
pub fn beta_n(x: f64, v_t: f64) -> f64 {
    let v1 = x - v_t - 10.;
    0.5 * (-v1 / 40.).exp()
}

/// Sodium activation steady state
pub fn m_inf(x: f64, v_t: f64) -> f64 {
    alpha_m(x, v_t) / (alpha_m(x, v_t) + beta_m(x, v_t))
}

/// Sodium activation time constant (ms), slowed or sped up globally by
/// `rate_to_steady_state_factor`
pub fn tau_m(x: f64, v_t: f64, rate_to_steady_state_factor: f64) -> f64 {
    rate_to_steady_state_factor / (alpha_m(x, v_t) + beta_m(x, v_t))
}

/// Sodium inactivation steady state
pub fn h_inf(x: f64, v_t: f64) -> f64 {
    alpha_h(x, v_t) / (alpha_h(x, v_t) + beta_h(x, v_t))
}

/// Sodium inactivation time constant (ms)
pub fn tau_h(x: f64, v_t: f64, rate_to_steady_state_factor: f64) -> f64 {
    rate_to_steady_state_factor / (alpha_h(x, v_t) + beta_h(x, v_t))
}

/// Potassium activation steady state
pub fn n_inf(x: f64, v_t: f64) -> f64 {
    alpha_n(x, v_t) / (alpha_n(x, v_t) + beta_n(x, v_t))
}

/// Potassium activation time constant (ms)
pub fn tau_n(x: f64, v_t: f64, rate_to_steady_state_factor: f64) -> f64 {
    rate_to_steady_state_factor / (alpha_n(x, v_t) + beta_n(x, v_t))
}

/// Slow potassium adaptation steady state
pub fn p_inf(x: f64) -> f64 {
    let v1 = x + 35.;
    1. / (1. + (-0.1 * v1).exp())
}

/// Slow potassium adaptation time constant (ms), scaled by the adaptation
/// time constant parameter rather than the global rate factor
pub fn tau_p(x: f64, tau_max: f64) -> f64 {
    let v1 = x + 35.;
    tau_max / (3.3 * (0.05 * v1).exp() + (-0.05 * v1).exp())
}
