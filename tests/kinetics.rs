#[cfg(test)]
mod tests {
    use hodgkin_huxley_simulation::neuron::kinetics::{
        efun, alpha_m, beta_m, alpha_h, beta_h, alpha_n, beta_n,
        m_inf, h_inf, n_inf, p_inf, tau_m, tau_h, tau_n, tau_p,
    };
    use hodgkin_huxley_simulation::neuron::hodgkin_huxley::{
        HodgkinHuxleyNeuron, NeuronParameters,
    };

    #[test]
    pub fn test_efun_at_zero_is_one() {
        assert_eq!(efun(0.), 1.);
    }

    #[test]
    pub fn test_direct_evaluation_matches_taylor_expansion_near_branch() {
        // just outside the Taylor branch the direct form should agree with
        // the expansion to second order
        for z in [2e-4, -2e-4] {
            assert!((efun(z) - (1. - z / 2.)).abs() < 1e-8);
        }
    }

    #[test]
    pub fn test_efun_is_continuous_across_branch_point() {
        let just_below = efun(0.99e-4);
        let just_above = efun(1.01e-4);

        assert!((just_below - just_above).abs() < 2e-6);
    }

    #[test]
    pub fn test_efun_direct_evaluation() {
        // z / (exp(z) - 1) away from the singularity
        assert!((efun(1.) - 1. / (1f64.exp() - 1.)).abs() < 1e-12);
        assert!((efun(-2.) - (-2.) / ((-2f64).exp() - 1.)).abs() < 1e-12);
    }

    #[test]
    pub fn test_rates_are_positive_over_physiological_range() {
        let v_t = -60.;

        for i in 0..=30 {
            let v = -120. + (i as f64) * 6.;

            assert!(alpha_m(v, v_t) > 0.);
            assert!(beta_m(v, v_t) > 0.);
            assert!(alpha_h(v, v_t) > 0.);
            assert!(beta_h(v, v_t) > 0.);
            assert!(alpha_n(v, v_t) > 0.);
            assert!(beta_n(v, v_t) > 0.);
        }
    }

    #[test]
    pub fn test_steady_states_stay_within_unit_interval() {
        let v_t = -60.;

        for i in 0..=30 {
            let v = -120. + (i as f64) * 6.;

            for steady_state in [m_inf(v, v_t), h_inf(v, v_t), n_inf(v, v_t), p_inf(v)] {
                assert!(steady_state >= 0. && steady_state <= 1.);
            }
        }
    }

    #[test]
    pub fn test_time_constants_are_positive() {
        let v_t = -60.;

        for i in 0..=30 {
            let v = -120. + (i as f64) * 6.;

            assert!(tau_m(v, v_t, 1.) > 0.);
            assert!(tau_h(v, v_t, 1.) > 0.);
            assert!(tau_n(v, v_t, 1.) > 0.);
            assert!(tau_p(v, 100.) > 0.);
        }
    }

    #[test]
    pub fn test_rate_factor_scales_time_constants_linearly() {
        let v = -55.;
        let v_t = -60.;

        assert!((tau_m(v, v_t, 2.) - 2. * tau_m(v, v_t, 1.)).abs() < 1e-12);
        assert!((tau_n(v, v_t, 0.5) - 0.5 * tau_n(v, v_t, 1.)).abs() < 1e-12);
    }

    #[test]
    pub fn test_adaptation_steady_state_is_sigmoidal() {
        assert!((p_inf(-35.) - 0.5).abs() < 1e-12);
        assert!(p_inf(-80.) < 0.05);
        assert!(p_inf(10.) > 0.95);

        for i in 0..30 {
            let v = -100. + (i as f64) * 5.;
            assert!(p_inf(v) < p_inf(v + 5.));
        }
    }

    #[test]
    pub fn test_gates_initialize_to_steady_state() {
        let parameters = NeuronParameters::default();
        let v0 = -65.;

        let neuron = HodgkinHuxleyNeuron::new(parameters, v0, 0.1);

        assert_eq!(neuron.m.state, m_inf(v0, parameters.v_t));
        assert_eq!(neuron.h.state, h_inf(v0, parameters.v_t));
        assert_eq!(neuron.n.state, n_inf(v0, parameters.v_t));
        assert_eq!(neuron.p.state, p_inf(v0));
    }
}
