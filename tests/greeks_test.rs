// tests/greeks_test.rs
use options_pricer::{compute_greeks, price_option, OptionType};
use std::f64::consts::PI;

const S: f64 = 100.0;
const K: f64 = 100.0;
const R: f64 = 0.05;
const SIGMA: f64 = 0.20;
const T: f64 = 1.0;

/// Textbook pieces computed independently of the library
fn textbook_d1d2() -> (f64, f64) {
    let d1 = ((S / K).ln() + (R + 0.5 * SIGMA * SIGMA) * T) / (SIGMA * T.sqrt());
    (d1, d1 - SIGMA * T.sqrt())
}

fn textbook_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

fn textbook_cdf(x: f64) -> f64 {
    statrs::function::erf::erfc(-x / 2f64.sqrt()) / 2.0
}

#[test]
fn test_gamma_vega_put_call_symmetry() {
    let call = compute_greeks(S, K, R, SIGMA, T, OptionType::Call);
    let put = compute_greeks(S, K, R, SIGMA, T, OptionType::Put);

    println!("\nCall Greeks: {}", call);
    println!("Put Greeks:  {}", put);

    assert!((call.gamma - put.gamma).abs() < 1e-10, "Gamma must match for call and put");
    assert!((call.vega - put.vega).abs() < 1e-10, "Vega must match for call and put");
}

#[test]
fn test_delta_put_call_offset() {
    let call = compute_greeks(S, K, R, SIGMA, T, OptionType::Call);
    let put = compute_greeks(S, K, R, SIGMA, T, OptionType::Put);
    assert!((call.delta - put.delta - 1.0).abs() < 1e-12);
}

#[test]
fn test_deep_itm_call_delta() {
    let g = compute_greeks(200.0, 100.0, 0.05, 0.20, 1.0, OptionType::Call);
    println!("\nDeep ITM call delta: {}", g.delta);
    assert!(g.delta > 0.99, "Deep ITM call delta should be > 0.99, got {}", g.delta);
}

#[test]
fn test_deep_otm_call_delta() {
    let g = compute_greeks(50.0, 200.0, 0.05, 0.20, 1.0, OptionType::Call);
    println!("\nDeep OTM call delta: {}", g.delta);
    assert!(g.delta < 0.01, "Deep OTM call delta should be < 0.01, got {}", g.delta);
}

#[test]
fn test_vega_is_textbook_over_100() {
    let (d1, _) = textbook_d1d2();
    let textbook_vega = S * textbook_pdf(d1) * T.sqrt();
    let vega = compute_greeks(S, K, R, SIGMA, T, OptionType::Call).vega;

    println!("\nTextbook Vega: {}", textbook_vega);
    println!("Library Vega:  {}", vega);

    assert!((textbook_vega - 37.524_034_691_693_792).abs() < 1e-8);
    assert!((vega - textbook_vega / 100.0).abs() < 1e-12, "Vega must be textbook / 100");
}

#[test]
fn test_theta_is_textbook_over_365() {
    let (d1, d2) = textbook_d1d2();
    let annual_call = -S * textbook_pdf(d1) * SIGMA / (2.0 * T.sqrt())
        - R * K * (-R * T).exp() * textbook_cdf(d2);
    let annual_put = -S * textbook_pdf(d1) * SIGMA / (2.0 * T.sqrt())
        + R * K * (-R * T).exp() * textbook_cdf(-d2);

    let call = compute_greeks(S, K, R, SIGMA, T, OptionType::Call);
    let put = compute_greeks(S, K, R, SIGMA, T, OptionType::Put);

    println!("\nTextbook annual Theta (call): {}", annual_call);
    println!("Library Theta (call, per day): {}", call.theta);

    assert!((annual_call - (-6.414_027_546_438_197)).abs() < 1e-8);
    assert!((call.theta - annual_call / 365.0).abs() < 1e-12, "Call theta must be annual / 365");
    assert!((put.theta - annual_put / 365.0).abs() < 1e-12, "Put theta must be annual / 365");
}

#[test]
fn test_gamma_reference_value() {
    let gamma = compute_greeks(S, K, R, SIGMA, T, OptionType::Call).gamma;
    let expected_gamma = 0.018_762_017_345_846_896;
    assert!((gamma - expected_gamma).abs() < 1e-12, "Gamma = {}", gamma);
}

#[test]
fn test_sign_and_bound_invariants() {
    let spots = [20.0, 60.0, 95.0, 100.0, 105.0, 150.0, 400.0];
    let strikes = [50.0, 100.0, 180.0];
    let rates = [-0.01, 0.0, 0.05, 0.12];
    let vols = [0.05, 0.2, 0.8];
    let expiries = [0.01, 0.25, 1.0, 5.0];

    for &s in &spots {
        for &k in &strikes {
            for &r in &rates {
                for &sigma in &vols {
                    for &t in &expiries {
                        let call = compute_greeks(s, k, r, sigma, t, OptionType::Call);
                        let put = compute_greeks(s, k, r, sigma, t, OptionType::Put);
                        let ctx = format!("S={} K={} r={} sigma={} T={}", s, k, r, sigma, t);

                        assert!((0.0..=1.0).contains(&call.delta), "call delta {} at {}", call.delta, ctx);
                        assert!((-1.0..=0.0).contains(&put.delta), "put delta {} at {}", put.delta, ctx);
                        assert!(call.gamma >= 0.0 && put.gamma >= 0.0, "gamma at {}", ctx);
                        assert!(call.vega >= 0.0 && put.vega >= 0.0, "vega at {}", ctx);
                    }
                }
            }
        }
    }
}

#[test]
fn test_delta_matches_finite_difference() {
    let h = 1e-4;
    for option_type in [OptionType::Call, OptionType::Put] {
        let up = price_option(S + h, K, R, SIGMA, T, option_type);
        let down = price_option(S - h, K, R, SIGMA, T, option_type);
        let fd_delta = (up - down) / (2.0 * h);
        let delta = compute_greeks(S, K, R, SIGMA, T, option_type).delta;
        assert!((fd_delta - delta).abs() < 1e-6, "{} delta {} vs fd {}", option_type, delta, fd_delta);
    }
}

#[test]
fn test_vega_matches_finite_difference_per_vol_point() {
    let h = 1e-5;
    let up = price_option(S, K, R, SIGMA + h, T, OptionType::Call);
    let down = price_option(S, K, R, SIGMA - h, T, OptionType::Call);
    let fd_vega_per_point = (up - down) / (2.0 * h) / 100.0;
    let vega = compute_greeks(S, K, R, SIGMA, T, OptionType::Call).vega;
    assert!((fd_vega_per_point - vega).abs() < 1e-6, "vega {} vs fd {}", vega, fd_vega_per_point);
}
