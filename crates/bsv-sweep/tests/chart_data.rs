//! End-to-end checks of the three chart-data generators as a renderer
//! would consume them.

use approx::assert_abs_diff_eq;
use bsv_engine::BsParameters;
use bsv_sweep::{sweep_by_underlying, sweep_by_volatility, sweep_surface};

#[test]
fn series_lengths_match_axes() {
    let params = BsParameters::default();

    let by_vol = sweep_by_volatility(&params);
    assert_eq!(by_vol.axis.len(), 56);
    assert_eq!(by_vol.calls.len(), by_vol.axis.len());
    assert_eq!(by_vol.puts.len(), by_vol.axis.len());

    let by_spot = sweep_by_underlying(&params);
    assert_eq!(by_spot.axis.len(), 51);
    assert_eq!(by_spot.calls.len(), by_spot.axis.len());
    assert_eq!(by_spot.puts.len(), by_spot.axis.len());

    let surface = sweep_surface(&params);
    assert_eq!(surface.values.rows(), surface.volatilities.len());
    assert_eq!(surface.values.cols(), surface.strikes.len());
}

#[test]
fn volatility_sweep_hits_the_canonical_point() {
    // σ = 0.20 sits on the default axis; the call there is the textbook 10.45
    let sweep = sweep_by_volatility(&BsParameters::default());
    let i = sweep.axis.iter().position(|&v| v == 0.20).unwrap();
    assert_abs_diff_eq!(sweep.calls[i], 10.4506, epsilon = 0.01);
    assert_abs_diff_eq!(sweep.puts[i], 5.5735, epsilon = 0.01);
}

#[test]
fn sweeps_are_deterministic() {
    let params = BsParameters::default();
    assert_eq!(sweep_by_volatility(&params), sweep_by_volatility(&params));
    assert_eq!(sweep_by_underlying(&params), sweep_by_underlying(&params));
    assert_eq!(sweep_surface(&params), sweep_surface(&params));
}

#[test]
fn underlying_sweep_orders_prices_sensibly() {
    let sweep = sweep_by_underlying(&BsParameters::default());
    // calls gain with spot, puts lose
    assert!(sweep.calls.first().unwrap() < sweep.calls.last().unwrap());
    assert!(sweep.puts.first().unwrap() > sweep.puts.last().unwrap());
    for w in sweep.calls.windows(2) {
        assert!(w[1] >= w[0]);
    }
    for w in sweep.puts.windows(2) {
        assert!(w[1] <= w[0]);
    }
}

#[test]
fn expired_parameters_sweep_to_intrinsic_values() {
    let mut params = BsParameters::default();
    params.expiry = 0.0;
    let sweep = sweep_by_underlying(&params);
    for (i, &spot) in sweep.axis.iter().enumerate() {
        assert_eq!(sweep.calls[i], (spot - params.strike).max(0.0));
        assert_eq!(sweep.puts[i], (params.strike - spot).max(0.0));
    }
}

#[test]
fn surface_rows_track_volatility() {
    let surface = sweep_surface(&BsParameters::default());
    // every column is increasing in volatility (vega > 0)
    for j in 0..surface.strikes.len() {
        for i in 1..surface.volatilities.len() {
            assert!(surface.values[(i, j)] > surface.values[(i - 1, j)]);
        }
    }
}
