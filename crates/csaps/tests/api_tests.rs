//! Tests for the high-level smoothing spline API.
//!
//! These tests exercise the public surface end to end:
//! - Reference values for automatic smoothing on a fixed noisy sample
//! - The interpolation (p = 1) and least-squares line (p = 0) limits
//! - Two-site degenerate fits
//! - Multivariate data and sample axes
//! - Normalized smoothing, degrees of freedom and GCV
//! - Error reporting
//!
//! ## Test Organization
//!
//! 1. **Reference Fixture** - Automatic smoothing against known values
//! 2. **Smoothing Limits** - Interpolation and straight-line fits
//! 3. **Degenerate Input** - Two data sites
//! 4. **Multivariate Data** - Shapes, axes and per-channel equivalence
//! 5. **Normalized Smoothing** - Scale invariance
//! 6. **Degrees of Freedom and GCV** - Availability and values
//! 7. **Evaluation** - Derivatives and extrapolation
//! 8. **Error Handling** - Invalid inputs and configuration
//! 9. **Display** - Summary output

use approx::{assert_abs_diff_eq, assert_relative_eq};
use ndarray::{Array1, Array2, Array3, Axis};

use csaps::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    let step = (stop - start) / (num - 1) as f64;
    let mut v: Vec<f64> = (0..num).map(|i| start + step * i as f64).collect();
    v[num - 1] = stop;
    v
}

fn fixture_y() -> Vec<f64> {
    vec![
        0.015771474002402,
        0.161329316958106,
        0.133494845724251,
        0.281006799675995,
        0.343006057841707,
        0.278153538271205,
        0.390818717714371,
        0.679913441859782,
        0.868622194535066,
        0.981580573494033,
        0.942184497801730,
        1.062903014773386,
        1.145038880551641,
        1.126415085211218,
        0.945914543251488,
        0.887159638891092,
        0.732105338022297,
        0.443482323476481,
        0.539727427655155,
        0.461168113877247,
        0.218479110576478,
        0.230018078091912,
        0.024790896515009,
        0.085343887446749,
        0.238257669483491,
    ]
}

fn fixture_yi() -> Vec<f64> {
    vec![
        0.027180620841235,
        0.055266722842603,
        0.081889893919483,
        0.105587203147386,
        0.124895719601823,
        0.138845028755704,
        0.149340839533796,
        0.159329894062361,
        0.171760370375527,
        0.189200881318870,
        0.210916416800576,
        0.234470952365328,
        0.257414405587860,
        0.277378327575793,
        0.293102526279226,
        0.304125512134026,
        0.310003428419162,
        0.310378253365020,
        0.306866169084541,
        0.303057561573221,
        0.302628651777970,
        0.309224604926640,
        0.325083877194873,
        0.350493015304832,
        0.385594789501554,
        0.430522770904909,
        0.484297436489629,
        0.543777468816333,
        0.605573174066145,
        0.666295736381613,
        0.723192861937517,
        0.775270813640449,
        0.821836995165352,
        0.862198810187169,
        0.895800934807012,
        0.922637134830661,
        0.942838448490065,
        0.956535914017174,
        0.964201067822575,
        0.968293836555378,
        0.971993858758319,
        0.978481765680190,
        0.990589029304687,
        1.008108142826666,
        1.029266848660349,
        1.052279957395322,
        1.075372085392223,
        1.096900972159461,
        1.115320296869396,
        1.129085856740936,
        1.136683629726760,
        1.137293750656333,
        1.130790511235904,
        1.117078383905495,
        1.096086194963815,
        1.068845910308547,
        1.037920180955498,
        1.005984407266240,
        0.975701613072527,
        0.948237262097737,
        0.921848333557257,
        0.894457640361302,
        0.863988793631958,
        0.828944108099870,
        0.789424716879042,
        0.745805539756215,
        0.698461496518133,
        0.648486500475627,
        0.599850439035886,
        0.557242193130187,
        0.525350643689810,
        0.507735527292642,
        0.501362772528695,
        0.500811632605449,
        0.500658068764342,
        0.495835799645429,
        0.484392358284163,
        0.465978560872775,
        0.440258473877521,
        0.407065767289394,
        0.368536648551231,
        0.328466725991911,
        0.290688242301654,
        0.258885509945327,
        0.233340446204702,
        0.210932573178451,
        0.188393482739897,
        0.162519263868190,
        0.133027485558460,
        0.103689479346398,
        0.078575174479879,
        0.061741087177262,
        0.055620757085748,
        0.059495661916820,
        0.072285127585087,
        0.092908288203052,
        0.120145221354215,
        0.152391824997807,
        0.187978208969687,
        0.225234483105709,
    ]
}

/// Irregular sites with a smooth signal and a deterministic wobble.
fn sample_data() -> (Vec<f64>, Vec<f64>) {
    let x = vec![0.0, 0.7, 1.5, 2.1, 3.0, 4.2, 5.0, 5.5, 6.9, 8.0];
    let y = x
        .iter()
        .map(|&v: &f64| v.sin() + 0.1 * (7.0 * v).cos())
        .collect();
    (x, y)
}

/// Weighted least-squares line `a + b x` evaluated at `x`.
fn weighted_line(x: &[f64], y: &[f64], w: &[f64]) -> Vec<f64> {
    let sw: f64 = w.iter().sum();
    let xm = x.iter().zip(w).map(|(a, b)| a * b).sum::<f64>() / sw;
    let ym = y.iter().zip(w).map(|(a, b)| a * b).sum::<f64>() / sw;
    let sxy: f64 = (0..x.len()).map(|i| w[i] * (x[i] - xm) * (y[i] - ym)).sum();
    let sxx: f64 = (0..x.len()).map(|i| w[i] * (x[i] - xm).powi(2)).sum();
    let b = sxy / sxx;
    let a = ym - b * xm;
    x.iter().map(|&v| a + b * v).collect()
}

// ============================================================================
// Reference Fixture Tests
// ============================================================================

/// Test automatic smoothing on the 25-point reference sample.
///
/// Verifies the selected parameter and the values on a 100-point grid.
#[test]
fn test_automatic_smoothing_reference_values() {
    let x = linspace(-5.0, 5.0, 25);
    let y = fixture_y();
    let xi = linspace(-5.0, 5.0, 100);

    let spline = Csaps::new().adapter(Batch).build().unwrap().fit(&x, &y).unwrap();

    assert_abs_diff_eq!(spline.smooth(), 0.992026535689226, epsilon = 1e-12);

    let yi = spline.evaluate(&xi).unwrap();
    assert_eq!(yi.shape(), &[100]);
    for (got, want) in yi.iter().zip(fixture_yi()) {
        assert_abs_diff_eq!(*got, want, epsilon = 1e-9);
    }
}

/// Test that an explicit parameter equal to the automatic one gives the same fit.
#[test]
fn test_explicit_smooth_matches_automatic() {
    let x = linspace(-5.0, 5.0, 25);
    let y = fixture_y();

    let auto = Csaps::new().adapter(Batch).build().unwrap().fit(&x, &y).unwrap();
    let explicit = Csaps::new()
        .smooth(auto.smooth())
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    for (a, b) in auto.coeffs().iter().zip(explicit.coeffs().iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
    }
}

// ============================================================================
// Smoothing Limit Tests
// ============================================================================

/// Test that p = 1 interpolates the data.
#[test]
fn test_interpolation_reproduces_data() {
    let (x, y) = sample_data();

    let spline = Csaps::new()
        .smooth(1.0)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    let yi = spline.evaluate(&x).unwrap();
    for (got, want) in yi.iter().zip(y.iter()) {
        assert_abs_diff_eq!(*got, *want, epsilon = 1e-10);
    }
    assert_eq!(spline.smooth(), 1.0);
}

/// Test that p = 1 gives a natural spline (zero curvature at the ends).
#[test]
fn test_interpolation_natural_boundary() {
    let (x, y) = sample_data();

    let spline = Csaps::new()
        .smooth(1.0)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    let d2 = spline.derivative(&[x[0], x[x.len() - 1]], 2).unwrap();
    assert_abs_diff_eq!(d2[0], 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(d2[1], 0.0, epsilon = 1e-9);
}

/// Test that p = 0 gives the weighted least-squares straight line.
#[test]
fn test_zero_smooth_is_weighted_line() {
    let (x, y) = sample_data();
    let w = vec![1.0, 2.0, 0.5, 1.0, 3.0, 1.0, 0.8, 1.2, 2.0, 1.0];

    let spline = Csaps::new()
        .smooth(0.0)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit_weighted(&x, &y, &w)
        .unwrap();

    let expected = weighted_line(&x, &y, &w);
    let yi = spline.evaluate(&x).unwrap();
    for (got, want) in yi.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*got, *want, epsilon = 1e-9);
    }

    // The curve is a straight line everywhere
    let d2 = spline.derivative(&linspace(0.0, 8.0, 17), 2).unwrap();
    for v in d2.iter() {
        assert_abs_diff_eq!(*v, 0.0, epsilon = 1e-9);
    }
}

/// Test that unit weights and no weights give the same fit.
#[test]
fn test_unit_weights_match_default() {
    let (x, y) = sample_data();
    let model = Csaps::new().smooth(0.6).adapter(Batch).build().unwrap();

    let a = model.fit(&x, &y).unwrap();
    let b = model.fit_weighted(&x, &y, &vec![1.0; x.len()]).unwrap();

    assert_eq!(a.coeffs(), b.coeffs());
}

/// Test that heavier weights pull the curve towards the observation.
#[test]
fn test_weights_pull_fit() {
    let (x, y) = sample_data();
    let model = Csaps::new().smooth(0.3).adapter(Batch).build().unwrap();

    let plain = model.fit(&x, &y).unwrap();
    let mut w = vec![1.0; x.len()];
    w[4] = 100.0;
    let weighted = model.fit_weighted(&x, &y, &w).unwrap();

    let r_plain = (plain.evaluate(&[x[4]]).unwrap()[0] - y[4]).abs();
    let r_weighted = (weighted.evaluate(&[x[4]]).unwrap()[0] - y[4]).abs();
    assert!(r_weighted < r_plain);
}

// ============================================================================
// Degenerate Input Tests
// ============================================================================

/// Test that two sites give the straight line through both points.
#[test]
fn test_two_points_linear() {
    let x = [1.0, 3.0];
    let y = [2.0, 6.0];

    let spline = Csaps::new()
        .smooth(0.2)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    assert_eq!(spline.order(), 2);
    assert_eq!(spline.pieces(), 1);
    assert_eq!(spline.smooth(), 1.0);
    assert_relative_eq!(spline.coeffs()[[0, 0]], 2.0);
    assert_relative_eq!(spline.coeffs()[[1, 0]], 2.0);

    let yi = spline.evaluate(&[0.0, 1.0, 2.0, 3.0, 4.0]).unwrap();
    let expected = [0.0, 2.0, 4.0, 6.0, 8.0];
    for (got, want) in yi.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*got, *want, epsilon = 1e-12);
    }
}

/// Test two sites with multiple channels and degrees of freedom.
#[test]
fn test_two_points_multichannel_dof() {
    let x = vec![0.0, 2.0];
    let y = Array2::from_shape_vec((3, 2), vec![0.0, 2.0, 1.0, 1.0, 4.0, 0.0]).unwrap();

    let spline = Csaps::new()
        .degrees_of_freedom()
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    assert_eq!(spline.coeffs().shape(), &[2, 1, 3]);
    assert_eq!(spline.degrees_of_freedom(), Some(2.0));

    let mid = spline.evaluate(&[1.0]).unwrap();
    assert_eq!(mid.shape(), &[3, 1]);
    assert_relative_eq!(mid[[0, 0]], 1.0);
    assert_relative_eq!(mid[[1, 0]], 1.0);
    assert_relative_eq!(mid[[2, 0]], 2.0);
}

/// Test that two non-increasing sites are rejected.
#[test]
fn test_two_points_not_increasing() {
    let err = Csaps::new()
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&[1.0, 1.0], &[0.0, 1.0])
        .unwrap_err();
    assert_eq!(err, CsapsError::NotIncreasing { index: 0 });
}

// ============================================================================
// Multivariate Data Tests
// ============================================================================

/// Test that each channel of a multivariate fit equals the univariate fit.
#[test]
fn test_multivariate_matches_univariate() {
    let (x, y) = sample_data();
    let n = x.len();
    let mut data = Array2::<f64>::zeros((3, n));
    for c in 0..3 {
        for i in 0..n {
            data[[c, i]] = y[i] * (c as f64 + 1.0) + c as f64;
        }
    }

    let model = Csaps::new().smooth(0.7).adapter(Batch).build().unwrap();
    let multi = model.fit(&x, &data).unwrap();
    let xi = linspace(-1.0, 9.0, 23);
    let yi_multi = multi.evaluate(&xi).unwrap();
    assert_eq!(yi_multi.shape(), &[3, 23]);

    for c in 0..3 {
        let row: Vec<f64> = data.index_axis(Axis(0), c).to_vec();
        let single = model.fit(&x, &row).unwrap();
        let yi = single.evaluate(&xi).unwrap();
        for j in 0..xi.len() {
            assert_abs_diff_eq!(yi_multi[[c, j]], yi[j], epsilon = 1e-12);
        }
    }
}

/// Test metadata and output shapes for 3-D data along the last axis.
#[test]
fn test_multivariate_shape_last_axis() {
    let (x, y) = sample_data();
    let n = x.len();
    let data = Array3::from_shape_fn((2, 3, n), |(a, b, i)| y[i] + (a * 3 + b) as f64);

    let spline = Csaps::new()
        .smooth(0.9)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&x, &data)
        .unwrap();

    assert_eq!(spline.coeffs().shape(), &[4, n - 1, 2, 3]);
    assert_eq!(spline.shape(), vec![2, 3, n]);
    assert_eq!(spline.axis(), 2);
    assert_eq!(spline.ndim(), 6);
    assert_eq!(spline.breaks(), x.as_slice());

    let yi = spline.evaluate(&x).unwrap();
    assert_eq!(yi.shape(), &[2, 3, n]);
}

/// Test fitting along the first axis.
#[test]
fn test_multivariate_first_axis() {
    let (x, y) = sample_data();
    let n = x.len();
    let by_rows = Array2::from_shape_fn((2, n), |(c, i)| y[i] * (c as f64 + 1.0));
    let by_cols = by_rows.t().to_owned();

    let row_fit = Csaps::new()
        .smooth(0.8)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&x, &by_rows)
        .unwrap();
    let col_fit = Csaps::new()
        .smooth(0.8)
        .axis(0)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&x, &by_cols)
        .unwrap();

    assert_eq!(col_fit.axis(), 0);
    assert_eq!(col_fit.shape(), vec![n, 2]);

    let xi = linspace(0.0, 8.0, 7);
    let a = row_fit.evaluate(&xi).unwrap();
    let b = col_fit.evaluate(&xi).unwrap();
    assert_eq!(b.shape(), &[7, 2]);
    for j in 0..7 {
        for c in 0..2 {
            assert_abs_diff_eq!(a[[c, j]], b[[j, c]], epsilon = 1e-12);
        }
    }
}

/// Test that ndarray inputs are accepted for sites and weights.
#[test]
fn test_ndarray_inputs() {
    let (x, y) = sample_data();
    let xa = Array1::from(x.clone());
    let ya = Array1::from(y.clone());
    let wa = Array1::from_elem(x.len(), 1.0);

    let model = Csaps::new().smooth(0.5).adapter(Batch).build().unwrap();
    let a = model.fit(&x, &y).unwrap();
    let b = model.fit_weighted(&xa, &ya, &wa).unwrap();
    assert_eq!(a.coeffs(), b.coeffs());
}

// ============================================================================
// Normalized Smoothing Tests
// ============================================================================

/// Test that normalized smoothing is invariant to the scale of the sites.
#[test]
fn test_normalized_smooth_scale_invariance() {
    let (x, y) = sample_data();
    let scale = 250.0;
    let x_scaled: Vec<f64> = x.iter().map(|v| v * scale).collect();

    let model = Csaps::new()
        .normalized_smooth()
        .smooth(0.7)
        .adapter(Batch)
        .build()
        .unwrap();

    let a = model.fit(&x, &y).unwrap();
    let b = model.fit(&x_scaled, &y).unwrap();
    assert!(a.smooth() != b.smooth());

    let xi = linspace(0.0, 8.0, 31);
    let xi_scaled: Vec<f64> = xi.iter().map(|v| v * scale).collect();
    let ya = a.evaluate(&xi).unwrap();
    let yb = b.evaluate(&xi_scaled).unwrap();
    for (u, v) in ya.iter().zip(yb.iter()) {
        assert_relative_eq!(*u, *v, epsilon = 1e-8, max_relative = 1e-7);
    }
}

/// Test the default strength and the limits of normalized smoothing.
#[test]
fn test_normalized_smooth_strengths() {
    let (x, y) = sample_data();

    let default = Csaps::new()
        .normalized_smooth()
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();
    let half = Csaps::new()
        .normalized_smooth()
        .smooth(0.5)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();
    assert_eq!(default.smooth(), half.smooth());

    for (s, p) in [(0.0, 0.0), (1.0, 1.0)] {
        let spline = Csaps::new()
            .normalized_smooth()
            .smooth(s)
            .adapter(Batch)
            .build()
            .unwrap()
            .fit(&x, &y)
            .unwrap();
        assert_eq!(spline.smooth(), p);
    }
}

// ============================================================================
// Degrees of Freedom and GCV Tests
// ============================================================================

/// Test that GCV requires the degrees of freedom.
#[test]
fn test_gcv_without_dof_fails() {
    let (x, y) = sample_data();
    let mut spline = Csaps::new().adapter(Batch).build().unwrap().fit(&x, &y).unwrap();

    assert_eq!(spline.degrees_of_freedom(), None);
    let fitted = spline.evaluate(&x).unwrap();
    let err = spline.compute_gcv(&y, &fitted).unwrap_err();
    assert_eq!(err, CsapsError::MissingDegreesOfFreedom);
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert_eq!(spline.gcv(), None);
}

/// Test GCV scoring with degrees of freedom enabled.
#[test]
fn test_gcv_with_dof() {
    let (x, y) = sample_data();
    let mut spline = Csaps::new()
        .smooth(0.5)
        .degrees_of_freedom()
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    let dof = spline.degrees_of_freedom().unwrap();
    assert!(dof > 2.0 && dof < x.len() as f64);

    let fitted = spline.evaluate(&x).unwrap();
    let score = spline.compute_gcv(&y, &fitted).unwrap();
    assert!(score.is_finite() && score >= 0.0);
    assert_eq!(spline.gcv(), Some(score));

    let rss: f64 = y
        .iter()
        .zip(fitted.iter())
        .map(|(a, b)| (a - b).powi(2))
        .sum();
    let n = x.len() as f64;
    assert_relative_eq!(score, rss / (n - dof).powi(2), max_relative = 1e-12);

    // Recomputing gives the same score
    let again = spline.compute_gcv(&y, &fitted).unwrap();
    assert_eq!(score, again);
}

/// Test the degrees of freedom at the interpolation and line limits.
#[test]
fn test_dof_limits() {
    let (x, y) = sample_data();

    let interp = Csaps::new()
        .smooth(1.0)
        .degrees_of_freedom()
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();
    assert_relative_eq!(
        interp.degrees_of_freedom().unwrap(),
        x.len() as f64,
        max_relative = 1e-8
    );

    let line = Csaps::new()
        .smooth(0.0)
        .degrees_of_freedom()
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();
    assert_eq!(line.degrees_of_freedom(), Some(2.0));
}

/// Test that the degrees of freedom grow with the smoothing parameter.
#[test]
fn test_dof_increases_with_smooth() {
    let (x, y) = sample_data();
    let mut prev = 2.0;
    for p in [0.01, 0.1, 0.5, 0.9, 0.999] {
        let dof = Csaps::new()
            .smooth(p)
            .degrees_of_freedom()
            .adapter(Batch)
            .build()
            .unwrap()
            .fit(&x, &y)
            .unwrap()
            .degrees_of_freedom()
            .unwrap();
        assert!(dof > prev, "dof({p}) = {dof} should exceed {prev}");
        prev = dof;
    }
}

/// Test that mismatched GCV inputs are rejected.
#[test]
fn test_gcv_shape_mismatch() {
    let (x, y) = sample_data();
    let mut spline = Csaps::new()
        .degrees_of_freedom()
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    let err = spline.compute_gcv(&y, &y[..5]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

// ============================================================================
// Evaluation Tests
// ============================================================================

/// Test the first derivative against central differences.
#[test]
fn test_first_derivative_matches_finite_difference() {
    let (x, y) = sample_data();
    let spline = Csaps::new()
        .smooth(0.8)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    let h = 1e-6;
    for &t in &[0.3, 1.8, 3.3, 4.9, 7.7] {
        let d = spline.derivative(&[t], 1).unwrap()[0];
        let v = spline.evaluate(&[t - h, t + h]).unwrap();
        let fd = (v[1] - v[0]) / (2.0 * h);
        assert_abs_diff_eq!(d, fd, epsilon = 1e-6);
    }
}

/// Test that derivatives beyond the polynomial order vanish.
#[test]
fn test_high_derivatives_vanish() {
    let (x, y) = sample_data();
    let spline = Csaps::new().adapter(Batch).build().unwrap().fit(&x, &y).unwrap();

    let d4 = spline.derivative(&[0.5, 2.5, 6.0], 4).unwrap();
    assert!(d4.iter().all(|&v| v == 0.0));
}

/// Test the three extrapolation modes.
#[test]
fn test_extrapolation_modes() {
    let (x, y) = sample_data();
    let spline = Csaps::new()
        .smooth(0.9)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    let outside = [-1.0, 4.0, 9.5];

    let disabled = spline
        .evaluate_with(&outside, 0, Extrapolate::Disabled)
        .unwrap();
    assert!(disabled[0].is_nan());
    assert!(disabled[1].is_finite());
    assert!(disabled[2].is_nan());

    let boundary = spline.evaluate(&outside).unwrap();
    assert!(boundary.iter().all(|v| v.is_finite()));
    assert_eq!(boundary[1], disabled[1]);

    // Period is 8.0: -1.0 wraps to 7.0 and 9.5 to 1.5
    let periodic = spline
        .evaluate_with(&outside, 0, Extrapolate::Periodic)
        .unwrap();
    let inside = spline.evaluate(&[7.0, 4.0, 1.5]).unwrap();
    for (a, b) in periodic.iter().zip(inside.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
    }
}

/// Test that NaN queries evaluate to NaN.
#[test]
fn test_nan_query() {
    let (x, y) = sample_data();
    let spline = Csaps::new().adapter(Batch).build().unwrap().fit(&x, &y).unwrap();

    let v = spline.evaluate(&[f64::NAN, 1.0]).unwrap();
    assert!(v[0].is_nan());
    assert!(v[1].is_finite());
}

/// Test that a fitted processor can be reused and f32 is supported.
#[test]
fn test_f32_fit() {
    let x: Vec<f32> = (0..12).map(|i| i as f32 * 0.5).collect();
    let y: Vec<f32> = x.iter().map(|v| v.sin()).collect();

    let model = Csaps::new().smooth(0.95f32).adapter(Batch).build().unwrap();
    let spline = model.fit(&x, &y).unwrap();
    let again = model.fit(&x, &y).unwrap();
    assert_eq!(spline, again);

    // Same fit in double precision
    let x64: Vec<f64> = x.iter().map(|&v| v as f64).collect();
    let y64: Vec<f64> = y.iter().map(|&v| v as f64).collect();
    let reference = Csaps::new()
        .smooth(0.95)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&x64, &y64)
        .unwrap();

    let yi = spline.evaluate(&x).unwrap();
    let yi64 = reference.evaluate(&x64).unwrap();
    for (got, want) in yi.iter().zip(yi64.iter()) {
        assert_abs_diff_eq!(*got as f64, *want, epsilon = 1e-5);
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

/// Test that non-increasing sites are rejected.
#[test]
fn test_non_increasing_sites() {
    let model = Csaps::<f64>::new().adapter(Batch).build().unwrap();

    let err = model
        .fit(&[0.0, 1.0, 1.0, 2.0], &[1.0, 2.0, 3.0, 4.0])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(err, CsapsError::NotIncreasing { index: 1 });
    assert!(err.to_string().contains("strictly increasing"));

    let err = model
        .fit(&[0.0, 2.0, 1.0, 3.0], &[1.0, 2.0, 3.0, 4.0])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

/// Test input validation errors.
#[test]
fn test_invalid_inputs() {
    let model = Csaps::<f64>::new().adapter(Batch).build().unwrap();

    // Too few sites
    let err = model.fit(&[1.0], &[1.0]).unwrap_err();
    assert_eq!(err, CsapsError::TooFewPoints { got: 1, min: 2 });

    // Observation length mismatch
    let err = model.fit(&[0.0, 1.0, 2.0], &[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, CsapsError::LengthMismatch { .. }));

    // Weight length mismatch
    let err = model
        .fit_weighted(&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0], &[1.0, 1.0])
        .unwrap_err();
    assert!(matches!(
        err,
        CsapsError::LengthMismatch {
            name: "weights",
            expected: 3,
            got: 2
        }
    ));

    // Non-finite site
    let err = model
        .fit(&[0.0, f64::NAN, 2.0], &[1.0, 2.0, 3.0])
        .unwrap_err();
    assert!(matches!(err, CsapsError::InvalidNumericValue(_)));

    // Sites must be a vector
    let x2 = Array2::<f64>::zeros((2, 2));
    let err = model.fit(&x2, &[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, CsapsError::InvalidDimension { ndim: 2, .. }));

    // All of the above are input errors
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

/// Test that an out-of-range axis is rejected.
#[test]
fn test_invalid_axis() {
    let (x, y) = sample_data();
    let err = Csaps::new()
        .axis(3)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap_err();
    assert_eq!(err, CsapsError::InvalidAxis { axis: 3, ndim: 1 });

    let err = Csaps::new()
        .axis(-2)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

/// Test that non-positive weights are a solver error.
#[test]
fn test_non_positive_weights() {
    let (x, y) = sample_data();
    let mut w = vec![1.0; x.len()];
    w[3] = 0.0;

    let err = Csaps::new()
        .adapter(Batch)
        .build()
        .unwrap()
        .fit_weighted(&x, &y, &w)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Solver);
}

/// Test builder validation.
#[test]
fn test_builder_validation() {
    let err = Csaps::new().smooth(1.5).adapter(Batch).build().unwrap_err();
    assert_eq!(err, CsapsError::InvalidSmooth(1.5));

    let err = Csaps::new().smooth(-0.1).adapter(Batch).build().unwrap_err();
    assert!(matches!(err, CsapsError::InvalidSmooth(_)));

    let err = Csaps::new()
        .smooth(f64::NAN)
        .adapter(Batch)
        .build()
        .unwrap_err();
    assert!(matches!(err, CsapsError::InvalidSmooth(_)));

    let err = Csaps::new()
        .smooth(0.5)
        .smooth(0.6)
        .adapter(Batch)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        CsapsError::DuplicateParameter {
            parameter: "smooth"
        }
    );
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let err = Csaps::<f64>::new()
        .axis(0)
        .axis(1)
        .adapter(Batch)
        .build()
        .unwrap_err();
    assert_eq!(err, CsapsError::DuplicateParameter { parameter: "axis" });
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test the human-readable summary.
#[test]
fn test_display_summary() {
    let x = linspace(-5.0, 5.0, 25);
    let y = fixture_y();
    let mut spline = Csaps::new()
        .degrees_of_freedom()
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    let text = spline.to_string();
    assert!(text.contains("CubicSmoothingSpline"));
    assert!(text.contains("coeffs shape: [4, 24]"));
    assert!(text.contains("data shape: [25]"));
    assert!(text.contains("pieces: 24"));
    assert!(text.contains("order: 4"));
    assert!(text.contains("ndim: 1"));
    assert!(text.contains("gcv: None"));

    let fitted = spline.evaluate(&x).unwrap();
    spline.compute_gcv(&y, &fitted).unwrap();
    assert!(!spline.to_string().contains("gcv: None"));
}
