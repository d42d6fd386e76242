//! Cubic Smoothing Spline Batch Examples
//!
//! This example demonstrates various smoothing scenarios:
//! - Basic smoothing with an explicit parameter
//! - Automatic parameter selection
//! - Normalized smoothing for data on very different scales
//! - Multivariate data along a chosen axis
//! - Weighted fits
//! - Derivatives and extrapolation
//! - Model comparison with generalized cross-validation

#[cfg(feature = "std")]
use csaps::prelude::*;
#[cfg(feature = "std")]
use ndarray::Array2;

#[cfg(feature = "std")]
fn main() -> Result<(), CsapsError> {
    println!("{}", "=".repeat(80));
    println!("Cubic Smoothing Spline - Batch Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_basic_smoothing()?;
    example_2_automatic_smoothing()?;
    example_3_normalized_smoothing()?;
    example_4_multivariate()?;
    example_5_weighted()?;
    example_6_derivatives_and_extrapolation()?;
    example_7_gcv_comparison()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
fn print_row(label: &str, values: impl IntoIterator<Item = f64>) {
    print!("  {label:<12} [");
    for (i, v) in values.into_iter().enumerate() {
        if i > 0 {
            print!(", ");
        }
        print!("{v:.3}");
    }
    println!("]");
}

#[cfg(feature = "std")]
/// Example 1: Basic Smoothing
/// Fit with an explicit smoothing parameter and print the summary
fn example_1_basic_smoothing() -> Result<(), CsapsError> {
    println!("Example 1: Basic Smoothing");
    println!("{}", "-".repeat(80));

    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let y = vec![2.0, 4.1, 5.9, 8.2, 9.8];

    let model = Csaps::new()
        .smooth(0.85) // Closer to 1 follows the data more tightly
        .adapter(Batch)
        .build()?;

    let spline = model.fit(&x, &y)?;
    println!("{}", spline);

    let xi = [1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0];
    print_row("smoothed:", spline.evaluate(&xi)?.iter().copied());

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Automatic Smoothing
/// Leave out the parameter and let the fit choose it from the site spacings
fn example_2_automatic_smoothing() -> Result<(), CsapsError> {
    println!("Example 2: Automatic Smoothing");
    println!("{}", "-".repeat(80));

    let x: Vec<f64> = (0..25).map(|i| -5.0 + i as f64 * 10.0 / 24.0).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&v| (-(v / 2.5).powi(2)).exp() + 0.1 * (5.0 * v).sin())
        .collect();

    let spline = Csaps::new().adapter(Batch).build()?.fit(&x, &y)?;
    println!("  selected p = {:.6}", spline.smooth());

    let xi: Vec<f64> = (0..9).map(|i| -4.0 + i as f64).collect();
    print_row("smoothed:", spline.evaluate(&xi)?.iter().copied());

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Normalized Smoothing
/// The same strength gives the same curve whatever the units of x
fn example_3_normalized_smoothing() -> Result<(), CsapsError> {
    println!("Example 3: Normalized Smoothing");
    println!("{}", "-".repeat(80));

    let seconds: Vec<f64> = (0..20).map(|i| i as f64 * 60.0).collect();
    let minutes: Vec<f64> = seconds.iter().map(|s| s / 60.0).collect();
    let y: Vec<f64> = minutes
        .iter()
        .map(|m| (m * 0.4).sin() + 0.05 * (m * 7.0).cos())
        .collect();

    let model = Csaps::new()
        .normalized_smooth()
        .smooth(0.6)
        .adapter(Batch)
        .build()?;

    let in_seconds = model.fit(&seconds, &y)?;
    let in_minutes = model.fit(&minutes, &y)?;
    println!(
        "  p (seconds) = {:.3e}, p (minutes) = {:.3e}",
        in_seconds.smooth(),
        in_minutes.smooth()
    );

    let probe_min = [2.5, 7.5, 12.5];
    let probe_sec: Vec<f64> = probe_min.iter().map(|m| m * 60.0).collect();
    print_row("seconds:", in_seconds.evaluate(&probe_sec)?.iter().copied());
    print_row("minutes:", in_minutes.evaluate(&probe_min)?.iter().copied());

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Multivariate Data
/// Smooth three channels at once; the sites run along the first axis here
fn example_4_multivariate() -> Result<(), CsapsError> {
    println!("Example 4: Multivariate Data");
    println!("{}", "-".repeat(80));

    let x: Vec<f64> = (0..12).map(|i| i as f64 * 0.5).collect();
    let y = Array2::from_shape_fn((x.len(), 3), |(i, c)| {
        let t = x[i];
        match c {
            0 => t.sin(),
            1 => t.cos(),
            _ => 0.1 * t * t,
        }
    });

    let spline = Csaps::new()
        .smooth(0.9)
        .axis(0)
        .adapter(Batch)
        .build()?
        .fit(&x, &y)?;

    let xi = [0.25, 2.75, 5.25];
    let values = spline.evaluate(&xi)?;
    println!("  data shape: {:?}", spline.shape());
    println!("  result shape: {:?}", values.shape());
    for (j, row) in values.outer_iter().enumerate() {
        print_row(&format!("x = {}:", xi[j]), row.iter().copied());
    }

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 5: Weighted Fits
/// A heavy weight pins the curve to one trusted observation
fn example_5_weighted() -> Result<(), CsapsError> {
    println!("Example 5: Weighted Fits");
    println!("{}", "-".repeat(80));

    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let y = vec![0.0, 0.9, 2.2, 2.8, 4.3, 4.9, 6.1];
    let mut w = vec![1.0; x.len()];
    w[3] = 50.0;

    let model = Csaps::new().smooth(0.3).adapter(Batch).build()?;
    let plain = model.fit(&x, &y)?;
    let weighted = model.fit_weighted(&x, &y, &w)?;

    println!("  observed at x=3:  {:.3}", y[3]);
    println!("  plain fit:        {:.3}", plain.evaluate(&[3.0])?[0]);
    println!("  weighted fit:     {:.3}", weighted.evaluate(&[3.0])?[0]);

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 6: Derivatives and Extrapolation
/// Slopes, curvature and the behavior outside the data range
fn example_6_derivatives_and_extrapolation() -> Result<(), CsapsError> {
    println!("Example 6: Derivatives and Extrapolation");
    println!("{}", "-".repeat(80));

    let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|v| (v * 0.6).sin()).collect();

    let spline = Csaps::new().smooth(0.99).adapter(Batch).build()?.fit(&x, &y)?;

    let xi = [0.0, 2.5, 5.0, 9.0];
    print_row("slope:", spline.derivative(&xi, 1)?.iter().copied());
    print_row("curvature:", spline.derivative(&xi, 2)?.iter().copied());

    let outside = [-2.0, 11.0];
    for mode in [
        Extrapolate::Disabled,
        Extrapolate::Boundary,
        Extrapolate::Periodic,
    ] {
        let values = spline.evaluate_with(&outside, 0, mode)?;
        print_row(&format!("{mode:?}:"), values.iter().copied());
    }

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 7: GCV Comparison
/// Score several smoothing parameters on the same data
fn example_7_gcv_comparison() -> Result<(), CsapsError> {
    println!("Example 7: GCV Comparison");
    println!("{}", "-".repeat(80));

    let x: Vec<f64> = (0..40).map(|i| i as f64 * 0.25).collect();
    let y: Vec<f64> = x
        .iter()
        .enumerate()
        .map(|(i, v)| v.sin() + 0.15 * ((i * 7919 % 13) as f64 / 6.0 - 1.0))
        .collect();

    println!("  {:>8} {:>10} {:>12}", "p", "dof", "gcv");
    for p in [0.05, 0.3, 0.7, 0.95, 0.999] {
        let mut spline = Csaps::new()
            .smooth(p)
            .degrees_of_freedom()
            .adapter(Batch)
            .build()?
            .fit(&x, &y)?;

        let fitted = spline.evaluate(&x)?;
        let gcv = spline.compute_gcv(&y, &fitted)?;
        println!(
            "  {:>8} {:>10.3} {:>12.6}",
            p,
            spline.degrees_of_freedom().unwrap_or(f64::NAN),
            gcv
        );
    }

    println!();
    Ok(())
}
