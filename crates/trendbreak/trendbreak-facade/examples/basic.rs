//! Basic example walking through a trend-break analysis
//!
//! Run with: cargo run --example basic -p trendbreak-facade

use trendbreak_facade::{
    BreakEstimator, ConservativeEstimate, EstimatorConfig, Period, RevenueSeries,
    TrendBreakEstimator,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== trendbreak Basic Example ===\n");

    // Nineteen months of clinic revenue; a competitor opened at month 10.
    let revenues = vec![
        1_767_800.0, 2_406_500.0, 2_223_500.0, 1_920_000.0, 1_673_000.0, 2_734_000.0,
        2_670_700.0, 2_305_250.0, 1_836_000.0, 1_889_000.0, 1_089_000.0, 1_134_000.0,
        1_830_000.0, 1_554_000.0, 2_068_200.0, 1_380_000.0, 1_446_000.0, 1_148_500.0,
        1_246_674.0,
    ];

    let start = Period::new(2023, 2)?;
    let series = RevenueSeries::from_start(start, revenues)?;
    let split = series.split_at(10)?;

    println!(
        "Series: {} - {} ({} months), break at {}",
        series.periods()[0],
        series.periods()[series.len() - 1],
        series.len(),
        series.periods()[split.index()]
    );

    let config = EstimatorConfig::default();
    let estimator = TrendBreakEstimator::from_config(config)?;
    let report = estimator.estimate(&series, split)?;

    println!("\nBaseline fit:");
    println!("  slope:     {:>14.2} / month", report.baseline_fit.slope);
    println!("  intercept: {:>14.2}", report.baseline_fit.intercept);
    println!("  R²:        {:>14.4}", report.baseline_fit.r_squared);

    let (before, after) = report.stability_change();
    println!("\nRegime stability: R² {:.4} -> {:.4}", before, after);

    println!("\nProjection vs actual:");
    for (pos, projected) in report
        .projection
        .positions()
        .iter()
        .zip(report.projection.values.iter())
        .skip(1)
    {
        let actual = series.amounts()[*pos];
        println!(
            "  {}: projected {:>12.0}, actual {:>12.0}, gap {:>12.0}",
            series.periods()[*pos],
            projected,
            actual,
            projected - actual
        );
    }

    println!("\nDivergence:");
    println!("  total gap:        {:>14.2}", report.divergence.total_gap);
    println!(
        "  commission ({:.0}%): {:>14.2}",
        report.multiplier * 100.0,
        report.divergence.scaled_loss
    );
    println!(
        "  immediate drop:   {:>13.1}%",
        report.divergence.immediate_drop_pct
    );

    // A hand-adjusted figure supplied from outside, never computed.
    let conservative = ConservativeEstimate::from_loss(6_777_838.0, config.multiplier);
    println!("\nConservative estimate (supplied):");
    println!("  revenue:    {:>14.2}", conservative.loss);
    println!("  commission: {:>14.2}", conservative.scaled_loss);

    println!("\n=== Example Complete ===");
    Ok(())
}
