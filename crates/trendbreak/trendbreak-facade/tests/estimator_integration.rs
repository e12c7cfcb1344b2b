//! Integration tests for the trendbreak stack
//!
//! Exercises the layered crates together through the facade's re-exports.

use trendbreak_facade::{
    divergence, fit_points, fit_series, BreakEstimator, EstimatorConfig, EstimatorError,
    LeastSquaresFitter, Period, Projection, RevenueSeries, SplitIndex, TrendBreakEstimator,
    TrendFitter,
};

fn monthly_series(amounts: Vec<f64>) -> RevenueSeries {
    let start = Period::new(2023, 2).unwrap();
    RevenueSeries::from_start(start, amounts).unwrap()
}

#[test]
fn facade_exposes_full_workflow() {
    let series = monthly_series(vec![100.0, 200.0, 300.0, 50.0, 60.0]);
    let split = series.split_at(3).unwrap();

    let estimator = TrendBreakEstimator::from_config(EstimatorConfig::default()).unwrap();
    let report = estimator.estimate(&series, split).unwrap();

    assert!((report.divergence.total_gap - 790.0).abs() < 1e-9);
    assert!((report.divergence.scaled_loss - 276.5).abs() < 1e-9);
    assert!((report.divergence.immediate_drop_pct - 87.5).abs() < 1e-9);
}

#[test]
fn fitter_trait_and_free_functions_agree() {
    let data: Vec<f64> = (0..10).map(|i| 3.0 * i as f64 + 5.0).collect();

    let fitter = LeastSquaresFitter::new();
    assert_eq!(fitter.fit(&data).unwrap(), fit_series(&data).unwrap());

    let positions: Vec<f64> = (0..10).map(|i| i as f64).collect();
    assert_eq!(
        fitter.fit_at(&positions, &data).unwrap(),
        fit_points(&positions, &data).unwrap()
    );
}

#[test]
fn split_index_propagates_through_series_helper() {
    let series = monthly_series(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    let split = series.split_at(3).unwrap();
    assert_eq!(split, SplitIndex::new(3, 6).unwrap());
    assert_eq!(series.baseline(split).len(), 3);
    assert_eq!(series.observed(split).len(), 3);

    assert!(series.split_at(1).is_err());
    assert!(series.split_at(6).is_err());
}

#[test]
fn divergence_checks_lengths_independently() {
    let projection = Projection::new(9, vec![1000.0, 1100.0, 1200.0]);
    let err = divergence(&projection, &[900.0], 0.35).unwrap_err();
    assert!(matches!(
        err,
        EstimatorError::LengthMismatch {
            expected: 2,
            got: 1
        }
    ));
}

#[test]
fn report_serializes_to_json_and_back() {
    let series = monthly_series(vec![100.0, 200.0, 300.0, 400.0, 250.0, 240.0]);
    let split = series.split_at(4).unwrap();
    let report = TrendBreakEstimator::default()
        .estimate(&series, split)
        .unwrap();

    let json = serde_json::to_string(&report).unwrap();
    let decoded: trendbreak_facade::TrendBreakReport = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, report);
}

#[test]
fn series_serializes_to_json_and_back() {
    let series = monthly_series(vec![100.0, 200.0, 300.0]);
    let json = serde_json::to_string(&series).unwrap();
    let decoded: RevenueSeries = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, series);
}

#[test]
fn estimator_usable_across_threads() {
    let series = monthly_series(vec![100.0, 200.0, 300.0, 50.0, 60.0]);
    let split = series.split_at(3).unwrap();
    let estimator = TrendBreakEstimator::default();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let series = series.clone();
            std::thread::spawn(move || estimator.estimate(&series, split).unwrap())
        })
        .collect();

    let reports: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for report in &reports[1..] {
        assert_eq!(*report, reports[0]);
    }
}
