//! Plain-text report rendering.

use trendbreak_facade::{ReportRenderer, Result, RevenueSeries, TrendBreakReport};

/// Renders a trend-break report as a plain-text summary.
pub struct TextRenderer;

impl ReportRenderer for TextRenderer {
    fn render(&self, series: &RevenueSeries, report: &TrendBreakReport) -> Result<String> {
        let labels = series.labels();
        let mut out = String::new();

        out.push_str("Revenue Trend-Break Analysis\n");
        out.push_str("============================\n");
        out.push_str(&format!(
            "Series: {} - {} ({} months), break at {} (index {})\n\n",
            labels[0],
            labels[labels.len() - 1],
            series.len(),
            labels[report.split],
            report.split
        ));

        out.push_str(&format!(
            "Baseline fit:  slope {:.2}/month, intercept {:.2}, R² {:.4}\n",
            report.baseline_fit.slope,
            report.baseline_fit.intercept,
            report.baseline_fit.r_squared
        ));
        let (before, after) = report.stability_change();
        out.push_str(&format!(
            "Stability:     R² {:.4} -> {:.4}\n\n",
            before, after
        ));

        out.push_str("Projection vs actual:\n");
        for (pos, projected) in report
            .projection
            .positions()
            .iter()
            .zip(report.projection.values.iter())
            .skip(1)
        {
            let actual = series.amounts()[*pos];
            out.push_str(&format!(
                "  {:<9} projected {:>14.2}  actual {:>14.2}  gap {:>14.2}\n",
                labels[*pos],
                projected,
                actual,
                projected - actual
            ));
        }

        out.push_str(&format!(
            "\nTotal revenue gap:      {:>14.2}\n",
            report.divergence.total_gap
        ));
        out.push_str(&format!(
            "Commission loss ({:.0}%): {:>14.2}\n",
            report.multiplier * 100.0,
            report.divergence.scaled_loss
        ));
        out.push_str(&format!(
            "Immediate drop:         {:>13.1}%\n",
            report.divergence.immediate_drop_pct
        ));

        Ok(out)
    }
}
