use crate::services::currency_format::format_currency;
use crate::services::projection_types::Projection;

pub fn format_projection_report(source: &str, projection: &Projection) -> String {
    let mut lines = Vec::new();
    lines.push("Projection Report".to_string());
    lines.push(format!("Data source: {source}"));
    lines.push(format!("Recorded periods: {}", projection.historical_periods));
    lines.push(format!("Horizon: {}", projection.horizon));
    lines.push(format!(
        "Contribution: {}",
        format_currency(projection.contribution)
    ));
    lines.push(format!(
        "Returns: min {:.2}% | mean {:.2}% | max {:.2}%",
        projection.stats.min, projection.stats.mean, projection.stats.max
    ));
    lines.push(String::new());
    lines.push("Scenario | Rate | Final value".to_string());
    lines.push("---------|------|------------".to_string());

    let finals = projection.final_values();
    let rows = [
        ("Optimistic", projection.rates.optimistic, finals.map(|f| f.optimistic)),
        ("Mean", projection.rates.mean, finals.map(|f| f.mean)),
        ("Pessimistic", projection.rates.pessimistic, finals.map(|f| f.pessimistic)),
    ];
    for (label, rate, value) in rows {
        lines.push(format_scenario_row(label, rate, value));
    }

    lines.join("\n")
}

fn format_scenario_row(label: &str, rate: f64, value: Option<f64>) -> String {
    let value = match value {
        Some(value) => format_currency(value),
        None => "n/a".to_string(),
    };
    format!("{label} | {rate:.2}% | {value}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::scenario_projection::project_scenarios;
    use crate::test_support::build_history;

    #[test]
    fn format_projection_report_includes_header_and_table() {
        let records = build_history(&[(1000.0, 1.0), (2100.0, 3.0)]);
        let projection = project_scenarios(&records, 3, 1000.0).unwrap();
        let output = format_projection_report("datos.csv", &projection);

        assert!(output.contains("Projection Report"));
        assert!(output.contains("Data source: datos.csv"));
        assert!(output.contains("Recorded periods: 2"));
        assert!(output.contains("Horizon: 3"));
        assert!(output.contains("Contribution: $1,000"));
        assert!(output.contains("Returns: min 1.00% | mean 2.00% | max 3.00%"));
        assert!(output.contains("Scenario | Rate | Final value"));
        assert!(output.contains("Optimistic | 3.00% | "));
        assert!(output.contains("Mean | 2.00% | $5,202"));
        assert!(output.contains("Pessimistic | 1.00% | "));
    }
}
