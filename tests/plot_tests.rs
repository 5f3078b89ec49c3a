use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

const PERIODS_CSV: &str = "period,contribution,return_pct,valuation,gross_savings
1,25000,1.2,25300,25000
2,25000,0.8,50700,50000
3,25000,2.1,76800,75000
4,25000,-0.4,101400,100000
";

fn run_plot(extra: &[&str]) -> u64 {
    let input_file = assert_fs::NamedTempFile::new("datos_ahorro.csv").unwrap();
    input_file.write_str(PERIODS_CSV).unwrap();
    let output_file = assert_fs::NamedTempFile::new("chart.png").unwrap();

    let input_arg = input_file.path().to_str().unwrap().to_string();
    let output_arg = output_file.path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::cargo_bin_cmd!("projections");
    cmd.args(["plot", "-i", &input_arg, "-o", &output_arg]);
    cmd.args(extra);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Chart written to"));

    fs::metadata(output_arg).unwrap().len()
}

#[test]
fn plot_creates_growth_png() {
    assert!(run_plot(&[]) > 0);
}

#[test]
fn plot_creates_projection_png() {
    assert!(run_plot(&["-t", "52"]) > 0);
}
