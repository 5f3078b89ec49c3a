use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

const PERIODS_CSV: &str = "period,contribution,return_pct,valuation,gross_savings,projected_total
1,100,2.0,1000,100,1000
";

#[test]
fn project_writes_yaml_and_prints_report() {
    let input_file = assert_fs::NamedTempFile::new("datos_ahorro.csv").unwrap();
    input_file.write_str(PERIODS_CSV).unwrap();
    let output_file = assert_fs::NamedTempFile::new("projection.yaml").unwrap();

    let input_arg = input_file.path().to_str().unwrap();
    let output_arg = output_file.path().to_str().unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("projections");
    cmd.args(["project", "-i", input_arg, "-o", output_arg, "-t", "3"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Projection Report"))
        .stdout(predicate::str::contains("Mean | 2.00% | $1,350"))
        .stdout(predicate::str::contains("Projection for 3 periods written to"));

    let output = fs::read_to_string(output_arg).unwrap();
    assert!(output.contains("horizon: 3"));
    assert!(output.contains("mean: 1224.0"));
}

#[test]
fn project_reports_malformed_period_data() {
    let input_file = assert_fs::NamedTempFile::new("broken.csv").unwrap();
    input_file
        .write_str("period,contribution,return_pct,valuation\n1,100,oops,1000\n")
        .unwrap();
    let output_file = assert_fs::NamedTempFile::new("broken.yaml").unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("projections");
    cmd.args([
        "project",
        "-i",
        input_file.path().to_str().unwrap(),
        "-o",
        output_file.path().to_str().unwrap(),
        "-t",
        "3",
    ]);

    cmd.assert()
        .stderr(predicate::str::contains("Failed to project scenarios"))
        .stderr(predicate::str::contains("InvalidField"));
    output_file.assert(predicate::path::missing());
}
