use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn ejare() -> Command {
    Command::cargo_bin("ejare").expect("binary should build")
}

fn scenario_args() -> [&'static str; 8] {
    [
        "--effective-rate",
        "20",
        "--last-year-rent",
        "1,000,000",
        "--last-year-mortgage",
        "10,000,000",
        "--next-year-mortgage",
        "12,000,000",
    ]
}

#[test]
fn calc_by_next_rent_in_english() {
    ejare()
        .arg("calc")
        .args(scenario_args())
        .args(["--next-year-rent", "1200000", "--lang", "en", "--digits", "latin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1,166,667 Toman"))
        .stdout(predicate::str::contains("Total rent increase: 20.00%"));
}

#[test]
fn calc_by_percent_defaults_to_persian() {
    ejare()
        .arg("calc")
        .args(scenario_args())
        .args(["--rent-increase-percent", "۲۵"])
        .assert()
        .success()
        .stdout(predicate::str::contains("اجاره سال آینده مورد نیاز: ۱٬۲۵۸٬۳۳۳ تومان"));
}

#[test]
fn ambiguous_input_exits_with_two() {
    ejare()
        .arg("calc")
        .args(scenario_args())
        .args(["--next-year-rent", "0", "--rent-increase-percent", "0"])
        .args(["--lang", "en"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("only one"));
}

#[test]
fn negative_rent_json_carries_diagnostics() {
    let out = ejare()
        .args([
            "calc",
            "--effective-rate",
            "10",
            "--next-year-mortgage",
            "50000000",
            "--rent-increase-percent",
            "5",
            "--format",
            "json",
        ])
        .assert()
        .code(2)
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["ok"], false);
    assert_eq!(value["error"]["kind"], "negative_required_rent");
    assert_eq!(value["error"]["extra"]["deposit_delta"], 50_000_000.0);
    let required = value["error"]["extra"]["required_rent"].as_f64().unwrap();
    assert!((required + 416_666.67).abs() < 0.01);
}

#[test]
fn snapshot_file_with_flag_override() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(
        file,
        "effectiveRate: \"۲۰\"\nlastYearRent: 1000000\nlastYearMortgage: 10000000\nnextYearMortgage: 12000000\nnextYearRent: 999"
    )
    .unwrap();

    ejare()
        .arg("calc")
        .arg("--input")
        .arg(file.path())
        .args(["--next-year-rent", "1,200,000", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mode\": \"by_next_rent\""))
        .stdout(predicate::str::contains("\"solved\": \"۲۰٫۰۰\""));
}

#[test]
fn strict_config_rejects_zero_base() {
    let mut config = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(config, "calc:\n  zero_base_policy: reject\ndisplay:\n  language: en").unwrap();

    ejare()
        .args(["calc", "--effective-rate", "10", "--rent-increase-percent", "5"])
        .arg("--config")
        .arg(config.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("cannot be zero"));
}

#[test]
fn missing_snapshot_is_a_usage_error() {
    ejare()
        .args(["calc", "--input", "/definitely/not/here.yaml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("loading input snapshot"));
}

#[test]
fn normalize_prints_values() {
    ejare()
        .args(["normalize", "۱٬۲۳۴٫۵", "1,234.5", "abc"])
        .assert()
        .success()
        .stdout("1234.5\n1234.5\n0\n");
}

#[test]
fn invalid_flag_value_is_a_usage_error() {
    ejare()
        .args(["calc", "--effective-rate", "20", "--digits", "klingon"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown digit script"));
}

#[test]
fn help_exits_cleanly() {
    ejare()
        .args(["calc", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--effective-rate"));
}

#[test]
fn overflowing_amounts_fail_the_calculation() {
    ejare()
        .args(["calc", "--effective-rate", "1200", "--lang", "en"])
        .args(["--last-year-rent", "1.7e308", "--last-year-mortgage", "1e308"])
        .args(["--next-year-rent", "1000"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("too large"));
}
