use crate::{CalcErrorKind, Field, RawInputs, Solved, calculate};

fn approx(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected} ± {tol}, got {actual}"
    );
}

/* ─────────────── shared base: rate 20%, 1M rent, 10M → 12M deposit ─────────────── */
fn base() -> RawInputs {
    RawInputs::new()
        .with(Field::EffectiveRate, "20")
        .with(Field::LastYearRent, "1,000,000")
        .with(Field::LastYearMortgage, "10,000,000")
        .with(Field::NextYearMortgage, "12,000,000")
}

#[test]
fn next_rent_yields_increase_percent() {
    let raw = base().with(Field::NextYearRent, "1,200,000");
    let calc = calculate(&raw).expect("should succeed");

    approx(calc.previous_deposit_equivalent, 166_666.67, 0.01);
    approx(calc.previous_total_rent, 1_166_666.67, 0.01);
    approx(calc.next_deposit_equivalent, 200_000.0, 1e-6);
    approx(calc.next_total_rent, 1_400_000.0, 1e-6);
    match calc.solved {
        Solved::IncreasePercent(p) => approx(p, 20.0, 1e-9),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn increase_percent_yields_next_rent() {
    let raw = base().with(Field::RentIncreasePercent, "25");
    let calc = calculate(&raw).expect("should succeed");

    approx(calc.previous_total_rent, 1_166_666.67, 0.01);
    approx(calc.next_total_rent, 1_458_333.33, 0.01);
    approx(calc.next_deposit_equivalent, 200_000.0, 1e-6);
    approx(calc.next_rent().unwrap(), 1_258_333.33, 0.01);
    assert_eq!(calc.increase_percent(), None);
}

#[test]
fn persian_numerals_give_identical_result() {
    let ascii = base().with(Field::NextYearRent, "1200000");
    let persian = RawInputs::new()
        .with(Field::EffectiveRate, "۲۰")
        .with(Field::LastYearRent, "۱٬۰۰۰٬۰۰۰")
        .with(Field::LastYearMortgage, "۱۰٬۰۰۰٬۰۰۰")
        .with(Field::NextYearMortgage, "۱۲٬۰۰۰٬۰۰۰")
        .with(Field::NextYearRent, "۱٬۲۰۰٬۰۰۰");
    assert_eq!(calculate(&ascii), calculate(&persian));
}

#[test]
fn rent_decrease_is_reported_not_rejected() {
    let raw = base().with(Field::NextYearRent, "500000");
    let calc = calculate(&raw).unwrap();
    assert!(calc.increase_percent().unwrap() < 0.0);
}

/* ─────────────── zero base (pure-deposit prior contract with nothing held) ─────────────── */
fn zero_base() -> RawInputs {
    RawInputs::new()
        .with(Field::EffectiveRate, "10")
        .with(Field::LastYearRent, "0")
        .with(Field::LastYearMortgage, "0")
        .with(Field::NextYearMortgage, "50,000,000")
}

#[test]
fn zero_base_by_next_rent_fails() {
    let raw = zero_base().with(Field::NextYearRent, "100000");
    let err = calculate(&raw).unwrap_err();
    assert_eq!(err.kind, CalcErrorKind::ZeroBaseRent);
}

#[test]
fn zero_base_by_percent_reports_negative_rent() {
    let raw = zero_base().with(Field::RentIncreasePercent, "5");
    let err = calculate(&raw).unwrap_err();
    assert_eq!(err.kind, CalcErrorKind::NegativeRequiredRent);
    approx(err.required_rent().unwrap(), -416_666.67, 0.01);
    assert_eq!(err.deposit_delta(), Some(50_000_000.0));
}

#[test]
fn pure_deposit_history_is_a_valid_base() {
    let raw = RawInputs::new()
        .with(Field::EffectiveRate, "24")
        .with(Field::LastYearMortgage, "100000000")
        .with(Field::NextYearMortgage, "100000000")
        .with(Field::RentIncreasePercent, "10");
    let calc = calculate(&raw).unwrap();
    approx(calc.previous_total_rent, 2_000_000.0, 1e-6);
    approx(calc.next_rent().unwrap(), 200_000.0, 1e-6);
}

/* ─────────────── mode and validation failures ─────────────── */
#[test]
fn both_selectors_are_ambiguous_even_when_zero() {
    let raw = base()
        .with(Field::NextYearRent, "0")
        .with(Field::RentIncreasePercent, "0");
    assert_eq!(calculate(&raw).unwrap_err().kind, CalcErrorKind::AmbiguousMode);
}

#[test]
fn no_selector_is_incomplete() {
    assert_eq!(
        calculate(&base()).unwrap_err().kind,
        CalcErrorKind::IncompleteMode
    );
}

#[test]
fn zero_rate_is_invalid() {
    let raw = base()
        .with(Field::EffectiveRate, "0")
        .with(Field::NextYearRent, "1200000");
    assert_eq!(
        calculate(&raw).unwrap_err().kind,
        CalcErrorKind::InvalidBaseInputs
    );
}

#[test]
fn missing_or_garbage_rate_is_invalid() {
    for rate in ["", "abc", "-5", "۰"] {
        let raw = base()
            .with(Field::EffectiveRate, rate)
            .with(Field::NextYearRent, "1200000");
        assert_eq!(
            calculate(&raw).unwrap_err().kind,
            CalcErrorKind::InvalidBaseInputs,
            "rate {rate:?}"
        );
    }
}

#[test]
fn invalid_rate_wins_over_mode_errors() {
    let raw = RawInputs::new()
        .with(Field::NextYearRent, "1")
        .with(Field::RentIncreasePercent, "1");
    assert_eq!(
        calculate(&raw).unwrap_err().kind,
        CalcErrorKind::InvalidBaseInputs
    );
}

#[test]
fn repeated_calls_are_identical() {
    let raw = base().with(Field::RentIncreasePercent, "12.5");
    let first = calculate(&raw);
    let second = calculate(&raw);
    assert_eq!(first, second);
}

/* ─────────────── overflow: finite inputs, non-finite totals ─────────────── */
fn huge() -> RawInputs {
    RawInputs::new()
        .with(Field::EffectiveRate, "1200")
        .with(Field::LastYearRent, "1.7e308")
        .with(Field::LastYearMortgage, "1e308")
}

#[test]
fn overflowing_totals_are_rejected_in_both_modes() {
    let by_rent = calculate(&huge().with(Field::NextYearRent, "1000"));
    assert_eq!(by_rent.unwrap_err().kind, CalcErrorKind::Overflow);

    let by_percent = calculate(&huge().with(Field::RentIncreasePercent, "5"));
    assert_eq!(by_percent.unwrap_err().kind, CalcErrorKind::Overflow);
}

#[test]
fn overflow_result_is_stable_across_calls() {
    let raw = huge().with(Field::NextYearRent, "1000");
    assert_eq!(calculate(&raw), calculate(&raw));
}
