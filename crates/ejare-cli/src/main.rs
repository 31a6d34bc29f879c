use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use ejare_cli::{Language, OutputFormat, Settings, load_snapshot, render};
use ejare_common::{Field, RawInputs};
use ejare_eval::{Calculator, ZeroBasePolicy};
use ejare_parse::{DigitScript, parse_numeral};
use tracing_subscriber::EnvFilter;

/// Exit status for a calculation that ran but failed on its inputs.
const EXIT_CALC_FAILURE: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "ejare",
    version,
    about = "Rent and deposit (rahn/ejare) increase calculator"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reconcile rent and deposit and solve for next rent or increase percent.
    Calc(CalcArgs),
    /// Print the numeric value of numerals written in any supported script.
    Normalize(NormalizeArgs),
}

#[derive(Parser, Debug)]
struct CalcArgs {
    /// Last year's monthly cash rent.
    #[arg(long, allow_hyphen_values = true)]
    last_year_rent: Option<String>,

    /// Last year's deposit (rahn).
    #[arg(long, allow_hyphen_values = true)]
    last_year_mortgage: Option<String>,

    /// Next year's deposit (rahn).
    #[arg(long, allow_hyphen_values = true)]
    next_year_mortgage: Option<String>,

    /// Effective annual rate in percent, e.g. 37 for 37%.
    #[arg(long, allow_hyphen_values = true)]
    effective_rate: Option<String>,

    /// Next year's monthly cash rent (solves for the increase percent).
    #[arg(long, allow_hyphen_values = true)]
    next_year_rent: Option<String>,

    /// Target total-rent increase in percent (solves for next rent).
    #[arg(long, allow_hyphen_values = true)]
    rent_increase_percent: Option<String>,

    /// YAML or JSON snapshot of the input fields. Flags override it.
    #[arg(short = 'i', long = "input")]
    input: Option<PathBuf>,

    /// YAML settings file (`calc` and `display` sections).
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,

    /// Digit script for output: persian, latin or arabic.
    #[arg(long, value_parser = parse_digits)]
    digits: Option<DigitScript>,

    /// Message language: fa or en.
    #[arg(long, value_parser = parse_language)]
    lang: Option<Language>,

    /// Treat a zero previous total as an error in percent mode too.
    #[arg(long)]
    strict_zero_base: bool,
}

#[derive(Parser, Debug)]
struct NormalizeArgs {
    /// Numerals to normalize.
    #[arg(required = true, allow_hyphen_values = true)]
    numerals: Vec<String>,

    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
}

fn parse_digits(s: &str) -> Result<DigitScript, String> {
    DigitScript::parse(s).ok_or_else(|| format!("unknown digit script `{s}`"))
}

fn parse_language(s: &str) -> Result<Language, String> {
    Language::parse(s).ok_or_else(|| format!("unknown language `{s}`"))
}

fn main() -> ExitCode {
    init_tracing();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return usage_exit(&err),
    };
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Exit code 2 is reserved for calculation failures, so clap's own usage
/// errors are remapped to 1.
fn usage_exit(err: &clap::Error) -> ExitCode {
    if let Err(io) = err.print() {
        eprintln!("error: {io}");
    }
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Calc(args) => run_calc(args),
        Command::Normalize(args) => run_normalize(args),
    }
}

fn run_calc(args: CalcArgs) -> Result<ExitCode> {
    let mut settings = match &args.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading settings");
            Settings::load(path).context("loading settings")?
        }
        None => Settings::default(),
    };
    if let Some(digits) = args.digits {
        settings.display.digits = digits;
    }
    if let Some(lang) = args.lang {
        settings.display.language = lang;
    }
    if args.strict_zero_base {
        settings.calc.zero_base_policy = ZeroBasePolicy::Reject;
    }

    let mut raw = match &args.input {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading snapshot");
            load_snapshot(path).context("loading input snapshot")?
        }
        None => RawInputs::new(),
    };
    apply_flags(&mut raw, &args);

    let result = Calculator::new(settings.calc.clone()).calculate(&raw);
    println!("{}", render(&result, args.format, &settings.display)?);

    Ok(match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::from(EXIT_CALC_FAILURE),
    })
}

fn apply_flags(raw: &mut RawInputs, args: &CalcArgs) {
    let flags = [
        (Field::LastYearRent, &args.last_year_rent),
        (Field::LastYearMortgage, &args.last_year_mortgage),
        (Field::NextYearMortgage, &args.next_year_mortgage),
        (Field::EffectiveRate, &args.effective_rate),
        (Field::NextYearRent, &args.next_year_rent),
        (Field::RentIncreasePercent, &args.rent_increase_percent),
    ];
    for (field, value) in flags {
        if let Some(value) = value {
            raw.set(field, value.as_str());
        }
    }
}

fn run_normalize(args: NormalizeArgs) -> Result<ExitCode> {
    match args.format {
        OutputFormat::Text => {
            for numeral in &args.numerals {
                println!("{}", parse_numeral(numeral).unwrap_or(0.0));
            }
        }
        OutputFormat::Json => {
            let rows: Vec<_> = args
                .numerals
                .iter()
                .map(|numeral| {
                    let parsed = parse_numeral(numeral);
                    serde_json::json!({
                        "input": numeral,
                        "value": parsed.unwrap_or(0.0),
                        "parsed": parsed.is_some(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }
    Ok(ExitCode::SUCCESS)
}
