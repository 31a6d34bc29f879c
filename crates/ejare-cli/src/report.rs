use clap::ValueEnum;
use ejare_common::{CalculationResult, Solved};
use ejare_parse::{format_amount, format_percent};
use serde_json::json;

use crate::error::CliError;
use crate::messages::{error_message, labels};
use crate::settings::DisplayOptions;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render(
    result: &CalculationResult,
    format: OutputFormat,
    options: &DisplayOptions,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(render_text(result, options)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&render_json(result, options))?),
    }
}

/// One line per figure, amounts rounded to whole units.
pub fn render_text(result: &CalculationResult, options: &DisplayOptions) -> String {
    let locale = options.locale();
    let currency = options.currency_label();

    let calc = match result {
        Ok(calc) => calc,
        Err(err) => return error_message(err, options.language, &locale, currency),
    };

    let l = labels(options.language);
    let amount = |v: f64| format!("{} {currency}", format_amount(v, &locale));
    let mut lines = vec![
        format!("{}: {}", l.previous_total, amount(calc.previous_total_rent)),
        format!("{}: {}", l.next_total, amount(calc.next_total_rent)),
    ];
    match calc.solved {
        Solved::IncreasePercent(p) => lines.push(format!(
            "{}: {}%",
            l.increase_percent,
            format_percent(p, options.percent_decimals, &locale)
        )),
        Solved::NextRent(r) => lines.push(format!("{}: {}", l.required_rent, amount(r))),
    }
    lines.join("\n")
}

/// Raw numbers plus their display strings.
pub fn render_json(result: &CalculationResult, options: &DisplayOptions) -> serde_json::Value {
    let locale = options.locale();
    match result {
        Ok(calc) => {
            let solved_display = match calc.solved {
                Solved::IncreasePercent(p) => {
                    format_percent(p, options.percent_decimals, &locale)
                }
                Solved::NextRent(r) => format_amount(r, &locale),
            };
            json!({
                "ok": true,
                "mode": calc.mode().to_string(),
                "calculation": calc,
                "display": {
                    "previous_total_rent": format_amount(calc.previous_total_rent, &locale),
                    "next_total_rent": format_amount(calc.next_total_rent, &locale),
                    "solved": solved_display,
                },
            })
        }
        Err(err) => json!({
            "ok": false,
            "error": err,
            "message": error_message(err, options.language, &locale, options.currency_label()),
        }),
    }
}
