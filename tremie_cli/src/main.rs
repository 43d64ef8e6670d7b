//! # Tremie Seal CLI
//!
//! Terminal front-end for the tremie seal thickness calculator.
//!
//! Usage:
//!   tremie_cli [--depth <ft>] [--sf <factor>] [--length <ft> --width <ft>] [--json]
//!   tremie_cli --equations
//!
//! Without `--depth` the values are asked for interactively.
//!
//! Examples:
//!   tremie_cli --depth 10
//!   tremie_cli --depth 20 --sf 2 --length 40 --width 25 --json

use std::env;
use std::io::{self, BufRead, Write};

use tremie_core::calculations::tremie_seal::TremieSealForm;
use tremie_core::equations::generate_equations_markdown;
use tremie_core::report::{CalculationReport, REPORT_SUMMARY};
use tremie_core::CalcError;

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Help,
    Equations,
    Calculate {
        form: TremieSealForm,
        /// Ask for depth and safety factor on stdin
        interactive: bool,
        json_only: bool,
    },
}

/// Parsed command line plus anything worth warning about.
#[derive(Debug, Clone, PartialEq)]
struct ParsedArgs {
    command: Command,
    warnings: Vec<String>,
}

fn parse_args(args: &[String]) -> ParsedArgs {
    let mut form = TremieSealForm::default();
    let mut depth_given = false;
    let mut json_only = false;
    let mut warnings = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--help" | "-h" => {
                return ParsedArgs {
                    command: Command::Help,
                    warnings,
                }
            }
            "--equations" => {
                return ParsedArgs {
                    command: Command::Equations,
                    warnings,
                }
            }
            "--json" => json_only = true,
            "--depth" | "--sf" | "--length" | "--width" => {
                if i + 1 < args.len() {
                    let value = args[i + 1].clone();
                    match flag {
                        "--depth" => {
                            form.depth = value;
                            depth_given = true;
                        }
                        "--sf" => form.safety_factor = value,
                        "--length" => form.length = value,
                        _ => form.width = value,
                    }
                    i += 1;
                } else {
                    warnings.push(format!("Missing value for {}", flag));
                }
            }
            _ => warnings.push(format!("Unknown option: {}", flag)),
        }
        i += 1;
    }

    ParsedArgs {
        command: Command::Calculate {
            form,
            interactive: !depth_given,
            json_only,
        },
        warnings,
    }
}

/// Prompt for a line of text; an empty answer keeps `default`.
fn prompt_text(
    input: &mut impl BufRead,
    prompts: &mut impl Write,
    prompt: &str,
    default: &str,
) -> String {
    if write!(prompts, "{}", prompt).is_err() || prompts.flush().is_err() {
        return default.to_string();
    }

    let mut line = String::new();
    if input.read_line(&mut line).is_err() {
        return default.to_string();
    }

    let answer = line.trim();
    if answer.is_empty() {
        default.to_string()
    } else {
        answer.to_string()
    }
}

/// Ask for depth and safety factor, writing the banner and prompts to `prompts`.
fn prompt_form(form: &mut TremieSealForm, input: &mut impl BufRead, prompts: &mut impl Write) {
    let _ = writeln!(prompts, "Tremie Seal Thickness Calculator");
    let _ = writeln!(prompts, "================================");
    let _ = writeln!(prompts);
    form.depth = prompt_text(input, prompts, "Enter water depth (ft): ", &form.depth);
    let sf_prompt = format!("Enter factor of safety [{}]: ", form.safety_factor);
    form.safety_factor = prompt_text(input, prompts, &sf_prompt, &form.safety_factor);
    let _ = writeln!(prompts);
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let parsed = parse_args(&args);

    for warning in &parsed.warnings {
        eprintln!("{}", warning);
    }

    match parsed.command {
        Command::Help => print_usage(),
        Command::Equations => print!("{}", generate_equations_markdown()),
        Command::Calculate {
            form,
            interactive,
            json_only,
        } => {
            let stdin = io::stdin();
            let outcome = calculate_command(
                form,
                interactive,
                json_only,
                &mut stdin.lock(),
                &mut io::stdout(),
                &mut io::stderr(),
            );
            if let Err(e) = outcome {
                report_error(&e);
                std::process::exit(1);
            }
        }
    }
}

/// Prompt if needed, then write the result to `stdout`.
///
/// With `json_only` the banner and prompts go to `stderr` so that `stdout`
/// carries nothing but the JSON document.
fn calculate_command(
    mut form: TremieSealForm,
    interactive: bool,
    json_only: bool,
    input: &mut impl BufRead,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> Result<(), CalcError> {
    if interactive {
        if json_only {
            prompt_form(&mut form, input, stderr);
        } else {
            prompt_form(&mut form, input, stdout);
        }
    }

    let output = render(&form, json_only)?;
    let _ = stdout.write_all(output.as_bytes());
    let _ = stdout.flush();
    Ok(())
}

/// Text printed for a successful calculation.
fn render(form: &TremieSealForm, json_only: bool) -> Result<String, CalcError> {
    let result = form.compute()?;
    let mut out = String::new();

    if !json_only {
        let report = CalculationReport::new(form, &result);
        out.push_str(REPORT_SUMMARY);
        out.push_str("\n\n");
        out.push_str(&report.to_plain_text());
        out.push('\n');
        out.push_str(&format!(
            "Verification: concrete weight {} factored pressure {}\n",
            if result.is_balanced() { "balances" } else { "does not balance" },
            status_icon(result.is_balanced())
        ));
        out.push('\n');
        out.push_str("JSON Output:\n");
    }

    if let Ok(json) = serde_json::to_string_pretty(&result) {
        out.push_str(&json);
        out.push('\n');
    }
    Ok(out)
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

fn print_usage() {
    println!("Tremie Seal Thickness Calculator");
    println!();
    println!("Usage:");
    println!("  tremie_cli [--depth <ft>] [--sf <factor>] [--length <ft> --width <ft>] [--json]");
    println!("  tremie_cli --equations");
    println!();
    println!("Options:");
    println!("  --depth <ft>      Water depth at tremie level");
    println!("  --sf <factor>     Factor of safety (default 1.5)");
    println!("  --length <ft>     Seal plan length, for quantities");
    println!("  --width <ft>      Seal plan width, for quantities");
    println!("  --json            Print only the JSON result");
    println!("  --equations       Print the equation reference and exit");
    println!("  -h, --help        Show this message");
    println!();
    println!("Without --depth, depth and factor of safety are prompted for.");
}
