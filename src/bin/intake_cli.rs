//! intake-cli — batch runner for the conversational intake parser.
//!
//! Usage:
//!   intake-cli --provider anthropic              Run all cases on one provider
//!   intake-cli --provider all                    Compare all providers
//!   intake-cli --provider openai --case <id>     Run a single case
//!   intake-cli --provider all --strict           Decode in strict mode
//!
//! Requires the matching API key environment variables (ANTHROPIC_API_KEY,
//! OPENAI_API_KEY, GEMINI_API_KEY or GOOGLE_API_KEY). Presentation only: the
//! library imposes no dependency on this binary.

use anyhow::{bail, Context};
use futures::future::join_all;

use intake::cases::{self, IntakeCase};
use intake::{
    parse_with, Credentials, DecodeOptions, ParseOptions, ParseOutcome, ProviderKind,
    ReferenceContext,
};

const DIVIDER_WIDTH: usize = 78;

struct Args {
    providers: Vec<ProviderKind>,
    case_id: Option<String>,
    strict: bool,
}

fn print_usage() {
    println!(
        r#"intake-cli -- run the fixed intake scenarios against completion providers

USAGE:
    intake-cli --provider <anthropic|openai|gemini|all> [OPTIONS]

OPTIONS:
    --provider <name>    Which provider(s) to run (required)
    --case <id>          Run only the case with this id
    --strict             Reject unknown keys and inverted windows when decoding
    --help               Show this help message

ENVIRONMENT:
    ANTHROPIC_API_KEY, OPENAI_API_KEY, GEMINI_API_KEY / GOOGLE_API_KEY
    RUST_LOG             Log filter (e.g. intake=debug)"#
    );
}

fn parse_args() -> anyhow::Result<Args> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let mut providers = None;
    let mut case_id = None;
    let mut strict = false;

    let mut i = 0;
    while i < argv.len() {
        match argv[i].as_str() {
            "--provider" => {
                let value = argv
                    .get(i + 1)
                    .context("--provider requires a value")?;
                providers = Some(if value == "all" {
                    ProviderKind::ALL.to_vec()
                } else {
                    vec![value
                        .parse::<ProviderKind>()
                        .map_err(|e| anyhow::anyhow!(e))?]
                });
                i += 2;
            }
            "--case" => {
                case_id = Some(
                    argv.get(i + 1)
                        .context("--case requires a value")?
                        .clone(),
                );
                i += 2;
            }
            "--strict" => {
                strict = true;
                i += 1;
            }
            "--help" | "-h" | "help" => {
                print_usage();
                std::process::exit(0);
            }
            other => bail!("unknown argument: {other} (try --help)"),
        }
    }

    let Some(providers) = providers else {
        print_usage();
        bail!("--provider is required");
    };

    Ok(Args {
        providers,
        case_id,
        strict,
    })
}

/// Format one outcome for human-readable display.
fn format_outcome(outcome: &ParseOutcome, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let mut lines: Vec<String> = Vec::new();

    if let Some(error) = &outcome.error {
        lines.push(format!("{pad}ERROR: {error}"));
        return lines.join("\n");
    }

    if outcome.availability_windows.is_empty() {
        lines.push(format!("{pad}Availability windows: (none extracted)"));
    } else {
        lines.push(format!("{pad}Availability windows:"));
        for (i, window) in outcome.availability_windows.iter().enumerate() {
            let tz_note = window
                .timezone
                .as_deref()
                .map(|tz| format!("  (tz: {tz})"))
                .unwrap_or_default();
            lines.push(format!(
                "{pad}  {}. {}  ->  {}{tz_note}",
                i + 1,
                window.start.to_rfc3339(),
                window.end.to_rfc3339(),
            ));
        }
    }

    let scalars: [(&str, Option<String>); 6] = [
        ("Duration", outcome.duration_minutes.map(|d| format!("{d} min"))),
        ("Title", outcome.title.clone()),
        ("Description", outcome.description.clone()),
        ("Name", outcome.name.clone()),
        ("Email", outcome.email.clone()),
        ("Phone", outcome.phone.clone()),
    ];
    for (label, value) in scalars {
        if let Some(value) = value {
            lines.push(format!("{pad}{label}: {value}"));
        }
    }

    if outcome.missing_fields.is_empty() {
        lines.push(format!(
            "{pad}Missing: (nothing -- all required fields present)"
        ));
    } else {
        let joined = outcome
            .missing_fields
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("{pad}Missing: {joined}"));
    }

    lines.join("\n")
}

fn divider(ch: char) -> String {
    ch.to_string().repeat(DIVIDER_WIDTH)
}

async fn run_case(
    case: &IntakeCase,
    providers: &[ProviderKind],
    credentials: &Credentials,
    options: &ParseOptions,
) -> Vec<(ProviderKind, ParseOutcome)> {
    // Independent stateless calls; fan out concurrently for comparison runs.
    let futures = providers.iter().map(|&kind| async move {
        let outcome = parse_with(
            kind,
            case.input,
            Some(ReferenceContext::default()),
            credentials,
            options,
        )
        .await;
        (kind, outcome)
    });
    join_all(futures).await
}

fn print_case_results(case: &IntakeCase, results: &[(ProviderKind, ParseOutcome)]) {
    println!("{}", divider('='));
    println!("Test: {}", case.id);
    println!("  {}", case.description);
    println!();
    println!("  Input:");
    for line in case.input.lines() {
        println!("    {line}");
    }
    println!();
    println!("  Expected notes:");
    println!("    {}", case.notes);
    println!();

    for (kind, outcome) in results {
        println!("  Result ({kind}):");
        println!("{}", format_outcome(outcome, 4));
        println!();
    }
}

fn print_summary(all_results: &[(&IntakeCase, Vec<(ProviderKind, ParseOutcome)>)]) {
    println!("{}", divider('='));
    println!("SUMMARY");
    println!("{}", divider('='));
    println!();

    let providers: Vec<ProviderKind> = all_results
        .first()
        .map(|(_, results)| results.iter().map(|(k, _)| *k).collect())
        .unwrap_or_default();

    let mut header = format!("{:<30}", "Test Case");
    for kind in &providers {
        header.push_str(&format!(" | {:^14}", kind.as_str()));
    }
    println!("{header}");
    println!("{}", "-".repeat(header.len()));

    for (case, results) in all_results {
        let mut row = format!("{:<30}", case.id);
        for (_, outcome) in results {
            let status = if outcome.is_error() {
                "ERROR".to_string()
            } else {
                format!(
                    "{}w / {}m",
                    outcome.availability_windows.len(),
                    outcome.missing_fields.len()
                )
            };
            row.push_str(&format!(" | {status:^14}"));
        }
        println!("{row}");
    }

    println!();
    println!("Legend: Nw = N availability windows extracted, Nm = N required fields missing");
    println!();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = parse_args()?;
    let credentials = Credentials::from_env();
    let options = ParseOptions {
        decode: DecodeOptions { strict: args.strict },
        ..ParseOptions::default()
    };

    let selected: Vec<&IntakeCase> = match &args.case_id {
        Some(id) => match cases::find(id) {
            Some(case) => vec![case],
            None => bail!("no case found with id '{id}'"),
        },
        None => cases::CASES.iter().collect(),
    };

    let reference = ReferenceContext::default();
    println!();
    println!("Michael -- Conversational Intake Parser");
    println!("Reference datetime: {}", reference.instant.to_rfc3339());
    println!("Reference timezone: {}", reference.timezone);
    println!(
        "Providers: {}",
        args.providers
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("Test cases: {}", selected.len());
    println!();

    let mut all_results = Vec::new();
    for (i, case) in selected.iter().enumerate() {
        println!("[{}/{}] Running: {} ...", i + 1, selected.len(), case.id);
        let results = run_case(case, &args.providers, &credentials, &options).await;
        print_case_results(case, &results);
        all_results.push((*case, results));
    }

    if args.providers.len() > 1 {
        print_summary(&all_results);
    }

    Ok(())
}
