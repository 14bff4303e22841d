use std::env;
use std::path::Path;
use std::process::ExitCode;

use timeline_tool::{generate_gantt, load_records_from_csv, process_timeline, save_mermaid_to_file};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    eprintln!("Usage: cli <input.csv> <output.mmd> [--title <title>]");
    eprintln!();
    eprintln!("Reads a project timeline table and writes a Mermaid Gantt chart.");
    eprintln!("The chart title defaults to one derived from the input file name.");
}

/// Derive a chart title from the input file name, e.g.
/// `q3_delivery-plan.csv` becomes `Q3 Delivery Plan`.
fn title_from_filename(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("");
    if stem.is_empty() {
        return "Project Timeline".to_string();
    }

    stem.replace(['_', '-'], " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut positional: Vec<&str> = Vec::new();
    let mut title: Option<String> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--title" => match iter.next() {
                Some(value) => title = Some(value.clone()),
                None => {
                    eprintln!("--title requires a value");
                    return ExitCode::from(2);
                }
            },
            "--help" | "-h" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            other => positional.push(other),
        }
    }

    let [input, output] = positional.as_slice() else {
        print_usage();
        return ExitCode::from(2);
    };
    let input_path = Path::new(input);
    let output_path = Path::new(output);

    if output_path.extension().and_then(|ext| ext.to_str()) != Some("mmd") {
        eprintln!("output file must have a .mmd extension: {output}");
        return ExitCode::from(2);
    }

    let records = match load_records_from_csv(input_path) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("failed to load '{input}': {err}");
            return ExitCode::FAILURE;
        }
    };

    if records.is_empty() {
        println!("input table is empty; nothing to render");
        return ExitCode::SUCCESS;
    }

    let result = process_timeline(&records);
    for warning in &result.warnings {
        eprintln!("warning: {warning}");
    }

    if result.entries.is_empty() {
        eprintln!("no renderable schedule entries in '{input}'");
        return ExitCode::FAILURE;
    }

    let title = title.unwrap_or_else(|| title_from_filename(input_path));
    let mermaid = generate_gantt(&result.entries, &title);

    if let Err(err) = save_mermaid_to_file(&mermaid, output_path) {
        eprintln!("failed to write '{output}': {err}");
        return ExitCode::FAILURE;
    }

    println!(
        "wrote {} schedule entries to {output}",
        result.entries.len()
    );
    ExitCode::SUCCESS
}
