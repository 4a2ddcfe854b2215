// Command-line interface for cellmark
//
// This binary opens Markdown documents as notebooks: ordered prose and code cells that write back
// to the same bytes when nothing was edited.
//
// The inspect command shows how a document is split into cells, and is mostly useful when a file
// does not round-trip the way one expects.
//
// Converting:
//
// The conversion needs a to and from pair. The from is auto-detected from the file extension, while being overwrittable by an explicit --from flag.
// Usage:
//  cellmark <input> --to <format> [--from <format>] [--output <file>]  - Convert between formats (default)
//  cellmark convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  cellmark format <input> [--write]       - Re-serialize a Markdown notebook
//  cellmark check <input>...               - Report files that do not survive a round trip
//  cellmark inspect <path> [<transform>]   - Execute a transform (defaults to "cells-summary")
//  cellmark --list-transforms              - List available transforms
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix. Keys that map onto configuration (default-language,
// pretty, show-whitespace) override it; the rest go to the format/transform.
// Example:
//  cellmark notes.md --to json --extra-pretty false

mod transforms;

use cellmark_babel::formats::{JsonFormat, MarkdownFormat};
use cellmark_babel::transforms::{check_round_trip, LineDifference};
use cellmark_babel::{FormatRegistry, Notebook};
use cellmark_config::{CellmarkConfig, Loader, ValueKind};
use clap::{Arg, ArgAction, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["inspect", "convert", "format", "check", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("cellmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Work with Markdown documents as notebooks of prose and code cells")
        .long_about(
            "cellmark splits Markdown documents into notebook cells and writes them back.\n\n\
            Commands:\n  \
            - convert: Move a notebook between formats (markdown, json)\n  \
            - format:  Re-serialize a Markdown notebook\n  \
            - check:   Verify that documents survive a parse/serialize round trip\n  \
            - inspect: View how a document is split into cells\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            cellmark inspect notes.md                  # One line per cell\n  \
            cellmark notes.md --to json                # Cells as JSON (outputs to stdout)\n  \
            cellmark cells.json --to markdown -o n.md  # Back to Markdown\n  \
            cellmark check docs/*.md                   # Find lossy documents",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a cellmark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log parser activity to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect how a Markdown document is split into cells")
                .long_about(
                    "View the cells a Markdown document parses into.\n\n\
                    Transforms:\n  \
                    - cells-summary: one line per cell (default)\n  \
                    - raw-json:      parser output, layout fields included\n  \
                    - cells-json:    notebook cells with their metadata\n\n\
                    Extra Parameters:\n  \
                    --extra-show-whitespace false   Hide blank-line run sizes\n\n\
                    Examples:\n  \
                    cellmark inspect notes.md             # Summary (default)\n  \
                    cellmark inspect notes.md raw-json    # Parser output",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the Markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'cells-summary'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between notebook formats (default command)")
                .long_about(
                    "Convert notebooks between formats.\n\n\
                    Supported formats:\n  \
                    - markdown: Markdown (.md, .markdown)\n  \
                    - json:     Cell records with layout metadata (.json)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    cellmark convert notes.md --to json           # Cells as JSON (stdout)\n  \
                    cellmark convert cells.json --to markdown     # Back to Markdown\n  \
                    cellmark notes.md --to json                   # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Format a Markdown notebook")
                .long_about(
                    "Parse a Markdown notebook and write it back.\n\n\
                    Blank-line layout is kept as found; fence tags are written in their\n\
                    canonical form (for example `py` becomes `py3`).\n\n\
                    Output is written to stdout unless --write is given.\n\n\
                    Examples:\n  \
                    cellmark format notes.md            # Format to stdout\n  \
                    cellmark format notes.md --write    # Rewrite the file",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("write")
                        .long("write")
                        .short('w')
                        .help("Rewrite the input file instead of printing")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Check that Markdown notebooks round-trip unchanged")
                .long_about(
                    "Parse and re-serialize each file, reporting the first line that changes.\n\n\
                    Exits with status 1 when any file differs.\n\n\
                    Examples:\n  \
                    cellmark check notes.md\n  \
                    cellmark check docs/*.md",
                )
                .arg(
                    Arg::new("inputs")
                        .help("Markdown files to check")
                        .required(true)
                        .num_args(1..)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if should_inject_convert(&cleaned_args) {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        &mut extra_params,
    );

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let path = required_arg(sub_matches, "path");
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or("cells-summary");
            handle_inspect_command(path, transform, &extra_params, &config);
        }
        Some(("convert", sub_matches)) => {
            let input = required_arg(sub_matches, "input");
            let to = required_arg(sub_matches, "to");
            let registry = registry_from_config(&config);

            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None => match registry.detect_format_from_filename(input) {
                    Some(detected) => detected,
                    None => {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }
                },
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(&registry, input, &from, to, output, &extra_params);
        }
        Some(("format", sub_matches)) => {
            let input = required_arg(sub_matches, "input");
            handle_format_command(input, sub_matches.get_flag("write"));
        }
        Some(("check", sub_matches)) => {
            let inputs: Vec<&str> = sub_matches
                .get_many::<String>("inputs")
                .map(|values| values.map(|s| s.as_str()).collect())
                .unwrap_or_default();
            handle_check_command(&inputs);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// A first argument that looks like a file rather than a subcommand means an implicit convert.
fn should_inject_convert(args: &[String]) -> bool {
    args.get(1)
        .is_some_and(|first| !first.starts_with('-') && !SUBCOMMANDS.contains(&first.as_str()))
}

fn required_arg<'a>(matches: &'a clap::ArgMatches, name: &str) -> &'a str {
    match matches.get_one::<String>(name) {
        Some(value) => value.as_str(),
        None => {
            eprintln!("Error: missing required argument '{name}'");
            std::process::exit(1);
        }
    }
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_source(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

fn write_output(path: &str, data: &str) {
    fs::write(path, data).unwrap_or_else(|e| {
        eprintln!("Error writing file '{path}': {e}");
        std::process::exit(1);
    });
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    transform: &str,
    extra_params: &HashMap<String, String>,
    config: &CellmarkConfig,
) {
    let source = read_source(path);
    let params = build_inspect_params(config, extra_params);

    let output = transforms::execute_transform(&source, transform, &params).unwrap_or_else(|e| {
        eprintln!("Execution error: {e}");
        std::process::exit(1);
    });

    print!("{output}");
}

/// Formats configured from the loaded settings.
fn registry_from_config(config: &CellmarkConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::new();
    registry.register(MarkdownFormat::new((&config.notebook).into()));
    registry.register(JsonFormat::new((&config.convert.json).into()));
    registry
}

/// Handle the convert command
fn handle_convert_command(
    registry: &FormatRegistry,
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
) {
    if let Err(e) = registry.get(from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = read_source(input);

    let notebook = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });
    debug!(cells = notebook.len(), from, to, "converting notebook");

    let result = registry
        .serialize_with_options(&notebook, to, extra_params)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => write_output(path, &result),
        None => print!("{result}"),
    }
}

/// Handle the format command
fn handle_format_command(input: &str, write: bool) {
    let source = read_source(input);
    let notebook = Notebook::from_markdown(&source);
    let formatted = notebook.to_markdown();

    if !write {
        print!("{formatted}");
    } else if notebook.is_empty() {
        eprintln!("Warning: no cells found in '{input}', leaving it unchanged");
    } else if formatted != source {
        info!(path = input, "rewriting file");
        write_output(input, &formatted);
    }
}

/// Handle the check command
fn handle_check_command(inputs: &[&str]) {
    let mut failures = 0;
    for path in inputs {
        let source = read_source(path);
        let result = check_round_trip(&source);
        match &result.first_difference {
            None => println!("{path}: ok"),
            Some(difference) => {
                failures += 1;
                println!("{}", describe_difference(path, difference));
            }
        }
    }

    if failures > 0 {
        eprintln!("{failures} of {} file(s) changed on round trip", inputs.len());
        std::process::exit(1);
    }
}

fn describe_difference(path: &str, difference: &LineDifference) -> String {
    let show = |line: &Option<String>| match line {
        Some(text) => format!("{text:?}"),
        None => "end of file".to_string(),
    };
    format!(
        "{path}:{}: expected {}, found {}",
        difference.line,
        show(&difference.expected),
        show(&difference.actual)
    )
}

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Available transforms:\n");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
    println!("\nConversion formats:");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        println!("  {format_name}");
    }
}

fn load_cli_config(
    explicit_path: Option<&str>,
    extra_params: &mut HashMap<String, String>,
) -> CellmarkConfig {
    let loader = Loader::new().with_optional_file("cellmark.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    apply_config_overrides(loader, extra_params)
        .build()
        .unwrap_or_else(|err| {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(1);
        })
}

/// Move `--extra-*` keys that name configuration settings onto the loader.
fn apply_config_overrides(loader: Loader, extra_params: &mut HashMap<String, String>) -> Loader {
    let mut loader = loader;
    if let Some(raw) = take_override(extra_params, &["default-language", "language"]) {
        loader = set_override_or_exit(loader, "notebook.default_language", raw);
    }
    if let Some(raw) = extra_params.remove("pretty") {
        let value = parse_bool_arg("pretty", &raw);
        loader = set_override_or_exit(loader, "convert.json.pretty", value);
    }
    if let Some(raw) = extra_params.remove("show-whitespace") {
        let value = parse_bool_arg("show-whitespace", &raw);
        loader = set_override_or_exit(loader, "inspect.show_whitespace", value);
    }
    loader
}

fn set_override_or_exit<V: Into<ValueKind>>(loader: Loader, key: &str, value: V) -> Loader {
    loader.set_override(key, value).unwrap_or_else(|err| {
        eprintln!("Invalid configuration override '{key}': {err}");
        std::process::exit(1);
    })
}

fn build_inspect_params(
    config: &CellmarkConfig,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = HashMap::new();
    params.insert(
        "show-whitespace".to_string(),
        config.inspect.show_whitespace.to_string(),
    );
    for (key, value) in overrides {
        params.insert(key.clone(), value.clone());
    }
    params
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
