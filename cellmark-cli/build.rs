use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the transforms from src/transforms.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_TRANSFORMS: &[&str] = &["cells-summary", "raw-json", "cells-json"];

const FORMATS: &[&str] = &["markdown", "json"];

fn file_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("cellmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Work with Markdown documents as notebooks of prose and code cells")
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a cellmark.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("inspect")
                .arg(file_arg("path", "Path to the Markdown file"))
                .arg(
                    Arg::new("transform")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_TRANSFORMS,
                        ))
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("convert")
                .arg(file_arg("input", "Input file path"))
                .arg(
                    Arg::new("from")
                        .long("from")
                        .value_parser(clap::builder::PossibleValuesParser::new(FORMATS)),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .value_parser(clap::builder::PossibleValuesParser::new(FORMATS)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("format")
                .arg(file_arg("input", "Input file path"))
                .arg(
                    Arg::new("write")
                        .long("write")
                        .short('w')
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("check").arg(
                Arg::new("inputs")
                    .num_args(1..)
                    .index(1)
                    .value_hint(ValueHint::FilePath),
            ),
        );

    generate_to(Bash, &mut cmd, "cellmark", &outdir)?;
    generate_to(Zsh, &mut cmd, "cellmark", &outdir)?;
    generate_to(Fish, &mut cmd, "cellmark", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
