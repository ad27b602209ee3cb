//! The generation flow: read the module source, extract its signature,
//! synthesize the harness, and write it next to the input.

use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;

use vstim_extract::{extract, Extraction};
use vstim_ir::{Port, PortDirection, PortWidth, ResetLevel};

use crate::Cli;

/// Errors the generation flow reports.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The input file could not be read.
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        /// The input path as given on the command line.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The generated harness could not be written.
    #[error("cannot write '{}': {source}", path.display())]
    Write {
        /// The destination path.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The source contained nothing the extractor recognizes as a module.
    #[error(transparent)]
    Extract(#[from] vstim_extract::ExtractError),
}

/// Runs the generation flow for the parsed command line.
///
/// Reads the input, extracts the module signature, synthesizes the harness
/// text (seeded when `--seed` is given), and writes it to the destination,
/// creating or overwriting the file. Returns exit code 0 on success.
pub fn run(args: &Cli) -> Result<i32, GenerateError> {
    let input = Path::new(&args.input);
    let source = fs::read_to_string(input).map_err(|e| GenerateError::Read {
        path: input.to_path_buf(),
        source: e,
    })?;

    let extraction = extract(&source)?;
    report_extraction(args, &extraction);

    let text = match args.seed {
        Some(seed) => vstim_emit::synthesize(&extraction, &mut StdRng::seed_from_u64(seed)),
        None => vstim_emit::synthesize(&extraction, &mut rand::thread_rng()),
    };

    let destination = match &args.output {
        Some(path) => PathBuf::from(path),
        None => testbench_path(input),
    };
    fs::write(&destination, text).map_err(|e| GenerateError::Write {
        path: destination.clone(),
        source: e,
    })?;

    if !args.quiet {
        eprintln!("     Wrote {}", destination.display());
    }
    Ok(0)
}

/// Prints the extraction summary, and under `--verbose` the full port list
/// and any dropped declaration lines.
fn report_extraction(args: &Cli, extraction: &Extraction) {
    if args.quiet {
        return;
    }
    let sig = &extraction.signature;
    eprintln!(
        "   Extracted module '{}' ({} input(s), {} output(s))",
        sig.name,
        sig.inputs().count(),
        sig.outputs().count()
    );
    if !args.verbose {
        return;
    }
    match &extraction.clock {
        Some(clock) => eprintln!("   Sequential, clock '{}'", clock.name),
        None => eprintln!("   Combinational"),
    }
    if let Some(reset) = &extraction.reset {
        let level = match reset.active {
            ResetLevel::High => "active-high",
            ResetLevel::Low => "active-low",
        };
        eprintln!("   Reset '{}' ({level})", reset.name);
    }
    for port in &sig.ports {
        eprintln!("     {}", describe_port(port));
    }
    for gap in &extraction.gaps {
        eprintln!("warning: {gap}");
    }
}

fn describe_port(port: &Port) -> String {
    let dir = match port.direction {
        PortDirection::Input => "input",
        PortDirection::Output => "output",
    };
    match port.width {
        PortWidth::Vector { msb, lsb } => format!("{dir} [{msb}:{lsb}] {}", port.name),
        PortWidth::Scalar => format!("{dir} {}", port.name),
    }
}

/// Derives the default output path: `_tb` inserted before the extension.
///
/// `adder.v` becomes `adder_tb.v`, `fifo.sv` becomes `fifo_tb.sv`, and an
/// extensionless input gets `_tb` appended.
fn testbench_path(input: &Path) -> PathBuf {
    let stem = match input.file_stem() {
        Some(s) => s.to_string_lossy().into_owned(),
        None => String::from("harness"),
    };
    let file_name = match input.extension() {
        Some(ext) => format!("{stem}_tb.{}", ext.to_string_lossy()),
        None => format!("{stem}_tb"),
    };
    input.with_file_name(file_name)
}
