//! vstim, a randomized testbench generator for Verilog modules.
//!
//! Reads a Verilog source file, extracts the first module's port interface,
//! and writes a companion `_tb` file that instantiates the module, sequences
//! its clock and reset where those inputs are recognized by name, and drives
//! the remaining inputs with rounds of randomized stimulus.

#![warn(missing_docs)]

mod generate;

use std::process;

use clap::Parser;

/// Generate a randomized-stimulus testbench for a Verilog module.
#[derive(Parser, Debug)]
#[command(name = "vstim", version, about = "Verilog testbench generator")]
pub struct Cli {
    /// Path to the Verilog source containing the module to harness.
    pub input: String,

    /// Destination for the generated testbench. Defaults to the input path
    /// with `_tb` inserted before the extension.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Seed for the stimulus generator. Equal seeds reproduce the generated
    /// file byte for byte.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Suppress all output except errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Also print the extracted ports and any dropped declaration lines.
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    match generate::run(&cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_input_only() {
        let cli = Cli::parse_from(["vstim", "adder.v"]);
        assert_eq!(cli.input, "adder.v");
        assert!(cli.output.is_none());
        assert!(cli.seed.is_none());
        assert!(!cli.quiet);
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_seed() {
        let cli = Cli::parse_from(["vstim", "adder.v", "--seed", "42"]);
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn parse_output_long_and_short() {
        let cli = Cli::parse_from(["vstim", "adder.v", "--output", "tb/out.v"]);
        assert_eq!(cli.output.as_deref(), Some("tb/out.v"));

        let cli = Cli::parse_from(["vstim", "adder.v", "-o", "out.v"]);
        assert_eq!(cli.output.as_deref(), Some("out.v"));
    }

    #[test]
    fn parse_quiet_and_verbose() {
        let cli = Cli::parse_from(["vstim", "-q", "adder.v"]);
        assert!(cli.quiet);

        let cli = Cli::parse_from(["vstim", "--verbose", "adder.v"]);
        assert!(cli.verbose);
    }

    #[test]
    fn missing_input_is_a_usage_error() {
        assert!(Cli::try_parse_from(["vstim"]).is_err());
    }

    #[test]
    fn non_numeric_seed_rejected() {
        assert!(Cli::try_parse_from(["vstim", "adder.v", "--seed", "abc"]).is_err());
    }
}
