//! Signature extraction from Verilog source text.
//!
//! This crate turns a module's source into the [`Extraction`] the harness
//! synthesizer consumes. Extraction is a single forward pass over the
//! source lines with no backtracking across lines:
//!
//! - [`scan`] matches each line in isolation against the three recognized
//!   declaration forms (`module`, `input`, `output`)
//! - [`extract`] collects the matches into a [`ModuleSignature`], keeping
//!   source declaration order, and records a [`Gap`] for every declaration
//!   line it had to drop or truncate
//! - [`classify`] finds the clock and reset inputs by name
//!
//! Only the absence of a `module` line is fatal. Everything else degrades:
//! unmatched lines are skipped, and the skips that touch declarations stay
//! observable through [`Extraction::gaps`].

#![warn(missing_docs)]

pub mod classify;
pub mod error;
pub mod scan;

pub use error::{ExtractError, Gap, GapKind};
pub use scan::{decl_keyword, scan_line, LineMatch};

use serde::{Deserialize, Serialize};
use vstim_ir::{ClockInfo, ModuleSignature, Port, ResetInfo};

/// Everything the extractor learned about a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// The module name and its ports in declaration order.
    pub signature: ModuleSignature,
    /// The recognized clock input, if any. Present iff the module is
    /// driven as sequential.
    pub clock: Option<ClockInfo>,
    /// The recognized reset input, if any.
    pub reset: Option<ResetInfo>,
    /// Declaration lines that were dropped or truncated.
    pub gaps: Vec<Gap>,
}

impl Extraction {
    /// Returns `true` if a clock input was recognized.
    pub fn is_sequential(&self) -> bool {
        self.clock.is_some()
    }

    /// Iterates the inputs that receive randomized stimulus.
    ///
    /// For a sequential module the clock and, if present, the reset are
    /// excluded: they get dedicated sequencing instead. A module without a
    /// clock keeps all of its inputs here, so a clockless reset is both
    /// sequenced and randomized.
    pub fn stimulus_inputs(&self) -> impl Iterator<Item = &Port> {
        let clock = self.clock.as_ref().map(|c| c.name.as_str());
        let reset = if self.clock.is_some() {
            self.reset.as_ref().map(|r| r.name.as_str())
        } else {
            None
        };
        self.signature
            .inputs()
            .filter(move |p| Some(p.name.as_str()) != clock && Some(p.name.as_str()) != reset)
    }
}

/// Extracts a module signature from Verilog source text.
///
/// The first `module` line names the module; later `module` lines are
/// ignored. Ports accumulate in the order their declaration lines appear.
/// A duplicate port name keeps the first declaration and drops the line
/// with a [`GapKind::DuplicatePort`] gap; a line that leads with a
/// declaration keyword but fails the grammar is dropped with a
/// [`GapKind::MalformedDecl`] gap.
///
/// Fails only when no `module` line is found at all. A module with no
/// recognized ports extracts successfully.
pub fn extract(source: &str) -> Result<Extraction, ExtractError> {
    let mut module_name: Option<String> = None;
    let mut ports: Vec<Port> = Vec::new();
    let mut gaps: Vec<Gap> = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        let lineno = idx as u32 + 1;
        match scan_line(line) {
            Some(LineMatch::Module { name }) => {
                if module_name.is_none() {
                    module_name = Some(name);
                }
            }
            Some(LineMatch::PortDecl {
                direction,
                width,
                name,
                extra_names,
            }) => {
                if ports.iter().any(|p| p.name == name) {
                    gaps.push(Gap {
                        line: lineno,
                        kind: GapKind::DuplicatePort,
                    });
                    continue;
                }
                if extra_names {
                    gaps.push(Gap {
                        line: lineno,
                        kind: GapKind::ExtraNames,
                    });
                }
                ports.push(Port {
                    name,
                    direction,
                    width,
                });
            }
            None => {
                if decl_keyword(line).is_some() {
                    gaps.push(Gap {
                        line: lineno,
                        kind: GapKind::MalformedDecl,
                    });
                }
            }
        }
    }

    let name = module_name.ok_or(ExtractError::NoModule)?;
    let signature = ModuleSignature { name, ports };
    let (clock, reset) = classify::classify(&signature);
    Ok(Extraction {
        signature,
        clock,
        reset,
        gaps,
    })
}
