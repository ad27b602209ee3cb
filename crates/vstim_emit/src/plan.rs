//! The harness plan: a structured description of the testbench to emit.
//!
//! [`build_plan`] turns an [`Extraction`] into a flat item sequence. All
//! decisions are made here, including drawing the random stimulus values,
//! so the plan pins the output completely and rendering is a pure
//! formatting pass. Two plans built from the same extraction and the same
//! seed are equal.

use rand::Rng;
use vstim_extract::Extraction;
use vstim_ir::{Port, PortWidth, ResetLevel};

/// Clock period in time units; the generated toggle uses half of it.
pub const CLOCK_PERIOD: u32 = 10;

/// Delay between consecutive stimulus vectors, and before reset release.
pub const VECTOR_DELAY: u32 = 13;

/// Delay between the last vector and `$stop`.
pub const TAIL_DELAY: u32 = 50;

/// Number of randomized stimulus rounds driven into the module.
pub const STIMULUS_ROUNDS: u32 = 10;

/// The complete plan for one harness file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessPlan {
    /// Top-level items in emission order.
    pub items: Vec<HarnessItem>,
}

/// One top-level element of the harness file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessItem {
    /// The fixed `` `timescale `` directive.
    Timescale,
    /// `module <name>;` opening the testbench module.
    ModuleHeader {
        /// The testbench module name (`<dut>_tb`).
        name: String,
    },
    /// A `reg` declaration backing one module input.
    RegDecl {
        /// Net name, identical to the module port it drives.
        name: String,
        /// Declared width, bounds verbatim.
        width: PortWidth,
    },
    /// A `wire` declaration observing one module output.
    WireDecl {
        /// Net name, identical to the module port it observes.
        name: String,
        /// Declared width, bounds verbatim.
        width: PortWidth,
    },
    /// The device-under-test instantiation.
    Instantiate {
        /// The module under test.
        module: String,
        /// All port names, by-name bound, in source declaration order.
        ports: Vec<String>,
    },
    /// `always #<half> <clock> = ~<clock>;` for sequential modules only.
    ClockToggle {
        /// The clock net name.
        clock: String,
    },
    /// The `initial` block holding the stimulus sequence.
    Initial {
        /// Statements in execution order.
        stmts: Vec<StimStmt>,
    },
    /// `endmodule` closing the testbench.
    EndModule,
}

/// One statement inside the `initial` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StimStmt {
    /// Starts the clock at zero; sequential modules only.
    ClockLow {
        /// The clock net name.
        clock: String,
    },
    /// Initializes one stimulus input to zero.
    InitZero {
        /// Input name.
        name: String,
        /// Width in bits, used as the literal's size prefix.
        bits: u32,
    },
    /// Drives the reset to its asserted level.
    ResetAssert {
        /// Reset name.
        name: String,
        /// Active level; decides the asserted bit.
        level: ResetLevel,
    },
    /// Releases the reset after one vector delay.
    ResetRelease {
        /// Reset name.
        name: String,
        /// Active level; decides the released bit.
        level: ResetLevel,
    },
    /// One stimulus round: a vector delay, then one randomized assignment
    /// per stimulus input.
    Round {
        /// Assignments in declaration order. May be empty, in which case
        /// the round is only a delay.
        assigns: Vec<DriveAssign>,
    },
    /// `$stop` after the tail delay.
    Stop,
}

/// A single randomized input assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveAssign {
    /// Input name.
    pub name: String,
    /// Width in bits, used as the literal's size prefix.
    pub bits: u32,
    /// The value to drive, rendered as an unsized decimal.
    pub value: u128,
}

/// Builds the harness plan for an extracted module.
///
/// Random values for all [`StimStmt::Round`] assignments are drawn from
/// `rng` here, in item order, so a seeded generator reproduces the plan
/// exactly.
pub fn build_plan(extraction: &Extraction, rng: &mut impl Rng) -> HarnessPlan {
    let sig = &extraction.signature;
    let mut items = Vec::new();

    items.push(HarnessItem::Timescale);
    items.push(HarnessItem::ModuleHeader {
        name: format!("{}_tb", sig.name),
    });
    for port in sig.inputs() {
        items.push(HarnessItem::RegDecl {
            name: port.name.clone(),
            width: port.width,
        });
    }
    for port in sig.outputs() {
        items.push(HarnessItem::WireDecl {
            name: port.name.clone(),
            width: port.width,
        });
    }
    items.push(HarnessItem::Instantiate {
        module: sig.name.clone(),
        ports: sig.ports.iter().map(|p| p.name.clone()).collect(),
    });
    if let Some(clock) = &extraction.clock {
        items.push(HarnessItem::ClockToggle {
            clock: clock.name.clone(),
        });
    }
    items.push(HarnessItem::Initial {
        stmts: build_stimulus(extraction, rng),
    });
    items.push(HarnessItem::EndModule);

    HarnessPlan { items }
}

fn build_stimulus(extraction: &Extraction, rng: &mut impl Rng) -> Vec<StimStmt> {
    let stim: Vec<&Port> = extraction.stimulus_inputs().collect();
    let mut stmts = Vec::new();

    if let Some(clock) = &extraction.clock {
        stmts.push(StimStmt::ClockLow {
            clock: clock.name.clone(),
        });
    }
    for port in &stim {
        stmts.push(StimStmt::InitZero {
            name: port.name.clone(),
            bits: port.width.bits(),
        });
    }
    if let Some(reset) = &extraction.reset {
        stmts.push(StimStmt::ResetAssert {
            name: reset.name.clone(),
            level: reset.active,
        });
        stmts.push(StimStmt::ResetRelease {
            name: reset.name.clone(),
            level: reset.active,
        });
    }
    for _ in 0..STIMULUS_ROUNDS {
        let assigns = stim
            .iter()
            .map(|port| {
                let bits = port.width.bits();
                DriveAssign {
                    name: port.name.clone(),
                    bits,
                    value: sample_value(bits, rng),
                }
            })
            .collect();
        stmts.push(StimStmt::Round { assigns });
    }
    stmts.push(StimStmt::Stop);

    stmts
}

/// Draws a uniform value in `[0, 2^bits)`.
///
/// Widths of 128 bits and beyond saturate to a full random `u128`; the
/// decimal literal stays well-formed, it just no longer covers the port's
/// upper bits.
fn sample_value(bits: u32, rng: &mut impl Rng) -> u128 {
    if bits >= 128 {
        rng.gen()
    } else {
        rng.gen_range(0..1u128 << bits)
    }
}
