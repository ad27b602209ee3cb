//! Pure text rendering of a [`HarnessPlan`].
//!
//! Layout is part of the output contract: tabs, blank lines, and literal
//! spellings here are what downstream simulators and diff-based checks
//! see. Nothing in this module draws random values or inspects the
//! extraction; the plan already fixed every decision.

use crate::plan::{
    DriveAssign, HarnessItem, HarnessPlan, StimStmt, CLOCK_PERIOD, TAIL_DELAY, VECTOR_DELAY,
};
use vstim_ir::PortWidth;

/// Renders a plan to the complete text of the harness file.
pub fn render(plan: &HarnessPlan) -> String {
    let mut out = String::new();
    for item in &plan.items {
        match item {
            HarnessItem::Timescale => out.push_str("`timescale 1ns/10ps\n\n"),
            HarnessItem::ModuleHeader { name } => {
                out.push_str(&format!("module {name};\n"));
            }
            HarnessItem::RegDecl { name, width } => render_net_decl(&mut out, "reg", name, *width),
            HarnessItem::WireDecl { name, width } => {
                render_net_decl(&mut out, "wire", name, *width)
            }
            HarnessItem::Instantiate { module, ports } => {
                render_instantiation(&mut out, module, ports)
            }
            HarnessItem::ClockToggle { clock } => {
                out.push_str(&format!(
                    "always #{} {clock} = ~{clock};\n",
                    CLOCK_PERIOD / 2
                ));
            }
            HarnessItem::Initial { stmts } => render_initial(&mut out, stmts),
            HarnessItem::EndModule => out.push_str("endmodule\n"),
        }
    }
    out
}

/// One net declaration line. Single-bit nets are declared unranged even
/// when the source wrote a degenerate one-bit range like `[0:0]`.
fn render_net_decl(out: &mut String, keyword: &str, name: &str, width: PortWidth) {
    match width {
        PortWidth::Vector { msb, lsb } if width.bits() > 1 => {
            out.push_str(&format!("{keyword} [{msb}:{lsb}] {name};\n"));
        }
        _ => out.push_str(&format!("{keyword} {name};\n")),
    }
}

fn render_instantiation(out: &mut String, module: &str, ports: &[String]) {
    out.push_str("\n//Module instantiation\n");
    out.push_str(&format!("{module} dut (\n"));
    for (i, port) in ports.iter().enumerate() {
        out.push_str(&format!("\t.{port}({port})"));
        if i + 1 < ports.len() {
            out.push_str(",\n");
        } else {
            out.push_str("\n\t);\n");
        }
    }
    if ports.is_empty() {
        out.push_str("\t);\n");
    }
    out.push('\n');
}

fn render_initial(out: &mut String, stmts: &[StimStmt]) {
    out.push_str("\ninitial begin\n");
    let mut before_rounds = true;
    for stmt in stmts {
        match stmt {
            StimStmt::ClockLow { clock } => {
                out.push_str(&format!("\t{clock} = 1'b0;\n"));
            }
            StimStmt::InitZero { name, bits } => {
                out.push_str(&format!("\t{name} = {bits}'d0;\n"));
            }
            StimStmt::ResetAssert { name, level } => {
                out.push_str(&format!("\t{name} = 1'b{};\n", level.assert_bit()));
            }
            StimStmt::ResetRelease { name, level } => {
                out.push_str(&format!(
                    "\n#{VECTOR_DELAY}\t{name} = 1'b{};\n",
                    level.release_bit()
                ));
            }
            StimStmt::Round { assigns } => {
                // The blank line separating setup from the vector rounds.
                if before_rounds {
                    out.push('\n');
                    before_rounds = false;
                }
                render_round(out, assigns);
            }
            StimStmt::Stop => out.push_str(&format!("\n#{TAIL_DELAY}\t$stop;\n")),
        }
    }
    out.push_str("end\n\n");
}

/// One round: the delay shares a line with the first assignment; further
/// assignments get their own tab-indented lines; a blank line closes the
/// round. An empty round is just the delay.
fn render_round(out: &mut String, assigns: &[DriveAssign]) {
    out.push_str(&format!("#{VECTOR_DELAY}"));
    for a in assigns {
        out.push_str(&format!("\t{} = {}'d{};\n", a.name, a.bits, a.value));
    }
    out.push('\n');
}
