//! Clock and reset classification over an extracted signature.

use vstim_ir::{ClockInfo, ModuleSignature, ResetInfo};

/// Scans the signature's inputs for clock and reset signals.
///
/// Inputs are visited in declaration order and matched against the alias
/// sets in [`vstim_ir::control`]. Each kind has a single slot; a later
/// match overwrites an earlier one, so a module declaring both `clk` and
/// `clock` is driven through whichever came last. A name that matches the
/// clock set is never also considered as a reset.
pub fn classify(signature: &ModuleSignature) -> (Option<ClockInfo>, Option<ResetInfo>) {
    let mut clock = None;
    let mut reset = None;
    for port in signature.inputs() {
        if let Some(c) = ClockInfo::match_name(&port.name) {
            clock = Some(c);
        } else if let Some(r) = ResetInfo::match_name(&port.name) {
            reset = Some(r);
        }
    }
    (clock, reset)
}
