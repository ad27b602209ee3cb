//! Port definitions for an extracted module interface.
//!
//! A [`Port`] is one signal on the module boundary: a name, a direction,
//! and a [`PortWidth`]. Vector widths keep their declared MSB/LSB verbatim
//! so the generated harness reproduces the original orientation.

use serde::{Deserialize, Serialize};

/// The direction of a port on a module boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortDirection {
    /// An `input` port (driven by the harness).
    Input,
    /// An `output` port (observed by the harness).
    Output,
}

/// The declared width of a port.
///
/// Vector bounds are stored exactly as written: `[7:0]` and `[0:7]` span
/// the same number of bits but are distinct values here, and the emitter
/// reproduces whichever orientation the source declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortWidth {
    /// A single-bit port declared without a bit range.
    Scalar,
    /// A multi-bit port declared with a `[msb:lsb]` range.
    Vector {
        /// The left (most significant) bound, verbatim.
        msb: u32,
        /// The right (least significant) bound, verbatim.
        lsb: u32,
    },
}

impl PortWidth {
    /// Returns the number of bits this width spans.
    ///
    /// `|msb - lsb| + 1` for vectors, `1` for scalars. Always at least 1.
    /// The full-range vector `[4294967295:0]` saturates at `u32::MAX`.
    pub fn bits(self) -> u32 {
        match self {
            PortWidth::Scalar => 1,
            PortWidth::Vector { msb, lsb } => msb.abs_diff(lsb).saturating_add(1),
        }
    }

    /// Returns `true` if this width was declared with a bit range.
    pub fn is_vector(self) -> bool {
        matches!(self, PortWidth::Vector { .. })
    }
}

/// A port in an extracted module interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    /// The port name, unique within a module.
    pub name: String,
    /// The direction of data flow.
    pub direction: PortDirection,
    /// The declared width.
    pub width: PortWidth,
}

impl Port {
    /// Returns `true` if this is an input port.
    pub fn is_input(&self) -> bool {
        self.direction == PortDirection::Input
    }

    /// Returns `true` if this is an output port.
    pub fn is_output(&self) -> bool {
        self.direction == PortDirection::Output
    }
}
