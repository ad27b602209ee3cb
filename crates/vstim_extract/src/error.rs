//! Extraction failures and the gap record for lines the extractor dropped.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors that make extraction impossible.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// No `module` declaration line was found in the source.
    #[error("no module declaration found")]
    NoModule,
}

/// A declaration line the extractor saw but could not fully honor.
///
/// Gaps never fail a run and never change the generated harness; they
/// exist so that silently skipped lines stay visible. The CLI prints them
/// under `--verbose`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gap {
    /// 1-based source line number.
    pub line: u32,
    /// What went wrong on that line.
    pub kind: GapKind,
}

/// The ways a declaration line can fall short of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GapKind {
    /// The line leads with a declaration keyword but the rest failed to
    /// match (missing name, malformed or non-numeric range).
    MalformedDecl,
    /// The declaration carries comma-separated names beyond the captured
    /// first one; the extra names were not taken.
    ExtraNames,
    /// The declared name is already present; the line was dropped.
    DuplicatePort,
}

impl fmt::Display for Gap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

impl fmt::Display for GapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            GapKind::MalformedDecl => "declaration did not match the recognized forms",
            GapKind::ExtraNames => "only the first declared name was taken",
            GapKind::DuplicatePort => "duplicate port name, line dropped",
        };
        f.write_str(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_module_display() {
        let e = ExtractError::NoModule;
        assert_eq!(e.to_string(), "no module declaration found");
    }

    #[test]
    fn gap_display_includes_line_number() {
        let g = Gap {
            line: 12,
            kind: GapKind::DuplicatePort,
        };
        assert_eq!(g.to_string(), "line 12: duplicate port name, line dropped");
    }

    #[test]
    fn gap_serde_roundtrip() {
        let g = Gap {
            line: 3,
            kind: GapKind::ExtraNames,
        };
        let json = serde_json::to_string(&g).unwrap();
        let restored: Gap = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, g);
    }
}
