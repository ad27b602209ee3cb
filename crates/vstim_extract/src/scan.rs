//! Per-line scanner for the declaration forms the extractor understands.
//!
//! The extractor never parses whole Verilog. It looks at each source line in
//! isolation and asks whether the line leads with a `module`, `input`, or
//! `output` declaration. Everything else on the line (trailing commas, the
//! closing `);` of a port list, comments) is ignored once the declared name
//! is captured.

use vstim_ir::{PortDirection, PortWidth};

/// A source line recognized as one of the declaration forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMatch {
    /// A `module <name>` header line.
    Module {
        /// The declared module name.
        name: String,
    },
    /// An `input` or `output` declaration line.
    PortDecl {
        /// Direction from the leading keyword.
        direction: PortDirection,
        /// Declared width; [`PortWidth::Scalar`] when no range was written.
        width: PortWidth,
        /// The first declared name on the line.
        name: String,
        /// `true` when a comma and at least one further name follow the
        /// captured one. The extra names are never captured.
        extra_names: bool,
    },
}

/// Scans one source line against the declaration grammar.
///
/// Grammar, case-sensitive, anchored after optional leading whitespace:
///
/// ```text
/// module <identifier>
/// input  [wire] [ "[" MSB ":" LSB "]" ] <identifier>
/// output [reg]  [ "[" MSB ":" LSB "]" ] <identifier>
/// ```
///
/// The keyword must be separated from what follows by whitespace. Range
/// bounds are unsigned decimals with whitespace permitted around the colon
/// only. The storage-class keyword is direction-specific (`wire` after
/// `input`, `reg` after `output`); any other token in that position is
/// captured as the port name. Lines that fail the grammar return `None`.
pub fn scan_line(line: &str) -> Option<LineMatch> {
    let mut s = LineScanner::new(line);
    s.skip_whitespace();
    let keyword = s.scan_identifier()?;
    if !s.peek().is_ascii_whitespace() {
        return None;
    }
    s.skip_whitespace();
    match keyword {
        "module" => {
            let name = s.scan_identifier()?;
            Some(LineMatch::Module {
                name: name.to_string(),
            })
        }
        "input" => s.scan_port_tail(PortDirection::Input, "wire"),
        "output" => s.scan_port_tail(PortDirection::Output, "reg"),
        _ => None,
    }
}

/// Returns the declaration keyword a line leads with, if any.
///
/// This only inspects the first token; the rest of the grammar may still
/// fail. The extraction pass uses it to tell lines that are simply not
/// declarations apart from declaration lines it had to drop.
pub fn decl_keyword(line: &str) -> Option<&'static str> {
    let mut s = LineScanner::new(line);
    s.skip_whitespace();
    match s.scan_identifier() {
        Some("module") => Some("module"),
        Some("input") => Some("input"),
        Some("output") => Some("output"),
        _ => None,
    }
}

struct LineScanner<'a> {
    line: &'a [u8],
    pos: usize,
}

impl<'a> LineScanner<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            line: line.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> u8 {
        if self.pos < self.line.len() {
            self.line[self.pos]
        } else {
            0
        }
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.line.len() && self.line[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn scan_identifier(&mut self) -> Option<&'a str> {
        if !is_ident_start(self.peek()) {
            return None;
        }
        let start = self.pos;
        while self.pos < self.line.len() && is_ident_char(self.line[self.pos]) {
            self.pos += 1;
        }
        Some(std::str::from_utf8(&self.line[start..self.pos]).unwrap_or(""))
    }

    fn scan_number(&mut self) -> Option<u32> {
        let start = self.pos;
        while self.pos < self.line.len() && self.line[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        if self.pos == start {
            return None;
        }
        std::str::from_utf8(&self.line[start..self.pos])
            .ok()?
            .parse()
            .ok()
    }

    /// `[MSB:LSB]` with whitespace allowed around the colon but not inside
    /// the brackets. The cursor is left wherever matching stopped; callers
    /// rewind on `None`.
    fn scan_range(&mut self) -> Option<(u32, u32)> {
        if self.peek() != b'[' {
            return None;
        }
        self.pos += 1;
        let msb = self.scan_number()?;
        self.skip_whitespace();
        if self.peek() != b':' {
            return None;
        }
        self.pos += 1;
        self.skip_whitespace();
        let lsb = self.scan_number()?;
        if self.peek() != b']' {
            return None;
        }
        self.pos += 1;
        Some((msb, lsb))
    }

    /// Consumes the storage-class keyword only when whitespace separates it
    /// from what follows; otherwise the cursor is restored.
    fn eat_storage(&mut self, keyword: &str) -> bool {
        let save = self.pos;
        match self.scan_identifier() {
            Some(id) if id == keyword && self.peek().is_ascii_whitespace() => {
                self.skip_whitespace();
                true
            }
            _ => {
                self.pos = save;
                false
            }
        }
    }

    /// Matches `[storage] [range] name` after a direction keyword.
    ///
    /// Storage class and range are consumed greedily and given back one at
    /// a time if no identifier remains to serve as the name, so a bare
    /// `input wire` still captures `wire` as the port name.
    fn scan_port_tail(&mut self, direction: PortDirection, storage: &str) -> Option<LineMatch> {
        let start = self.pos;
        let took_storage = self.eat_storage(storage);
        let after_storage = self.pos;

        let mut width = match self.scan_range() {
            Some((msb, lsb)) => {
                self.skip_whitespace();
                PortWidth::Vector { msb, lsb }
            }
            None => {
                self.pos = after_storage;
                PortWidth::Scalar
            }
        };

        let mut name = self.scan_identifier();
        if name.is_none() && width.is_vector() {
            // Range with no name after it: give the range back.
            self.pos = after_storage;
            width = PortWidth::Scalar;
            name = self.scan_identifier();
        }
        if name.is_none() && took_storage {
            // Nothing usable after the storage keyword: it becomes the name.
            self.pos = start;
            width = PortWidth::Scalar;
            name = self.scan_identifier();
        }
        let name = name?;

        // A comma followed by another identifier means the line declares
        // more names than the grammar captures.
        self.skip_whitespace();
        let mut extra_names = false;
        if self.peek() == b',' {
            self.pos += 1;
            self.skip_whitespace();
            extra_names = is_ident_start(self.peek());
        }

        Some(LineMatch::PortDecl {
            direction,
            width,
            name: name.to_string(),
            extra_names,
        })
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
