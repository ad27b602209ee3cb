//! The extracted module signature: a name plus its ports in declaration order.

use crate::port::Port;
use serde::{Deserialize, Serialize};

/// A module's extracted boundary: its name and its ports in declaration order.
///
/// Declaration order is load-bearing: it fixes the order of the harness's
/// reg/wire declarations and of the instantiation's port bindings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSignature {
    /// The module name as captured from the `module` line.
    pub name: String,
    /// All recognized ports, in source declaration order.
    pub ports: Vec<Port>,
}

impl ModuleSignature {
    /// Creates an empty signature for the given module name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ports: Vec::new(),
        }
    }

    /// Iterates the input ports in declaration order.
    pub fn inputs(&self) -> impl Iterator<Item = &Port> {
        self.ports.iter().filter(|p| p.is_input())
    }

    /// Iterates the output ports in declaration order.
    pub fn outputs(&self) -> impl Iterator<Item = &Port> {
        self.ports.iter().filter(|p| p.is_output())
    }

    /// Returns `true` if a port with the given name is already present.
    pub fn contains(&self, name: &str) -> bool {
        self.ports.iter().any(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::{PortDirection, PortWidth};

    fn port(name: &str, direction: PortDirection) -> Port {
        Port {
            name: name.into(),
            direction,
            width: PortWidth::Scalar,
        }
    }

    #[test]
    fn filtered_accessors_preserve_order() {
        let mut sig = ModuleSignature::new("mix");
        sig.ports.push(port("a", PortDirection::Input));
        sig.ports.push(port("y", PortDirection::Output));
        sig.ports.push(port("b", PortDirection::Input));
        sig.ports.push(port("z", PortDirection::Output));

        let inputs: Vec<&str> = sig.inputs().map(|p| p.name.as_str()).collect();
        let outputs: Vec<&str> = sig.outputs().map(|p| p.name.as_str()).collect();
        assert_eq!(inputs, ["a", "b"]);
        assert_eq!(outputs, ["y", "z"]);
    }

    #[test]
    fn contains_by_name() {
        let mut sig = ModuleSignature::new("m");
        sig.ports.push(port("clk", PortDirection::Input));
        assert!(sig.contains("clk"));
        assert!(!sig.contains("rst"));
    }

    #[test]
    fn signature_serde_roundtrip() {
        let mut sig = ModuleSignature::new("adder");
        sig.ports.push(Port {
            name: "a".into(),
            direction: PortDirection::Input,
            width: PortWidth::Vector { msb: 3, lsb: 0 },
        });
        let json = serde_json::to_string(&sig).unwrap();
        let restored: ModuleSignature = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, sig);
    }
}
