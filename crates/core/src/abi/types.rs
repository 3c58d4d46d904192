//! Type definitions for Starknet contract ABIs.
//!
//! Both historical shapes deserialize into [`Abi`]: the flat Cairo 0 list, and
//! the Cairo 1 list where functions are grouped under `interface` entries.

use serde::{Deserialize, Serialize};
use starkcall_common::AbiError;
use std::collections::HashMap;

/// Struct registry, keyed by the fully qualified struct name
pub type AbiStructs = HashMap<String, StructAbi>;

/// Enum registry, keyed by the fully qualified enum name
pub type AbiEnums = HashMap<String, EnumAbi>;

/// One top-level (or interface-nested) ABI item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AbiEntry {
    Function(FunctionAbi),
    Constructor(FunctionAbi),
    L1Handler(FunctionAbi),
    Struct(StructAbi),
    Enum(EnumAbi),
    Interface(InterfaceAbi),
    Event(EventAbi),
    Impl(ImplAbi),
}

impl AbiEntry {
    pub fn name(&self) -> &str {
        match self {
            AbiEntry::Function(f) | AbiEntry::Constructor(f) | AbiEntry::L1Handler(f) => &f.name,
            AbiEntry::Struct(s) => &s.name,
            AbiEntry::Enum(e) => &e.name,
            AbiEntry::Interface(i) => &i.name,
            AbiEntry::Event(e) => &e.name,
            AbiEntry::Impl(i) => &i.name,
        }
    }

    /// The signature of any callable entry (function, constructor, l1 handler)
    pub fn as_function(&self) -> Option<&FunctionAbi> {
        match self {
            AbiEntry::Function(f) | AbiEntry::Constructor(f) | AbiEntry::L1Handler(f) => Some(f),
            _ => None,
        }
    }
}

/// Declared function parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiParam {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl AbiParam {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Declared return value. Cairo 1 outputs carry no name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionAbi {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<AbiParam>,
    #[serde(default)]
    pub outputs: Vec<AbiOutput>,
    #[serde(
        default,
        alias = "stateMutability",
        skip_serializing_if = "Option::is_none"
    )]
    pub state_mutability: Option<String>,
}

impl FunctionAbi {
    pub fn new(name: impl Into<String>, inputs: Vec<AbiParam>) -> Self {
        Self {
            name: name.into(),
            inputs,
            outputs: Vec::new(),
            state_mutability: None,
        }
    }

    pub fn is_view(&self) -> bool {
        self.state_mutability.as_deref() == Some("view")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructMember {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructAbi {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default)]
    pub members: Vec<StructMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumVariant {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumAbi {
    pub name: String,
    #[serde(default)]
    pub variants: Vec<EnumVariant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceAbi {
    pub name: String,
    #[serde(default)]
    pub items: Vec<AbiEntry>,
}

/// Events are not interpreted here; their body is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventAbi {
    pub name: String,
    #[serde(flatten)]
    pub body: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplAbi {
    pub name: String,
    #[serde(default)]
    pub interface_name: String,
}

/// A contract ABI in either historical format
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Abi(Vec<AbiEntry>);

impl Abi {
    pub fn new(entries: Vec<AbiEntry>) -> Self {
        Self(entries)
    }

    pub fn from_json(json: &str) -> Result<Self, AbiError> {
        serde_json::from_str(json).map_err(|e| AbiError::InvalidJson(e.to_string()))
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, AbiError> {
        serde_json::from_value(value).map_err(|e| AbiError::InvalidJson(e.to_string()))
    }

    pub fn entries(&self) -> &[AbiEntry] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &AbiEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_interface(&self) -> bool {
        self.0.iter().any(|e| matches!(e, AbiEntry::Interface(_)))
    }

    /// Flatten `interface` entries into their items, in place and in order.
    /// Every other entry passes through untouched.
    pub fn to_legacy_format(&self) -> Abi {
        let entries = self
            .0
            .iter()
            .flat_map(|entry| match entry {
                AbiEntry::Interface(interface) => interface.items.clone(),
                other => vec![other.clone()],
            })
            .collect();
        Abi(entries)
    }

    /// Struct declarations, including those nested in interfaces
    pub fn structs(&self) -> AbiStructs {
        self.to_legacy_format()
            .0
            .into_iter()
            .filter_map(|entry| match entry {
                AbiEntry::Struct(s) => Some((s.name.clone(), s)),
                _ => None,
            })
            .collect()
    }

    /// Enum declarations, including those nested in interfaces
    pub fn enums(&self) -> AbiEnums {
        self.to_legacy_format()
            .0
            .into_iter()
            .filter_map(|entry| match entry {
                AbiEntry::Enum(e) => Some((e.name.clone(), e)),
                _ => None,
            })
            .collect()
    }
}

impl From<Vec<AbiEntry>> for Abi {
    fn from(entries: Vec<AbiEntry>) -> Self {
        Self(entries)
    }
}

impl<'a> IntoIterator for &'a Abi {
    type Item = &'a AbiEntry;
    type IntoIter = std::slice::Iter<'a, AbiEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cairo1_abi() -> Abi {
        Abi::from_value(json!([
            { "type": "impl", "name": "ERC20Impl", "interface_name": "openzeppelin::IERC20" },
            {
                "type": "struct",
                "name": "core::integer::u256",
                "members": [
                    { "name": "low", "type": "core::integer::u128" },
                    { "name": "high", "type": "core::integer::u128" }
                ]
            },
            {
                "type": "interface",
                "name": "openzeppelin::IERC20",
                "items": [
                    {
                        "type": "function",
                        "name": "balance_of",
                        "inputs": [{ "name": "account", "type": "core::starknet::contract_address::ContractAddress" }],
                        "outputs": [{ "type": "core::integer::u256" }],
                        "state_mutability": "view"
                    },
                    {
                        "type": "function",
                        "name": "transfer",
                        "inputs": [
                            { "name": "recipient", "type": "core::starknet::contract_address::ContractAddress" },
                            { "name": "amount", "type": "core::integer::u256" }
                        ],
                        "outputs": [{ "type": "core::bool" }],
                        "state_mutability": "external"
                    }
                ]
            },
            {
                "type": "enum",
                "name": "core::bool",
                "variants": [
                    { "name": "False", "type": "()" },
                    { "name": "True", "type": "()" }
                ]
            },
            {
                "type": "event",
                "name": "openzeppelin::Event",
                "kind": "enum",
                "variants": []
            }
        ]))
        .unwrap()
    }

    #[test]
    fn test_deserialize_cairo1() {
        let abi = cairo1_abi();
        assert_eq!(abi.len(), 5);
        assert!(abi.has_interface());
        match &abi.entries()[4] {
            AbiEntry::Event(event) => assert_eq!(event.body["kind"], "enum"),
            other => panic!("Expected event entry, got {:?}", other),
        }
    }

    #[test]
    fn test_legacy_format_flattens_in_place() {
        let legacy = cairo1_abi().to_legacy_format();
        let names: Vec<&str> = legacy.iter().map(|e| e.name()).collect();
        assert_eq!(
            names,
            vec![
                "ERC20Impl",
                "core::integer::u256",
                "balance_of",
                "transfer",
                "core::bool",
                "openzeppelin::Event",
            ]
        );
        assert!(!legacy.has_interface());
    }

    #[test]
    fn test_legacy_format_idempotent_on_flat_abi() {
        let once = cairo1_abi().to_legacy_format();
        let twice = once.to_legacy_format();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_registries() {
        let abi = cairo1_abi();
        let structs = abi.structs();
        assert_eq!(structs["core::integer::u256"].members.len(), 2);
        let enums = abi.enums();
        assert_eq!(enums["core::bool"].variants[1].name, "True");
    }

    #[test]
    fn test_legacy_state_mutability_alias() {
        let abi = Abi::from_value(json!([
            {
                "type": "function",
                "name": "get_balance",
                "inputs": [],
                "outputs": [{ "name": "res", "type": "felt" }],
                "stateMutability": "view"
            }
        ]))
        .unwrap();
        assert!(abi.entries()[0].as_function().unwrap().is_view());
    }

    #[test]
    fn test_invalid_json() {
        let err = Abi::from_json("{ not json").unwrap_err();
        assert!(matches!(err, AbiError::InvalidJson(_)));
    }
}
