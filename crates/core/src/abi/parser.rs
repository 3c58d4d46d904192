//! ABI parsers: one view over the legacy flat format and the interface-grouped
//! Cairo 1 format.

use super::types::{Abi, AbiEntry, FunctionAbi};
use crate::calldata::cairo::{is_cairo1_type, is_len};
use starkcall_common::AbiError;
use tracing::{debug, warn};

/// Common surface of the ABI parsers
pub trait AbiParser: Send + Sync {
    /// Number of arguments a caller passes for `method`
    fn method_inputs_length(&self, method: &FunctionAbi) -> usize;

    /// Locate a function signature by name
    fn get_method(&self, name: &str) -> Result<Option<&FunctionAbi>, AbiError>;

    /// The ABI flattened into the legacy shape
    fn legacy_format(&self) -> Abi;
}

/// Parser for Cairo 0 and early Cairo 1 ABIs (flat list of entries)
#[derive(Debug, Clone)]
pub struct AbiParser1 {
    abi: Abi,
}

impl AbiParser1 {
    pub fn new(abi: Abi) -> Self {
        Self { abi }
    }
}

impl AbiParser for AbiParser1 {
    /// Length parameters are implied by the array that follows them
    fn method_inputs_length(&self, method: &FunctionAbi) -> usize {
        method.inputs.iter().filter(|input| !is_len(&input.name)).count()
    }

    fn get_method(&self, name: &str) -> Result<Option<&FunctionAbi>, AbiError> {
        let found = self.abi.iter().find_map(|entry| callable_named(entry, name));
        if found.is_none() {
            warn!("Method {} not found in legacy abi", name);
        }
        Ok(found)
    }

    fn legacy_format(&self) -> Abi {
        self.abi.clone()
    }
}

/// Parser for Cairo 1 ABIs that group functions under `interface` entries
#[derive(Debug, Clone)]
pub struct AbiParser2 {
    abi: Abi,
}

impl AbiParser2 {
    pub fn new(abi: Abi) -> Self {
        Self { abi }
    }
}

impl AbiParser for AbiParser2 {
    fn method_inputs_length(&self, method: &FunctionAbi) -> usize {
        method.inputs.len()
    }

    /// Only the first `interface` entry is searched.
    fn get_method(&self, name: &str) -> Result<Option<&FunctionAbi>, AbiError> {
        let interface = self
            .abi
            .iter()
            .find_map(|entry| match entry {
                AbiEntry::Interface(interface) => Some(interface),
                _ => None,
            })
            .ok_or_else(|| AbiError::MissingInterface {
                method: name.to_string(),
            })?;

        debug!("Looking up {} in interface {}", name, interface.name);
        let found = interface
            .items
            .iter()
            .find_map(|item| callable_named(item, name));
        if found.is_none() {
            warn!("Method {} not found in interface {}", name, interface.name);
        }
        Ok(found)
    }

    fn legacy_format(&self) -> Abi {
        self.abi.to_legacy_format()
    }
}

/// Callable signature of `entry` when it carries `name`. Structs and events
/// sharing the name are skipped.
fn callable_named<'a>(entry: &'a AbiEntry, name: &str) -> Option<&'a FunctionAbi> {
    entry.as_function().filter(|f| f.name == name)
}

/// Detect the ABI generation.
///
/// * `2`: Cairo 1 with `interface` entries
/// * `1`: Cairo 1 flat list (first typed function uses `core::` types)
/// * `0`: Cairo 0, or no typed function to decide from
pub fn abi_version(abi: &Abi) -> u8 {
    if abi.has_interface() {
        return 2;
    }

    let probe = abi
        .iter()
        .filter_map(|entry| match entry {
            AbiEntry::Function(f) => Some(f),
            _ => None,
        })
        .find(|f| !f.inputs.is_empty() || !f.outputs.is_empty());

    match probe {
        Some(f) => {
            let first_type = f
                .inputs
                .first()
                .map(|p| p.ty.as_str())
                .or_else(|| f.outputs.first().map(|o| o.ty.as_str()))
                .unwrap_or_default();
            if is_cairo1_type(first_type) {
                1
            } else {
                0
            }
        }
        None => 0,
    }
}

/// Build the parser matching the ABI generation
pub fn create_abi_parser(abi: Abi) -> Box<dyn AbiParser> {
    let version = abi_version(&abi);
    debug!("Detected abi version {}", version);
    match version {
        2 => Box::new(AbiParser2::new(abi)),
        _ => Box::new(AbiParser1::new(abi)),
    }
}
