//! Calldata validation against a contract ABI.

pub mod cairo;
pub mod uint256;
mod validate;
mod value;

pub use uint256::Uint256;
pub use validate::validate_fields;
pub use value::{CairoCustomEnum, CallArg};

use crate::abi::{create_abi_parser, Abi, AbiEntry, AbiEnums, AbiParser, AbiStructs, FunctionAbi};
use starkcall_common::{AbiError, Result, ValidationError};
use std::fmt;
use tracing::debug;

/// What the arguments are about to be used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidateType {
    /// Constructor arguments of a deployment
    Deploy,
    /// Read-only (`view`) call
    Call,
    /// State-changing invocation
    Invoke,
}

impl fmt::Display for ValidateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidateType::Deploy => write!(f, "DEPLOY"),
            ValidateType::Call => write!(f, "CALL"),
            ValidateType::Invoke => write!(f, "INVOKE"),
        }
    }
}

/// A contract ABI prepared for argument validation: the matching parser, the
/// flattened view and the struct/enum registries.
pub struct CallData {
    parser: Box<dyn AbiParser>,
    abi: Abi,
    structs: AbiStructs,
    enums: AbiEnums,
}

impl CallData {
    pub fn new(abi: Abi) -> Self {
        let parser = create_abi_parser(abi);
        let abi = parser.legacy_format();
        let structs = abi.structs();
        let enums = abi.enums();
        debug!(
            "Prepared calldata for abi with {} entries, {} structs, {} enums",
            abi.len(),
            structs.len(),
            enums.len()
        );
        Self {
            parser,
            abi,
            structs,
            enums,
        }
    }

    /// The ABI in legacy (flat) format
    pub fn abi(&self) -> &Abi {
        &self.abi
    }

    pub fn parser(&self) -> &dyn AbiParser {
        self.parser.as_ref()
    }

    pub fn structs(&self) -> &AbiStructs {
        &self.structs
    }

    pub fn enums(&self) -> &AbiEnums {
        &self.enums
    }

    /// Check that `method` exists for this kind of use and that `args` fit its
    /// declared inputs.
    pub fn validate(&self, kind: ValidateType, method: &str, args: &[CallArg]) -> Result<()> {
        debug!("Validating {} of {} with {} args", kind, method, args.len());

        if kind != ValidateType::Deploy {
            let want_view = kind == ValidateType::Call;
            let available = self
                .functions()
                .any(|f| f.name == method && f.is_view() == want_view);
            if !available {
                let label = if want_view { "viewable" } else { "invocable" };
                return Err(AbiError::MethodNotFound {
                    kind: label.to_string(),
                    method: method.to_string(),
                }
                .into());
            }
        }

        let abi_method = match self.find_method(kind, method) {
            Some(found) => found,
            // deploying a contract without constructor takes no arguments
            None if kind == ValidateType::Deploy && method == "constructor" && args.is_empty() => {
                return Ok(())
            }
            None => {
                return Err(AbiError::MethodNotFound {
                    kind: kind.to_string().to_lowercase(),
                    method: method.to_string(),
                }
                .into())
            }
        };

        let expected = self.parser.method_inputs_length(abi_method);
        if args.len() != expected {
            return Err(ValidationError::ArgumentCount {
                expected,
                got: args.len(),
            }
            .into());
        }

        validate_fields(abi_method, args, &self.structs, &self.enums)?;
        Ok(())
    }

    fn functions(&self) -> impl Iterator<Item = &FunctionAbi> {
        self.abi.iter().filter_map(|entry| match entry {
            AbiEntry::Function(f) => Some(f),
            _ => None,
        })
    }

    fn find_method(&self, kind: ValidateType, method: &str) -> Option<&FunctionAbi> {
        self.abi.iter().find_map(|entry| match (kind, entry) {
            (ValidateType::Deploy, AbiEntry::Constructor(f)) if f.name == method => Some(f),
            (ValidateType::Call | ValidateType::Invoke, AbiEntry::Function(f)) if f.name == method => {
                Some(f)
            }
            _ => None,
        })
    }
}

impl fmt::Debug for CallData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallData")
            .field("entries", &self.abi.len())
            .field("structs", &self.structs.len())
            .field("enums", &self.enums.len())
            .finish()
    }
}
