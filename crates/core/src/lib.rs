pub mod abi;
pub mod calldata;
pub mod selector;

// Re-export commonly used types
pub use abi::{
    abi_version, create_abi_parser, Abi, AbiEntry, AbiEnums, AbiParser, AbiParser1, AbiParser2,
    AbiStructs, FunctionAbi,
};
pub use calldata::{validate_fields, CairoCustomEnum, CallArg, CallData, Uint256, ValidateType};
pub use selector::{get_selector, get_selector_from_name, keccak_bn, starknet_keccak};
pub use starkcall_common::{AbiError, StarkcallError, ValidationError};
