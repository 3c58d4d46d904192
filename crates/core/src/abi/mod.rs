//! Contract ABI model and the parsers that normalize its two historical shapes.

mod parser;
mod types;

pub use parser::{abi_version, create_abi_parser, AbiParser, AbiParser1, AbiParser2};
pub use types::{
    Abi, AbiEntry, AbiEnums, AbiOutput, AbiParam, AbiStructs, EnumAbi, EnumVariant, EventAbi,
    FunctionAbi, ImplAbi, InterfaceAbi, StructAbi, StructMember,
};
