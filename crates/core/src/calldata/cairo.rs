//! Cairo type strings
//!
//! ABI parameters carry their type as a string such as `core::integer::u256`,
//! `(core::felt252, core::bool)` or `core::array::Array::<core::felt252>`.
//! The predicates below recognise each category, and [`classify`] turns a
//! type string into a [`TypeKind`] once so the validator can match on it.

use crate::abi::{AbiEnums, AbiStructs};

pub const FELT: &str = "core::felt252";
pub const LEGACY_FELT: &str = "felt";
pub const BOOL: &str = "core::bool";
pub const ETH_ADDRESS: &str = "core::starknet::eth_address::EthAddress";

/// Cairo unsigned integer types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Uint {
    U8,
    U16,
    U32,
    U64,
    U128,
    U256,
}

impl Uint {
    pub const ALL: [Uint; 6] = [
        Uint::U8,
        Uint::U16,
        Uint::U32,
        Uint::U64,
        Uint::U128,
        Uint::U256,
    ];

    pub fn from_type(ty: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.as_str() == ty)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Uint::U8 => "core::integer::u8",
            Uint::U16 => "core::integer::u16",
            Uint::U32 => "core::integer::u32",
            Uint::U64 => "core::integer::u64",
            Uint::U128 => "core::integer::u128",
            Uint::U256 => "core::integer::u256",
        }
    }

    pub fn bits(&self) -> u32 {
        match self {
            Uint::U8 => 8,
            Uint::U16 => 16,
            Uint::U32 => 32,
            Uint::U64 => 64,
            Uint::U128 => 128,
            Uint::U256 => 256,
        }
    }

    /// Human readable accepted range, as shown in validation messages
    pub fn range_label(&self) -> String {
        match self {
            Uint::U8 => "[0, 255]".to_string(),
            Uint::U16 => "[0, 65535]".to_string(),
            Uint::U32 => "[0, 4294967295]".to_string(),
            other => format!("[0, 2^{}-1]", other.bits()),
        }
    }
}

/// Domain aliases that are range-equivalent to a felt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Literal {
    ClassHash,
    ContractAddress,
}

impl Literal {
    pub fn from_type(ty: &str) -> Option<Self> {
        match ty {
            "core::starknet::class_hash::ClassHash" => Some(Literal::ClassHash),
            "core::starknet::contract_address::ContractAddress" => Some(Literal::ContractAddress),
            _ => None,
        }
    }
}

/// Flavour of a declared enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumKind {
    Option,
    Result,
    Custom,
}

/// Category of a declared type, in validation priority order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    Felt,
    Uint(Uint),
    Literal(Literal),
    Bool,
    /// Element type string
    Array(String),
    Struct,
    Enum(EnumKind),
    Tuple,
}

/// Classify a type string. `None` means the type is not supported.
///
/// Overlapping predicates resolve in this order: felt, uint, literal, bool,
/// array, struct, enum, tuple. `core::integer::u256` is therefore a uint even
/// though Cairo 1 ABIs also declare it as a struct, and `core::bool` is a bool
/// even though it is declared as an enum.
pub fn classify(ty: &str, structs: &AbiStructs, enums: &AbiEnums) -> Option<TypeKind> {
    let kind = if is_type_felt(ty) {
        TypeKind::Felt
    } else if is_type_uint(ty) {
        TypeKind::Uint(Uint::from_type(ty)?)
    } else if is_type_literal(ty) {
        TypeKind::Literal(Literal::from_type(ty)?)
    } else if is_type_bool(ty) {
        TypeKind::Bool
    } else if is_type_array(ty) {
        TypeKind::Array(get_array_type(ty))
    } else if is_type_struct(ty, structs) {
        TypeKind::Struct
    } else if is_type_enum(ty, enums) {
        TypeKind::Enum(if is_type_option(ty) {
            EnumKind::Option
        } else if is_type_result(ty) {
            EnumKind::Result
        } else {
            EnumKind::Custom
        })
    } else if is_type_tuple(ty) {
        TypeKind::Tuple
    } else {
        return None;
    };
    Some(kind)
}

/// Parameter names ending in `_len` carry the length of the following array
pub fn is_len(name: &str) -> bool {
    name.ends_with("_len")
}

pub fn is_type_felt(ty: &str) -> bool {
    ty == LEGACY_FELT || ty == FELT
}

pub fn is_type_array(ty: &str) -> bool {
    ty.contains('*')
        || ty.starts_with("core::array::Array::")
        || ty.starts_with("core::array::Span::")
}

pub fn is_type_tuple(ty: &str) -> bool {
    ty.starts_with('(') && ty.ends_with(')')
}

pub fn is_type_struct(ty: &str, structs: &AbiStructs) -> bool {
    structs.contains_key(ty)
}

pub fn is_type_enum(ty: &str, enums: &AbiEnums) -> bool {
    enums.contains_key(ty)
}

pub fn is_type_option(ty: &str) -> bool {
    ty.starts_with("core::option::Option::")
}

pub fn is_type_result(ty: &str) -> bool {
    ty.starts_with("core::result::Result::")
}

pub fn is_type_uint(ty: &str) -> bool {
    Uint::from_type(ty).is_some()
}

pub fn is_type_uint256(ty: &str) -> bool {
    ty == Uint::U256.as_str()
}

pub fn is_type_literal(ty: &str) -> bool {
    Literal::from_type(ty).is_some()
}

pub fn is_type_bool(ty: &str) -> bool {
    ty == BOOL
}

pub fn is_type_eth_address(ty: &str) -> bool {
    ty == ETH_ADDRESS
}

/// Cairo 1 types are path qualified
pub fn is_cairo1_type(ty: &str) -> bool {
    ty.contains("::")
}

/// Element type of an array type string.
///
/// `core::array::Array::<T>` and `core::array::Span::<T>` yield `T`; legacy
/// `T*` yields `T`. A Cairo 1 array without generic brackets yields an empty
/// string, which no predicate accepts.
pub fn get_array_type(ty: &str) -> String {
    if is_cairo1_type(ty) {
        match (ty.find('<'), ty.rfind('>')) {
            (Some(open), Some(close)) if open < close => ty[open + 1..close].to_string(),
            _ => String::new(),
        }
    } else {
        ty.replacen('*', "", 1)
    }
}
