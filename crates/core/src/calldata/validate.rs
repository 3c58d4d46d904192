//! Validate Cairo contract method arguments.
//!
//! Each declared parameter is classified from its type string and checked
//! against the argument at the same position. Validation stops at the first
//! violation.

use super::cairo::{
    classify, is_len, is_type_eth_address, is_type_felt, is_type_uint256, EnumKind, TypeKind, Uint,
};
use super::uint256::{is_uint128, uint256_to_bn};
use super::value::CallArg;
use crate::abi::{AbiEnums, AbiStructs, FunctionAbi};
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed};
use once_cell::sync::Lazy;
use starkcall_common::utils::num::{is_hex, to_bigint, MAX_SAFE_INTEGER};
use starkcall_common::utils::short_string::is_long_text;
use starkcall_common::ValidationError;
use std::borrow::Cow;
use tracing::{debug, trace};

type ValidationResult = Result<(), ValidationError>;

/// 2^252 - 1, the largest value accepted for a felt
static FELT_MAX: Lazy<BigUint> = Lazy::new(|| (BigUint::one() << 252u32) - BigUint::one());

/// 2^160 - 1
static ETH_ADDRESS_MAX: Lazy<BigUint> = Lazy::new(|| (BigUint::one() << 160u32) - BigUint::one());

const FELT_RANGE: &str = "[0, 2^252-1]";
const BIG_NUMBERISH: &str = "String, Number or BigInt";

/// Inclusive upper bound of a numeric check and its label for messages
struct Bound {
    max: Cow<'static, BigUint>,
    label: Cow<'static, str>,
}

impl Bound {
    fn felt() -> Self {
        Self {
            max: Cow::Borrowed(&*FELT_MAX),
            label: Cow::Borrowed(FELT_RANGE),
        }
    }

    fn uint(width: Uint) -> Self {
        Self {
            max: Cow::Owned((BigUint::one() << width.bits()) - BigUint::one()),
            label: Cow::Owned(width.range_label()),
        }
    }

    fn eth_address() -> Self {
        Self {
            max: Cow::Borrowed(&*ETH_ADDRESS_MAX),
            label: Cow::Borrowed("[0, 2^160-1]"),
        }
    }

    fn contains(&self, value: &BigInt) -> bool {
        !value.is_negative() && value.magnitude() <= &*self.max
    }
}

/// Validate `args` against the declared inputs of `method`.
///
/// Arguments are matched by position. Inputs named `*_len` take no argument.
/// Struct and tuple arguments are checked for shape only.
pub fn validate_fields(
    method: &FunctionAbi,
    args: &[CallArg],
    structs: &AbiStructs,
    enums: &AbiEnums,
) -> ValidationResult {
    debug!("Validating {} arguments for {}", args.len(), method.name);

    let mut position = 0;
    for input in &method.inputs {
        if is_len(&input.name) {
            continue;
        }

        let arg = args.get(position).ok_or_else(|| ValidationError::MissingArgument {
            arg: input.name.clone(),
            index: position,
        })?;
        trace!("arg {} ({}) = {}", input.name, input.ty, arg);

        validate_value(arg, &input.name, &input.ty, structs, enums)?;
        position += 1;
    }

    debug!("Arguments of {} are valid", method.name);
    Ok(())
}

fn validate_value(
    arg: &CallArg,
    name: &str,
    ty: &str,
    structs: &AbiStructs,
    enums: &AbiEnums,
) -> ValidationResult {
    let kind = classify(ty, structs, enums).ok_or_else(|| ValidationError::unhandled(name, ty))?;
    validate_kind(arg, name, ty, &kind, structs, enums)
}

fn validate_kind(
    arg: &CallArg,
    name: &str,
    ty: &str,
    kind: &TypeKind,
    structs: &AbiStructs,
    enums: &AbiEnums,
) -> ValidationResult {
    match kind {
        TypeKind::Felt | TypeKind::Literal(_) => validate_felt(arg, name, ty),
        TypeKind::Uint(width) => validate_uint(arg, name, ty, &Bound::uint(*width)),
        TypeKind::Bool => validate_bool(arg, name, ty),
        TypeKind::Array(element) => validate_array(arg, name, ty, element, structs, enums),
        TypeKind::Struct => validate_struct(arg, name, ty, structs),
        TypeKind::Enum(enum_kind) => validate_enum(arg, name, ty, *enum_kind),
        TypeKind::Tuple => validate_tuple(arg, name, ty),
    }
}

fn validate_felt(arg: &CallArg, name: &str, ty: &str) -> ValidationResult {
    // non-hex text is a short string, encoded without a range check
    if let CallArg::Str(s) = arg {
        if !is_hex(s) {
            return Ok(());
        }
    }

    let value = numeric_value(arg)
        .ok_or_else(|| ValidationError::mismatch(name, ty, BIG_NUMBERISH, arg.kind_name()))?;
    check_bound(&value, name, ty, &Bound::felt())
}

fn validate_uint(arg: &CallArg, name: &str, ty: &str, bound: &Bound) -> ValidationResult {
    let oversize = match arg {
        CallArg::Number(n) => *n > MAX_SAFE_INTEGER,
        CallArg::Float(n) => *n > MAX_SAFE_INTEGER as f64,
        _ => false,
    };
    if oversize {
        return Err(ValidationError::OversizeNumber {
            arg: name.to_string(),
        });
    }

    let value = match arg {
        CallArg::Object(members) => match (members.get("low"), members.get("high")) {
            (Some(low), Some(high)) => split_uint256_value(low, high, name, ty)?,
            _ => {
                return Err(ValidationError::mismatch(
                    name,
                    ty,
                    "String, Number, BigInt or {low, high}",
                    arg.kind_name(),
                ))
            }
        },
        other => numeric_value(other).ok_or_else(|| {
            ValidationError::mismatch(name, ty, BIG_NUMBERISH, other.kind_name())
        })?,
    };

    check_bound(&value, name, ty, bound)
}

/// Rebuild `low + high * 2^128`, rejecting halves that are not 128-bit values
fn split_uint256_value(
    low: &CallArg,
    high: &CallArg,
    name: &str,
    ty: &str,
) -> Result<BigInt, ValidationError> {
    let half = |arg: &CallArg| -> Result<BigInt, ValidationError> {
        let value = numeric_value(arg)
            .ok_or_else(|| ValidationError::mismatch(name, ty, BIG_NUMBERISH, arg.kind_name()))?;
        if !is_uint128(&value) {
            return Err(ValidationError::out_of_range(
                name,
                ty,
                "[0, 2^128-1] for low and high",
            ));
        }
        Ok(value)
    };

    let low = half(low)?;
    let high = half(high)?;
    Ok(uint256_to_bn(&low, &high))
}

fn validate_bool(arg: &CallArg, name: &str, ty: &str) -> ValidationResult {
    match arg {
        CallArg::Bool(_) => Ok(()),
        other => Err(ValidationError::mismatch(name, ty, "Boolean", other.kind_name())),
    }
}

fn validate_struct(arg: &CallArg, name: &str, ty: &str, structs: &AbiStructs) -> ValidationResult {
    // Cairo 1 declares u256 as a struct
    if is_type_uint256(ty) {
        return validate_uint(arg, name, ty, &Bound::uint(Uint::U256));
    }

    if is_type_eth_address(ty) {
        if arg.is_composite() {
            return Err(ValidationError::mismatch(name, ty, "BigNumberish", arg.kind_name()));
        }
        let value = numeric_value(arg)
            .ok_or_else(|| ValidationError::mismatch(name, ty, "BigNumberish", arg.kind_name()))?;
        return check_bound(&value, name, ty, &Bound::eth_address());
    }

    let members = match arg {
        CallArg::Object(members) => members,
        other => {
            return Err(ValidationError::mismatch(
                name,
                ty,
                "object, not array",
                other.kind_name(),
            ))
        }
    };

    let declared = structs
        .get(ty)
        .ok_or_else(|| ValidationError::unhandled(name, ty))?;

    // shallow: only the presence of each declared member is checked
    for member in &declared.members {
        if !members.contains_key(&member.name) {
            return Err(ValidationError::MissingMember {
                arg: name.to_string(),
                member: member.name.clone(),
            });
        }
    }
    Ok(())
}

/// Option values are only accepted for Option types and Result values only
/// for Result types. A custom enum value is accepted for any enum type.
fn validate_enum(arg: &CallArg, name: &str, ty: &str, kind: EnumKind) -> ValidationResult {
    match (arg, kind) {
        (CallArg::Option(_), EnumKind::Option) => Ok(()),
        (CallArg::Result(_), EnumKind::Result) => Ok(()),
        (CallArg::Enum(_), _) => Ok(()),
        (CallArg::Option(_) | CallArg::Result(_) | CallArg::Object(_) | CallArg::Tuple(_), _) => {
            Err(ValidationError::UnrecognizedEnum {
                arg: name.to_string(),
                cairo_type: ty.to_string(),
                found: arg.to_string(),
            })
        }
        (other, _) => Err(ValidationError::mismatch(
            name,
            ty,
            "Enum object, not array",
            other.kind_name(),
        )),
    }
}

/// Tuple members are not validated
fn validate_tuple(arg: &CallArg, name: &str, ty: &str) -> ValidationResult {
    match arg {
        CallArg::Object(_) | CallArg::Tuple(_) => Ok(()),
        other => Err(ValidationError::mismatch(
            name,
            ty,
            "tuple defined as object",
            other.kind_name(),
        )),
    }
}

fn validate_array(
    arg: &CallArg,
    name: &str,
    ty: &str,
    element: &str,
    structs: &AbiStructs,
    enums: &AbiEnums,
) -> ValidationResult {
    // long text is sent as a packed felt sequence rather than an array
    if is_type_felt(element) {
        if let CallArg::Str(s) = arg {
            if is_long_text(s) {
                return Ok(());
            }
        }
    }

    let items = match arg {
        CallArg::Array(items) => items,
        other => return Err(ValidationError::mismatch(name, ty, "Array", other.kind_name())),
    };

    let element_kind = classify(element, structs, enums)
        .ok_or_else(|| ValidationError::unhandled(name, ty))?;

    items
        .iter()
        .try_for_each(|item| validate_kind(item, name, element, &element_kind, structs, enums))
}

/// Integer value of a scalar argument, if it has one. Floats never have one.
fn numeric_value(arg: &CallArg) -> Option<BigInt> {
    match arg {
        CallArg::Number(n) => Some(BigInt::from(*n)),
        CallArg::BigInt(n) => Some(n.clone()),
        CallArg::Str(s) => to_bigint(s),
        _ => None,
    }
}

fn check_bound(value: &BigInt, name: &str, ty: &str, bound: &Bound) -> ValidationResult {
    if bound.contains(value) {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(name, ty, bound.label.to_string()))
    }
}
