//! Call argument values as supplied by a caller.

use super::uint256::Uint256;
use num_bigint::{BigInt, BigUint};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// One positional call argument
#[derive(Debug, Clone, PartialEq)]
pub enum CallArg {
    Bool(bool),
    /// Platform number; only values up to 2^53 - 1 are exact
    Number(i128),
    /// Platform number that is not an exact integer (`1.5`, or beyond 64 bits)
    Float(f64),
    BigInt(BigInt),
    /// Hex or decimal number, or short text
    Str(String),
    Array(Vec<CallArg>),
    Tuple(Vec<CallArg>),
    /// Struct members, or the `{low, high}` split form of a u256
    Object(BTreeMap<String, CallArg>),
    Option(Option<Box<CallArg>>),
    Result(Result<Box<CallArg>, Box<CallArg>>),
    Enum(CairoCustomEnum),
}

/// Value of a user-defined Cairo enum: the active variant and its payload
#[derive(Debug, Clone, PartialEq)]
pub struct CairoCustomEnum {
    variant: String,
    value: Box<CallArg>,
}

impl CairoCustomEnum {
    pub fn new(variant: impl Into<String>, value: CallArg) -> Self {
        Self {
            variant: variant.into(),
            value: Box::new(value),
        }
    }

    /// Variant without payload
    pub fn unit(variant: impl Into<String>) -> Self {
        Self::new(variant, CallArg::Tuple(Vec::new()))
    }

    pub fn active_variant(&self) -> &str {
        &self.variant
    }

    pub fn value(&self) -> &CallArg {
        &self.value
    }
}

impl CallArg {
    pub fn some(value: impl Into<CallArg>) -> Self {
        CallArg::Option(Some(Box::new(value.into())))
    }

    pub fn none() -> Self {
        CallArg::Option(None)
    }

    pub fn ok(value: impl Into<CallArg>) -> Self {
        CallArg::Result(Ok(Box::new(value.into())))
    }

    pub fn err(value: impl Into<CallArg>) -> Self {
        CallArg::Result(Err(Box::new(value.into())))
    }

    /// Build an object from `(member, value)` pairs
    pub fn object<K, V, I>(members: I) -> Self
    where
        K: Into<String>,
        V: Into<CallArg>,
        I: IntoIterator<Item = (K, V)>,
    {
        CallArg::Object(
            members
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Split-form u256 `{low, high}`
    pub fn uint256(low: impl Into<CallArg>, high: impl Into<CallArg>) -> Self {
        CallArg::object([("low", low.into()), ("high", high.into())])
    }

    /// Shape name used in validation messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            CallArg::Bool(_) => "boolean",
            CallArg::Number(_) | CallArg::Float(_) => "number",
            CallArg::BigInt(_) => "bigint",
            CallArg::Str(_) => "string",
            CallArg::Array(_) => "array",
            CallArg::Tuple(_) => "tuple",
            CallArg::Object(_) => "object",
            CallArg::Option(_) => "CairoOption",
            CallArg::Result(_) => "CairoResult",
            CallArg::Enum(_) => "CairoCustomEnum",
        }
    }

    /// Objects in the broad sense: anything with members rather than a scalar
    pub fn is_composite(&self) -> bool {
        !matches!(
            self,
            CallArg::Bool(_)
                | CallArg::Number(_)
                | CallArg::Float(_)
                | CallArg::BigInt(_)
                | CallArg::Str(_)
        )
    }
}

impl fmt::Display for CallArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn list(f: &mut fmt::Formatter<'_>, items: &[CallArg], open: &str, close: &str) -> fmt::Result {
            write!(f, "{}", open)?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", item)?;
            }
            write!(f, "{}", close)
        }

        match self {
            CallArg::Bool(b) => write!(f, "{}", b),
            CallArg::Number(n) => write!(f, "{}", n),
            CallArg::Float(n) => write!(f, "{}", n),
            CallArg::BigInt(n) => write!(f, "{}n", n),
            CallArg::Str(s) => write!(f, "{:?}", s),
            CallArg::Array(items) => list(f, items, "[", "]"),
            CallArg::Tuple(items) => list(f, items, "(", ")"),
            CallArg::Object(members) => {
                write!(f, "{{")?;
                for (i, (name, value)) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", name, value)?;
                }
                write!(f, "}}")
            }
            CallArg::Option(Some(v)) => write!(f, "Some({})", v),
            CallArg::Option(None) => write!(f, "None"),
            CallArg::Result(Ok(v)) => write!(f, "Ok({})", v),
            CallArg::Result(Err(v)) => write!(f, "Err({})", v),
            CallArg::Enum(e) => write!(f, "{}({})", e.variant, e.value),
        }
    }
}

impl From<bool> for CallArg {
    fn from(value: bool) -> Self {
        CallArg::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CallArg {
                fn from(value: $t) -> Self {
                    CallArg::Number(value as i128)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<f64> for CallArg {
    fn from(value: f64) -> Self {
        CallArg::Float(value)
    }
}

impl From<BigInt> for CallArg {
    fn from(value: BigInt) -> Self {
        CallArg::BigInt(value)
    }
}

impl From<BigUint> for CallArg {
    fn from(value: BigUint) -> Self {
        CallArg::BigInt(BigInt::from(value))
    }
}

impl From<&str> for CallArg {
    fn from(value: &str) -> Self {
        CallArg::Str(value.to_string())
    }
}

impl From<String> for CallArg {
    fn from(value: String) -> Self {
        CallArg::Str(value)
    }
}

impl From<Vec<CallArg>> for CallArg {
    fn from(items: Vec<CallArg>) -> Self {
        CallArg::Array(items)
    }
}

impl From<Uint256> for CallArg {
    fn from(value: Uint256) -> Self {
        CallArg::uint256(value.low, value.high)
    }
}

impl From<CairoCustomEnum> for CallArg {
    fn from(value: CairoCustomEnum) -> Self {
        CallArg::Enum(value)
    }
}

/// JSON mapping:
///
/// * `{"Some": v}`, `{"None": _}`, `{"Ok": v}`, `{"Err": v}` become Option/Result values
/// * `{"variant": {"Name": v, ...}}` becomes a custom enum whose active variant
///   is the single non-null entry
/// * `null` is an empty Option
/// * integers within 64 bits become numbers; any other number is a float
///
/// A single-key object named `Some`, `None`, `Ok`, `Err` or `variant` is always
/// read as an enum value, whatever the declared parameter type. A struct with
/// one such member has to be built with [`CallArg::object`] instead.
impl From<Value> for CallArg {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => CallArg::none(),
            Value::Bool(b) => CallArg::Bool(b),
            Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => CallArg::Number(i as i128),
                (None, Some(u)) => CallArg::Number(u as i128),
                _ => n
                    .as_f64()
                    .map(CallArg::Float)
                    .unwrap_or_else(|| CallArg::Str(n.to_string())),
            },
            Value::String(s) => CallArg::Str(s),
            Value::Array(items) => CallArg::Array(items.into_iter().map(CallArg::from).collect()),
            Value::Object(map) => object_from_json(map),
        }
    }
}

fn object_from_json(mut map: serde_json::Map<String, Value>) -> CallArg {
    if map.len() == 1 {
        let key = map.keys().next().cloned().unwrap_or_default();
        match key.as_str() {
            "Some" | "Ok" | "Err" => {
                let inner = CallArg::from(map.remove(&key).unwrap_or(Value::Null));
                return match key.as_str() {
                    "Some" => CallArg::some(inner),
                    "Ok" => CallArg::ok(inner),
                    _ => CallArg::err(inner),
                };
            }
            "None" => return CallArg::none(),
            "variant" => {
                if let Some(Value::Object(variants)) = map.get("variant") {
                    let mut active = variants.iter().filter(|(_, v)| !v.is_null());
                    if let (Some((name, payload)), None) = (active.next(), active.next()) {
                        return CallArg::Enum(CairoCustomEnum::new(
                            name.clone(),
                            CallArg::from(payload.clone()),
                        ));
                    }
                }
            }
            _ => {}
        }
    }

    CallArg::Object(
        map.into_iter()
            .map(|(k, v)| (k, CallArg::from(v)))
            .collect(),
    )
}
