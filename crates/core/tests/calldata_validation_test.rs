//! Calldata Validation Tests
//!
//! End to end checks of argument validation against realistic ABIs:
//! - Cairo 1 interface ABI (ERC20 style) with u256, structs and enums
//! - Legacy Cairo 0 account ABI with `_len` parameters
//! - Selector derivation for entry points

use serde_json::json;
use starkcall_core::{
    abi_version, create_abi_parser, get_selector, get_selector_from_name, Abi, CairoCustomEnum,
    CallArg, CallData, StarkcallError, ValidateType, ValidationError,
};

/// Cairo 1 ABI with functions grouped under an interface
fn erc20_abi() -> Abi {
    Abi::from_value(json!([
        {
            "type": "impl",
            "name": "ERC20Impl",
            "interface_name": "demo::IERC20"
        },
        {
            "type": "struct",
            "name": "core::integer::u256",
            "members": [
                { "name": "low", "type": "core::integer::u128" },
                { "name": "high", "type": "core::integer::u128" }
            ]
        },
        {
            "type": "struct",
            "name": "demo::Point",
            "members": [
                { "name": "x", "type": "core::felt252" },
                { "name": "y", "type": "core::felt252" }
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
            "type": "enum",
            "name": "core::option::Option::<core::integer::u64>",
            "variants": [
                { "name": "Some", "type": "core::integer::u64" },
                { "name": "None", "type": "()" }
            ]
        },
        {
            "type": "enum",
            "name": "demo::Direction",
            "variants": [
                { "name": "North", "type": "()" },
                { "name": "South", "type": "()" }
            ]
        },
        {
            "type": "interface",
            "name": "demo::IERC20",
            "items": [
                {
                    "type": "function",
                    "name": "transfer",
                    "inputs": [
                        { "name": "recipient", "type": "core::starknet::contract_address::ContractAddress" },
                        { "name": "amount", "type": "core::integer::u256" }
                    ],
                    "outputs": [{ "type": "core::bool" }],
                    "state_mutability": "external"
                },
                {
                    "type": "function",
                    "name": "balance_of",
                    "inputs": [
                        { "name": "account", "type": "core::starknet::contract_address::ContractAddress" }
                    ],
                    "outputs": [{ "type": "core::integer::u256" }],
                    "state_mutability": "view"
                },
                {
                    "type": "function",
                    "name": "move_to",
                    "inputs": [
                        { "name": "target", "type": "demo::Point" },
                        { "name": "heading", "type": "demo::Direction" },
                        { "name": "limit", "type": "core::option::Option::<core::integer::u64>" },
                        { "name": "tags", "type": "core::array::Array::<core::felt252>" }
                    ],
                    "outputs": [],
                    "state_mutability": "external"
                }
            ]
        },
        {
            "type": "constructor",
            "name": "constructor",
            "inputs": [
                { "name": "name", "type": "core::felt252" },
                { "name": "supply", "type": "core::integer::u256" }
            ]
        },
        {
            "type": "event",
            "name": "demo::Transfer",
            "kind": "struct",
            "members": []
        }
    ]))
    .expect("erc20 abi parses")
}

/// Cairo 0 account ABI
fn account_abi() -> Abi {
    Abi::from_value(json!([
        {
            "type": "struct",
            "name": "AccountCallArray",
            "size": 4,
            "members": [
                { "name": "to", "type": "felt", "offset": 0 },
                { "name": "selector", "type": "felt", "offset": 1 },
                { "name": "data_offset", "type": "felt", "offset": 2 },
                { "name": "data_len", "type": "felt", "offset": 3 }
            ]
        },
        {
            "type": "function",
            "name": "__execute__",
            "inputs": [
                { "name": "call_array_len", "type": "felt" },
                { "name": "call_array", "type": "AccountCallArray*" },
                { "name": "calldata_len", "type": "felt" },
                { "name": "calldata", "type": "felt*" }
            ],
            "outputs": [
                { "name": "response_len", "type": "felt" },
                { "name": "response", "type": "felt*" }
            ]
        },
        {
            "type": "function",
            "name": "get_public_key",
            "inputs": [],
            "outputs": [{ "name": "res", "type": "felt" }],
            "stateMutability": "view"
        }
    ]))
    .expect("account abi parses")
}

#[test]
fn test_abi_versions_detected() {
    assert_eq!(abi_version(&erc20_abi()), 2);
    assert_eq!(abi_version(&account_abi()), 0);

    let flat_cairo1 = Abi::from_value(json!([
        {
            "type": "function",
            "name": "get",
            "inputs": [{ "name": "key", "type": "core::felt252" }],
            "outputs": [],
            "state_mutability": "view"
        }
    ]))
    .unwrap();
    assert_eq!(abi_version(&flat_cairo1), 1);
}

#[test]
fn test_interface_lookup_and_legacy_view() {
    let parser = create_abi_parser(erc20_abi());
    let transfer = parser.get_method("transfer").unwrap().expect("transfer exists");
    assert_eq!(parser.method_inputs_length(transfer), 2);
    assert!(parser.get_method("constructor").unwrap().is_none());

    let legacy = parser.legacy_format();
    let names: Vec<&str> = legacy.iter().map(|e| e.name()).collect();
    assert!(names.contains(&"transfer"));
    assert!(names.contains(&"constructor"));
    assert!(!names.contains(&"demo::IERC20"));
}

#[test]
fn test_transfer_with_split_and_whole_amounts() {
    let calldata = CallData::new(erc20_abi());

    let split = [CallArg::from("0x1234"), CallArg::uint256(1000u32, 0u32)];
    assert!(calldata.validate(ValidateType::Invoke, "transfer", &split).is_ok());

    let whole = [CallArg::from("0x1234"), CallArg::from("1000")];
    assert!(calldata.validate(ValidateType::Invoke, "transfer", &whole).is_ok());

    let json_args: Vec<CallArg> = serde_json::from_value::<Vec<serde_json::Value>>(json!([
        "0x1234",
        { "low": 1000, "high": 0 }
    ]))
    .unwrap()
    .into_iter()
    .map(CallArg::from)
    .collect();
    assert!(calldata.validate(ValidateType::Invoke, "transfer", &json_args).is_ok());
}

#[test]
fn test_transfer_overflowing_halves() {
    let calldata = CallData::new(erc20_abi());
    let too_big = format!("0x1{}", "0".repeat(32));
    let args = [
        CallArg::from("0x1234"),
        CallArg::uint256(too_big.as_str(), too_big.as_str()),
    ];

    let err = calldata
        .validate(ValidateType::Invoke, "transfer", &args)
        .unwrap_err();
    match err {
        StarkcallError::Validation(ValidationError::OutOfRange { arg, cairo_type, .. }) => {
            assert_eq!(arg, "amount");
            assert_eq!(cairo_type, "core::integer::u256");
        }
        other => panic!("Expected range error, got {}", other),
    }
}

#[test]
fn test_view_and_invoke_are_distinct() {
    let calldata = CallData::new(erc20_abi());
    let account = [CallArg::from("0x1")];

    assert!(calldata.validate(ValidateType::Call, "balance_of", &account).is_ok());

    let err = calldata
        .validate(ValidateType::Invoke, "balance_of", &account)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "ABI error: invocable method balance_of not found in abi"
    );
}

#[test]
fn test_structs_enums_and_arrays() {
    let calldata = CallData::new(erc20_abi());

    let good = [
        CallArg::object([("x", 1u8), ("y", 2u8)]),
        CallArg::from(CairoCustomEnum::unit("North")),
        CallArg::some(10u8),
        CallArg::Array(vec![CallArg::from("fast"), CallArg::from("0x2")]),
    ];
    assert!(calldata.validate(ValidateType::Invoke, "move_to", &good).is_ok());

    let mut missing_member = good.clone();
    missing_member[0] = CallArg::object([("x", 1u8)]);
    let err = calldata
        .validate(ValidateType::Invoke, "move_to", &missing_member)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Validate: arg target should have a property y"
    );

    let mut wrong_enum = good.clone();
    wrong_enum[2] = CallArg::ok(10u8);
    assert!(matches!(
        calldata.validate(ValidateType::Invoke, "move_to", &wrong_enum),
        Err(StarkcallError::Validation(ValidationError::UnrecognizedEnum { .. }))
    ));

    // long text stands in for a felt array
    let mut long_text = good;
    long_text[3] = CallArg::from("this sentence is longer than thirty one characters");
    assert!(calldata.validate(ValidateType::Invoke, "move_to", &long_text).is_ok());
}

#[test]
fn test_constructor_arguments() {
    let calldata = CallData::new(erc20_abi());
    let args = [CallArg::from("TOKEN"), CallArg::from(1_000_000u32)];
    assert!(calldata.validate(ValidateType::Deploy, "constructor", &args).is_ok());

    let err = calldata
        .validate(ValidateType::Deploy, "constructor", &args[..1])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid number of arguments, expected 2 arguments, but got 1"
    );
}

#[test]
fn test_legacy_account_execute() {
    let calldata = CallData::new(account_abi());
    let call = CallArg::object([
        ("to", "0x1"),
        ("selector", "0x83afd3f4caedc6eebf44246fe54e38c95e3179a5ec9ea81740eca5b482d12e"),
        ("data_offset", "0"),
        ("data_len", "2"),
    ]);
    let args = [
        CallArg::Array(vec![call]),
        CallArg::Array(vec![CallArg::from("0x2"), CallArg::from(100u8)]),
    ];
    assert!(calldata.validate(ValidateType::Invoke, "__execute__", &args).is_ok());
    assert!(calldata.validate(ValidateType::Call, "get_public_key", &[]).is_ok());
}

#[test]
fn test_entry_point_selectors() {
    assert_eq!(
        get_selector_from_name("transfer"),
        "0x83afd3f4caedc6eebf44246fe54e38c95e3179a5ec9ea81740eca5b482d12e"
    );
    assert_eq!(
        get_selector("__execute__"),
        "0x15d40a3d6ca2ac30f4031e42be28da9b056fef9bb7357ac5e85627ee876e5ad"
    );
    assert_eq!(get_selector("0x1a2b"), "0x1a2b");
    assert_eq!(get_selector("123"), "0x7b");
}
