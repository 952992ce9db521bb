// RXM Miner - Free and Open Source Software Statement
//
// This project, rxm-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/json.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file provides defaulting field accessors over serde_json values for
// rxm-miner, located in the utils subdirectory. Config decoding treats a
// missing, null, or wrongly-typed field the same as an absent one.
//
// Tree Location:
// - src/utils/json.rs (JSON field accessors)
// - Depends on: serde_json

use serde_json::Value;

/// Get a string field, or None when absent/null/not a string.
pub fn get_str<'a>(obj: &'a Value, key: &str) -> Option<&'a str> {
    obj.get(key).and_then(Value::as_str)
}

/// Get a string field as an owned String, empty when absent.
pub fn get_string(obj: &Value, key: &str) -> String {
    get_str(obj, key).unwrap_or_default().to_string()
}

/// Get a boolean field with a default for absent/non-boolean values.
pub fn get_bool(obj: &Value, key: &str, default: bool) -> bool {
    obj.get(key).and_then(Value::as_bool).unwrap_or(default)
}

/// Get an unsigned integer field with a default for absent/non-integer
/// values.
pub fn get_u64(obj: &Value, key: &str, default: u64) -> u64 {
    obj.get(key).and_then(Value::as_u64).unwrap_or(default)
}


// Changelog:
// - v1.0.0 (2026-08-28): Initial release.
//   - Purpose: Shared defaulting accessors used by the pool config codec.
