//! Canonical hashing for parameter records.
//!
//! Two parameter records that serialize to the same JSON value hash to the
//! same 64-character hex digest regardless of key order or whitespace:
//!
//! ```text
//! params_hash = hex(BLAKE3(JCS(params_json)))
//! ```
//!
//! Where JCS is JSON Canonicalization Scheme per RFC 8785. The hash is
//! embedded in every generation result so callers can tie an artifact back
//! to the exact parameters that produced it.

use crate::error::SpecError;
use crate::params::TextureParameters;

/// Computes the canonical BLAKE3 hash of a parameter record.
///
/// # Example
/// ```
/// use texweave_spec::TextureParameters;
/// use texweave_spec::hash::canonical_params_hash;
///
/// let params = TextureParameters::default();
/// let hash = canonical_params_hash(&params).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_params_hash(params: &TextureParameters) -> Result<String, SpecError> {
    let value = params.to_value()?;
    canonical_value_hash(&value)
}

/// Computes the canonical BLAKE3 hash of a JSON value.
pub fn canonical_value_hash(value: &serde_json::Value) -> Result<String, SpecError> {
    let canonical = canonicalize_json(value);
    Ok(blake3::hash(canonical.as_bytes()).to_hex().to_string())
}

/// Canonicalizes a JSON value according to RFC 8785 (JCS).
///
/// Object keys are sorted lexicographically, there is no whitespace between
/// tokens, and numbers use shortest round-trip formatting.
pub fn canonicalize_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => format_jcs_number(n),
        serde_json::Value::String(s) => format_jcs_string(s),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(canonicalize_json).collect();
            format!("[{}]", items.join(","))
        }
        serde_json::Value::Object(obj) => {
            let mut sorted_keys: Vec<&String> = obj.keys().collect();
            sorted_keys.sort();

            let pairs: Vec<String> = sorted_keys
                .iter()
                .map(|k| {
                    let v = obj.get(*k).unwrap();
                    format!("{}:{}", format_jcs_string(k), canonicalize_json(v))
                })
                .collect();
            format!("{{{}}}", pairs.join(","))
        }
    }
}

/// Formats a number according to JCS rules.
fn format_jcs_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    if let Some(f) = n.as_f64() {
        if f.is_nan() || f.is_infinite() {
            return "null".to_string();
        }
        if f == 0.0 {
            return "0".to_string();
        }
        if f.fract() == 0.0 && f.abs() < 1e15 {
            return format!("{}", f as i64);
        }
        let s = format!("{}", f);
        if s.contains('.') && !s.contains('e') && !s.contains('E') {
            return s.trim_end_matches('0').trim_end_matches('.').to_string();
        }
        s
    } else {
        "null".to_string()
    }
}

/// Formats a string according to JCS rules (minimal escaping).
fn format_jcs_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c < '\x20' => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result.push('"');
    result
}

/// Computes a BLAKE3 hash of arbitrary data as a 64-character hex string.
pub fn blake3_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_key_order_does_not_change_hash() {
        let a = json!({"b": 1, "a": 2});
        let b = json!({"a": 2, "b": 1});
        assert_eq!(
            canonical_value_hash(&a).unwrap(),
            canonical_value_hash(&b).unwrap()
        );
    }

    #[test]
    fn test_canonical_form() {
        let value = json!({"name": "tex", "scale": 1.0, "tags": [1, 2.5]});
        assert_eq!(
            canonicalize_json(&value),
            r#"{"name":"tex","scale":1,"tags":[1,2.5]}"#
        );
    }

    #[test]
    fn test_string_escaping() {
        let value = json!({"s": "a\"b\\c\nd"});
        assert_eq!(canonicalize_json(&value), r#"{"s":"a\"b\\c\nd"}"#);
    }

    #[test]
    fn test_params_hash_is_stable() {
        let params = TextureParameters::default();
        let h1 = canonical_params_hash(&params).unwrap();
        let h2 = canonical_params_hash(&params).unwrap();
        assert_eq!(h1, h2);
        assert_eq!(h1.len(), 64);
    }

    #[test]
    fn test_params_hash_changes_with_params() {
        let params = TextureParameters::default();
        let mut other = params.clone();
        other.quantity = 13;
        assert_ne!(
            canonical_params_hash(&params).unwrap(),
            canonical_params_hash(&other).unwrap()
        );
    }
}
