//! JSON text encoding and decoding on top of serde_json.

use std::io;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde::ser::{self, Error as _};
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};

use crate::error::{Error, Result};

pub use serde_json::Value as JsonValue;

/// Output layout for `to_json_with`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonOptions {
    /// Spaces per nesting level; `None` emits single-line JSON.
    pub indent: Option<usize>,
    /// Escape every non-ASCII character as `\uXXXX`.
    pub ensure_ascii: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            indent: Some(4),
            ensure_ascii: false,
        }
    }
}

impl JsonOptions {
    /// Single-line layout with `", "` and `": "` separators.
    pub fn compact() -> Self {
        Self {
            indent: None,
            ..Self::default()
        }
    }
}

/// Encode with four-space indentation and non-ASCII passed through.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    to_json_with(value, &JsonOptions::default())
}

/// Encode `value` with an explicit layout.
///
/// NaN and infinite floats have no JSON form and are rejected rather than
/// written as `null`.
pub fn to_json_with<T: Serialize + ?Sized>(value: &T, options: &JsonOptions) -> Result<String> {
    value.serialize(FiniteCheck).map_err(Error::Serialize)?;

    let mut buf = Vec::new();
    match options.indent {
        None => {
            let mut ser = Serializer::with_formatter(&mut buf, SpacedFormatter);
            value.serialize(&mut ser).map_err(Error::Serialize)?;
        }
        Some(width) => {
            let indent = vec![b' '; width];
            let formatter = PrettyFormatter::with_indent(&indent);
            let mut ser = Serializer::with_formatter(&mut buf, formatter);
            value.serialize(&mut ser).map_err(Error::Serialize)?;
        }
    }
    // serde_json only emits valid UTF-8
    let text = String::from_utf8(buf)
        .map_err(|err| Error::Serialize(serde_json::Error::custom(err.to_string())))?;

    if options.ensure_ascii {
        Ok(escape_non_ascii(&text))
    } else {
        Ok(text)
    }
}

/// Decode JSON text into any deserializable type, `JsonValue` included.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(Error::Parse)
}

// Non-ASCII can only occur inside string literals of serialized JSON, so a
// whole-text pass is equivalent to escaping each string.
fn escape_non_ascii(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut units = [0u16; 2];
    for ch in text.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else {
            for unit in ch.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{unit:04x}"));
            }
        }
    }
    out
}

/// Single-line output with a space after each `,` and `:`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serializer that produces nothing and fails on the first non-finite float.
#[derive(Clone, Copy)]
struct FiniteCheck;

type CheckResult = std::result::Result<(), serde_json::Error>;

fn check_float(value: f64) -> CheckResult {
    if value.is_finite() {
        Ok(())
    } else {
        Err(serde_json::Error::custom(format!(
            "float {value} has no JSON representation"
        )))
    }
}

impl ser::Serializer for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;
    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = Self;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

    fn serialize_bool(self, _: bool) -> CheckResult {
        Ok(())
    }
    fn serialize_i8(self, _: i8) -> CheckResult {
        Ok(())
    }
    fn serialize_i16(self, _: i16) -> CheckResult {
        Ok(())
    }
    fn serialize_i32(self, _: i32) -> CheckResult {
        Ok(())
    }
    fn serialize_i64(self, _: i64) -> CheckResult {
        Ok(())
    }
    fn serialize_i128(self, _: i128) -> CheckResult {
        Ok(())
    }
    fn serialize_u8(self, _: u8) -> CheckResult {
        Ok(())
    }
    fn serialize_u16(self, _: u16) -> CheckResult {
        Ok(())
    }
    fn serialize_u32(self, _: u32) -> CheckResult {
        Ok(())
    }
    fn serialize_u64(self, _: u64) -> CheckResult {
        Ok(())
    }
    fn serialize_u128(self, _: u128) -> CheckResult {
        Ok(())
    }
    fn serialize_f32(self, v: f32) -> CheckResult {
        check_float(v.into())
    }
    fn serialize_f64(self, v: f64) -> CheckResult {
        check_float(v)
    }
    fn serialize_char(self, _: char) -> CheckResult {
        Ok(())
    }
    fn serialize_str(self, _: &str) -> CheckResult {
        Ok(())
    }
    fn serialize_bytes(self, _: &[u8]) -> CheckResult {
        Ok(())
    }
    fn serialize_none(self) -> CheckResult {
        Ok(())
    }
    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> CheckResult {
        value.serialize(self)
    }
    fn serialize_unit(self) -> CheckResult {
        Ok(())
    }
    fn serialize_unit_struct(self, _: &'static str) -> CheckResult {
        Ok(())
    }
    fn serialize_unit_variant(self, _: &'static str, _: u32, _: &'static str) -> CheckResult {
        Ok(())
    }
    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _: &'static str,
        value: &T,
    ) -> CheckResult {
        value.serialize(self)
    }
    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        value: &T,
    ) -> CheckResult {
        value.serialize(self)
    }
    fn serialize_seq(self, _: Option<usize>) -> std::result::Result<Self, serde_json::Error> {
        Ok(self)
    }
    fn serialize_tuple(self, _: usize) -> std::result::Result<Self, serde_json::Error> {
        Ok(self)
    }
    fn serialize_tuple_struct(
        self,
        _: &'static str,
        _: usize,
    ) -> std::result::Result<Self, serde_json::Error> {
        Ok(self)
    }
    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> std::result::Result<Self, serde_json::Error> {
        Ok(self)
    }
    fn serialize_map(self, _: Option<usize>) -> std::result::Result<Self, serde_json::Error> {
        Ok(self)
    }
    fn serialize_struct(
        self,
        _: &'static str,
        _: usize,
    ) -> std::result::Result<Self, serde_json::Error> {
        Ok(self)
    }
    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> std::result::Result<Self, serde_json::Error> {
        Ok(self)
    }
}

impl ser::SerializeSeq for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> CheckResult {
        value.serialize(*self)
    }
    fn end(self) -> CheckResult {
        Ok(())
    }
}

impl ser::SerializeTuple for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> CheckResult {
        value.serialize(*self)
    }
    fn end(self) -> CheckResult {
        Ok(())
    }
}

impl ser::SerializeTupleStruct for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> CheckResult {
        value.serialize(*self)
    }
    fn end(self) -> CheckResult {
        Ok(())
    }
}

impl ser::SerializeTupleVariant for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> CheckResult {
        value.serialize(*self)
    }
    fn end(self) -> CheckResult {
        Ok(())
    }
}

impl ser::SerializeMap for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> CheckResult {
        key.serialize(*self)
    }
    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> CheckResult {
        value.serialize(*self)
    }
    fn end(self) -> CheckResult {
        Ok(())
    }
}

impl ser::SerializeStruct for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        _: &'static str,
        value: &T,
    ) -> CheckResult {
        value.serialize(*self)
    }
    fn end(self) -> CheckResult {
        Ok(())
    }
}

impl ser::SerializeStructVariant for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        _: &'static str,
        value: &T,
    ) -> CheckResult {
        value.serialize(*self)
    }
    fn end(self) -> CheckResult {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn sample() -> JsonValue {
        json!({
            "name": "café ☕",
            "tags": ["a", "b"],
            "nested": {"n": 1, "f": 2.5, "ok": true, "none": null},
            "emoji": "😀"
        })
    }

    #[test]
    fn default_layout_uses_four_spaces() -> Result<()> {
        let text = to_json(&json!({"a": [1]}))?;
        assert_eq!(text, "{\n    \"a\": [\n        1\n    ]\n}");
        Ok(())
    }

    #[test]
    fn compact_layout() -> Result<()> {
        let text = to_json_with(&json!({"a": [1, 2], "b": {}}), &JsonOptions::compact())?;
        assert_eq!(text, r#"{"a": [1, 2], "b": {}}"#);
        Ok(())
    }

    #[test]
    fn zero_indent_keeps_newlines() -> Result<()> {
        let options = JsonOptions {
            indent: Some(0),
            ensure_ascii: false,
        };
        assert_eq!(to_json_with(&json!([1, 2]), &options)?, "[\n1,\n2\n]");
        Ok(())
    }

    #[test]
    fn non_ascii_passes_through_by_default() -> Result<()> {
        let text = to_json(&json!("café"))?;
        assert_eq!(text, "\"café\"");
        Ok(())
    }

    #[test]
    fn ensure_ascii_escapes_with_surrogates() -> Result<()> {
        let options = JsonOptions {
            indent: None,
            ensure_ascii: true,
        };
        let text = to_json_with(&json!(["é", "😀"]), &options)?;
        assert_eq!(text, r#"["\u00e9", "\ud83d\ude00"]"#);
        assert!(text.is_ascii());
        Ok(())
    }

    #[test]
    fn round_trip_holds_for_all_layouts() -> Result<()> {
        let value = sample();
        for indent in [None, Some(0), Some(2), Some(4)] {
            for ensure_ascii in [false, true] {
                let options = JsonOptions {
                    indent,
                    ensure_ascii,
                };
                let text = to_json_with(&value, &options)?;
                let back: JsonValue = from_json(&text)?;
                assert_eq!(back, value, "options {options:?}");
            }
        }
        Ok(())
    }

    #[test]
    fn decodes_into_typed_values() -> Result<()> {
        let map: BTreeMap<String, Vec<i64>> = from_json(r#"{"xs": [1, 2, 3]}"#)?;
        assert_eq!(map["xs"], vec![1, 2, 3]);
        Ok(())
    }

    #[test]
    fn malformed_input_is_parse_error() {
        let result: Result<JsonValue> = from_json("{\"a\": ");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn non_string_keys_are_serialize_errors() {
        let mut map = BTreeMap::new();
        map.insert(vec![1u8], "x");
        assert!(matches!(to_json(&map), Err(Error::Serialize(_))));
    }

    #[test]
    fn object_keys_keep_document_order() -> Result<()> {
        let value: JsonValue = from_json(r#"{"b": 1, "a": 2, "c": {"z": 0, "y": 1}}"#)?;
        let text = to_json_with(&value, &JsonOptions::compact())?;
        assert_eq!(text, r#"{"b": 1, "a": 2, "c": {"z": 0, "y": 1}}"#);
        Ok(())
    }

    #[test]
    fn non_finite_floats_are_serialize_errors() {
        assert!(matches!(to_json(&f64::NAN), Err(Error::Serialize(_))));
        assert!(matches!(
            to_json(&vec![1.0, f64::NEG_INFINITY]),
            Err(Error::Serialize(_))
        ));
        let number = crate::Number::Float(f64::INFINITY);
        assert!(matches!(
            to_json_with(&number, &JsonOptions::compact()),
            Err(Error::Serialize(_))
        ));
        let mut nested = BTreeMap::new();
        nested.insert("x", Some(vec![f32::NAN]));
        assert!(matches!(to_json(&nested), Err(Error::Serialize(_))));
    }

    #[test]
    fn finite_floats_still_encode() -> Result<()> {
        let text = to_json_with(&vec![Some(1.5), None], &JsonOptions::compact())?;
        assert_eq!(text, "[1.5, null]");
        Ok(())
    }
}
