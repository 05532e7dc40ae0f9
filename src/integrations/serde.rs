//! JSON-friendly shape of the errors reported by this crate.
//!
//! Every error serializes as `{"message": ..., "locations": [{"line": ..., "column": ...}]}`,
//! with one-based lines and columns.

use serde::ser::{Serialize, SerializeMap as _, Serializer};

use crate::{
    parser::{ParseError, SourcePosition, Spanning},
    schema::error::SchemaError,
    validation::RuleError,
};

impl Serialize for SourcePosition {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        let mut map = ser.serialize_map(Some(2))?;

        let line = self.line() + 1;
        map.serialize_key("line")?;
        map.serialize_value(&line)?;

        let column = self.column() + 1;
        map.serialize_key("column")?;
        map.serialize_value(&column)?;

        map.end()
    }
}

impl Serialize for RuleError {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        let mut map = ser.serialize_map(Some(2))?;

        map.serialize_key("message")?;
        map.serialize_value(self.message())?;

        map.serialize_key("locations")?;
        map.serialize_value(self.locations())?;

        map.end()
    }
}

impl Serialize for SchemaError {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        let mut map = ser.serialize_map(Some(2))?;

        let msg = self.to_string();
        map.serialize_key("message")?;
        map.serialize_value(&msg)?;

        map.serialize_key("locations")?;
        map.serialize_value(&self.locations())?;

        map.end()
    }
}

impl Serialize for Spanning<ParseError> {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        let mut map = ser.serialize_map(Some(2))?;

        let msg = self.item.to_string();
        map.serialize_key("message")?;
        map.serialize_value(&msg)?;

        map.serialize_key("locations")?;
        map.serialize_value(&[self.start()])?;

        map.end()
    }
}

#[cfg(test)]
mod tests {
    use arcstr::literal;
    use serde_json::{json, to_value};

    use crate::{
        parser::{SourcePosition, Span, parse_document_source},
        schema::error::SchemaError,
        validation::RuleError,
    };

    #[test]
    fn rule_error() {
        let err = RuleError::new(
            r#"Unknown directive "unknown"."#,
            &[SourcePosition::new(29, 2, 16)],
        );

        assert_eq!(
            to_value(&err).unwrap(),
            json!({
                "message": "Unknown directive \"unknown\".",
                "locations": [{"line": 3, "column": 17}],
            }),
        );
    }

    #[test]
    fn schema_error() {
        let err = SchemaError::UnknownExtensionTarget {
            name: literal!("Foo"),
            span: Span::zero_width(SourcePosition::new(1, 1, 0)),
        };

        assert_eq!(
            to_value(&err).unwrap(),
            json!({
                "message": "Cannot extend type \"Foo\" because it does not exist in the existing schema.",
                "locations": [{"line": 2, "column": 1}],
            }),
        );
    }

    #[test]
    fn schema_error_without_location() {
        let err = SchemaError::MissingQueryType;

        assert_eq!(to_value(&err).unwrap()["locations"], json!([]));
    }

    #[test]
    fn parse_error() {
        let err = parse_document_source("type Query {").unwrap_err();

        assert_eq!(
            to_value(&err).unwrap(),
            json!({
                "message": "Unexpected end of input",
                "locations": [{"line": 1, "column": 13}],
            }),
        );
    }
}
