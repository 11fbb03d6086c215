use serde::de::DeserializeOwned;

use crate::error::ParseError;

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, ParseError> {
    let mut de = serde_json::Deserializer::from_str(src);
    let value = match serde_path_to_error::deserialize::<_, T>(&mut de) {
        Ok(v) => v,
        Err(err) => {
            let path = err.path().to_string();
            return Err(ParseError::Syntax { path, message: err.into_inner().to_string() });
        }
    };
    // one document per file; trailing text is an error
    de.end().map_err(|err| ParseError::Syntax { path: "<root>".into(), message: err.to_string() })?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn syntax_errors_carry_the_path() {
        let err = from_str_with_path::<Value>(r#"{"properties": {"name": {"type": }}}"#).unwrap_err();
        let ParseError::Syntax { path, .. } = err else { panic!("expected syntax error") };
        assert!(path.starts_with("properties.name"), "{path}");
    }

    #[test]
    fn trailing_text_is_rejected() {
        let err = from_str_with_path::<Value>(r#"{"type": "string"} trailing"#).unwrap_err();
        assert!(matches!(err, ParseError::Syntax { ref path, .. } if path == "<root>"), "{err:?}");
    }

    #[test]
    fn well_formed_text_parses() {
        let v = from_str_with_path::<Value>(r#"{"type": "string"}"#).unwrap();
        assert_eq!(v["type"], "string");
    }
}
