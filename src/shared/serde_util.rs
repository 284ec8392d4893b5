//! Custom serde helpers for backend wire formats.

/// Deserializes a string or an integer into a `String`.
///
/// GraphQL `ID` scalars come back as either, depending on the resolver.
pub mod string_or_number {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Ok(s),
            serde_json::Value::Number(n) => Ok(n.to_string()),
            other => Err(serde::de::Error::custom(format!(
                "expected string or number, got {}",
                other
            ))),
        }
    }
}

/// Optional form of [`string_or_number`]: missing and `null` become `None`.
pub mod opt_string_or_number {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<serde_json::Value>::deserialize(deserializer)? {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(serde_json::Value::String(s)) => Ok(Some(s)),
            Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
            Some(other) => Err(serde::de::Error::custom(format!(
                "expected string or number, got {}",
                other
            ))),
        }
    }
}

/// Deserializes an optional `Decimal` sent as a JSON number, a numeric string,
/// or `null`.
pub mod decimal_lenient {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use std::str::FromStr;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = match Option::<serde_json::Value>::deserialize(deserializer)? {
            None | Some(serde_json::Value::Null) => return Ok(None),
            Some(serde_json::Value::String(s)) => s,
            Some(serde_json::Value::Number(n)) => n.to_string(),
            Some(other) => {
                return Err(serde::de::Error::custom(format!(
                    "expected decimal, got {}",
                    other
                )))
            }
        };
        Decimal::from_str(&raw)
            .or_else(|_| Decimal::from_scientific(&raw))
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("Invalid decimal {}: {}", raw, e)))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Priced {
        #[serde(default, deserialize_with = "super::decimal_lenient::deserialize")]
        price: Option<Decimal>,
    }

    #[test]
    fn test_decimal_from_number_string_and_null() {
        let p: Priced = serde_json::from_str(r#"{"price": 12.5}"#).unwrap();
        assert_eq!(p.price, Some(Decimal::new(125, 1)));
        let p: Priced = serde_json::from_str(r#"{"price": "300"}"#).unwrap();
        assert_eq!(p.price, Some(Decimal::from(300)));
        let p: Priced = serde_json::from_str(r#"{"price": null}"#).unwrap();
        assert_eq!(p.price, None);
        let p: Priced = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(p.price, None);
    }

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "super::opt_string_or_number::deserialize")]
        id: Option<String>,
    }

    #[test]
    fn test_optional_id_from_string_number_and_null() {
        let r: Row = serde_json::from_str(r#"{"id": "1"}"#).unwrap();
        assert_eq!(r.id.as_deref(), Some("1"));
        let r: Row = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(r.id.as_deref(), Some("7"));
        let r: Row = serde_json::from_str(r#"{"id": null}"#).unwrap();
        assert_eq!(r.id, None);
        let r: Row = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(r.id, None);
        assert!(serde_json::from_str::<Row>(r#"{"id": true}"#).is_err());
    }

    #[test]
    fn test_decimal_rejects_garbage() {
        assert!(serde_json::from_str::<Priced>(r#"{"price": "cheap"}"#).is_err());
    }
}
