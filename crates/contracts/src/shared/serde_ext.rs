use serde::{Deserialize, Deserializer};

/// Deserialize `null` the same way as a missing field.
///
/// The backend sends `null` for empty lists and unset numbers, which plain
/// `#[serde(default)]` rejects.
pub fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "null_to_default")]
        values: Vec<f64>,
        #[serde(default, deserialize_with = "null_to_default")]
        amount: f64,
    }

    #[test]
    fn test_null_and_missing_become_default() {
        let probe: Probe = serde_json::from_str(r#"{"values": null}"#).unwrap();
        assert!(probe.values.is_empty());
        assert_eq!(probe.amount, 0.0);

        let probe: Probe = serde_json::from_str(r#"{"values": [1.5], "amount": 3}"#).unwrap();
        assert_eq!(probe.values, vec![1.5]);
        assert_eq!(probe.amount, 3.0);
    }
}
