use serde::{Deserialize, Serialize};
use serde_json::Value;

use webstash_common::MS_PER_DAY;

/// Registro persistido: valor + instante de expiração opcional (ms desde a época).
///
/// Serializa em camelCase (`expiredAt`) para manter o formato gravado
/// legível por clientes antigos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredItem {
    pub value: Value,
    pub expired_at: Option<i64>,
}

impl StoredItem {
    pub fn new(value: Value, expired_at: Option<i64>) -> Self {
        Self { value, expired_at }
    }

    /// Expirado quando `expiredAt` é não-nulo e <= agora.
    pub fn is_expired(&self, now_ms: i64) -> bool {
        self.expired_at.map(|t| t <= now_ms).unwrap_or(false)
    }
}

/// Converte prazo em dias para instante absoluto.
///
/// Zero dias conta como ausência de prazo (truthiness do formato original).
pub fn expiry_in_days(now_ms: i64, expire_days: Option<f64>) -> Option<i64> {
    expire_days
        .filter(|d| *d != 0.0)
        .map(|d| now_ms + (d * MS_PER_DAY as f64) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn never_expires_without_deadline() {
        let item = StoredItem::new(json!("v"), None);
        assert!(!item.is_expired(i64::MAX));
    }

    #[test]
    fn expired_at_or_before_now() {
        let item = StoredItem::new(json!("v"), Some(1_000));
        assert!(!item.is_expired(999));
        assert!(item.is_expired(1_000));
        assert!(item.is_expired(1_001));
    }

    #[test]
    fn expiry_from_days() {
        assert_eq!(expiry_in_days(0, None), None);
        assert_eq!(expiry_in_days(0, Some(0.0)), None);
        assert_eq!(expiry_in_days(0, Some(1.0)), Some(MS_PER_DAY));
        assert_eq!(expiry_in_days(500, Some(2.0)), Some(500 + 2 * MS_PER_DAY));
    }

    #[test]
    fn expiry_fractional_days() {
        assert_eq!(expiry_in_days(0, Some(0.5)), Some(MS_PER_DAY / 2));
    }

    #[test]
    fn serializes_camel_case() {
        let item = StoredItem::new(json!({"id": 1}), Some(42));
        let text = serde_json::to_string(&item).unwrap();
        assert!(text.contains("\"expiredAt\":42"));

        let back: StoredItem = serde_json::from_str(&text).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn deserializes_null_expiry() {
        let item: StoredItem =
            serde_json::from_str(r#"{"value":"x","expiredAt":null}"#).unwrap();
        assert_eq!(item.expired_at, None);
    }
}
