use serde_json::Value;

/// Política de identidade usada na de-duplicação das listas.
#[derive(Debug, Clone, PartialEq)]
pub enum Identity {
    /// Identidade pelo campo nomeado (ex.: `"id"`). Quando algum dos
    /// valores não carrega o campo, cai para igualdade estrutural.
    Field(String),
    /// Igualdade estrutural do valor inteiro.
    Structural,
}

impl Identity {
    /// Compara dois valores sob esta política.
    pub fn matches(&self, a: &Value, b: &Value) -> bool {
        match self {
            Identity::Field(name) => match (a.get(name), b.get(name)) {
                (Some(x), Some(y)) => x == y,
                _ => a == b,
            },
            Identity::Structural => a == b,
        }
    }
}

impl Default for Identity {
    fn default() -> Self {
        Identity::Field("id".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_identity_matches_by_id() {
        let identity = Identity::default();
        assert!(identity.matches(&json!({"id": 1, "a": 1}), &json!({"id": 1, "a": 2})));
        assert!(!identity.matches(&json!({"id": 1}), &json!({"id": 2})));
    }

    #[test]
    fn field_identity_falls_back_to_structural() {
        let identity = Identity::default();
        assert!(identity.matches(&json!("query"), &json!("query")));
        assert!(!identity.matches(&json!("query"), &json!("other")));
        // um lado com id, outro sem: comparação estrutural
        assert!(!identity.matches(&json!({"id": 1}), &json!({"name": "x"})));
    }

    #[test]
    fn structural_ignores_id_field() {
        let identity = Identity::Structural;
        assert!(!identity.matches(&json!({"id": 1, "a": 1}), &json!({"id": 1, "a": 2})));
        assert!(identity.matches(&json!({"id": 1, "a": 1}), &json!({"id": 1, "a": 1})));
    }

    #[test]
    fn custom_field_name() {
        let identity = Identity::Field("uuid".into());
        assert!(identity.matches(&json!({"uuid": "abc", "v": 1}), &json!({"uuid": "abc", "v": 2})));
    }
}
