use std::sync::Mutex;

use chrono::Utc;

use crate::date::parse_http_date;

/// Fonte ambiente de cookies.
///
/// A forma de leitura é a lista `nome=valor` separada por `; `; a forma de
/// escrita é uma atribuição única (`nome=valor[; atributo...]`) que o host
/// mescla na lista por nome/path/domain. Escrita nunca falha.
pub trait CookieSource: Send + Sync {
    fn read(&self) -> String;
    fn write(&self, assignment: &str);
}

/// Tripla que identifica um cookie no host.
/// Path ausente na atribuição vale a raiz; domain ausente vale o host atual.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CookieKey {
    name: String,
    path: String,
    domain: String,
}

/// Fake do host para testes: guarda os cookies vivos e aplica a semântica
/// de mescla do browser. Atribuição com `expires` no passado remove o
/// cookie em vez de gravá-lo.
#[derive(Debug, Default)]
pub struct MemoryCookieSource {
    cookies: Mutex<Vec<(CookieKey, String)>>,
}

impl MemoryCookieSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Número de cookies vivos.
    pub fn len(&self) -> usize {
        self.cookies.lock().map(|g| g.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CookieSource for MemoryCookieSource {
    fn read(&self) -> String {
        self.cookies
            .lock()
            .map(|guard| {
                guard
                    .iter()
                    .map(|(key, value)| format!("{}={}", key.name, value))
                    .collect::<Vec<_>>()
                    .join("; ")
            })
            .unwrap_or_default()
    }

    fn write(&self, assignment: &str) {
        let mut parts = assignment.split(';');
        let Some(pair) = parts.next() else { return };
        let Some((name, value)) = pair.split_once('=') else {
            return;
        };

        let mut path = None;
        let mut domain = None;
        let mut expires = None;
        for attr in parts {
            let attr = attr.trim();
            if let Some((attr_name, attr_value)) = attr.split_once('=') {
                match attr_name.to_ascii_lowercase().as_str() {
                    "expires" => expires = parse_http_date(attr_value),
                    "path" => path = Some(attr_value.to_string()),
                    "domain" => domain = Some(attr_value.to_string()),
                    _ => {}
                }
            }
            // atributo sem valor (secure) não muda a identidade do cookie
        }

        let key = CookieKey {
            name: name.to_string(),
            path: path.unwrap_or_else(|| "/".to_string()),
            domain: domain.unwrap_or_default(),
        };
        let expired = expires
            .map(|ms| ms <= Utc::now().timestamp_millis())
            .unwrap_or(false);

        if let Ok(mut guard) = self.cookies.lock() {
            guard.retain(|(existing, _)| *existing != key);
            if !expired {
                guard.push((key, value.to_string()));
            }
        }
    }
}
