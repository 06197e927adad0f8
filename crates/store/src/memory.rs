use dashmap::DashMap;

use webstash_common::StoreError;

use crate::StorageArea;

/// Store em memória, stand-in do host em testes.
///
/// Opcionalmente limitado por quota em bytes (chave + valor), para
/// exercitar a propagação de falha de escrita do store real.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: DashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limita o total de bytes armazenados.
    pub fn with_quota(max_bytes: usize) -> Self {
        Self {
            data: DashMap::new(),
            quota: Some(max_bytes),
        }
    }

    /// Número de chaves presentes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Texto bruto da chave, sem passar pelo adapter. Inspeção em testes.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.data.get(key).map(|v| v.value().clone())
    }

    fn used_bytes(&self) -> usize {
        self.data
            .iter()
            .map(|entry| entry.key().len() + entry.value().len())
            .sum()
    }
}

impl StorageArea for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.data.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(quota) = self.quota {
            let current = self
                .data
                .get(key)
                .map(|v| key.len() + v.len())
                .unwrap_or(0);
            let used = self.used_bytes() - current;
            if used + key.len() + value.len() > quota {
                return Err(StoreError::QuotaExceeded);
            }
        }
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.data.remove(key);
        Ok(())
    }
}
