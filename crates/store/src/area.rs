use webstash_common::StoreError;

/// Área de armazenamento chave-valor ambiente.
///
/// Abstrai o store do host (LocalStorage do browser, fake em memória).
/// Valores trafegam como texto serializado; quem interpreta é o adapter.
pub trait StorageArea: Send + Sync {
    /// Lê o texto bruto armazenado na chave.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Grava o texto na chave, sobrescrevendo qualquer valor anterior.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a chave. No-op se ausente.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
