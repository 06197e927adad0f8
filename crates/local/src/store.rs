use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use webstash_common::{BOUNDED_LIST_MAX, Clock, EMPTY_LIST_TEXT, StashResult, SystemClock};
use webstash_store::StorageArea;

use crate::identity::Identity;
use crate::record::{StoredItem, expiry_in_days};

/// Adapter de itens sobre uma área de armazenamento ambiente.
///
/// Cada chave guarda um registro único ou uma lista ordenada de registros,
/// sempre como JSON. A expiração é avaliada preguiçosamente na leitura:
/// registro único expirado é removido, entradas de lista expiradas são
/// compactadas e a lista reescrita.
pub struct ItemStore {
    area: Arc<dyn StorageArea>,
    clock: Arc<dyn Clock>,
    identity: Identity,
}

impl ItemStore {
    pub fn new(area: Arc<dyn StorageArea>) -> Self {
        Self::with_clock(area, Arc::new(SystemClock))
    }

    pub fn with_clock(area: Arc<dyn StorageArea>, clock: Arc<dyn Clock>) -> Self {
        Self {
            area,
            clock,
            identity: Identity::default(),
        }
    }

    /// Troca a política de identidade usada na de-duplicação das listas.
    pub fn with_identity(mut self, identity: Identity) -> Self {
        self.identity = identity;
        self
    }

    // --- Operações de item único ---

    /// Grava um registro único, sobrescrevendo o valor anterior.
    pub fn set_item<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        expire_days: Option<f64>,
    ) -> StashResult<()> {
        let record = StoredItem::new(
            serde_json::to_value(value)?,
            expiry_in_days(self.clock.now_ms(), expire_days),
        );
        self.area.set(key, &serde_json::to_string(&record)?)?;
        Ok(())
    }

    /// Lê o registro único da chave.
    ///
    /// Ausente, ilegível ou expirado viram `None`; no caso expirado a
    /// chave é removida do store antes de retornar.
    pub fn get_item<T: DeserializeOwned>(&self, key: &str) -> StashResult<Option<T>> {
        let Some(raw) = self.area.get(key)? else {
            return Ok(None);
        };
        let Ok(record) = serde_json::from_str::<StoredItem>(&raw) else {
            return Ok(None);
        };
        if record.is_expired(self.clock.now_ms()) {
            self.area.remove(key)?;
            debug!("chave expirada removida: {key}");
            return Ok(None);
        }
        Ok(serde_json::from_value(record.value).ok())
    }

    /// Remove a chave incondicionalmente. No-op se ausente.
    pub fn delete_item(&self, key: &str) -> StashResult<()> {
        self.area.remove(key)?;
        Ok(())
    }

    /// Zera a chave para a lista vazia, sem removê-la.
    pub fn clear_item(&self, key: &str) -> StashResult<()> {
        self.area.set(key, EMPTY_LIST_TEXT)?;
        Ok(())
    }

    // --- Operações de lista ---

    /// Retorna as entradas vivas da lista. Chave ausente ou ilegível conta
    /// como lista vazia; entradas que não convertem para `T` são puladas.
    pub fn get_items<T: DeserializeOwned>(&self, key: &str) -> StashResult<Vec<T>> {
        Ok(self
            .live_records(key)?
            .into_iter()
            .filter_map(|r| serde_json::from_value(r.value).ok())
            .collect())
    }

    /// Insere ou atualiza uma entrada da lista, de-duplicando pela política
    /// de identidade. A entrada resultante vai para o fim da lista.
    pub fn set_items<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        expire_days: Option<f64>,
    ) -> StashResult<()> {
        let new_value = serde_json::to_value(value)?;
        let mut records = self.live_records(key)?;
        records.retain(|r| !self.identity.matches(&r.value, &new_value));
        records.push(StoredItem::new(
            new_value,
            expiry_in_days(self.clock.now_ms(), expire_days),
        ));
        self.write_records(key, &records)
    }

    /// Variante limitada: de-duplica por igualdade estrutural do valor e
    /// mantém no máximo [`BOUNDED_LIST_MAX`] entradas, descartando as mais
    /// antigas (índice 0).
    pub fn set_item_bounded<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        expire_days: Option<f64>,
    ) -> StashResult<()> {
        let new_value = serde_json::to_value(value)?;
        let mut records = self.live_records(key)?;
        records.retain(|r| r.value != new_value);
        records.push(StoredItem::new(
            new_value,
            expiry_in_days(self.clock.now_ms(), expire_days),
        ));
        while records.len() > BOUNDED_LIST_MAX {
            records.remove(0);
        }
        self.write_records(key, &records)
    }

    /// Remove da lista as entradas com a identidade do valor dado.
    pub fn remove_item<T: Serialize>(&self, key: &str, value: &T) -> StashResult<()> {
        let target = serde_json::to_value(value)?;
        let mut records = self.live_records(key)?;
        records.retain(|r| !self.identity.matches(&r.value, &target));
        self.write_records(key, &records)
    }

    /// Caminho canônico de leitura das listas: filtra entradas expiradas e,
    /// quando algo foi descartado, persiste a lista compactada de volta.
    /// Leitura de chave nunca gravada não cria a chave.
    fn live_records(&self, key: &str) -> StashResult<Vec<StoredItem>> {
        let records: Vec<StoredItem> = self
            .area
            .get(key)?
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        let now = self.clock.now_ms();
        let before = records.len();
        let live: Vec<StoredItem> = records.into_iter().filter(|r| !r.is_expired(now)).collect();

        if live.len() < before {
            debug!("{} registros expirados compactados em {key}", before - live.len());
            self.write_records(key, &live)?;
        }
        Ok(live)
    }

    fn write_records(&self, key: &str, records: &[StoredItem]) -> StashResult<()> {
        self.area.set(key, &serde_json::to_string(records)?)?;
        Ok(())
    }
}
