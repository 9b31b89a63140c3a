// src/db/collection.rs

use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

use crate::db::json_store::{JsonStore, Stored};

// Entidade gravada numa coleção: tem id e sabe em qual slot mora.
pub trait Entity: Clone + Serialize + DeserializeOwned {
    const SLOT: &'static str;

    fn id(&self) -> Uuid;

    /// Cópia com novo id, como o botão "Duplicar" do formulário.
    fn duplicate(&self) -> Self;
}

// O repositório de uma coleção: dono da lista em memória e responsável
// por gravar a lista inteira depois de cada mutação.
pub struct CollectionRepository<T: Entity> {
    store: JsonStore,
    items: Vec<T>,
}

impl<T: Entity> CollectionRepository<T> {
    /// Carrega o slot; se estiver ausente usa o `seed` e já grava o resultado,
    /// para que o slot exista a partir daqui.
    pub fn load_or_seed<F>(store: JsonStore, seed: F) -> Self
    where
        F: FnOnce() -> Vec<T>,
    {
        let items = match store.load::<Vec<T>>(T::SLOT) {
            Stored::Present(items) => {
                tracing::info!(slot = T::SLOT, count = items.len(), "Coleção carregada");
                items
            }
            Stored::Absent => {
                let items = seed();
                tracing::info!(slot = T::SLOT, count = items.len(), "Coleção semeada com dados padrão");
                store.save(&items, T::SLOT);
                items
            }
        };

        Self { store, items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
        self.flush();
    }

    /// Substitui o primeiro item com o mesmo id. Sem correspondência não muda
    /// nada, mas a coleção é gravada do mesmo jeito.
    pub fn update(&mut self, item: T) -> bool {
        let found = match self.items.iter().position(|i| i.id() == item.id()) {
            Some(index) => {
                self.items[index] = item;
                true
            }
            None => false,
        };
        self.flush();
        found
    }

    // Mesma regra do update: id ausente é no-op silencioso, e grava
    pub fn delete(&mut self, item: &T) -> bool {
        self.delete_by_id(item.id())
    }

    pub fn delete_by_id(&mut self, id: Uuid) -> bool {
        let found = match self.items.iter().position(|i| i.id() == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        };
        self.flush();
        found
    }

    /// Adiciona uma cópia do item com novo id e a devolve.
    pub fn duplicate(&mut self, id: Uuid) -> Option<T> {
        let copy = self.get(id)?.duplicate();
        self.add(copy.clone());
        Some(copy)
    }

    fn flush(&self) {
        self.store.save(&self.items, T::SLOT);
    }
}
