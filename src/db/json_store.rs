// src/db/json_store.rs

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};

use crate::common::error::AppError;
use crate::db::blob_store::BlobStore;

/// Resultado de uma leitura: valor presente, ou ausente
/// (slot inexistente, ilegível ou que não decodifica).
#[derive(Debug, Clone, PartialEq)]
pub enum Stored<T> {
    Present(T),
    Absent,
}

impl<T> Stored<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Stored::Absent)
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Stored::Present(value) => Some(value),
            Stored::Absent => None,
        }
    }

    pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
        match self {
            Stored::Present(value) => value,
            Stored::Absent => f(),
        }
    }
}

// Persistência genérica: um valor tipado por slot, em JSON indentado.
// Clonar é barato; todos os repositórios compartilham o mesmo armazenamento.
#[derive(Clone)]
pub struct JsonStore {
    blobs: Arc<dyn BlobStore>,
}

impl JsonStore {
    pub fn new(blobs: Arc<dyn BlobStore>) -> Self {
        Self { blobs }
    }

    pub fn try_save<T>(&self, value: &T, slot: &str) -> Result<(), AppError>
    where
        T: Serialize + ?Sized,
    {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.blobs.write(slot, &bytes)
    }

    /// Grava e segue em frente: falhas são registradas, nunca propagadas.
    pub fn save<T>(&self, value: &T, slot: &str)
    where
        T: Serialize + ?Sized,
    {
        match self.try_save(value, slot) {
            Ok(()) => tracing::info!(slot, "Slot gravado"),
            Err(e) => tracing::error!(slot, error = %e, "Falha ao gravar o slot; alteração só em memória"),
        }
    }

    pub fn load<T>(&self, slot: &str) -> Stored<T>
    where
        T: DeserializeOwned,
    {
        if !self.blobs.exists(slot) {
            tracing::debug!(slot, "Slot ainda não existe");
            return Stored::Absent;
        }

        let bytes = match self.blobs.read(slot) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(slot, error = %e, "Slot ilegível");
                return Stored::Absent;
            }
        };

        match serde_json::from_slice::<T>(&bytes) {
            Ok(value) => {
                tracing::debug!(slot, "Slot carregado");
                Stored::Present(value)
            }
            Err(e) => {
                tracing::warn!(slot, error = %e, "Slot corrompido, será tratado como vazio");
                Stored::Absent
            }
        }
    }

    pub fn exists(&self, slot: &str) -> bool {
        self.blobs.exists(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::blob_store::{FsBlobStore, MemoryBlobStore};
    use crate::models::{Dish, Event, Menu, RestaurantSettings};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn memory() -> (Arc<MemoryBlobStore>, JsonStore) {
        let blobs = Arc::new(MemoryBlobStore::new());
        let store = JsonStore::new(blobs.clone());
        (blobs, store)
    }

    #[test]
    fn load_of_unwritten_slot_is_absent() {
        let (_, store) = memory();
        let loaded: Stored<Vec<Dish>> = store.load("dishes.json");
        assert!(loaded.is_absent());
    }

    #[test]
    fn undecodable_slot_is_absent() {
        let (blobs, store) = memory();
        blobs.write("menus.json", b"{\"truncated\": [").unwrap();

        let loaded: Stored<Vec<Menu>> = store.load("menus.json");
        assert_eq!(loaded, Stored::Absent);
    }

    #[test]
    fn wrong_shape_is_absent() {
        let (blobs, store) = memory();
        blobs.write("events.json", br#"{"name": "not a list"}"#).unwrap();

        let loaded: Stored<Vec<Event>> = store.load("events.json");
        assert!(loaded.is_absent());
    }

    #[test]
    fn round_trips_every_entity() {
        let (_, store) = memory();

        let dish = Dish::new("Gazpacho andaluz", "Tomate, pepino.", Some(Decimal::new(80, 2)), "Entrantes")
            .with_types(["Vegano", "Sin Gluten"]);
        let unknown_cost = Dish::new("Pan", "", None, "Aperitivo");
        let mut menu = Menu::new("Menú de temporada", "Platos de estación", Decimal::new(22, 0), "Almuerzo")
            .with_default_extra_descriptions();
        menu.associate_dish(&dish);
        let event = Event::new(
            "Aniversario",
            "Bodas de plata",
            NaiveDate::from_ymd_opt(2025, 6, 10).unwrap().and_hms_opt(19, 0, 0).unwrap(),
            "Cena",
            40,
        )
        .with_price_range(Decimal::new(45, 0), Decimal::new(65, 0));
        let settings = RestaurantSettings {
            restaurant_name: "Mi Restaurante".into(),
            logo_data: Some(vec![1, 2, 3, 4, 5]),
            cost_included_coffee: Decimal::new(30, 2),
            ..Default::default()
        };

        let dishes = vec![dish, unknown_cost];
        store.save(&dishes, "dishes.json");
        store.save(&vec![menu.clone()], "menus.json");
        store.save(&vec![event.clone()], "events.json");
        store.save(&settings, "settings.json");

        assert_eq!(store.load::<Vec<Dish>>("dishes.json"), Stored::Present(dishes));
        assert_eq!(store.load::<Vec<Menu>>("menus.json"), Stored::Present(vec![menu]));
        assert_eq!(store.load::<Vec<Event>>("events.json"), Stored::Present(vec![event]));
        assert_eq!(store.load::<RestaurantSettings>("settings.json"), Stored::Present(settings));
    }

    #[test]
    fn money_keeps_every_digit() {
        let (blobs, store) = memory();

        let cost: Decimal = "0.1234567890123456789".parse().unwrap();
        let price: Decimal = "12345678901234567.89".parse().unwrap();
        let dish = Dish::new("Trufa", "", Some(cost), "Postres");
        let mut menu = Menu::new("Menú gran reserva", "", price, "Cena");
        menu.associate_dish(&dish);

        store.save(&vec![menu.clone()], "menus.json");

        let text = String::from_utf8(blobs.contents("menus.json").unwrap()).unwrap();
        assert!(text.contains("\"price\": 12345678901234567.89"));

        let loaded = store.load::<Vec<Menu>>("menus.json").into_option().unwrap();
        assert_eq!(loaded[0].price, price);
        assert_eq!(loaded[0].associated_dishes[0].food_cost, Some(cost));
        assert_eq!(loaded, vec![menu]);
    }

    #[test]
    fn saved_json_is_human_readable() {
        let (blobs, store) = memory();
        let dishes = vec![Dish::new("Flan", "", Some(Decimal::new(45, 2)), "Postres")];
        store.save(&dishes, "dishes.json");

        let text = String::from_utf8(blobs.contents("dishes.json").unwrap()).unwrap();
        assert!(text.contains("\n"));
        assert!(text.contains("\"foodCost\": 0.45"));
        assert!(text.contains("\"category\": \"Postres\""));
    }

    #[test]
    fn failed_save_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        let fs_store = FsBlobStore::new(dir.path()).unwrap();
        let store = JsonStore::new(Arc::new(fs_store));

        // Slot aponta para um diretório inexistente: a escrita falha
        store.save(&vec![1, 2, 3], "missing/dishes.json");
        assert!(store.try_save(&vec![1, 2, 3], "missing/dishes.json").is_err());
        assert!(!store.exists("missing/dishes.json"));
    }
}
