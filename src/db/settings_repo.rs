// src/db/settings_repo.rs

use crate::db::json_store::{JsonStore, Stored};
use crate::models::settings::RestaurantSettings;

pub const SETTINGS_SLOT: &str = "settings.json";

// Mesmo padrão dos outros repositórios, mas para um registro único
pub struct SettingsRepository {
    store: JsonStore,
    settings: RestaurantSettings,
}

impl SettingsRepository {
    pub fn load_or_seed<F>(store: JsonStore, seed: F) -> Self
    where
        F: FnOnce() -> RestaurantSettings,
    {
        let settings = match store.load::<RestaurantSettings>(SETTINGS_SLOT) {
            Stored::Present(settings) => {
                tracing::info!(slot = SETTINGS_SLOT, "Ajustes carregados");
                settings
            }
            Stored::Absent => {
                let settings = seed();
                tracing::info!(slot = SETTINGS_SLOT, "Ajustes criados com valores padrão");
                store.save(&settings, SETTINGS_SLOT);
                settings
            }
        };

        Self { store, settings }
    }

    pub fn get(&self) -> &RestaurantSettings {
        &self.settings
    }

    pub fn replace(&mut self, settings: RestaurantSettings) {
        self.settings = settings;
        self.flush();
    }

    // Edita no lugar e grava, como um formulário ligado ao registro
    pub fn update_with<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut RestaurantSettings),
    {
        edit(&mut self.settings);
        self.flush();
    }

    fn flush(&self) {
        self.store.save(&self.settings, SETTINGS_SLOT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryBlobStore;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    #[test]
    fn seeds_once_then_reads_back() {
        let blobs = Arc::new(MemoryBlobStore::new());
        let store = JsonStore::new(blobs.clone());

        let repo = SettingsRepository::load_or_seed(store.clone(), || RestaurantSettings {
            restaurant_name: "Mi Restaurante".into(),
            ..Default::default()
        });
        assert_eq!(repo.get().restaurant_name, "Mi Restaurante");
        assert_eq!(blobs.write_count(), 1);

        let reopened = SettingsRepository::load_or_seed(store, RestaurantSettings::default);
        assert_eq!(reopened.get(), repo.get());
        assert_eq!(blobs.write_count(), 1);
    }

    #[test]
    fn edits_write_through() {
        let blobs = Arc::new(MemoryBlobStore::new());
        let store = JsonStore::new(blobs.clone());
        let mut repo = SettingsRepository::load_or_seed(store.clone(), RestaurantSettings::default);

        repo.update_with(|s| {
            s.cost_included_bread = Decimal::new(15, 2);
            s.logo_data = Some(vec![9, 9, 9]);
        });
        let current = repo.get().clone();
        repo.replace(RestaurantSettings {
            restaurant_slogan: "Tu eslogan aquí".into(),
            ..current
        });
        assert_eq!(blobs.write_count(), 3);

        let stored: RestaurantSettings = store.load(SETTINGS_SLOT).into_option().unwrap();
        assert_eq!(stored.cost_included_bread, Decimal::new(15, 2));
        assert_eq!(stored.restaurant_slogan, "Tu eslogan aquí");
        assert_eq!(stored.logo_data, Some(vec![9, 9, 9]));
    }
}
