// src/db/menu_repo.rs

use uuid::Uuid;

use crate::db::collection::{CollectionRepository, Entity};
use crate::models::{dish::Dish, menu::Menu};

pub const MENUS_SLOT: &str = "menus.json";

impl Entity for Menu {
    const SLOT: &'static str = MENUS_SLOT;

    fn id(&self) -> Uuid {
        self.id
    }

    fn duplicate(&self) -> Self {
        Menu::duplicate(self)
    }
}

pub type MenuRepository = CollectionRepository<Menu>;

impl CollectionRepository<Menu> {
    /// Associa ao menu uma cópia do prato e grava a coleção.
    /// Retorna `false` se o menu não existe ou o prato já estava associado.
    pub fn associate_dish(&mut self, menu_id: Uuid, dish: &Dish) -> bool {
        let Some(mut menu) = self.get(menu_id).cloned() else {
            tracing::debug!(%menu_id, "Menu não encontrado para associar prato");
            return false;
        };
        if !menu.associate_dish(dish) {
            return false;
        }
        self.update(menu)
    }

    pub fn dissociate_dish(&mut self, menu_id: Uuid, dish_id: Uuid) -> bool {
        let Some(mut menu) = self.get(menu_id).cloned() else {
            return false;
        };
        if !menu.dissociate_dish(dish_id) {
            return false;
        }
        self.update(menu)
    }
}
