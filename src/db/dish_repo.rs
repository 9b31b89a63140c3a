// src/db/dish_repo.rs

use uuid::Uuid;

use crate::db::collection::{CollectionRepository, Entity};
use crate::models::dish::Dish;

pub const DISHES_SLOT: &str = "dishes.json";

impl Entity for Dish {
    const SLOT: &'static str = DISHES_SLOT;

    fn id(&self) -> Uuid {
        self.id
    }

    fn duplicate(&self) -> Self {
        Dish::duplicate(self)
    }
}

// O repositório de pratos, responsável pelo slot 'dishes.json'
pub type DishRepository = CollectionRepository<Dish>;
