// src/models/menu.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::common::error::AppError;
use crate::common::validation::{field_error, validate_not_negative};
use crate::models::dish::Dish;

// Tipos de serviço conhecidos. "" = menu sem tipo informado.
pub const MEAL_TYPE_ORDER: [&str; 4] = ["", "Desayuno", "Almuerzo", "Cena"];

// --- Extras incluídos no preço do menu ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IncludedExtra {
    Drink,
    Water,
    Bread,
    Coffee,
    WinePairing,
}

impl IncludedExtra {
    pub const ALL: [IncludedExtra; 5] = [
        IncludedExtra::Drink,
        IncludedExtra::Water,
        IncludedExtra::Bread,
        IncludedExtra::Coffee,
        IncludedExtra::WinePairing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncludedExtra::Drink => "drink",
            IncludedExtra::Water => "water",
            IncludedExtra::Bread => "bread",
            IncludedExtra::Coffee => "coffee",
            IncludedExtra::WinePairing => "winePairing",
        }
    }

    // Texto sugerido quando o extra é ligado sem descrição
    pub fn default_description(&self) -> &'static str {
        match self {
            IncludedExtra::Drink => {
                "Este menú incluye una bebida por persona (vino, cerveza, agua o refresco)."
            }
            IncludedExtra::Water => {
                "Agua embotellada/filtrada incluida en el menú sin coste adicional."
            }
            IncludedExtra::Bread => "Servicio de pan incluido en el menú.",
            IncludedExtra::Coffee => {
                "Este menú incluye un café por persona al finalizar la comida."
            }
            IncludedExtra::WinePairing => {
                "Ofrecemos un maridaje de vinos recomendado para cada plato."
            }
        }
    }
}

// --- Menu ---
// `associated_dishes` guarda cópias dos pratos no momento da seleção,
// nunca referências ao catálogo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,

    pub is_drink_included: bool,
    pub drink_description: String,
    pub is_water_included: bool,
    pub water_description: String,
    pub is_bread_included: bool,
    pub bread_description: String,
    pub is_coffee_included: bool,
    pub coffee_description: String,
    pub is_wine_pairing_included: bool,
    pub wine_pairing_description: String,

    pub meal_type: String,

    #[serde(default)]
    pub associated_dishes: Vec<Dish>,
}

impl Menu {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        meal_type: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            price,
            is_drink_included: false,
            drink_description: String::new(),
            is_water_included: false,
            water_description: String::new(),
            is_bread_included: false,
            bread_description: String::new(),
            is_coffee_included: false,
            coffee_description: String::new(),
            is_wine_pairing_included: false,
            wine_pairing_description: String::new(),
            meal_type: meal_type.into(),
            associated_dishes: Vec::new(),
        }
    }

    /// Preenche as descrições de todos os extras com os textos sugeridos,
    /// sem ligar nenhum deles.
    pub fn with_default_extra_descriptions(mut self) -> Self {
        for extra in IncludedExtra::ALL {
            let (_, description) = self.extra_fields_mut(extra);
            *description = extra.default_description().to_string();
        }
        self
    }

    fn extra_fields(&self, extra: IncludedExtra) -> (bool, &str) {
        match extra {
            IncludedExtra::Drink => (self.is_drink_included, self.drink_description.as_str()),
            IncludedExtra::Water => (self.is_water_included, self.water_description.as_str()),
            IncludedExtra::Bread => (self.is_bread_included, self.bread_description.as_str()),
            IncludedExtra::Coffee => (self.is_coffee_included, self.coffee_description.as_str()),
            IncludedExtra::WinePairing => (
                self.is_wine_pairing_included,
                self.wine_pairing_description.as_str(),
            ),
        }
    }

    fn extra_fields_mut(&mut self, extra: IncludedExtra) -> (&mut bool, &mut String) {
        match extra {
            IncludedExtra::Drink => (&mut self.is_drink_included, &mut self.drink_description),
            IncludedExtra::Water => (&mut self.is_water_included, &mut self.water_description),
            IncludedExtra::Bread => (&mut self.is_bread_included, &mut self.bread_description),
            IncludedExtra::Coffee => {
                (&mut self.is_coffee_included, &mut self.coffee_description)
            }
            IncludedExtra::WinePairing => (
                &mut self.is_wine_pairing_included,
                &mut self.wine_pairing_description,
            ),
        }
    }

    pub fn is_included(&self, extra: IncludedExtra) -> bool {
        self.extra_fields(extra).0
    }

    pub fn extra_description(&self, extra: IncludedExtra) -> &str {
        self.extra_fields(extra).1
    }

    pub fn set_extra(&mut self, extra: IncludedExtra, included: bool, description: impl Into<String>) {
        let (flag, text) = self.extra_fields_mut(extra);
        *flag = included;
        *text = description.into();
    }

    /// Extras ligados, na ordem fixa, com a descrição que só vale quando ligado.
    pub fn included_extras(&self) -> Vec<(IncludedExtra, &str)> {
        IncludedExtra::ALL
            .into_iter()
            .filter(|extra| self.is_included(*extra))
            .map(|extra| (extra, self.extra_description(extra)))
            .collect()
    }

    // ---
    // Composição: a fronteira da cópia fica aqui
    // ---

    /// Associa uma cópia do prato. Retorna `false` se o id já estava no menu.
    pub fn associate_dish(&mut self, dish: &Dish) -> bool {
        if self.is_associated(dish.id) {
            return false;
        }
        self.associated_dishes.push(dish.snapshot());
        true
    }

    pub fn dissociate_dish(&mut self, dish_id: Uuid) -> bool {
        match self.associated_dishes.iter().position(|d| d.id == dish_id) {
            Some(index) => {
                self.associated_dishes.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn is_associated(&self, dish_id: Uuid) -> bool {
        self.associated_dishes.iter().any(|d| d.id == dish_id)
    }

    // As cópias dos pratos são mantidas; só o menu recebe um novo id
    pub fn duplicate(&self) -> Menu {
        Menu {
            id: Uuid::new_v4(),
            name: format!("{} (Copia)", self.name),
            ..self.clone()
        }
    }
}

// ---
// Payload: NewMenu
// ---
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default)]
    pub price: Decimal,

    #[serde(default)]
    pub meal_type: String,

    // Extras ligados e a descrição de cada um
    #[serde(default)]
    pub extras: Vec<(IncludedExtra, String)>,

    #[serde(default)]
    pub dishes: Vec<Dish>,
}

impl NewMenuPayload {
    // Regra: um extra incluído precisa de descrição
    fn validate_consistency(&self) -> Result<(), ValidationError> {
        for (extra, description) in &self.extras {
            if description.trim().is_empty() {
                let mut err = ValidationError::new("ExtraDescriptionRequired");
                err.message = Some(
                    format!("O extra '{}' precisa de uma descrição.", extra.as_str()).into(),
                );
                return Err(err);
            }
        }
        Ok(())
    }

    pub fn into_menu(self) -> Result<Menu, AppError> {
        self.validate()?;
        self.validate_consistency()
            .map_err(|e| field_error("extras", e))?;

        let mut menu = Menu::new(self.name, self.description, self.price, self.meal_type);
        for (extra, description) in self.extras {
            menu.set_extra(extra, true, description);
        }
        for dish in &self.dishes {
            menu.associate_dish(dish);
        }
        Ok(menu)
    }
}
