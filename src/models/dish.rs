// src/models/dish.rs

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::common::error::AppError;
use crate::common::validation::{field_error, validate_not_negative};

// Ordem canônica das categorias. O campo `category` continua livre.
pub const CATEGORY_ORDER: [&str; 4] = ["Aperitivo", "Entrantes", "Segundos", "Postres"];

pub const ALLERGEN_OPTIONS: [&str; 10] = [
    "Gluten",
    "Lácteos",
    "Frutos Secos",
    "Huevo",
    "Marisco",
    "Mostaza",
    "Sésamo",
    "Soja",
    "Apio",
    "Pescado",
];

pub const DIETARY_TYPE_OPTIONS: [&str; 3] = ["Sin Gluten", "Vegano", "Vegetariano"];

// --- Prato do catálogo ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: Uuid,
    pub title: String,
    pub description: String,

    // Ausente = custo desconhecido (nunca gravado como null)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_cost: Option<Decimal>,

    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
    pub category: String,
}

impl Dish {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        food_cost: Option<Decimal>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            food_cost,
            allergens: Vec::new(),
            types: Vec::new(),
            category: category.into(),
        }
    }

    pub fn with_allergens<I, S>(mut self, allergens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allergens = allergens.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Cópia independente do prato, com o mesmo id, para guardar dentro de um menu.
    /// Alterações posteriores no catálogo não chegam até ela.
    pub fn snapshot(&self) -> Dish {
        Dish {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            food_cost: self.food_cost,
            allergens: self.allergens.clone(),
            types: self.types.clone(),
            category: self.category.clone(),
        }
    }

    // Duplicar gera um novo id e marca o título como cópia
    pub fn duplicate(&self) -> Dish {
        Dish {
            id: Uuid::new_v4(),
            title: format!("{} (Copia)", self.title),
            ..self.snapshot()
        }
    }

    /// Custo para exibição: "(3.50 €)", ou "(0.00 €)" quando desconhecido.
    pub fn formatted_cost(&self) -> String {
        let cost = self.food_cost.unwrap_or(Decimal::ZERO).round_dp(2);
        format!("({:.2} €)", cost)
    }

    pub fn cost_or_zero(&self) -> Decimal {
        self.food_cost.unwrap_or(Decimal::ZERO)
    }

    pub fn has_type(&self, dietary_type: &str) -> bool {
        self.types.iter().any(|t| t == dietary_type)
    }

    pub fn has_allergen(&self, allergen: &str) -> bool {
        self.allergens.iter().any(|a| a == allergen)
    }

    // Adiciona ou remove a etiqueta, como nos seletores do formulário
    pub fn toggle_allergen(&mut self, allergen: &str) {
        toggle_tag(&mut self.allergens, allergen);
    }

    pub fn toggle_type(&mut self, dietary_type: &str) {
        toggle_tag(&mut self.types, dietary_type);
    }
}

fn toggle_tag(tags: &mut Vec<String>, tag: &str) {
    if let Some(pos) = tags.iter().position(|t| t == tag) {
        tags.remove(pos);
    } else {
        tags.push(tag.to_string());
    }
}

/// Posição da categoria na ordem canônica; `None` para categorias fora dela.
pub fn category_rank(category: &str) -> Option<usize> {
    CATEGORY_ORDER.iter().position(|c| *c == category)
}

/// Lê o custo digitado no formulário. Texto vazio ou inválido vira "desconhecido".
pub fn parse_food_cost(input: &str) -> Option<Decimal> {
    let normalized = input.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    Decimal::from_str(&normalized).ok()
}

// ---
// Payload: NewDish
// ---
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewDishPayload {
    #[validate(length(min = 1, message = "O título é obrigatório."))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub food_cost: Option<Decimal>,

    #[serde(default)]
    pub allergens: Vec<String>,

    #[serde(default)]
    pub types: Vec<String>,

    #[validate(length(min = 1, message = "A categoria é obrigatória."))]
    pub category: String,
}

impl NewDishPayload {
    fn validate_consistency(&self) -> Result<(), AppError> {
        if let Some(cost) = &self.food_cost {
            validate_not_negative(cost).map_err(|e| field_error("food_cost", e))?;
        }
        Ok(())
    }

    pub fn into_dish(self) -> Result<Dish, AppError> {
        self.validate()?;
        self.validate_consistency()?;

        Ok(Dish::new(self.title, self.description, self.food_cost, self.category)
            .with_allergens(self.allergens)
            .with_types(self.types))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn croquetas() -> Dish {
        Dish::new(
            "Croquetas de jamón ibérico",
            "Croquetas cremosas con bechamel.",
            Some(Decimal::new(130, 2)),
            "Aperitivo",
        )
        .with_allergens(["Gluten", "Lácteos"])
    }

    #[test]
    fn snapshot_is_detached_from_original() {
        let mut original = croquetas();
        let copy = original.snapshot();

        original.title = "Croquetas de pollo".to_string();
        original.food_cost = Some(Decimal::new(90, 2));
        original.allergens.push("Huevo".to_string());

        assert_eq!(copy.id, original.id);
        assert_eq!(copy.title, "Croquetas de jamón ibérico");
        assert_eq!(copy.food_cost, Some(Decimal::new(130, 2)));
        assert_eq!(copy.allergens, vec!["Gluten", "Lácteos"]);
    }

    #[test]
    fn duplicate_gets_new_id_and_copy_suffix() {
        let dish = croquetas();
        let dup = dish.duplicate();

        assert_ne!(dup.id, dish.id);
        assert_eq!(dup.title, "Croquetas de jamón ibérico (Copia)");
        assert_eq!(dup.food_cost, dish.food_cost);
        assert_eq!(dup.category, dish.category);
    }

    #[test]
    fn formatted_cost_handles_unknown() {
        let mut dish = croquetas();
        assert_eq!(dish.formatted_cost(), "(1.30 €)");

        dish.food_cost = None;
        assert_eq!(dish.formatted_cost(), "(0.00 €)");

        dish.food_cost = Some(Decimal::new(3, 0));
        assert_eq!(dish.formatted_cost(), "(3.00 €)");
    }

    #[test]
    fn unknown_cost_is_omitted_from_json() {
        let mut dish = croquetas();
        dish.food_cost = None;

        let json = serde_json::to_value(&dish).unwrap();
        assert!(json.get("foodCost").is_none());
        assert_eq!(json["category"], "Aperitivo");

        let back: Dish = serde_json::from_value(json).unwrap();
        assert_eq!(back, dish);
    }

    #[test]
    fn toggling_tags() {
        let mut dish = croquetas();
        dish.toggle_allergen("Gluten");
        dish.toggle_type("Vegano");

        assert!(!dish.has_allergen("Gluten"));
        assert!(dish.has_type("Vegano"));
    }

    #[test]
    fn parses_form_cost() {
        assert_eq!(parse_food_cost("2,75"), Some(Decimal::new(275, 2)));
        assert_eq!(parse_food_cost(" 1.5 "), Some(Decimal::new(15, 1)));
        assert_eq!(parse_food_cost(""), None);
        assert_eq!(parse_food_cost("abc"), None);
    }

    #[test]
    fn payload_rejects_missing_title_and_negative_cost() {
        let payload = NewDishPayload {
            title: String::new(),
            description: String::new(),
            food_cost: None,
            allergens: vec![],
            types: vec![],
            category: "Postres".into(),
        };
        let err = payload.into_dish().unwrap_err();
        assert!(err.field_messages().contains_key("title"));

        let payload = NewDishPayload {
            title: "Flan".into(),
            description: String::new(),
            food_cost: Some(Decimal::new(-50, 2)),
            allergens: vec![],
            types: vec![],
            category: "Postres".into(),
        };
        let err = payload.into_dish().unwrap_err();
        let details = err.field_messages();
        assert!(details.contains_key("food_cost"));
        assert_eq!(details["food_cost"], vec!["O valor não pode ser negativo.".to_string()]);
    }

    #[test]
    fn payload_builds_dish() {
        let payload: NewDishPayload = serde_json::from_str(
            r#"{"title":"Flan","foodCost":0.45,"allergens":["Huevo"],"category":"Postres"}"#,
        )
        .unwrap();
        let dish = payload.into_dish().unwrap();

        assert_eq!(dish.title, "Flan");
        assert_eq!(dish.food_cost, Some(Decimal::new(45, 2)));
        assert_eq!(dish.allergens, vec!["Huevo"]);
        assert!(dish.types.is_empty());
    }

    #[test]
    fn category_rank_follows_canonical_order() {
        assert_eq!(category_rank("Aperitivo"), Some(0));
        assert_eq!(category_rank("Postres"), Some(3));
        assert_eq!(category_rank("Bebidas"), None);
    }
}
