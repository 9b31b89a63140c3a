// src/services/dish_service.rs

use crate::models::{Dish, CATEGORY_ORDER};
use crate::models::dish::category_rank;

// Valor do seletor que desliga o filtro
pub const ALL_FILTER: &str = "Todos";

// Filtro da lista de pratos (categoria, tipo e busca livre)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DishFilter {
    pub category: Option<String>,
    pub dietary_type: Option<String>,
    pub search: String,
}

impl DishFilter {
    /// Monta o filtro a partir dos seletores da tela, onde "Todos" desliga o critério.
    pub fn from_selection(category: &str, dietary_type: &str, search: &str) -> Self {
        let pick = |value: &str| {
            if value.is_empty() || value == ALL_FILTER {
                None
            } else {
                Some(value.to_string())
            }
        };
        Self {
            category: pick(category),
            dietary_type: pick(dietary_type),
            search: search.to_string(),
        }
    }

    pub fn matches(&self, dish: &Dish) -> bool {
        let matches_category = self
            .category
            .as_deref()
            .is_none_or(|c| dish.category == c);
        let matches_type = self
            .dietary_type
            .as_deref()
            .is_none_or(|t| dish.has_type(t));

        // Busca literal: espaços contam como parte do texto
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || dish.title.to_lowercase().contains(&needle)
            || dish.description.to_lowercase().contains(&needle);

        matches_category && matches_type && matches_search
    }

    pub fn apply<'a>(&self, dishes: &'a [Dish]) -> Vec<&'a Dish> {
        dishes.iter().filter(|d| self.matches(d)).collect()
    }
}

/// Seções do catálogo: só as categorias canônicas com pratos, na ordem fixa.
/// Pratos com categoria fora delas não aparecem aqui.
pub fn catalog_sections(dishes: &[Dish]) -> Vec<(&'static str, Vec<&Dish>)> {
    CATEGORY_ORDER
        .iter()
        .map(|category| {
            let in_category: Vec<&Dish> =
                dishes.iter().filter(|d| d.category == *category).collect();
            (*category, in_category)
        })
        .filter(|(_, group)| !group.is_empty())
        .collect()
}

/// Seções dos pratos de um menu: canônicas primeiro, depois as demais
/// categorias em ordem alfabética.
pub fn menu_sections<'a>(dishes: &[&'a Dish]) -> Vec<(String, Vec<&'a Dish>)> {
    let mut categories: Vec<&str> = Vec::new();
    for dish in dishes {
        if !categories.contains(&dish.category.as_str()) {
            categories.push(dish.category.as_str());
        }
    }
    categories.sort_by(|a, b| {
        let rank_a = category_rank(a).unwrap_or(usize::MAX);
        let rank_b = category_rank(b).unwrap_or(usize::MAX);
        rank_a.cmp(&rank_b).then_with(|| a.cmp(b))
    });

    categories
        .into_iter()
        .map(|category| {
            let group = dishes
                .iter()
                .copied()
                .filter(|d| d.category == category)
                .collect();
            (category.to_string(), group)
        })
        .collect()
}
