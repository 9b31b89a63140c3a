// src/services/costing.rs

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Dish, Menu, Tone, CATEGORY_ORDER};

// Faixas da razão custo/PVP (limite inferior inclusivo)
pub const HIGH_PROFITABILITY_MAX_RATIO: Decimal = Decimal::from_parts(25, 0, 0, false, 2);
pub const ATTENTION_MAX_RATIO: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// Custo de "um prato por categoria": média do custo dentro de cada categoria
/// canônica, somadas. Custo desconhecido conta como zero mas entra no divisor.
/// Categorias fora das quatro canônicas não entram na soma.
pub fn categorized_average_cost(dishes: &[Dish]) -> Decimal {
    let mut grouped: HashMap<&str, Vec<&Dish>> = HashMap::new();
    for dish in dishes {
        grouped.entry(dish.category.as_str()).or_default().push(dish);
    }

    CATEGORY_ORDER
        .iter()
        .filter_map(|category| grouped.get(category))
        .filter(|group| !group.is_empty())
        .map(|group| {
            let sum: Decimal = group.iter().map(|d| d.cost_or_zero()).sum();
            sum / Decimal::from(group.len())
        })
        .sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Profitability {
    InsufficientData,
    High,
    Attention,
    Alert,
}

impl Profitability {
    pub fn tone(&self) -> Tone {
        match self {
            Profitability::InsufficientData => Tone::Neutral,
            Profitability::High => Tone::Favorable,
            Profitability::Attention => Tone::Borderline,
            Profitability::Alert => Tone::Unfavorable,
        }
    }

    // Texto completo mostrado na ficha do menu
    pub fn message(&self) -> &'static str {
        match self {
            Profitability::InsufficientData => {
                "Selecciona platos para información de rentabilidad"
            }
            Profitability::High => {
                "Felicidades por buena rentabilidad: El coste de ingredientes está por debajo del 25% del PVP."
            }
            Profitability::Attention => {
                "Atención por baja rentabilidad: El coste de ingredientes está cerca del 30% del PVP."
            }
            Profitability::Alert => {
                "Alerta por nula rentabilidad: El coste de ingredientes es superior al 30% del PVP."
            }
        }
    }

    // Rótulo curto do formulário de edição
    pub fn label(&self) -> &'static str {
        match self {
            Profitability::InsufficientData => {
                "Selecciona platos para información de rentabilidad"
            }
            Profitability::High => "Rentabilidad alta (<= 25%)",
            Profitability::Attention => "Atención (<= 30%)",
            Profitability::Alert => "Alerta (> 30%)",
        }
    }
}

/// Razão custo médio / PVP, quando os dois lados são positivos.
pub fn cost_ratio(dishes: &[Dish], price: Decimal) -> Option<Decimal> {
    let avg_cost = categorized_average_cost(dishes);
    if price <= Decimal::ZERO || avg_cost <= Decimal::ZERO {
        return None;
    }
    Some(avg_cost / price)
}

pub fn classify_ratio(ratio: Option<Decimal>) -> Profitability {
    match ratio {
        None => Profitability::InsufficientData,
        Some(r) if r <= HIGH_PROFITABILITY_MAX_RATIO => Profitability::High,
        Some(r) if r <= ATTENTION_MAX_RATIO => Profitability::Attention,
        Some(_) => Profitability::Alert,
    }
}

pub fn classify_profitability(menu: &Menu) -> Profitability {
    classify_ratio(cost_ratio(&menu.associated_dishes, menu.price))
}

// Resumo usado pela lista de menus
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCosting {
    pub average_cost: Decimal,
    pub ratio: Option<Decimal>,
    pub profitability: Profitability,
    pub tone: Tone,
    pub message: &'static str,
}

pub fn menu_costing(menu: &Menu) -> MenuCosting {
    let ratio = cost_ratio(&menu.associated_dishes, menu.price);
    let profitability = classify_ratio(ratio);
    MenuCosting {
        average_cost: categorized_average_cost(&menu.associated_dishes),
        ratio,
        profitability,
        tone: profitability.tone(),
        message: profitability.message(),
    }
}
