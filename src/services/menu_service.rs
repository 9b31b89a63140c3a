// src/services/menu_service.rs

use crate::models::menu::MEAL_TYPE_ORDER;
use crate::models::{Dish, Menu};
use crate::services::dish_service::{menu_sections, DishFilter};

/// Menus agrupados por tipo de serviço, na ordem ["", Desayuno, Almuerzo, Cena].
/// Tipos fora dessa lista não aparecem.
pub fn meal_type_sections(menus: &[Menu]) -> Vec<(&'static str, Vec<&Menu>)> {
    MEAL_TYPE_ORDER
        .iter()
        .map(|meal_type| {
            let group: Vec<&Menu> = menus.iter().filter(|m| m.meal_type == *meal_type).collect();
            (*meal_type, group)
        })
        .filter(|(_, group)| !group.is_empty())
        .collect()
}

// Cabeçalho da seção; "" vira o rótulo de menu sem tipo
pub fn meal_type_title(meal_type: &str) -> &str {
    if meal_type.is_empty() {
        "Sin tipo de servicio:"
    } else {
        meal_type
    }
}

/// Pratos do catálogo que passam no filtro e ainda não estão no menu.
pub fn unselected_dishes<'a>(catalog: &'a [Dish], menu: &Menu, filter: &DishFilter) -> Vec<&'a Dish> {
    filter
        .apply(catalog)
        .into_iter()
        .filter(|d| !menu.is_associated(d.id))
        .collect()
}

pub fn selected_sections(menu: &Menu) -> Vec<(String, Vec<&Dish>)> {
    let refs: Vec<&Dish> = menu.associated_dishes.iter().collect();
    menu_sections(&refs)
}

/// Pratos do menu cujo valor já difere do catálogo atual (ou que saíram dele).
/// Só informativo: a cópia do menu nunca é reconciliada.
pub fn diverged_dishes<'a>(menu: &'a Menu, catalog: &[Dish]) -> Vec<&'a Dish> {
    menu.associated_dishes
        .iter()
        .filter(|copy| catalog.iter().find(|d| d.id == copy.id) != Some(*copy))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seeds::{default_dishes, default_menus};
    use rust_decimal::Decimal;

    #[test]
    fn sections_follow_meal_type_order() {
        let mut menus = default_menus();
        menus.push(Menu::new("Sin tipo", "", Decimal::ZERO, ""));
        menus.push(Menu::new("Merienda", "", Decimal::ZERO, "Merienda"));

        let sections = meal_type_sections(&menus);
        let names: Vec<&str> = sections.iter().map(|(t, _)| *t).collect();
        assert_eq!(names, vec!["", "Desayuno", "Almuerzo", "Cena"]);
        assert_eq!(sections[2].1.len(), 4);
        assert_eq!(meal_type_title(sections[0].0), "Sin tipo de servicio:");
        assert_eq!(meal_type_title("Cena"), "Cena");
    }

    #[test]
    fn unselected_excludes_associated_dishes() {
        let catalog = default_dishes();
        let mut menu = Menu::new("Menú", "", Decimal::new(20, 0), "Cena");
        menu.associate_dish(&catalog[0]);
        menu.associate_dish(&catalog[1]);

        let filter = DishFilter::from_selection("Aperitivo", "Todos", "");
        let remaining = unselected_dishes(&catalog, &menu, &filter);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "Rollitos de pepino con hummus");
    }

    #[test]
    fn selected_sections_group_the_copies() {
        let catalog = default_dishes();
        let mut menu = Menu::new("Menú", "", Decimal::new(20, 0), "Cena");
        menu.associate_dish(&catalog[11]);
        menu.associate_dish(&catalog[0]);
        menu.associate_dish(&catalog[9]);

        let sections = selected_sections(&menu);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].0, "Aperitivo");
        assert_eq!(sections[1].1.len(), 2);
    }

    #[test]
    fn divergence_is_reported_not_fixed() {
        let mut catalog = default_dishes();
        let mut menu = Menu::new("Menú", "", Decimal::new(20, 0), "Cena");
        menu.associate_dish(&catalog[0]);
        menu.associate_dish(&catalog[1]);
        menu.associate_dish(&catalog[2]);

        catalog[0].food_cost = Some(Decimal::new(2, 0));
        catalog.remove(1);

        let diverged: Vec<&str> = diverged_dishes(&menu, &catalog)
            .iter()
            .map(|d| d.title.as_str())
            .collect();
        assert_eq!(diverged, vec!["Bruschetta Caprese", "Croquetas de jamón ibérico"]);
        assert_eq!(menu.associated_dishes[0].food_cost, Some(Decimal::new(85, 2)));
    }
}
