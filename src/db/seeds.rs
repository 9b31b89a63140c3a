// src/db/seeds.rs

// Dados padrão gravados na primeira execução (ou quando o slot está corrompido).

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::{Dish, Event, Menu, RestaurantSettings};

fn euros(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

// Literais fixos; uma data inválida cairia em 1970-01-01
fn at(day: u32, month: u32, year: i32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

pub fn default_dishes() -> Vec<Dish> {
    vec![
        // --- APERITIVOS ---
        Dish::new(
            "Bruschetta Caprese",
            "Rebanadas de pan crujiente con tomate fresco, albahaca y queso mozzarella.",
            Some(euros(85)),
            "Aperitivo",
        )
        .with_allergens(["Gluten", "Lácteos"])
        .with_types(["Vegetariano"]),
        Dish::new(
            "Croquetas de jamón ibérico",
            "Croquetas cremosas con bechamel y trocitos de jamón ibérico.",
            Some(euros(130)),
            "Aperitivo",
        )
        .with_allergens(["Gluten", "Lácteos"]),
        Dish::new(
            "Rollitos de pepino con hummus",
            "Pepino relleno de hummus clásico, aromatizado con especias.",
            Some(euros(95)),
            "Aperitivo",
        )
        .with_allergens(["Sésamo"])
        .with_types(["Vegano", "Sin Gluten"]),
        // --- ENTRANTES ---
        Dish::new(
            "Ensalada griega",
            "Lechuga, tomate, pepino, cebolla roja, aceitunas y queso feta.",
            Some(euros(155)),
            "Entrantes",
        )
        .with_allergens(["Lácteos"])
        .with_types(["Vegetariano"]),
        Dish::new(
            "Crema de calabaza",
            "Puré de calabaza, cebolla y caldo de verduras, con un chorrito de aceite.",
            Some(euros(85)),
            "Entrantes",
        )
        .with_allergens(["Apio", "Sulfitos"])
        .with_types(["Vegano", "Sin Gluten"]),
        Dish::new(
            "Gazpacho andaluz",
            "Tomate, pepino, pimiento, ajo, aceite de oliva y vinagre.",
            Some(euros(80)),
            "Entrantes",
        )
        .with_types(["Vegano", "Sin Gluten"]),
        // --- SEGUNDOS ---
        Dish::new(
            "Pollo al curry con arroz",
            "Pollo en leche de coco al curry, acompañado de arroz basmati.",
            Some(euros(150)),
            "Segundos",
        )
        .with_allergens(["Sulfitos", "Lácteos"])
        .with_types(["Sin Gluten"]),
        Dish::new(
            "Lasaña de vegetales",
            "Capas de pasta, calabacín, berenjena, salsa de tomate y queso.",
            Some(euros(150)),
            "Segundos",
        )
        .with_allergens(["Gluten", "Lácteos"])
        .with_types(["Vegetariano"]),
        Dish::new(
            "Salmón con limón y eneldo",
            "Lomos de salmón horneados con una salsa ligera de limón y mantequilla.",
            Some(euros(275)),
            "Segundos",
        )
        .with_allergens(["Pescado", "Lácteos"])
        .with_types(["Sin Gluten"]),
        // --- POSTRES ---
        Dish::new(
            "Tarta de queso",
            "Base de galletas y mezcla horneada de queso crema, huevos y azúcar.",
            Some(euros(58)),
            "Postres",
        )
        .with_allergens(["Gluten", "Lácteos", "Huevos"]),
        Dish::new(
            "Mousse de chocolate",
            "Crema suave a base de chocolate fundido, huevos y nata.",
            Some(euros(62)),
            "Postres",
        )
        .with_allergens(["Lácteos", "Huevos"])
        .with_types(["Sin Gluten"]),
        Dish::new(
            "Macedonia de frutas frescas",
            "Frutas de temporada con zumo de naranja natural.",
            Some(euros(80)),
            "Postres",
        )
        .with_types(["Vegano", "Vegetariano", "Sin Gluten"]),
    ]
}

pub fn default_menus() -> Vec<Menu> {
    let menu = |name: &str, description: &str, price: i64, meal_type: &str| {
        Menu::new(name, description, Decimal::new(price, 0), meal_type)
            .with_default_extra_descriptions()
    };

    vec![
        menu(
            "Menú del día",
            "Almuerzo diario con platos fijos a precio cerrado.",
            12,
            "Almuerzo",
        ),
        menu(
            "Menú desayuno fin de semana",
            "Propuestas especiales para sábados, domingos y festivos.",
            12,
            "Desayuno",
        ),
        menu(
            "Menú fin de semana",
            "Propuestas especiales para sábados, domingos y festivos.",
            25,
            "Almuerzo",
        ),
        menu(
            "Menú degustación",
            "Recorrido de pequeños platos con opción de maridaje.",
            24,
            "Cena",
        ),
        menu(
            "Menú de temporada",
            "Platos basados en ingredientes frescos de estación.",
            22,
            "Almuerzo",
        ),
        menu(
            "Menú para grupos",
            "Opciones personalizadas para celebraciones con precio por persona.",
            0,
            "Almuerzo",
        ),
        menu(
            "Menú para empresas",
            "Opciones personalizadas para celebraciones con precio por persona.",
            0,
            "Cena",
        ),
    ]
}

pub fn default_events() -> Vec<Event> {
    let range = (Decimal::new(45, 0), Decimal::new(65, 0));

    vec![
        Event::new(
            "Cena de empresa Tech Solutions",
            "Encuentro anual de los empleados de Tech Solutions, con un menú especial...",
            at(20, 1, 2025, 20, 30),
            "Cena",
            50,
        )
        .with_price_range(range.0, range.1)
        .with_details(
            "3 horas",
            "Habrá opciones veganas y sin gluten. Se habilitará un espacio para proyecciones y discursos.",
        ),
        Event::new(
            "50º Cumpleaños de Marta Gómez",
            "Celebración íntima del 50º cumpleaños de Marta Gómez, con un menú especial...",
            at(15, 3, 2025, 14, 0),
            "Almuerzo",
            20,
        )
        .with_price_range(range.0, range.1)
        .with_details(
            "4 horas",
            "Decoración personalizada incluida. Se ofrecerá cava para el brindis.",
        ),
        Event::new(
            "Aniversario de Laura y Javier",
            "Celebración de las bodas de plata de Laura y Javier, con un menú degustación...",
            at(10, 6, 2025, 19, 0),
            "Cena",
            40,
        )
        .with_price_range(range.0, range.1)
        .with_details(
            "3 horas",
            "Incluye tarta conmemorativa y un brindis especial con cava del Penedès.",
        ),
        Event::new(
            "Cena fin de curso de Bachillerato",
            "Despedida del curso con los estudiantes de último año de bachillerato...",
            at(27, 6, 2025, 20, 0),
            "Cena",
            70,
        )
        .with_price_range(range.0, range.1)
        .with_details("4 horas", "Incluye DJ en vivo y opciones vegetarianas."),
        Event::new(
            "80º Cumpleaños de Josep Costa",
            "Celebración del 80º cumpleaños de Josep con su familia y amigos más cercanos...",
            at(5, 9, 2025, 13, 30),
            "Almuerzo",
            30,
        )
        .with_price_range(range.0, range.1)
        .with_details(
            "3 horas",
            "Se habilitará un proyector para videos familiares. Habrá un menú especial para niños.",
        ),
    ]
}

pub fn default_settings() -> RestaurantSettings {
    RestaurantSettings {
        restaurant_name: "Mi Restaurante".into(),
        restaurant_slogan: "Tu eslogan aquí".into(),
        email: "info@restaurante.com".into(),
        phone: "555-1234".into(),
        website: "www.restaurante.com".into(),
        address_street: "Calle Principal 123".into(),
        address_city: "Barcelona".into(),
        address_postal_code: "08000".into(),
        address_country: "España".into(),
        logo_data: None,
        cost_included_drink: euros(75),
        cost_included_water: euros(25),
        cost_included_bread: euros(15),
        cost_included_coffee: euros(30),
        cost_included_wine_pairing: euros(400),
    }
}
