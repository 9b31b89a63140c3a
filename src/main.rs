// src/main.rs

use carta::AppState;
use carta::services::{costing, event_service};
use tracing_subscriber::EnvFilter;

fn main() {
    // Inicializa o logger; RUST_LOG sobrescreve o nível padrão.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    // Se a configuração falhar, a aplicação não deve iniciar.
    let state = AppState::new().expect("Falha ao inicializar o estado da aplicação.");

    let settings = state.settings.get();
    tracing::info!(
        restaurante = %settings.restaurant_name,
        pratos = state.dishes.len(),
        menus = state.menus.len(),
        eventos = state.events.len(),
        "✅ Catálogo carregado"
    );

    for menu in state.menus.items() {
        let summary = costing::menu_costing(menu);
        tracing::info!(
            menu = %menu.name,
            pvp = %menu.price,
            custo_medio = %summary.average_cost,
            extras = %settings.included_extras_cost(menu),
            "{}",
            summary.profitability.label()
        );
    }

    for (month, events) in event_service::group_by_month(state.events.items()) {
        tracing::info!(mes = %month, eventos = events.len(), "Agenda");
    }
}
