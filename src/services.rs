pub mod costing;
pub mod dish_service;
pub mod event_service;
pub mod menu_service;
