pub mod dish;
pub mod event;
pub mod menu;
pub mod settings;
pub mod tone;

pub use dish::{Dish, NewDishPayload, CATEGORY_ORDER};
pub use event::{Event, EventStatus, NewEventPayload};
pub use menu::{IncludedExtra, Menu, NewMenuPayload};
pub use settings::RestaurantSettings;
pub use tone::Tone;
