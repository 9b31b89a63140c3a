// src/db/event_repo.rs

use uuid::Uuid;

use crate::db::collection::{CollectionRepository, Entity};
use crate::models::event::{Event, EventStatus};

pub const EVENTS_SLOT: &str = "events.json";

impl Entity for Event {
    const SLOT: &'static str = EVENTS_SLOT;

    fn id(&self) -> Uuid {
        self.id
    }

    fn duplicate(&self) -> Self {
        Event::duplicate(self)
    }
}

pub type EventRepository = CollectionRepository<Event>;

impl CollectionRepository<Event> {
    // Muda só o estado; o resto do evento fica como está
    pub fn set_status(&mut self, event_id: Uuid, status: EventStatus) -> bool {
        let Some(mut event) = self.get(event_id).cloned() else {
            return false;
        };
        event.set_status(status);
        self.update(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{JsonStore, MemoryBlobStore};
    use chrono::NaiveDate;
    use std::sync::Arc;

    #[test]
    fn status_change_is_persisted() {
        let store = JsonStore::new(Arc::new(MemoryBlobStore::new()));
        let event = Event::new(
            "Cena fin de curso",
            "",
            NaiveDate::from_ymd_opt(2025, 6, 27).unwrap().and_hms_opt(20, 0, 0).unwrap(),
            "Cena",
            70,
        );
        let id = event.id;
        let mut events = EventRepository::load_or_seed(store.clone(), || vec![event]);

        assert!(events.set_status(id, EventStatus::PorConfirmar));
        assert!(!events.set_status(Uuid::new_v4(), EventStatus::Confirmado));

        let reloaded = EventRepository::load_or_seed(store, Vec::new);
        assert_eq!(reloaded.get(id).unwrap().status, "Por confirmar");
    }
}
