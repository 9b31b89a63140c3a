// src/services/event_service.rs

use std::collections::BTreeMap;

use crate::models::{Event, EventStatus};

/// Eventos em ordem cronológica (estável para datas iguais).
pub fn sorted_by_date(events: &[Event]) -> Vec<&Event> {
    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by_key(|e| e.date);
    sorted
}

/// Agenda por mês ("2025-06"), meses em ordem cronológica e eventos
/// ordenados por data dentro de cada mês.
pub fn group_by_month(events: &[Event]) -> BTreeMap<String, Vec<&Event>> {
    let mut months: BTreeMap<String, Vec<&Event>> = BTreeMap::new();
    for event in sorted_by_date(events) {
        months.entry(event.month_key()).or_default().push(event);
    }
    months
}

// Contagem por estado conhecido; estados livres ficam de fora
pub fn count_by_status(events: &[Event]) -> Vec<(EventStatus, usize)> {
    EventStatus::ALL
        .into_iter()
        .map(|status| {
            let count = events
                .iter()
                .filter(|e| e.status_kind() == Some(status))
                .count();
            (status, count)
        })
        .collect()
}

pub fn total_guests(events: &[Event]) -> u32 {
    events.iter().map(|e| e.number_of_guests).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seeds::default_events;
    use crate::models::Tone;
    use chrono::NaiveDate;

    #[test]
    fn sorts_events_chronologically() {
        let mut events = default_events();
        events.reverse();

        let names: Vec<&str> = sorted_by_date(&events).iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names[0], "Cena de empresa Tech Solutions");
        assert_eq!(names[4], "80º Cumpleaños de Josep Costa");
    }

    #[test]
    fn groups_by_month_in_calendar_order() {
        let mut events = default_events();
        let date = NaiveDate::from_ymd_opt(2024, 12, 31)
            .unwrap()
            .and_hms_opt(21, 0, 0)
            .unwrap();
        events.push(Event::new("Nochevieja", "", date, "Cena", 80));

        let months = group_by_month(&events);
        let keys: Vec<&str> = months.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["2024-12", "2025-01", "2025-03", "2025-06", "2025-09"]);

        let june: Vec<&str> = months["2025-06"].iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            june,
            vec!["Aniversario de Laura y Javier", "Cena fin de curso de Bachillerato"]
        );
    }

    #[test]
    fn counts_only_known_statuses() {
        let mut events = default_events();
        events[0].set_status(EventStatus::Confirmado);
        events[1].set_status(EventStatus::PorConfirmar);
        events[2].status = "Cancelado".into();

        assert_eq!(
            count_by_status(&events),
            vec![
                (EventStatus::PorEnviar, 2),
                (EventStatus::PorConfirmar, 1),
                (EventStatus::Confirmado, 1),
            ]
        );
        assert_eq!(events[2].status_tone(), Tone::Neutral);
        assert_eq!(total_guests(&events), 210);
    }
}
