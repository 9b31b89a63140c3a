// src/models/event.rs

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::common::{error::AppError, validation::validate_not_negative};
use crate::models::tone::Tone;

pub const SERVICE_TYPES: [&str; 3] = ["Desayuno", "Almuerzo", "Cena"];

// Limite do formulário; o núcleo não impõe
pub const MAX_GUESTS: u32 = 500;

// --- Estado do evento ---
// O campo `status` do evento continua sendo texto livre; este enum só
// reconhece os valores conhecidos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventStatus {
    #[default]
    PorEnviar,
    PorConfirmar,
    Confirmado,
}

impl EventStatus {
    pub const ALL: [EventStatus; 3] = [
        EventStatus::PorEnviar,
        EventStatus::PorConfirmar,
        EventStatus::Confirmado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::PorEnviar => "Por enviar",
            EventStatus::PorConfirmar => "Por confirmar",
            EventStatus::Confirmado => "Confirmado",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        EventStatus::ALL.into_iter().find(|status| status.as_str() == s)
    }

    pub fn tone(&self) -> Tone {
        match self {
            EventStatus::PorEnviar => Tone::Unfavorable,
            EventStatus::PorConfirmar => Tone::Borderline,
            EventStatus::Confirmado => Tone::Favorable,
        }
    }
}

fn default_status() -> String {
    EventStatus::default().as_str().to_string()
}

// --- Evento ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub description: String,

    // Hora local do restaurante
    pub date: NaiveDateTime,

    pub service_type: String,
    pub number_of_guests: u32,
    pub estimated_duration: String,

    // Sem regra min <= max
    #[serde(default)]
    pub min_price: Decimal,
    #[serde(default)]
    pub max_price: Decimal,

    pub additional_notes: String,

    #[serde(default = "default_status")]
    pub status: String,
}

impl Event {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDateTime,
        service_type: impl Into<String>,
        number_of_guests: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            date,
            service_type: service_type.into(),
            number_of_guests,
            estimated_duration: String::new(),
            min_price: Decimal::ZERO,
            max_price: Decimal::ZERO,
            additional_notes: String::new(),
            status: default_status(),
        }
    }

    pub fn with_price_range(mut self, min_price: Decimal, max_price: Decimal) -> Self {
        self.min_price = min_price;
        self.max_price = max_price;
        self
    }

    pub fn with_details(
        mut self,
        estimated_duration: impl Into<String>,
        additional_notes: impl Into<String>,
    ) -> Self {
        self.estimated_duration = estimated_duration.into();
        self.additional_notes = additional_notes.into();
        self
    }

    pub fn status_kind(&self) -> Option<EventStatus> {
        EventStatus::parse(&self.status)
    }

    // Estados desconhecidos ficam neutros (cinza)
    pub fn status_tone(&self) -> Tone {
        self.status_kind()
            .map(|s| s.tone())
            .unwrap_or(Tone::Neutral)
    }

    pub fn set_status(&mut self, status: EventStatus) {
        self.status = status.as_str().to_string();
    }

    /// Chave do mês para agrupar a agenda, no formato "2025-06".
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    pub fn duplicate(&self) -> Event {
        Event {
            id: Uuid::new_v4(),
            name: format!("{} (Copia)", self.name),
            ..self.clone()
        }
    }
}

// ---
// Payload: NewEvent
// ---
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewEventPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub date: NaiveDateTime,

    #[validate(length(min = 1, message = "O tipo de serviço é obrigatório."))]
    pub service_type: String,

    #[validate(range(min = 1, max = 500, message = "O número de convidados deve estar entre 1 e 500."))]
    pub number_of_guests: u32,

    #[serde(default)]
    pub estimated_duration: String,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default)]
    pub min_price: Decimal,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default)]
    pub max_price: Decimal,

    #[serde(default)]
    pub additional_notes: String,

    #[serde(default = "default_status")]
    pub status: String,
}

impl NewEventPayload {
    pub fn into_event(self) -> Result<Event, AppError> {
        self.validate()?;

        let mut event = Event::new(
            self.name,
            self.description,
            self.date,
            self.service_type,
            self.number_of_guests,
        )
        .with_price_range(self.min_price, self.max_price)
        .with_details(self.estimated_duration, self.additional_notes);
        event.status = self.status;
        Ok(event)
    }
}
