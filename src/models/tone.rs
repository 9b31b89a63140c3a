// src/models/tone.rs

use serde::{Deserialize, Serialize};

// Semáforo usado pela apresentação (preto, verde, laranja, vermelho).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tone {
    Neutral,
    Favorable,
    Borderline,
    Unfavorable,
}
