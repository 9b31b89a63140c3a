// src/common/error.rs

use thiserror::Error;

// Tipo de erro da aplicação, com `thiserror` para a ergonomia.
// Nenhuma variante é fatal: quem chama decide se registra e segue em frente.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Erro de E/S no slot '{slot}': {source}")]
    StorageError {
        slot: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Erro de serialização: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuração inválida: {0}")]
    ConfigError(String),
}

impl AppError {
    pub(crate) fn storage(slot: &str, source: std::io::Error) -> Self {
        AppError::StorageError {
            slot: slot.to_string(),
            source,
        }
    }

    /// Mapa campo -> mensagens, no formato que a camada de apresentação mostra.
    pub fn field_messages(&self) -> std::collections::HashMap<String, Vec<String>> {
        let mut details = std::collections::HashMap::new();
        if let AppError::ValidationError(errors) = self {
            for (field, field_errors) in errors.field_errors() {
                let messages: Vec<String> = field_errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                details.insert(field.to_string(), messages);
            }
        }
        details
    }
}
