// src/models/settings.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::menu::{IncludedExtra, Menu};

// Registro único por instalação (não é coleção)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSettings {
    // Dados básicos
    pub restaurant_name: String,
    pub restaurant_slogan: String,
    pub email: String,
    pub phone: String,
    pub website: String,

    // Endereço
    pub address_street: String,
    pub address_city: String,
    pub address_postal_code: String,
    pub address_country: String,

    // Logo gravado em base64; ausente quando não há imagem
    #[serde(default, skip_serializing_if = "Option::is_none", with = "logo_base64")]
    pub logo_data: Option<Vec<u8>>,

    // Custos unitários padrão dos extras
    pub cost_included_drink: Decimal,
    pub cost_included_water: Decimal,
    pub cost_included_bread: Decimal,
    pub cost_included_coffee: Decimal,
    pub cost_included_wine_pairing: Decimal,
}

impl RestaurantSettings {
    pub fn default_cost_for(&self, extra: IncludedExtra) -> Decimal {
        match extra {
            IncludedExtra::Drink => self.cost_included_drink,
            IncludedExtra::Water => self.cost_included_water,
            IncludedExtra::Bread => self.cost_included_bread,
            IncludedExtra::Coffee => self.cost_included_coffee,
            IncludedExtra::WinePairing => self.cost_included_wine_pairing,
        }
    }

    /// Custo sugerido dos extras que o menu inclui. Não entra na rentabilidade.
    pub fn included_extras_cost(&self, menu: &Menu) -> Decimal {
        menu.included_extras()
            .into_iter()
            .map(|(extra, _)| self.default_cost_for(extra))
            .sum()
    }

    pub fn full_address(&self) -> String {
        [
            self.address_street.as_str(),
            self.address_postal_code.as_str(),
            self.address_city.as_str(),
            self.address_country.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }

    pub fn has_logo(&self) -> bool {
        self.logo_data.as_ref().is_some_and(|data| !data.is_empty())
    }
}

mod logo_base64 {
    use base64::{Engine as _, engine::general_purpose::STANDARD};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(data: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match data {
            Some(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded
            .map(|s| STANDARD.decode(s.as_bytes()).map_err(serde::de::Error::custom))
            .transpose()
    }
}
