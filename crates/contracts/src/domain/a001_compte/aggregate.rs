use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор счёта, назначается сервером при создании
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompteId(pub i64);

impl fmt::Display for CompteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Account type
// ============================================================================

/// Тип счёта: текущий или сберегательный
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CompteType {
    #[default]
    Courant,
    Epargne,
}

impl CompteType {
    /// Код, как он передаётся по API
    pub fn code(&self) -> &'static str {
        match self {
            CompteType::Courant => "COURANT",
            CompteType::Epargne => "EPARGNE",
        }
    }

    /// Человекочитаемое название для выпадающего списка
    pub fn display_name(&self) -> &'static str {
        match self {
            CompteType::Courant => "Courant",
            CompteType::Epargne => "Épargne",
        }
    }

    pub fn all() -> Vec<CompteType> {
        vec![CompteType::Courant, CompteType::Epargne]
    }

    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "COURANT" => Some(CompteType::Courant),
            "EPARGNE" => Some(CompteType::Epargne),
            _ => None,
        }
    }
}

// ============================================================================
// Record
// ============================================================================

/// Банковский счёт. Одна и та же структура служит записью списка и черновиком формы:
/// у черновика нового счёта `id` отсутствует и не сериализуется.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Compte {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CompteId>,

    #[serde(default)]
    pub solde: f64,

    #[serde(rename = "dateCreation", default)]
    pub date_creation: String,

    #[serde(rename = "type", default)]
    pub compte_type: CompteType,
}

impl Compte {
    pub fn collection_name() -> &'static str {
        "comptes"
    }

    /// Валидация перед отправкой. Порядок проверок фиксирован: сначала баланс, затем дата.
    pub fn validate(&self) -> Result<(), CompteValidationError> {
        if self.solde < 0.0 {
            return Err(CompteValidationError::NegativeSolde);
        }
        if self.date_creation.is_empty() {
            return Err(CompteValidationError::MissingDateCreation);
        }
        Ok(())
    }
}

/// Ошибки клиентской валидации; `Display` выводит текст для пользователя
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompteValidationError {
    #[error("Le solde ne peut pas être négatif.")]
    NegativeSolde,
    #[error("La date de création est obligatoire.")]
    MissingDateCreation,
}
