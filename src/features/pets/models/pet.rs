use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Pet type enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "pet_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    Dog,
    Cat,
    Bird,
    Rabbit,
    Other,
}

impl std::fmt::Display for PetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PetType::Dog => write!(f, "dog"),
            PetType::Cat => write!(f, "cat"),
            PetType::Bird => write!(f, "bird"),
            PetType::Rabbit => write!(f, "rabbit"),
            PetType::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for PetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dog" => Ok(PetType::Dog),
            "cat" => Ok(PetType::Cat),
            "bird" => Ok(PetType::Bird),
            "rabbit" => Ok(PetType::Rabbit),
            "other" => Ok(PetType::Other),
            other => Err(format!("Unknown pet type: {}", other)),
        }
    }
}

/// Pet status enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "pet_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    Lost,
    Found,
    Adopted,
    Adoptable,
}

impl std::fmt::Display for PetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PetStatus::Lost => write!(f, "lost"),
            PetStatus::Found => write!(f, "found"),
            PetStatus::Adopted => write!(f, "adopted"),
            PetStatus::Adoptable => write!(f, "adoptable"),
        }
    }
}

/// Database model for a pet report
#[derive(Debug, Clone, FromRow)]
pub struct Pet {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: Option<String>,
    pub pet_type: PetType,
    pub breed: String,
    pub color: String,
    pub location: String,
    pub description: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub image_url: Option<String>,
    pub status: PetStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_pet_type_parsing() {
        assert_eq!(PetType::from_str("Dog").unwrap(), PetType::Dog);
        assert_eq!(PetType::from_str(" rabbit ").unwrap(), PetType::Rabbit);
        assert!(PetType::from_str("dragon").is_err());
    }
}
