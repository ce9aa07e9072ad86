use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::pets::dtos::PetSearchFilters;
use crate::features::pets::models::Pet;

/// Fixed color synonym table: a search term on the left matches any color
/// word on the right.
const COLOR_SYNONYMS: &[(&str, &[&str])] = &[
    ("brown", &["brown", "tan", "chocolate"]),
    ("black", &["black", "dark"]),
    ("white", &["white", "light"]),
    ("gray", &["gray", "grey", "silver"]),
    ("golden", &["golden", "yellow", "blonde"]),
    ("red", &["red", "orange", "rust"]),
];

/// Expand a color search term through the synonym table. Terms without an
/// entry match themselves.
pub fn expand_color_term(term: &str) -> Vec<String> {
    let needle = term.trim().to_lowercase();
    COLOR_SYNONYMS
        .iter()
        .find(|(key, _)| *key == needle)
        .map(|(_, synonyms)| synonyms.iter().map(|s| s.to_string()).collect())
        .unwrap_or_else(|| vec![needle])
}

fn contains_pattern(term: &str) -> String {
    format!("%{}%", term)
}

/// Service for the find-pets search.
///
/// Search is opt-in: an empty filter set returns nothing. Results are
/// restricted to found pets whose found-request was accepted.
pub struct SearchService {
    pool: PgPool,
}

impl SearchService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_pets(&self, filters: &PetSearchFilters) -> Result<Vec<Pet>> {
        if filters.is_empty() {
            return Ok(Vec::new());
        }

        let color_patterns: Option<Vec<String>> = filters
            .color
            .as_deref()
            .map(|term| expand_color_term(term).iter().map(|s| contains_pattern(s)).collect());

        let pets = sqlx::query_as::<_, Pet>(
            r#"
            SELECT p.id, p.owner_id, p.name, p.pet_type, p.breed, p.color, p.location,
                   p.description, p.event_date, p.image_url, p.status, p.created_at
            FROM pets p
            INNER JOIN requests r ON r.pet_id = p.id
            WHERE p.status = 'found'
              AND r.request_type = 'found'
              AND r.status = 'accepted'
              AND ($1::pet_type IS NULL OR p.pet_type = $1)
              AND ($2::text IS NULL OR p.breed ILIKE $2)
              AND ($3::text[] IS NULL OR p.color ILIKE ANY($3))
              AND ($4::text IS NULL OR p.location ILIKE $4)
              AND ($5::date IS NULL OR p.created_at::date >= $5)
              AND ($6::date IS NULL OR p.created_at::date <= $6)
            ORDER BY p.created_at DESC
            "#,
        )
        .bind(filters.pet_type)
        .bind(filters.breed.as_deref().map(contains_pattern))
        .bind(color_patterns)
        .bind(filters.location.as_deref().map(contains_pattern))
        .bind(filters.start_date)
        .bind(filters.end_date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to search pets: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(pets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brown_expands_to_tan_and_chocolate() {
        let terms = expand_color_term("brown");
        assert_eq!(terms, vec!["brown", "tan", "chocolate"]);
        assert!(!terms.contains(&"black".to_string()));
    }

    #[test]
    fn test_expansion_is_case_insensitive() {
        assert_eq!(expand_color_term("Golden"), vec!["golden", "yellow", "blonde"]);
        assert_eq!(expand_color_term("  GRAY "), vec!["gray", "grey", "silver"]);
    }

    #[test]
    fn test_unknown_term_matches_itself() {
        assert_eq!(expand_color_term("Brindle"), vec!["brindle"]);
    }

    #[test]
    fn test_contains_pattern() {
        assert_eq!(contains_pattern("tan"), "%tan%");
    }
}
