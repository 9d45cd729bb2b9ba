//! Axum route handler for the recipe generation endpoint.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::models::{recipe_response_schema, Recipe};
use crate::generation::prompts::build_prompt;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipeRequest {
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub meal_type: String,
}

/// POST /api/generate
///
/// Validates the input, builds the prompt, and returns one generated recipe.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRecipeRequest>,
) -> Result<Json<Recipe>, AppError> {
    let recipe = generate_recipe(&state, &request).await?;
    Ok(Json(recipe))
}

/// Core generation path, shared by the JSON endpoint and the UI fragment
/// handler. Input validation happens before the model is ever invoked; a
/// missing API key is reported as a configuration error distinct from bad
/// input so operators can diagnose deployment issues.
pub async fn generate_recipe(
    state: &AppState,
    request: &GenerateRecipeRequest,
) -> Result<Recipe, AppError> {
    if request.ingredients.trim().is_empty() {
        return Err(AppError::Validation("Ingredients are required".to_string()));
    }

    let llm = state.llm.as_ref().ok_or(AppError::MissingApiKey)?;

    let prompt = build_prompt(
        &request.ingredients,
        &request.cuisine,
        &request.dietary_restrictions,
        &request.meal_type,
    );

    let recipe: Recipe = llm
        .generate_json(&prompt, recipe_response_schema())
        .await?;

    info!(
        "recipe generated: {} ({} ingredients, {} steps)",
        recipe.recipe_name,
        recipe.ingredients.len(),
        recipe.instructions.len()
    );

    Ok(recipe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_wire_field_names() {
        let json = r#"{
            "ingredients": "صدر دجاج، طماطم",
            "cuisine": "إيطالي",
            "dietaryRestrictions": ["نباتي"],
            "mealType": "غداء"
        }"#;
        let request: GenerateRecipeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.cuisine, "إيطالي");
        assert_eq!(request.dietary_restrictions, vec!["نباتي".to_string()]);
        assert_eq!(request.meal_type, "غداء");
    }

    #[test]
    fn test_request_defaults_optional_fields() {
        let request: GenerateRecipeRequest =
            serde_json::from_str(r#"{"ingredients": "أرز"}"#).unwrap();
        assert_eq!(request.ingredients, "أرز");
        assert!(request.cuisine.is_empty());
        assert!(request.dietary_restrictions.is_empty());
        assert!(request.meal_type.is_empty());
    }
}
