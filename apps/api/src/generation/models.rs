//! Recipe wire types and the response schema sent to the model.

use serde::{Deserialize, Serialize};

/// A generated recipe. All seven fields are required; a model payload missing
/// any of them fails deserialization and surfaces as a generation error.
/// Durations and counts are opaque display strings, never parsed quantities.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub recipe_name: String,
    pub description: String,
    /// Display order is insertion order.
    pub ingredients: Vec<String>,
    /// Execution order; rendered with 1-based numbering.
    pub instructions: Vec<String>,
    pub servings: String,
    pub prep_time: String,
    pub cook_time: String,
}

/// The structured-output schema passed to the model, requiring exactly the
/// seven `Recipe` fields. Field descriptions are in the bundled language so
/// the model fills them in Arabic.
pub fn recipe_response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "recipeName": { "type": "STRING", "description": "اسم الوصفة." },
            "description": { "type": "STRING", "description": "وصف قصير وجذاب للطبق." },
            "servings": { "type": "STRING", "description": "عدد الحصص التي تكفيها الوصفة." },
            "prepTime": { "type": "STRING", "description": "مدة التحضير، مثال: '15 دقيقة'." },
            "cookTime": { "type": "STRING", "description": "مدة الطهي، مثال: '30 دقيقة'." },
            "ingredients": {
                "type": "ARRAY",
                "description": "قائمة بجميع المكونات المطلوبة للوصفة، مع الكميات.",
                "items": { "type": "STRING" }
            },
            "instructions": {
                "type": "ARRAY",
                "description": "تعليمات الطهي خطوة بخطوة.",
                "items": { "type": "STRING" }
            }
        },
        "required": [
            "recipeName", "description", "ingredients", "instructions",
            "servings", "prepTime", "cookTime"
        ]
    })
}
