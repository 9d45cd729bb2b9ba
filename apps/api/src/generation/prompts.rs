//! Prompt construction for recipe generation.
//!
//! The prompt is a deterministic function of the four form inputs. Cuisine
//! and meal type fall back to "unrestricted" phrasing when they equal the
//! sentinel option or are empty; an empty dietary set becomes the
//! no-restrictions phrase.

/// The option-list value meaning "no constraint" for cuisine and meal type.
pub const ANY_OPTION: &str = "أي نوع";

/// Separator used when joining dietary tags into the prompt (Arabic comma).
pub const DIETARY_JOINER: &str = "، ";

pub const UNRESTRICTED_CUISINE: &str = "يمكن أن يكون المطبخ من أي نوع.";
pub const UNRESTRICTED_MEAL_TYPE: &str = "يمكن أن تكون الوجبة من أي نوع.";
pub const NO_DIETARY_RESTRICTIONS: &str = "لا توجد قيود غذائية.";

fn cuisine_clause(cuisine: &str) -> String {
    if cuisine.is_empty() || cuisine == ANY_OPTION {
        UNRESTRICTED_CUISINE.to_string()
    } else {
        format!("يجب أن تكون الوصفة من المطبخ {cuisine}.")
    }
}

fn meal_type_clause(meal_type: &str) -> String {
    if meal_type.is_empty() || meal_type == ANY_OPTION {
        UNRESTRICTED_MEAL_TYPE.to_string()
    } else {
        format!("يجب أن تكون الوصفة من نوع: {meal_type}.")
    }
}

fn dietary_clause(dietary_restrictions: &[String]) -> String {
    if dietary_restrictions.is_empty() {
        NO_DIETARY_RESTRICTIONS.to_string()
    } else {
        format!(
            "يجب أن تكون مناسبة للأنظمة الغذائية التالية: {}.",
            dietary_restrictions.join(DIETARY_JOINER)
        )
    }
}

/// Builds the full generation prompt by substituting the four inputs into the
/// fixed template.
pub fn build_prompt(
    ingredients: &str,
    cuisine: &str,
    dietary_restrictions: &[String],
    meal_type: &str,
) -> String {
    format!(
        "قم بإنشاء وصفة طعام مفصلة باللغة العربية بناءً على المعلومات التالية.\n\n\
         المكونات المتاحة: {ingredients}. يمكنك تضمين مكونات أساسية أخرى شائعة إذا لزم الأمر.\n\n\
         المطبخ المفضل: {cuisine_info}\n\n\
         نوع الوجبة المطلوب: {meal_type_info}\n\n\
         الاحتياجات الغذائية: {dietary_info}\n\n\
         يرجى تقديم وصفة واحدة فقط. يجب أن يكون الناتج بصيغة JSON.",
        cuisine_info = cuisine_clause(cuisine),
        meal_type_info = meal_type_clause(meal_type),
        dietary_info = dietary_clause(dietary_restrictions),
    )
}
