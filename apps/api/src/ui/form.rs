//! Form state for the recipe input form.
//!
//! Mirrors what the browser holds between submissions: free-text ingredients,
//! single-select cuisine and meal type, and a set of dietary tags kept in
//! selection order.

use crate::generation::handlers::GenerateRecipeRequest;
use crate::generation::prompts::ANY_OPTION;

pub const CUISINE_OPTIONS: &[&str] = &[
    ANY_OPTION,
    "سوري",
    "لبناني",
    "تركي",
    "إيطالي",
    "هندي",
    "صيني",
    "مكسيكي",
];

pub const MEAL_TYPE_OPTIONS: &[&str] = &[
    ANY_OPTION,
    "فطور",
    "غداء",
    "عشاء",
    "حلويات",
    "وجبة خفيفة",
];

pub const DIETARY_OPTIONS: &[&str] = &[
    "نباتي",
    "نباتي صرف",
    "خالٍ من الغلوتين",
    "خالٍ من منتجات الألبان",
    "قليل الكربوهيدرات",
];

/// Local validation message for an empty ingredients field. Submission stops
/// here; the model is never invoked.
pub const EMPTY_INGREDIENTS: &str = "الرجاء إدخال بعض المكونات.";

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub ingredients: String,
    pub cuisine: String,
    pub meal_type: String,
    /// Rendered in selection order.
    pub dietary_restrictions: Vec<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            ingredients: String::new(),
            cuisine: ANY_OPTION.to_string(),
            meal_type: ANY_OPTION.to_string(),
            dietary_restrictions: Vec::new(),
        }
    }
}

impl FormState {
    /// Reconstructs the form from an urlencoded request body. Repeated
    /// `dietaryRestrictions` keys accumulate in submission order.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        let mut form = FormState::default();
        for (key, value) in form_urlencoded::parse(body) {
            match key.as_ref() {
                "ingredients" => form.ingredients = value.into_owned(),
                "cuisine" => form.cuisine = value.into_owned(),
                "mealType" => form.meal_type = value.into_owned(),
                "dietaryRestrictions" => form.dietary_restrictions.push(value.into_owned()),
                _ => {}
            }
        }
        form
    }

    /// Toggles membership of a dietary tag: present tags are removed, absent
    /// tags append. Toggling twice restores the prior selection.
    pub fn toggle_dietary(&mut self, option: &str) {
        if let Some(pos) = self
            .dietary_restrictions
            .iter()
            .position(|tag| tag == option)
        {
            self.dietary_restrictions.remove(pos);
        } else {
            self.dietary_restrictions.push(option.to_string());
        }
    }

    pub fn has_dietary(&self, option: &str) -> bool {
        self.dietary_restrictions.iter().any(|tag| tag == option)
    }

    /// The only cross-field rule: trimmed ingredients must be non-empty.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.ingredients.trim().is_empty() {
            Err(EMPTY_INGREDIENTS)
        } else {
            Ok(())
        }
    }

    pub fn to_request(&self) -> GenerateRecipeRequest {
        GenerateRecipeRequest {
            ingredients: self.ingredients.clone(),
            cuisine: self.cuisine.clone(),
            dietary_restrictions: self.dietary_restrictions.clone(),
            meal_type: self.meal_type.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_the_any_sentinel() {
        let form = FormState::default();
        assert_eq!(form.cuisine, ANY_OPTION);
        assert_eq!(form.meal_type, ANY_OPTION);
        assert!(form.dietary_restrictions.is_empty());
    }

    #[test]
    fn test_toggle_dietary_is_an_involution() {
        let mut form = FormState::default();
        form.toggle_dietary("نباتي");
        form.toggle_dietary("خالٍ من الغلوتين");
        let before = form.clone();

        form.toggle_dietary("نباتي");
        assert!(!form.has_dietary("نباتي"));
        form.toggle_dietary("نباتي");

        // a second toggle restores the set, but appends at the end
        assert_eq!(
            form.dietary_restrictions.len(),
            before.dietary_restrictions.len()
        );
        assert!(form.has_dietary("نباتي"));
        assert!(form.has_dietary("خالٍ من الغلوتين"));
    }

    #[test]
    fn test_dietary_tags_keep_selection_order() {
        let mut form = FormState::default();
        form.toggle_dietary("قليل الكربوهيدرات");
        form.toggle_dietary("نباتي");
        assert_eq!(
            form.dietary_restrictions,
            vec!["قليل الكربوهيدرات".to_string(), "نباتي".to_string()]
        );
    }

    #[test]
    fn test_validate_rejects_whitespace_only_ingredients() {
        let mut form = FormState::default();
        assert_eq!(form.validate(), Err(EMPTY_INGREDIENTS));
        form.ingredients = "   \n\t ".to_string();
        assert_eq!(form.validate(), Err(EMPTY_INGREDIENTS));
        form.ingredients = "أرز".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_from_urlencoded_collects_repeated_dietary_keys() {
        let body = serde_urlencoded_body(&[
            ("ingredients", "صدر دجاج، أرز"),
            ("cuisine", "سوري"),
            ("mealType", "غداء"),
            ("dietaryRestrictions", "نباتي"),
            ("dietaryRestrictions", "قليل الكربوهيدرات"),
        ]);

        let form = FormState::from_urlencoded(body.as_bytes());
        assert_eq!(form.ingredients, "صدر دجاج، أرز");
        assert_eq!(form.cuisine, "سوري");
        assert_eq!(form.meal_type, "غداء");
        assert_eq!(
            form.dietary_restrictions,
            vec!["نباتي".to_string(), "قليل الكربوهيدرات".to_string()]
        );
    }

    #[test]
    fn test_from_urlencoded_ignores_unknown_keys() {
        let body = serde_urlencoded_body(&[("ingredients", "عدس"), ("toggle", "نباتي")]);
        let form = FormState::from_urlencoded(body.as_bytes());
        assert_eq!(form.ingredients, "عدس");
        assert!(form.dietary_restrictions.is_empty());
    }

    fn serde_urlencoded_body(pairs: &[(&str, &str)]) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}
