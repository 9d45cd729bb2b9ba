//! Server-rendered frontend: the main page plus the htmx fragments it swaps
//! in (recipe card, error box, dietary pills, login modal).
//!
//! Fragment responses are always 200 so htmx swaps them into place; the error
//! box carries the user-facing message. Double submits resolve latest-wins
//! via `hx-sync="this:replace"` on the form.

pub mod form;

use askama::Template;
use axum::extract::{RawForm, State};
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};

use crate::auth;
use crate::errors::{AppError, INVALID_CREDENTIALS, SETTINGS_LOAD_FAILED};
use crate::generation::handlers::generate_recipe;
use crate::generation::models::Recipe;
use crate::settings::SettingsState;
use crate::state::AppState;
use crate::ui::form::{FormState, CUISINE_OPTIONS, DIETARY_OPTIONS, MEAL_TYPE_OPTIONS};

pub struct Pill {
    pub name: String,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    logged_in: bool,
    cuisines: &'static [&'static str],
    meal_types: &'static [&'static str],
    pills: Vec<Pill>,
    ad_enabled: bool,
    ad_image: String,
    ad_description: String,
    ad_link: String,
}

#[derive(Template)]
#[template(path = "dietary_pills.html")]
struct DietaryPillsTemplate {
    pills: Vec<Pill>,
}

#[derive(Template)]
#[template(path = "recipe_card.html")]
struct RecipeCardTemplate {
    recipe: Recipe,
}

#[derive(Template)]
#[template(path = "error_message.html")]
struct ErrorMessageTemplate {
    message: String,
}

#[derive(Template)]
#[template(path = "login_modal.html")]
struct LoginModalTemplate {
    has_error: bool,
    error: String,
}

#[derive(Template)]
#[template(path = "blocking.html")]
struct BlockingTemplate;

#[derive(Template)]
#[template(path = "fatal.html")]
struct FatalTemplate {
    message: String,
}

fn render<T: Template>(template: T) -> Result<Response, AppError> {
    let html = template
        .render()
        .map_err(|e| AppError::Internal(e.into()))?;
    Ok(Html(html).into_response())
}

fn pills_for(form: &FormState) -> Vec<Pill> {
    DIETARY_OPTIONS
        .iter()
        .map(|option| Pill {
            name: option.to_string(),
            selected: form.has_dietary(option),
        })
        .collect()
}

fn form_value(body: &[u8], key: &str) -> Option<String> {
    form_urlencoded::parse(body)
        .find(|(k, _)| k.as_ref() == key)
        .map(|(_, v)| v.into_owned())
}

/// GET /
///
/// The whole UI blocks on the settings document: a bare spinner page while
/// the startup read is in flight, a fatal non-retried error page once it has
/// failed, and the full form otherwise.
pub async fn index(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    match state.settings.snapshot().await {
        SettingsState::Loading => render(BlockingTemplate),
        SettingsState::Failed(_) => render(FatalTemplate {
            message: SETTINGS_LOAD_FAILED.to_string(),
        }),
        SettingsState::Loaded(settings) => {
            let logged_in =
                auth::session_from_headers(&headers, &state.config.session_secret).is_some();
            render(IndexTemplate {
                logged_in,
                cuisines: CUISINE_OPTIONS,
                meal_types: MEAL_TYPE_OPTIONS,
                pills: pills_for(&FormState::default()),
                ad_enabled: settings.ad.enabled,
                ad_image: settings.ad.image_url,
                ad_description: settings.ad.description,
                ad_link: settings.ad.link,
            })
        }
    }
}

/// POST /ui/generate
///
/// Validates locally first (an empty ingredients field never reaches the
/// model), then renders either the recipe card or the error box — exactly one
/// of the two replaces the previous result.
pub async fn handle_generate_fragment(
    State(state): State<AppState>,
    RawForm(body): RawForm,
) -> Result<Response, AppError> {
    let form = FormState::from_urlencoded(&body);

    if let Err(message) = form.validate() {
        return render(ErrorMessageTemplate {
            message: message.to_string(),
        });
    }

    match generate_recipe(&state, &form.to_request()).await {
        Ok(recipe) => render(RecipeCardTemplate { recipe }),
        Err(e) => {
            e.log();
            render(ErrorMessageTemplate {
                message: e.user_message(),
            })
        }
    }
}

/// POST /ui/dietary
///
/// Toggles one dietary tag and re-renders the pill row. The hidden inputs in
/// the fragment carry the selection into the next generate submission.
pub async fn handle_dietary_toggle(RawForm(body): RawForm) -> Result<Response, AppError> {
    let mut form = FormState::from_urlencoded(&body);
    if let Some(option) = form_value(&body, "toggle") {
        form.toggle_dietary(&option);
    }
    render(DietaryPillsTemplate {
        pills: pills_for(&form),
    })
}

/// GET /ui/login
pub async fn login_modal() -> Result<Response, AppError> {
    render(LoginModalTemplate {
        has_error: false,
        error: String::new(),
    })
}

/// POST /ui/login
///
/// On a match, sets the session cookie and asks the browser to refresh so
/// the admin bar re-renders; on a mismatch, re-renders the open modal with
/// the fixed error message.
pub async fn handle_login_form(
    State(state): State<AppState>,
    RawForm(body): RawForm,
) -> Result<Response, AppError> {
    let settings = state.settings.require_loaded().await?;

    let username = form_value(&body, "username").unwrap_or_default();
    let password = form_value(&body, "password").unwrap_or_default();

    if !auth::verify_credentials(&username, &password, &settings.admin) {
        return render(LoginModalTemplate {
            has_error: true,
            error: INVALID_CREDENTIALS.to_string(),
        });
    }

    let token = auth::issue_token(&username, &state.config.session_secret)
        .map_err(|e| AppError::Internal(e.into()))?;

    let mut response = StatusCode::OK.into_response();
    response.headers_mut().insert(
        header::SET_COOKIE,
        HeaderValue::from_str(&auth::session_cookie(&token))
            .map_err(|e| AppError::Internal(e.into()))?,
    );
    response.headers_mut().insert(
        HeaderName::from_static("hx-refresh"),
        HeaderValue::from_static("true"),
    );
    Ok(response)
}

/// POST /ui/logout
pub async fn handle_logout() -> Result<Response, AppError> {
    let mut response = StatusCode::OK.into_response();
    response.headers_mut().insert(
        header::SET_COOKIE,
        HeaderValue::from_str(&auth::clear_session_cookie())
            .map_err(|e| AppError::Internal(e.into()))?,
    );
    response.headers_mut().insert(
        HeaderName::from_static("hx-refresh"),
        HeaderValue::from_static("true"),
    );
    Ok(response)
}
