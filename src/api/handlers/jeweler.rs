//! Jeweler business-registration handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{RegisterRequest, RegisterResponse};
use crate::app_state::AppState;
use crate::error::{DirectoryError, ErrorResponse};
use crate::service::Registration;

/// `POST /jewelers/register` — Register a jeweler and their store.
///
/// # Errors
///
/// Returns [`DirectoryError::MissingRegistrationFields`] or
/// [`DirectoryError::EmailTaken`].
#[utoipa::path(
    post,
    path = "/jewelers/register",
    tag = "Jewelers",
    summary = "Register a business",
    description = "Creates a jeweler and their store in one atomic write. The store is born claimed by the new jeweler; the jeweler starts with a pending verification status. The response carries no ids — claiming and login are separate steps.",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registration accepted", body = RegisterResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, DirectoryError> {
    let registration = parse_registration(req)?;
    state.directory.register(registration).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Registration successful. Store pending verification.".to_string(),
        }),
    ))
}

/// Presence validation for registrations. Empty strings count as missing,
/// and an absent or `false` BIS declaration rejects the whole request.
fn parse_registration(req: RegisterRequest) -> Result<Registration, DirectoryError> {
    if !req.bis_declared.unwrap_or(false) {
        return Err(DirectoryError::MissingRegistrationFields);
    }
    Ok(Registration {
        owner_name: required(req.owner_name)?,
        email: required(req.email)?,
        password: required(req.password)?,
        store_name: required(req.store_name)?,
        store_city: req.store_city.filter(|c| !c.is_empty()),
        store_logo: req.store_logo.filter(|l| !l.is_empty()),
        bis_certificate_image: required(req.bis_certificate_image)?,
    })
}

fn required(value: Option<String>) -> Result<String, DirectoryError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(DirectoryError::MissingRegistrationFields)
}

/// Jeweler routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/jewelers/register", post(register))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn full_request() -> RegisterRequest {
        RegisterRequest {
            owner_name: Some("Asha Mehta".to_string()),
            email: Some("asha@example.com".to_string()),
            password: Some("secret".to_string()),
            store_name: Some("Aurum & Co".to_string()),
            store_city: None,
            store_logo: None,
            bis_declared: Some(true),
            bis_certificate_image: Some("bis.png".to_string()),
        }
    }

    #[test]
    fn accepts_a_complete_registration() {
        assert!(parse_registration(full_request()).is_ok());
    }

    #[test]
    fn rejects_missing_owner_name() {
        let mut req = full_request();
        req.owner_name = None;
        let parsed = parse_registration(req);
        assert!(matches!(
            parsed,
            Err(DirectoryError::MissingRegistrationFields)
        ));
    }

    #[test]
    fn rejects_empty_email() {
        let mut req = full_request();
        req.email = Some(String::new());
        let parsed = parse_registration(req);
        assert!(matches!(
            parsed,
            Err(DirectoryError::MissingRegistrationFields)
        ));
    }

    #[test]
    fn rejects_undeclared_bis() {
        let mut req = full_request();
        req.bis_declared = Some(false);
        assert!(parse_registration(req).is_err());

        let mut req = full_request();
        req.bis_declared = None;
        assert!(parse_registration(req).is_err());
    }

    #[test]
    fn optional_store_fields_pass_through() {
        let mut req = full_request();
        req.store_city = Some("Jaipur".to_string());
        let Ok(registration) = parse_registration(req) else {
            panic!("expected valid registration");
        };
        assert_eq!(registration.store_city.as_deref(), Some("Jaipur"));
        assert_eq!(registration.store_logo, None);
    }
}
