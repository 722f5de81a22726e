use askama::Template;
use axum::Form;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use super::AppState;
use super::views::{FormTemplate, IndexTemplate, OobContactTemplate};
use crate::domain::contact::parse_contact_id;
use crate::domain::form::FormState;
use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct NewContact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let form = FormState::default();
    let html = {
        let store = state.store.lock()?;
        IndexTemplate {
            contacts: store.list(),
            form: &form,
        }
        .render()?
    };
    Ok(Html(html))
}

/// Responds with a fresh form plus the new contact as an out-of-band fragment,
/// or, when the email is taken, with the submitted form and its error (422).
pub async fn create_contact(
    State(state): State<AppState>,
    Form(input): Form<NewContact>,
) -> Result<Response, AppError> {
    let added = state.store.lock()?.add(input.name, input.email);
    match added {
        Ok(contact) => {
            let mut body = FormTemplate {
                form: &FormState::default(),
            }
            .render()?;
            body.push_str(&OobContactTemplate { contact: &contact }.render()?);
            Ok((StatusCode::OK, Html(body)).into_response())
        }
        Err(AppError::DuplicateEmail { name, email }) => {
            tracing::info!(%email, "duplicate email rejected");
            render_form(
                StatusCode::UNPROCESSABLE_ENTITY,
                &FormState::duplicate_email(&name, &email),
            )
        }
        Err(err) => Err(err),
    }
}

/// Waits out the configured delay first, then removes the contact.
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, AppError> {
    if !state.delete_delay.is_zero() {
        tokio::time::sleep(state.delete_delay).await;
    }

    let id = parse_contact_id(&raw_id)
        .inspect_err(|err| tracing::info!(%err, %raw_id, "delete rejected"))?;

    let removed = state
        .store
        .lock()?
        .remove(id)
        .inspect_err(|err| tracing::info!(%err, id, "delete rejected"))?;
    tracing::info!(id = removed.id, email = %removed.email, "contact deleted");

    Ok(StatusCode::OK)
}

fn render_form(status: StatusCode, form: &FormState) -> Result<Response, AppError> {
    let html = FormTemplate { form }.render()?;
    Ok((status, Html(html)).into_response())
}
