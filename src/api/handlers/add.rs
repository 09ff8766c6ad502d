//! Handler for adding a bookmark.

use axum::{
    Form,
    extract::State,
    response::Redirect,
};
use validator::Validate;

use crate::api::dto::bookmarks::AddUrlForm;
use crate::application::services::AddOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Adds the submitted URL to the front of the list.
///
/// # Endpoint
///
/// `POST /add` (form field `url`)
///
/// The URL is normalized first (scheme inferred as `https://` when missing),
/// so `example.com` and `https://example.com` are the same bookmark.
///
/// # Response Codes
///
/// - **303 See Other** to `/` when added
/// - **303 See Other** to `/?duplicate=true` when already bookmarked
/// - **400 Bad Request** when the URL is missing, too long or invalid
pub async fn add_handler(
    State(state): State<AppState>,
    Form(form): Form<AddUrlForm>,
) -> Result<Redirect, AppError> {
    form.validate()?;

    match state.bookmarks.add(&form.url).await? {
        AddOutcome::Added(_) => Ok(Redirect::to("/")),
        AddOutcome::Duplicate(_) => Ok(Redirect::to("/?duplicate=true")),
    }
}
