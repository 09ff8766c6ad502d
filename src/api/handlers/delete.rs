//! Handler for deleting bookmarks.

use axum::{
    extract::{RawForm, State},
    response::Redirect,
};

use crate::api::dto::bookmarks::DeleteUrlsForm;
use crate::error::AppError;
use crate::state::AppState;

/// Removes every URL selected in the form.
///
/// # Endpoint
///
/// `POST /delete` (repeatable form field `urlsToDelete`)
///
/// URLs that are not bookmarked are ignored.
///
/// # Response Codes
///
/// - **303 See Other** to `/` on success
/// - **400 Bad Request** when nothing was selected
pub async fn delete_handler(
    State(state): State<AppState>,
    RawForm(body): RawForm,
) -> Result<Redirect, AppError> {
    let form = DeleteUrlsForm::parse(&body);

    state.bookmarks.delete(&form.urls_to_delete).await?;

    Ok(Redirect::to("/"))
}
