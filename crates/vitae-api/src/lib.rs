//! JSON REST API for vitae.
//!
//! A thin translation layer over any
//! [`vitae_core::store::ProfileStore`]: axum extractors on the way in,
//! store calls in the middle, JSON plus a status code on the way out.
//! Authentication, TLS, and other transport concerns belong to the
//! embedding server.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", vitae_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod profiles;
pub mod sections;
pub mod skills;
pub mod view;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get, post, put},
};
use vitae_core::store::ProfileStore;

pub use error::ApiError;


/// Assemble the complete route table over `store`.
///
/// State is baked in, so the resulting `Router<()>` nests into a parent
/// router of any state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ProfileStore + Clone + Send + Sync + 'static,
  S::Error: Into<vitae_core::Error>,
{
  Router::new()
    // Profiles
    .route(
      "/profiles",
      get(profiles::by_account::<S>).post(profiles::create::<S>),
    )
    .route(
      "/profiles/{id}",
      get(profiles::get_one::<S>)
        .put(profiles::update::<S>)
        .delete(profiles::remove::<S>),
    )
    // Sections
    .route("/profiles/{id}/sections", post(sections::create::<S>))
    .route("/profiles/{id}/sections/{kind}", get(sections::list::<S>))
    .route("/sections/{id}", put(sections::update::<S>))
    .route("/sections/{kind}/{id}", delete(sections::remove::<S>))
    // Skill links
    .route("/skills/{id}/link", post(skills::link::<S>))
    .route("/skills/{id}/unlink", post(skills::unlink::<S>))
    .route("/skills/linked", get(skills::linked::<S>))
    // Aggregation
    .route("/accounts/{account_id}/view", get(view::handler::<S>))
    .with_state(store)
}
