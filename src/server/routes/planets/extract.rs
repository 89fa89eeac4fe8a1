use crate::error::PlanetariumError;
use crate::utils::logging::with_pretty_json_debug;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use planetarium_schema::Planet;
use tracing::debug;

pub(crate) struct ValidPlanet(pub(crate) Planet);

impl<S> FromRequest<S> for ValidPlanet
where
    S: Send + Sync,
{
    type Rejection = PlanetariumError;

    /// Extract and validate a `POST /planets` request.
    ///
    /// Responsibilities:
    /// - Deserialize the HTTP JSON body into a wire `Planet`; missing fields
    ///   default to blank and fail the checks below.
    /// - Run the non-blank field checks before any persistence attempt, so an
    ///   invalid planet never reaches the datastore.
    ///
    /// Error handling:
    /// - JSON syntax/schema errors from the `axum::Json` extractor become
    ///   `MalformedBody` (400); the parser detail only goes to the debug log.
    /// - Field violations become `Validation` (400) with every violation
    ///   listed in the response details.
    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let Json(planet) = Json::<Planet>::from_request(req, &())
            .await
            .map_err(|rejection| {
                debug!(error = %rejection.body_text(), "Rejected planet payload");
                PlanetariumError::MalformedBody
            })?;

        planet.validate().map_err(PlanetariumError::Validation)?;

        with_pretty_json_debug(&planet, |pretty_body| {
            debug!(body = %pretty_body, "Extracted planet create request");
        });

        Ok(Self(planet))
    }
}
