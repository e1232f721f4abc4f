use crate::data::EncodedSummary;
use crate::summary::{SummaryError, SummaryService};
use log::{debug, warn};
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::{get, State};
use std::sync::Arc;

/// Error body returned when no summary can be produced
#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

type SummaryResult = Result<Json<EncodedSummary>, Custom<Json<ErrorResponse>>>;

/// Interpret the `accurate` query flag.
///
/// A bare `?accurate` asks for the probe; `accurate=false` (or `0`, `no`,
/// `off`) does not.
pub fn wants_accurate(flag: Option<&str>) -> bool {
    match flag {
        Some(value) => !matches!(value.to_lowercase().as_str(), "false" | "0" | "no" | "off"),
        None => false,
    }
}

fn error_response(error: SummaryError) -> Custom<Json<ErrorResponse>> {
    let status = Status::from_code(error.status_code()).unwrap_or(Status::InternalServerError);
    warn!("Summary request failed with {}: {}", status, error);
    Custom(
        status,
        Json(ErrorResponse {
            success: false,
            message: error.to_string(),
        }),
    )
}

fn respond(result: Result<EncodedSummary, SummaryError>) -> SummaryResult {
    match result {
        Ok(encoded) => {
            debug!("Returning summary with {} fields", encoded.len());
            Ok(Json(encoded))
        }
        Err(e) => Err(error_response(e)),
    }
}

/// Summary in the default API version
#[get("/summary?<accurate>")]
pub fn get_summary(accurate: Option<&str>, service: &State<Arc<SummaryService>>) -> SummaryResult {
    respond(service.inner().summary(None, wants_accurate(accurate)))
}

/// Summary in the requested `<major>.<minor>` API version
#[get("/summary/<version>?<accurate>")]
pub fn get_summary_version(
    version: &str,
    accurate: Option<&str>,
    service: &State<Arc<SummaryService>>,
) -> SummaryResult {
    respond(service.inner().summary(Some(version), wants_accurate(accurate)))
}

/// Summary of the test fixture in the default API version
#[get("/test?<accurate>")]
pub fn get_test_summary(accurate: Option<&str>, service: &State<Arc<SummaryService>>) -> SummaryResult {
    respond(service.inner().test_summary(None, wants_accurate(accurate)))
}

/// Summary of the test fixture in the requested API version
#[get("/test/<version>?<accurate>")]
pub fn get_test_summary_version(
    version: &str,
    accurate: Option<&str>,
    service: &State<Arc<SummaryService>>,
) -> SummaryResult {
    respond(service.inner().test_summary(Some(version), wants_accurate(accurate)))
}
