use std::fmt::Display;

use actix_web::{error::BlockingError, http::StatusCode, HttpResponse, HttpResponseBuilder};
use cve_sources::FetchError;

#[derive(Debug)]
pub enum ApplicationError {
    /// Upstream failed or answered with something unusable.
    BadGateway(String),
    /// Upstream did not answer in time.
    GatewayTimeout,
    ServiceUnavailable,
}

impl Display for ApplicationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl actix_web::error::ResponseError for ApplicationError {
    fn error_response(&self) -> HttpResponse {
        let mut b = HttpResponseBuilder::new(self.status_code());

        if let Self::BadGateway(err) = self {
            b.body(err.to_owned())
        } else {
            b.finish()
        }
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
            Self::GatewayTimeout => StatusCode::GATEWAY_TIMEOUT,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

pub fn handle_blocking_error(error: BlockingError) -> ApplicationError {
    log::error!("{}", error);
    ApplicationError::ServiceUnavailable
}

pub fn upstream_error(error: FetchError) -> ApplicationError {
    log::error!("{}", error);
    match error {
        FetchError::Timeout(_) => ApplicationError::GatewayTimeout,
        other => ApplicationError::BadGateway(other.to_string()),
    }
}
