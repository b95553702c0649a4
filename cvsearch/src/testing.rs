use std::net::TcpListener;
use std::time::Duration;

use cve_sources::{Endpoints, Feed, FetchError, Sources};

/// A real timeout from a listener that accepts connections but never answers.
pub fn timeout_error() -> FetchError {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    let endpoints = Endpoints {
        shodan: url.clone(),
        nist: url.clone(),
        mitre: url,
    };
    let sources = Sources::new(endpoints, Duration::from_millis(300), "cvsearch-test").unwrap();

    let err = sources.search_by_keyword("log4j").unwrap_err();
    drop(listener);
    err
}
