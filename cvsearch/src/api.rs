use actix_cors::Cors;
use actix_web::{
    dev::Server,
    web::{self, Data, Json},
    App, HttpResponse, HttpServer,
};

use serde::Serialize;

use crate::configuration::FeedSettings;

mod error;
mod search;
mod telemetry;

pub use telemetry::init_logger;

const INDEX_HTML: &str = include_str!("../static/index.html");
const SCRIPT_JS: &str = include_str!("../static/script.js");

pub struct ApiConfig {
    pub address: String,
    pub port: u16,
    pub feeds: FeedSettings,
}

pub fn run(api_config: ApiConfig) -> Result<Server, anyhow::Error> {
    let application_ctx = Data::new(ApplicationContext::new(api_config.feeds));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(application_ctx.clone())
            .configure(routes)
            .wrap(Cors::permissive())
            .wrap(tracing_actix_web::TracingLogger::default())
    })
    .bind((api_config.address, api_config.port))?
    .run();
    Ok(server)
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/static/script.js", web::get().to(script))
        .service(
            web::scope("/api")
                .route("", web::get().to(status))
                .route("/search/{term}", web::get().to(search::search)),
        );
}

pub struct ApplicationContext {
    feeds: FeedSettings,
}

impl ApplicationContext {
    pub fn new(feeds: FeedSettings) -> Self {
        Self { feeds }
    }

    pub fn feeds(&self) -> &FeedSettings {
        &self.feeds
    }
}

#[derive(Debug, Serialize)]
struct Status<'a> {
    status: &'a str,
    version: &'a str,
}

async fn status() -> Json<Status<'static>> {
    Json(Status {
        status: "ok",
        version: crate::version(),
    })
}

async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

async fn script() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(SCRIPT_JS)
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};
    use serde_json::{json, Value};

    use super::*;

    fn context(server_url: &str) -> Data<ApplicationContext> {
        Data::new(ApplicationContext::new(FeedSettings {
            shodan_url: server_url.to_string(),
            nist_url: server_url.to_string(),
            mitre_url: server_url.to_string(),
            timeout_secs: 5,
            ..Default::default()
        }))
    }

    #[actix_web::test]
    async fn status_reports_liveness() {
        let app = test::init_service(
            App::new()
                .app_data(context("http://127.0.0.1:9"))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn landing_page_is_served() {
        let app = test::init_service(
            App::new()
                .app_data(context("http://127.0.0.1:9"))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn keyword_without_matches_is_an_empty_object() {
        let mut upstream = mockito::Server::new_async().await;
        let _mock = upstream
            .mock("GET", "/rest/json/cves/2.0")
            .match_query(mockito::Matcher::UrlEncoded(
                "keywordSearch".into(),
                "apache log4j".into(),
            ))
            .with_status(200)
            .with_body(r#"{"totalResults":0,"vulnerabilities":[]}"#)
            .create_async()
            .await;

        let app = test::init_service(
            App::new()
                .app_data(context(&upstream.url()))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/search/apache%20log4j")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!({}));
    }

    #[actix_web::test]
    async fn cve_lookup_returns_detail_body() {
        let mut upstream = mockito::Server::new_async().await;
        let _mock = upstream
            .mock("GET", "/cve/CVE-2021-44228")
            .with_status(200)
            .with_body(
                json!({
                    "cve_id": "CVE-2021-44228",
                    "summary": "Log4Shell",
                    "kev": true,
                    "references": ["string"],
                })
                .to_string(),
            )
            .create_async()
            .await;
        let _mock = upstream
            .mock("GET", "/api/cve/CVE-2021-44228")
            .with_status(404)
            .create_async()
            .await;

        let app = test::init_service(
            App::new()
                .app_data(context(&upstream.url()))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/search/CVE-2021-44228")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["title"], "CVE-2021-44228");
        assert_eq!(body["cve"], "CVE-2021-44228");
        assert_eq!(body["is_kev"], "Yes");
        assert_eq!(body["references"], json!([]));
        assert_eq!(body["exploits"].as_array().map(Vec::len), Some(4));
    }

    #[actix_web::test]
    async fn upstream_failure_is_a_bad_gateway() {
        let mut upstream = mockito::Server::new_async().await;
        let _mock = upstream
            .mock("GET", "/cve/CVE-2021-44228")
            .with_status(503)
            .create_async()
            .await;

        let app = test::init_service(
            App::new()
                .app_data(context(&upstream.url()))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/search/CVE-2021-44228")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn server_starts_and_stops_with_configured_feeds() {
        let server = run(ApiConfig {
            address: "127.0.0.1".into(),
            port: 0,
            feeds: FeedSettings::default(),
        })
        .unwrap();
        let handle = server.handle();
        let running = actix_web::rt::spawn(server);

        handle.stop(true).await;

        assert!(running.await.unwrap().is_ok());
    }
}
