use actix_web::web;

pub mod pages;
pub mod render;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").configure(render::configure))
        .configure(pages::configure);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::{ApiError, AppState};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    fn state(demo_page_path: Option<&str>) -> web::Data<AppState> {
        web::Data::new(AppState {
            config: Config {
                host: "127.0.0.1".to_string(),
                port: 8080,
                static_files_path: None,
                demo_page_path: demo_page_path.map(str::to_string),
                pkg_name: "accordion_frontend".to_string(),
            },
        })
    }

    #[actix_web::test]
    async fn test_index_serves_sample_page() {
        let app = test::init_service(App::new().app_data(state(None)).configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains(r#"class="sab-accordion""#));
        assert!(html.contains("/pkg/accordion_frontend.js"));
    }

    #[actix_web::test]
    async fn test_index_reports_missing_page() {
        let app = test::init_service(
            App::new()
                .app_data(state(Some("/definitely/not/here.json")))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let error: ApiError = test::read_body_json(resp).await;
        assert_eq!(error.error, "page_unavailable");
    }

    #[actix_web::test]
    async fn test_render_endpoint() {
        let app = test::init_service(App::new().app_data(state(None)).configure(configure_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/render")
            .set_json(json!([
                {"type": "accordion", "allowMultiple": true, "items": [{"title": "Q", "isOpen": true}]}
            ]))
            .to_request();
        let resp: render::RenderResponse = test::call_and_read_body_json(&app, req).await;

        assert!(resp.html.contains(r#"data-allow-multiple="true""#));
        assert!(resp.html.contains(r#"<div class="sab-accordion-item sab-open" data-open="true">"#));
    }

    #[actix_web::test]
    async fn test_render_rejects_invalid_blocks() {
        let app = test::init_service(App::new().app_data(state(None)).configure(configure_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/render")
            .set_json(json!([{"type": "carousel"}]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(App::new().app_data(state(None)).configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"status": "ok"}));
    }
}
