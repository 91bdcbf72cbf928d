use actix_web::{web, HttpResponse, Result};

use crate::models::{ApiError, AppState};
use crate::services::pages as page_service;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
}

async fn index(state: web::Data<AppState>) -> Result<HttpResponse> {
    match page_service::load_page(state.config.demo_page_path.as_deref()) {
        Ok(blocks) => Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(page_service::render_document(&blocks, &state.config.pkg_name))),
        Err(e) => {
            log::error!("Error loading demo page: {:?}", e);
            Ok(HttpResponse::InternalServerError().json(ApiError {
                error: "page_unavailable".to_string(),
                message: "Failed to load demo page".to_string(),
            }))
        }
    }
}
