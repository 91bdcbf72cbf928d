use accordion_shared::{Block, Renderer};
use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/render", web::post().to(render_blocks))
        .route("/health", web::get().to(health));
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RenderResponse {
    pub html: String,
}

async fn render_blocks(body: web::Json<Vec<Block>>) -> Result<HttpResponse> {
    let html = Renderer::new().render_blocks(&body.into_inner());
    Ok(HttpResponse::Ok().json(RenderResponse { html }))
}

async fn health() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({ "status": "ok" })))
}
