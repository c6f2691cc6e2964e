//! Development server for the Mangala invitation
//!
//! Serves the `web/` directory (page, styles and the wasm-bindgen bundle)
//! with the MIME types browsers require for module scripts and wasm.
//!
//! Configuration comes from the environment:
//! - `PORT`: listen port (default 8080)
//! - `WEB_ROOT`: directory to serve (default `web`)

use axum::{
    body::Body,
    http::{header, HeaderValue, Request},
    response::Response,
    Router,
};
use std::net::SocketAddr;
use tower_http::services::ServeDir;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_WEB_ROOT: &str = "web";

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let web_root = std::env::var("WEB_ROOT").unwrap_or_else(|_| DEFAULT_WEB_ROOT.to_string());

    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    let serve_dir = ServeDir::new(&web_root).precompressed_gzip().precompressed_br();

    let app = Router::new()
        .fallback_service(serve_dir)
        .layer(axum::middleware::from_fn(add_headers));

    println!("╔═══════════════════════════════════════════════════╗");
    println!("║          Mangala Invitation Dev Server            ║");
    println!("╠═══════════════════════════════════════════════════╣");
    println!("  URL:  http://localhost:{}", port);
    println!("  Root: {}", web_root);
    println!("  Press Ctrl+C to stop");
    println!("╚═══════════════════════════════════════════════════╝");
    println!();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

/// Content type for a request path, by extension
fn content_type(path: &str) -> Option<&'static str> {
    let ext = path.rsplit_once('.').map(|(_, ext)| ext)?;
    match ext {
        "js" | "mjs" => Some("application/javascript; charset=utf-8"),
        "wasm" => Some("application/wasm"),
        "css" => Some("text/css; charset=utf-8"),
        "html" => Some("text/html; charset=utf-8"),
        "json" => Some("application/json; charset=utf-8"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

/// Fix MIME types and disable caching of the freshly built bundle
async fn add_headers(request: Request<Body>, next: axum::middleware::Next) -> Response<Body> {
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    if let Some(mime) = content_type(&path) {
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(mime));
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_by_extension() {
        assert_eq!(content_type("/pkg/mangala_web_bg.wasm"), Some("application/wasm"));
        assert_eq!(
            content_type("/pkg/mangala_web.js"),
            Some("application/javascript; charset=utf-8")
        );
        assert_eq!(content_type("/index.html"), Some("text/html; charset=utf-8"));
        assert_eq!(content_type("/"), None);
        assert_eq!(content_type("/images/photo.jpg"), None);
    }
}
