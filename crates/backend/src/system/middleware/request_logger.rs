use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;
use std::time::Duration;

use crate::shared::format::format_number;

/// Одна строка на запрос: время, длительность, размер ответа, статус, метод, путь.
///
/// Голубое время для 200, коричневое для остального. Та же строка без цветов уходит в tracing.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let (parts, body) = next.run(req).await.into_parts();

    // Тело читаем целиком, чтобы узнать реальный размер
    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            log_request(parts.status, &method, &path, start.elapsed(), Some(bytes.len()));
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(e) => {
            tracing::warn!("Failed to read response body for {}: {}", path, e);
            log_request(parts.status, &method, &path, start.elapsed(), None);
            Response::from_parts(parts, Body::default())
        }
    }
}

fn log_request(
    status: StatusCode,
    method: &Method,
    path: &str,
    duration: Duration,
    size: Option<usize>,
) {
    let size = size.map(format_number).unwrap_or_else(|| "error".to_string());
    let color_code = if status == StatusCode::OK { "36" } else { "33" };
    let timestamp = Local::now().format("%H:%M:%S");

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        timestamp,
        duration.as_millis(),
        size,
        status.as_u16(),
        method,
        path
    );
    tracing::debug!(
        "{} {} -> {} ({} bytes, {}ms)",
        method,
        path,
        status.as_u16(),
        size,
        duration.as_millis()
    );
}
