use axum::{http::StatusCode, Json};
use contracts::dashboards::d400_sales_overview::{
    FilterDomain, SalesFilterRequest, SalesOverviewResponse,
};

use crate::dashboards::d400_sales_overview::{filter_domain, render, session};
use crate::shared::data::dataset::{get_dataset, Dataset};

fn dataset() -> Result<&'static Dataset, StatusCode> {
    get_dataset().map_err(|e| {
        tracing::error!("D400 Dashboard: {}", e);
        StatusCode::SERVICE_UNAVAILABLE
    })
}

fn domain(dataset: &Dataset) -> Result<FilterDomain, StatusCode> {
    filter_domain(&dataset.orders).ok_or_else(|| {
        tracing::error!("D400 Dashboard: dataset has no orders");
        StatusCode::NOT_FOUND
    })
}

/// GET /api/d400/filters
pub async fn get_filters() -> Result<Json<FilterDomain>, StatusCode> {
    let domain = domain(dataset()?)?;
    tracing::info!(
        "D400 Dashboard: Returning filters {}..{}, {} states",
        domain.min_date,
        domain.max_date,
        domain.states.len()
    );
    Ok(Json(domain))
}

/// POST /api/d400/overview
pub async fn get_overview(
    Json(request): Json<SalesFilterRequest>,
) -> Result<Json<SalesOverviewResponse>, StatusCode> {
    let dataset = dataset()?;
    let filter = session::resolve(&domain(dataset)?, &request);
    tracing::info!(
        "D400 Dashboard: Getting overview for {}..{}",
        filter.date_from,
        filter.date_to
    );
    Ok(Json(render(dataset, &filter)))
}

#[cfg(test)]
mod tests {
    use crate::routes::configure_routes;
    use crate::shared::data::dataset::{initialize_dataset, DatasetError};
    use crate::usecases::u508_generate_sales_data;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use chrono::NaiveDate;
    use contracts::dashboards::d400_sales_overview::{FilterDomain, SalesOverviewResponse};
    use contracts::usecases::u508_generate_sales_data::GenerateRequest;
    use tower::ServiceExt;

    async fn call(request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = configure_routes().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    fn post_overview(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/d400/overview")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_dashboard_endpoints() {
        let dir = tempfile::tempdir().unwrap();
        let request = GenerateRequest {
            records: 300,
            start: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2023, 3, 31).unwrap(),
            output_dir: dir.path().display().to_string(),
            seed: 42,
        };
        u508_generate_sales_data::execute(&request).unwrap();
        match initialize_dataset(dir.path()) {
            Ok(()) | Err(DatasetError::AlreadyInitialized) => {}
            Err(e) => panic!("dataset init failed: {}", e),
        }

        let (status, body) = call(Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");

        let (status, body) =
            call(Request::get("/api/d400/filters").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        let domain: FilterDomain = serde_json::from_slice(&body).unwrap();
        assert!(domain.min_date >= request.start && domain.max_date <= request.end);

        let (status, body) = call(post_overview("{}")).await;
        assert_eq!(status, StatusCode::OK);
        match serde_json::from_slice::<SalesOverviewResponse>(&body).unwrap() {
            SalesOverviewResponse::Ready(view) => {
                assert_eq!(view.filter.states, domain.states);
                assert!(view.kpis.order_count > 0);
            }
            SalesOverviewResponse::Empty { .. } => panic!("expected data"),
        }

        let (status, body) = call(post_overview(r#"{"states":["XX"]}"#)).await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "empty");

        let (status, _) = call(post_overview("not json")).await;
        assert!(status.is_client_error());
    }
}
