//! AWS Lambda handler for single-case valuations
//!
//! Accepts an input case as JSON (the form payload) and returns the case with
//! a nested `results` object. When analytics is configured the same body is
//! posted to the collecting endpoint after the response has been built. The
//! POST is awaited (bounded by ANALYTICS_TIMEOUT_SECS): Lambda freezes the
//! environment once the handler returns, so a detached task would stall.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use log::info;
use residence_right::{calculate_checked, AnalyticsConfig, AnalyticsSink, CalculationRecord, InputCase};
use serde_json::json;

fn cors_builder(status: u16) -> lambda_http::http::response::Builder {
    Response::builder()
        .status(status)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn error_response(status: u16, message: &str) -> Result<Response<Body>, Error> {
    let body = json!({ "error": message }).to_string();
    Ok(cors_builder(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(body))?)
}

fn json_response(record: &CalculationRecord) -> Result<Response<Body>, Error> {
    let body = serde_json::to_string(record)?;
    Ok(cors_builder(200)
        .header("Content-Type", "application/json")
        .body(Body::Text(body))?)
}

/// Lambda handler function
async fn handler(event: Request, sink: AnalyticsSink) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(cors_builder(200).body(Body::Empty)?);
    }
    if event.method().as_str() != "POST" {
        return error_response(405, "Use POST with a JSON case body");
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => return error_response(400, "Empty request body"),
    };

    let case: InputCase = match serde_json::from_str(&body_str) {
        Ok(c) => c,
        Err(e) => return error_response(400, &format!("Invalid JSON: {}", e)),
    };

    let results = match calculate_checked(&case) {
        Ok(r) => r,
        Err(e) => return error_response(400, &e.to_string()),
    };
    info!("valued case: total={} spouse_right_total={}", results.total, results.spouse_right_total);

    let record = CalculationRecord::new(case, results);
    let response = json_response(&record)?;

    // Result is final; the POST cannot change it
    sink.send(&record).await;

    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let sink = AnalyticsSink::new(&AnalyticsConfig::from_env());
    info!("analytics {}", if sink.is_active() { "enabled" } else { "disabled" });

    run(service_fn(move |event: Request| {
        let sink = sink.clone();
        async move { handler(event, sink).await }
    }))
    .await
}
