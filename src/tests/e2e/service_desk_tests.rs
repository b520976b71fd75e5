use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::http::read_json;
use crate::tests::fixtures::state::make_test_state;

async fn get(app: &Router, uri: &str) -> (StatusCode, Option<Value>) {
    let response = app
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    if status == StatusCode::OK {
        (status, Some(read_json(response).await))
    } else {
        (status, None)
    }
}

async fn ticket_count(app: &Router) -> usize {
    let (_, body) = get(app, "/servicetickets").await;
    body.unwrap().as_array().unwrap().len()
}

#[tokio::test]
async fn creates_a_ticket_and_reads_it_back_through_its_location() {
    let app = router(make_test_state());
    let before = ticket_count(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::post("/servicetickets")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"customerId":1,"employeeId":2,"description":"clean gutters","emergency":true}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(location, "/servicetickets/6");

    let (status, ticket) = get(&app, &location).await;
    let ticket = ticket.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ticket["description"], "clean gutters");
    assert_eq!(ticket["customer"]["name"], "Robert");
    assert_eq!(ticket["employee"]["name"], "Ronald");
    assert_eq!(ticket_count(&app).await, before + 1);

    let (_, customer) = get(&app, "/customers/1").await;
    let ids: Vec<_> = customer.unwrap()["serviceTickets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 4, 6]);
}

#[tokio::test]
async fn keeps_the_completion_date_of_a_created_ticket() {
    let app = router(make_test_state());

    let response = app
        .clone()
        .oneshot(
            Request::post("/servicetickets")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"customerId":3,"employeeId":1,"dateCompleted":"2024-01-05"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let created = read_json(response).await;
    assert_eq!(created["dateCompleted"], "2024-01-05T00:00:00");

    let (status, ticket) = get(&app, &location).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ticket.unwrap()["dateCompleted"], "2024-01-05T00:00:00");

    let (_, employee) = get(&app, "/employees/1").await;
    let completed: Vec<_> = employee.unwrap()["serviceTickets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["dateCompleted"].clone())
        .collect();
    assert_eq!(
        completed,
        vec![
            Value::from("2023-08-10T00:00:00"),
            Value::from("2023-07-29T00:00:00"),
            Value::from("2024-01-05T00:00:00"),
        ]
    );
}

#[tokio::test]
async fn rejects_an_unknown_customer_without_mutating() {
    let app = router(make_test_state());

    let response = app
        .clone()
        .oneshot(
            Request::post("/servicetickets")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"customerId":99,"description":"nobody","emergency":false}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(ticket_count(&app).await, 5);
}

#[tokio::test]
async fn deletes_a_ticket_then_reports_it_missing() {
    let app = router(make_test_state());

    let delete = |uri: &'static str| {
        let app = app.clone();
        async move {
            app.oneshot(Request::delete(uri).body(Body::empty()).unwrap())
                .await
                .unwrap()
                .status()
        }
    };

    assert_eq!(delete("/servicetickets/2").await, StatusCode::NO_CONTENT);
    assert_eq!(get(&app, "/servicetickets/2").await.0, StatusCode::NOT_FOUND);
    assert_eq!(ticket_count(&app).await, 4);

    assert_eq!(delete("/servicetickets/2").await, StatusCode::NOT_FOUND);
    assert_eq!(ticket_count(&app).await, 4);

    // ids no longer line up with positions; ticket 4 must still be the one removed
    assert_eq!(delete("/servicetickets/4").await, StatusCode::NO_CONTENT);
    let (_, tickets) = get(&app, "/servicetickets").await;
    let ids: Vec<_> = tickets
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3, 5]);
}

#[tokio::test]
async fn repeated_reads_return_identical_content() {
    let app = router(make_test_state());

    for uri in ["/servicetickets/1", "/customers/2", "/employees/1"] {
        let first = get(&app, uri).await;
        let second = get(&app, uri).await;
        assert_eq!(first, second, "GET {uri}");
    }
}

#[tokio::test]
async fn assigns_ids_after_the_max_once_the_trailing_ticket_is_gone() {
    let app = router(make_test_state());

    let status = app
        .clone()
        .oneshot(Request::delete("/servicetickets/5").body(Body::empty()).unwrap())
        .await
        .unwrap()
        .status();
    assert_eq!(status, StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(
            Request::post("/servicetickets")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"customerId":3}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/servicetickets/5"
    );
}
