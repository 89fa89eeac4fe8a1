use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use planetarium_schema::Planet;
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

async fn spawn_app(tag: &str) -> (axum::Router, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "planetarium-{tag}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", temp_path.display());
    let db = planetarium::db::spawn(&database_url).await;
    let service = planetarium::service::PlanetService::new(db);
    let state = planetarium::server::router::PlanetState::new(service);
    (planetarium::server::router::planet_router(state), temp_path)
}

fn post_planet(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/planets")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

async fn read_planet(resp: axum::response::Response) -> Planet {
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&body).expect("response body was not a planet")
}

#[tokio::test]
async fn planet_create_read_delete_round_trip() {
    let (app, temp_path) = spawn_app("crud").await;

    // 1) POST a valid planet -> 201 with the assigned id in the body.
    let resp = app
        .clone()
        .oneshot(post_planet(
            r#"{"name":"Alderaan","climate":"temperate","terrain":"grasslands, mountains"}"#,
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = read_planet(resp).await;
    let id = created.id.expect("created planet must carry an id");
    assert_eq!(created.name, "Alderaan");

    // 2) GET by id -> 200 with an equal record.
    let resp = app
        .clone()
        .oneshot(get(&format!("/planets/{id}")))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_planet(resp).await, created);

    // 3) GET by name -> 200 with the same record.
    let resp = app
        .clone()
        .oneshot(get("/planets/name/Alderaan"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_planet(resp).await, created);

    // 4) GET a never-assigned id -> 404 with an empty body.
    let resp = app
        .clone()
        .oneshot(get(&format!("/planets/{}", id + 100)))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(body.is_empty(), "404 body must be empty");

    // 5) GET an unknown name -> 404 with an empty body.
    let resp = app
        .clone()
        .oneshot(get("/planets/name/Dagobah"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(body.is_empty());

    // 6) DELETE the planet -> 204, empty body.
    let resp = app
        .clone()
        .oneshot(delete(&format!("/planets/{id}")))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(body.is_empty());

    // 7) The record is gone.
    let resp = app
        .clone()
        .oneshot(get(&format!("/planets/{id}")))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // 8) Deleting the same id again is still 204 (idempotent).
    let resp = app
        .clone()
        .oneshot(delete(&format!("/planets/{id}")))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn planet_list_route_applies_filters() {
    let (app, temp_path) = spawn_app("list").await;

    for body in [
        r#"{"name":"Tatooine","climate":"arid","terrain":"desert"}"#,
        r#"{"name":"Alderaan","climate":"temperate","terrain":"grasslands, mountains"}"#,
        r#"{"name":"Yavin IV","climate":"temperate","terrain":"jungle"}"#,
    ] {
        let resp = app
            .clone()
            .oneshot(post_planet(body))
            .await
            .expect("request failed");
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    // 1) No query parameters -> all three records.
    let resp = app.clone().oneshot(get("/planets")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let planets: Vec<Planet> = serde_json::from_slice(&body).unwrap();
    let names: Vec<&str> = planets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Tatooine", "Alderaan", "Yavin IV"]);

    // 2) climate filter -> the two temperate planets.
    let resp = app
        .clone()
        .oneshot(get("/planets?climate=temperate"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let planets: Vec<Planet> = serde_json::from_slice(&body).unwrap();
    let names: Vec<&str> = planets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alderaan", "Yavin IV"]);

    // 3) climate and terrain together -> exactly Alderaan.
    let resp = app
        .clone()
        .oneshot(get(
            "/planets?climate=temperate&terrain=grasslands,%20mountains",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let planets: Vec<Planet> = serde_json::from_slice(&body).unwrap();
    assert_eq!(planets.len(), 1);
    assert_eq!(planets[0].name, "Alderaan");

    // 4) A filter matching nothing -> 200 with an empty array.
    let resp = app
        .clone()
        .oneshot(get("/planets?terrain=ocean"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(std::str::from_utf8(&body).unwrap(), "[]");

    let _ = fs::remove_file(&temp_path);
}
