use axum::{
    body::{to_bytes, Body},
    extract::{Path, Query},
    http::{header, Method, Request, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use tower::ServiceExt;

use hotel_backend::build_router;
use hotel_backend::config::environment::{EnvironmentConfig, StorageBackend};
use hotel_backend::state::AppState;

struct TestApp {
    router: Router,
}

struct TestResponse {
    status: StatusCode,
    body: Value,
}

impl TestApp {
    async fn request(&self, method: Method, uri: &str, body: Option<Value>, token: Option<&str>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        TestResponse { status, body }
    }

    async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None, None).await
    }

    async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body), None).await
    }

    async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, Some(body), None).await
    }

    async fn patch(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::PATCH, uri, Some(body), None).await
    }

    async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None, None).await
    }
}

fn test_config(external_posts_url: &str) -> EnvironmentConfig {
    EnvironmentConfig {
        storage: StorageBackend::Memory,
        bcrypt_cost: 4,
        jwt_secret: "secreto-de-pruebas".to_string(),
        external_posts_url: external_posts_url.to_string(),
        external_timeout_secs: 5,
        ..EnvironmentConfig::default()
    }
}

async fn create_test_app() -> TestApp {
    create_test_app_with_posts_api("http://127.0.0.1:1").await
}

async fn create_test_app_with_posts_api(url: &str) -> TestApp {
    let state = AppState::in_memory(test_config(url)).unwrap();
    TestApp {
        router: build_router(state),
    }
}

// API externa de posts falsa (subconjunto de JSONPlaceholder)
async fn spawn_posts_api() -> String {
    let posts = || -> Vec<Value> {
        vec![
            json!({ "id": 1, "title": "sunt aut facere", "body": "quia", "userId": 1 }),
            json!({ "id": 2, "title": "qui est esse", "body": "est", "userId": 1 }),
            json!({ "id": 3, "title": "ea molestias", "body": "et", "userId": 2 }),
        ]
    };
    let app = Router::new()
        .route(
            "/posts",
            get(move |Query(params): Query<HashMap<String, String>>| async move {
                let mut list = posts();
                if let Some(user_id) = params.get("userId") {
                    list.retain(|p| p["userId"].to_string() == *user_id);
                }
                if let Some(term) = params.get("title_like") {
                    list.retain(|p| p["title"].as_str().unwrap_or_default().contains(term.as_str()));
                }
                if let Some(limit) = params.get("_limit").and_then(|l| l.parse::<usize>().ok()) {
                    list.truncate(limit);
                }
                Json(Value::Array(list))
            }),
        )
        .route(
            "/posts/:id",
            get(|Path(id): Path<i32>| async move {
                if id == 1 {
                    Ok(Json(json!({ "id": 1, "title": "sunt aut facere", "body": "quia", "userId": 1 })))
                } else {
                    Err(StatusCode::NOT_FOUND)
                }
            })
            .put(|Path(id): Path<i32>, Json(body): Json<Value>| async move {
                Json(json!({ "id": id, "title": body["title"], "body": body["body"], "userId": body["userId"] }))
            })
            .patch(|Path(id): Path<i32>, Json(body): Json<Value>| async move {
                Json(json!({ "id": id, "title": body["title"], "body": "quia", "userId": 1 }))
            })
            .delete(|| async { Json(json!({})) }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn seed_room(app: &TestApp, number: &str, capacity: i32) -> i64 {
    let response = app
        .post("/hotel/rooms", json!({ "number": number, "type": "doble", "capacity": capacity }))
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    response.body["id"].as_i64().unwrap()
}

async fn seed_guest(app: &TestApp, name: &str, document: &str) -> i64 {
    let response = app
        .post(
            "/hotel/guests",
            json!({
                "name": name,
                "document": document,
                "email": format!("{}@hotel.test", document.to_lowercase()),
                "phone": "+34 600 111 222"
            }),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    response.body["id"].as_i64().unwrap()
}

fn reservation(room: i64, guest: i64, check_in: &str, check_out: &str, personas: Value) -> Value {
    json!({
        "roomId": room,
        "guestId": guest,
        "checkIn": check_in,
        "checkOut": check_out,
        "personas": personas
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app().await;
    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_reservation_scenarios() {
    let app = create_test_app().await;
    let room = seed_room(&app, "101", 2).await;
    let guest = seed_guest(&app, "Ana Pérez", "A100").await;

    // A: aceptada, total = personas * 50
    let a = app
        .post("/hotel/reservations", reservation(room, guest, "2025-06-01", "2025-06-05", json!(2)))
        .await;
    assert_eq!(a.status, StatusCode::CREATED, "{}", a.body);
    assert_eq!(a.body["total"], "100.00");
    assert_eq!(a.body["status"], "pendiente");
    assert_eq!(a.body["room"]["number"], "101");
    assert_eq!(a.body["guest"]["name"], "Ana Pérez");

    // B: solapa con A
    let b = app
        .post("/hotel/reservations", reservation(room, guest, "2025-06-04", "2025-06-08", json!(1)))
        .await;
    assert_eq!(b.status, StatusCode::BAD_REQUEST);
    assert_eq!(b.body["code"], "CONFLICT");
    assert_eq!(b.body["message"], "La habitación ya está reservada en ese rango de fechas");

    // C: empieza el día que A termina
    let c = app
        .post("/hotel/reservations", reservation(room, guest, "2025-06-05", "2025-06-08", json!("1")))
        .await;
    assert_eq!(c.status, StatusCode::CREATED, "{}", c.body);
    assert_eq!(c.body["total"], "50.00");

    let list = app.get("/hotel/reservations").await;
    assert_eq!(list.body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_reservation_validation_messages() {
    let app = create_test_app().await;
    let room = seed_room(&app, "102", 2).await;
    let guest = seed_guest(&app, "Luis Gómez", "B200").await;

    let over_capacity = app
        .post("/hotel/reservations", reservation(room, guest, "2025-06-01", "2025-06-05", json!(3)))
        .await;
    assert_eq!(over_capacity.status, StatusCode::BAD_REQUEST);
    assert_eq!(over_capacity.body["code"], "VALIDATION_ERROR");
    assert!(over_capacity.body["message"].as_str().unwrap().contains('2'));

    let zero_nights = app
        .post("/hotel/reservations", reservation(room, guest, "2025-06-05", "2025-06-05", json!(1)))
        .await;
    assert_eq!(
        zero_nights.body["message"],
        "La fecha de salida debe ser posterior a la de entrada"
    );

    let missing_room = app
        .post("/hotel/reservations", reservation(999, guest, "2025-06-01", "2025-06-05", json!(1)))
        .await;
    assert_eq!(missing_room.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing_room.body["code"], "NOT_FOUND");
    assert_eq!(missing_room.body["message"], "La habitación no existe");

    let no_dates = app
        .post("/hotel/reservations", json!({ "roomId": room, "guestId": guest, "personas": 1 }))
        .await;
    assert_eq!(no_dates.body["message"], "Debe indicar fecha de entrada y salida");
}

#[tokio::test]
async fn test_reservation_update_and_delete() {
    let app = create_test_app().await;
    let room = seed_room(&app, "103", 3).await;
    let guest = seed_guest(&app, "Marta Ruiz", "C300").await;

    let created = app
        .post("/hotel/reservations", reservation(room, guest, "2025-07-01", "2025-07-04", json!(2)))
        .await;
    let id = created.body["id"].as_i64().unwrap();
    let uri = format!("/hotel/reservations/{}", id);

    // Revalidar la misma reserva no choca consigo misma
    let extended = app.put(&uri, json!({ "checkOut": "2025-07-06", "personas": 3 })).await;
    assert_eq!(extended.status, StatusCode::OK, "{}", extended.body);
    assert_eq!(extended.body["checkIn"], "2025-07-01");
    assert_eq!(extended.body["checkOut"], "2025-07-06");
    assert_eq!(extended.body["total"], "150.00");

    let active = app.delete(&uri).await;
    assert_eq!(active.status, StatusCode::BAD_REQUEST);
    assert_eq!(active.body["message"], "Solo se puede eliminar una reserva cancelada o finalizada.");

    let cancelled = app.put(&uri, json!({ "status": "cancelada" })).await;
    assert_eq!(cancelled.body["status"], "cancelada");

    let deleted = app.delete(&uri).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["success"], true);

    let gone = app.get(&uri).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.body["message"], "No existe la reserva");
}

#[tokio::test]
async fn test_room_and_guest_deletion_guards() {
    let app = create_test_app().await;
    let free_room = seed_room(&app, "201", 2).await;
    let booked_room = seed_room(&app, "202", 2).await;
    let guest = seed_guest(&app, "Pablo Díaz", "D400").await;

    app.post(
        "/hotel/reservations",
        reservation(booked_room, guest, "2025-08-01", "2025-08-02", json!(1)),
    )
    .await;

    let blocked = app.delete(&format!("/hotel/rooms/{}", booked_room)).await;
    assert_eq!(blocked.status, StatusCode::BAD_REQUEST);
    assert_eq!(blocked.body["message"], "No se puede eliminar la habitación porque tiene reservas.");

    let blocked = app.delete(&format!("/hotel/guests/{}", guest)).await;
    assert_eq!(blocked.body["message"], "No se puede eliminar el huésped porque tiene reservas.");

    let deleted = app.delete(&format!("/hotel/rooms/{}", free_room)).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["success"], true);

    let missing = app.get(&format!("/hotel/rooms/{}", free_room)).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["message"], "No existe la habitación");
}

#[tokio::test]
async fn test_room_and_guest_crud() {
    let app = create_test_app().await;
    let room = seed_room(&app, "301", 2).await;

    let duplicate = app
        .post("/hotel/rooms", json!({ "number": "301", "type": "suite", "capacity": 4 }))
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);
    assert_eq!(duplicate.body["message"], "Ya existe una habitación con ese número.");

    let invalid = app
        .post("/hotel/rooms", json!({ "number": "302", "type": "suite", "capacity": 0 }))
        .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_eq!(invalid.body["code"], "VALIDATION_ERROR");

    let updated = app
        .put(&format!("/hotel/rooms/{}", room), json!({ "status": "mantenimiento" }))
        .await;
    assert_eq!(updated.body["status"], "mantenimiento");
    assert_eq!(updated.body["number"], "301");
    assert_eq!(updated.body["type"], "doble");

    let guest = seed_guest(&app, "Eva Torres", "E500").await;
    let same_document = app
        .post(
            "/hotel/guests",
            json!({ "name": "Otra Persona", "document": "E500", "email": "otra@hotel.test", "phone": "5551234" }),
        )
        .await;
    assert_eq!(same_document.status, StatusCode::CONFLICT);
    assert_eq!(same_document.body["message"], "Ya existe un huésped con ese documento.");

    let renamed = app
        .put(&format!("/hotel/guests/{}", guest), json!({ "phone": "600 222 333" }))
        .await;
    assert_eq!(renamed.status, StatusCode::OK);
    assert_eq!(renamed.body["document"], "E500");
    assert_eq!(renamed.body["phone"], "600 222 333");

    let guests = app.get("/hotel/guests").await;
    assert_eq!(guests.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_blank_fields_are_rejected() {
    let app = create_test_app().await;

    let blank_room = app
        .post("/hotel/rooms", json!({ "number": "   ", "type": "doble", "capacity": 2 }))
        .await;
    assert_eq!(blank_room.status, StatusCode::BAD_REQUEST);
    assert_eq!(blank_room.body["code"], "VALIDATION_ERROR");

    let blank_guest = app
        .post(
            "/hotel/guests",
            json!({ "name": "   ", "document": "  ", "email": "blanco@hotel.test", "phone": "5551234" }),
        )
        .await;
    assert_eq!(blank_guest.status, StatusCode::BAD_REQUEST);
    assert_eq!(blank_guest.body["code"], "VALIDATION_ERROR");

    let room = seed_room(&app, " 501 ", 2).await;
    let stored = app.get(&format!("/hotel/rooms/{}", room)).await;
    assert_eq!(stored.body["number"], "501");

    let renamed = app.put(&format!("/hotel/rooms/{}", room), json!({ "number": "  " })).await;
    assert_eq!(renamed.status, StatusCode::BAD_REQUEST);
    assert_eq!(renamed.body["code"], "VALIDATION_ERROR");

    let rooms = app.get("/hotel/rooms").await;
    assert_eq!(rooms.body.as_array().unwrap().len(), 1);
    let guests = app.get("/hotel/guests").await;
    assert_eq!(guests.body, json!([]));
}

#[tokio::test]
async fn test_malformed_requests_get_json_errors() {
    let app = create_test_app().await;
    let room = seed_room(&app, "601", 2).await;
    let guest = seed_guest(&app, "Iris Vega", "G700").await;

    let bad_id = app.get("/hotel/rooms/abc").await;
    assert_eq!(bad_id.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_id.body["code"], "BAD_REQUEST");

    let bad_type = app
        .post("/hotel/rooms", json!({ "number": "602", "type": "doble", "capacity": "dos" }))
        .await;
    assert_eq!(bad_type.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_type.body["code"], "BAD_REQUEST");

    let numeric_date = app
        .post(
            "/hotel/reservations",
            json!({ "roomId": room, "guestId": guest, "checkIn": 5, "checkOut": "2025-06-05", "personas": 1 }),
        )
        .await;
    assert_eq!(numeric_date.status, StatusCode::BAD_REQUEST);
    assert_eq!(numeric_date.body["code"], "VALIDATION_ERROR");
    assert_eq!(numeric_date.body["message"], "Fechas inválidas");

    let bad_origin = app.get("/posts/1?origin=marte").await;
    assert_eq!(bad_origin.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_origin.body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_room_capacity_cannot_drop_below_active_reservations() {
    let app = create_test_app().await;
    let room = seed_room(&app, "701", 4).await;
    let guest = seed_guest(&app, "Raúl Soto", "H800").await;
    let uri = format!("/hotel/rooms/{}", room);

    let created = app
        .post("/hotel/reservations", reservation(room, guest, "2025-10-01", "2025-10-03", json!(3)))
        .await;
    let reservation_id = created.body["id"].as_i64().unwrap();

    let shrunk = app.put(&uri, json!({ "capacity": 2 })).await;
    assert_eq!(shrunk.status, StatusCode::BAD_REQUEST);
    assert_eq!(shrunk.body["code"], "CONFLICT");
    assert_eq!(
        shrunk.body["message"],
        "La habitación tiene reservas activas con más personas que la nueva capacidad"
    );

    let fits = app.put(&uri, json!({ "capacity": 3 })).await;
    assert_eq!(fits.status, StatusCode::OK);
    assert_eq!(fits.body["capacity"], 3);

    // Una reserva cancelada ya no limita la capacidad
    app.put(
        &format!("/hotel/reservations/{}", reservation_id),
        json!({ "status": "cancelada" }),
    )
    .await;
    let shrunk = app.put(&uri, json!({ "capacity": 1 })).await;
    assert_eq!(shrunk.status, StatusCode::OK);
    assert_eq!(shrunk.body["capacity"], 1);
}

#[tokio::test]
async fn test_register_login_and_me() {
    let app = create_test_app().await;

    let registered = app
        .post(
            "/auth/register",
            json!({ "username": "recepcion", "email": "recepcion@hotel.test", "password": "clave123" }),
        )
        .await;
    assert_eq!(registered.status, StatusCode::CREATED, "{}", registered.body);
    assert!(registered.body.get("password_hash").is_none());

    let again = app
        .post(
            "/auth/register",
            json!({ "username": "recepcion", "email": "otro@hotel.test", "password": "clave123" }),
        )
        .await;
    assert_eq!(again.status, StatusCode::BAD_REQUEST);
    assert_eq!(again.body["message"], "Usuario ya existe");

    let wrong = app
        .post("/auth/login", json!({ "username": "recepcion", "password": "otra" }))
        .await;
    assert_eq!(wrong.status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong.body["message"], "Usuario o contraseña incorrectos");

    let login = app
        .post("/auth/login", json!({ "username": "recepcion", "password": "clave123" }))
        .await;
    assert_eq!(login.status, StatusCode::OK);
    let token = login.body["token"].as_str().unwrap().to_string();

    let me = app.request(Method::GET, "/auth/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["username"], "recepcion");

    let anonymous = app.get("/auth/me").await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_local_posts_lifecycle() {
    let app = create_test_app().await;
    let user = app
        .post(
            "/auth/register",
            json!({ "username": "autora", "email": "autora@hotel.test", "password": "clave123" }),
        )
        .await;
    let user_id = user.body["id"].as_i64().unwrap();

    let orphan = app
        .post("/posts", json!({ "title": "Sin autor", "body": "...", "userId": 999 }))
        .await;
    assert_eq!(orphan.status, StatusCode::BAD_REQUEST);
    assert_eq!(orphan.body["message"], "Error al crear post");

    let created = app
        .post("/posts", json!({ "title": "Ofertas de verano", "body": "Descuentos", "userId": user_id }))
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["origin"], "local");
    assert_eq!(created.body["author"]["username"], "autora");
    let id = created.body["id"].as_i64().unwrap();

    let patched = app
        .patch(&format!("/posts/{}?origin=local", id), json!({ "title": "Ofertas de otoño" }))
        .await;
    assert_eq!(patched.body["title"], "Ofertas de otoño");

    let listed = app.get("/posts").await;
    assert_eq!(listed.body.as_array().unwrap().len(), 1);

    let deleted = app.delete(&format!("/posts/{}", id)).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let missing = app.get(&format!("/posts/{}", id)).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["message"], "Post no encontrado");
}

#[tokio::test]
async fn test_feed_and_search_merge_origins() {
    let api = spawn_posts_api().await;
    let app = create_test_app_with_posts_api(&api).await;
    let user = app
        .post(
            "/auth/register",
            json!({ "username": "blog", "email": "blog@hotel.test", "password": "clave123" }),
        )
        .await;
    let user_id = user.body["id"].as_i64().unwrap();
    app.post("/posts", json!({ "title": "Sunt local", "body": "...", "userId": user_id }))
        .await;

    let feed = app.get("/posts/feed?limit=2").await;
    assert_eq!(feed.status, StatusCode::OK, "{}", feed.body);
    let origins: Vec<&str> = feed
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["origin"].as_str().unwrap())
        .collect();
    assert_eq!(origins, vec!["local", "external", "external"]);

    let search = app.get("/posts/search?q=sunt").await;
    let titles: Vec<&str> = search
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Sunt local", "sunt aut facere"]);

    let empty = app.get("/posts/search?q=").await;
    assert_eq!(empty.body, json!([]));

    let external = app.get("/posts/external/1").await;
    assert_eq!(external.body["origin"], "external");
    let missing = app.get("/posts/external/7").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let patched = app
        .patch("/posts/1?origin=external", json!({ "title": "nuevo" }))
        .await;
    assert_eq!(patched.body["title"], "nuevo");
    assert_eq!(patched.body["origin"], "external");

    let deleted = app.delete("/posts/1?origin=external").await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_put_takes_origin_from_query_or_body() {
    let api = spawn_posts_api().await;
    let app = create_test_app_with_posts_api(&api).await;
    let user = app
        .post(
            "/auth/register",
            json!({ "username": "editor", "email": "editor@hotel.test", "password": "clave123" }),
        )
        .await;
    let user_id = user.body["id"].as_i64().unwrap();
    let local = app
        .post("/posts", json!({ "title": "Local", "body": "...", "userId": user_id }))
        .await;
    let id = local.body["id"].as_i64().unwrap();

    let external = app
        .put(
            &format!("/posts/{}", id),
            json!({ "title": "Remoto", "body": "nuevo", "userId": 1, "origin": "external" }),
        )
        .await;
    assert_eq!(external.status, StatusCode::OK, "{}", external.body);
    assert_eq!(external.body["origin"], "external");
    assert_eq!(external.body["title"], "Remoto");

    let query_wins = app
        .put(
            &format!("/posts/{}?origin=local", id),
            json!({ "title": "Local editado", "body": "...", "userId": user_id, "origin": "external" }),
        )
        .await;
    assert_eq!(query_wins.status, StatusCode::OK, "{}", query_wins.body);
    assert_eq!(query_wins.body["origin"], "local");
    assert_eq!(query_wins.body["title"], "Local editado");

    let stored = app.get(&format!("/posts/{}", id)).await;
    assert_eq!(stored.body["title"], "Local editado");
}

#[tokio::test]
async fn test_concurrent_creates_never_overlap() {
    let app = create_test_app().await;
    let room = seed_room(&app, "401", 2).await;
    let guest = seed_guest(&app, "Concurrente", "F600").await;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let router = app.router.clone();
        let body = reservation(room, guest, "2025-09-01", "2025-09-03", json!(1));
        handles.push(tokio::spawn(async move {
            let request = Request::builder()
                .method(Method::POST)
                .uri("/hotel/reservations")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap();
            router.oneshot(request).await.unwrap().status()
        }));
    }

    let mut created = 0;
    for handle in handles {
        if handle.await.unwrap() == StatusCode::CREATED {
            created += 1;
        }
    }
    assert_eq!(created, 1);
}
