use std::path::PathBuf;
use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::middleware::NormalizePath;
use actix_web::{App, test, web};
use sea_orm::{ConnectOptions, Database};
use serde_json::{Value, json};

use rust_campus_hub::object_store::{ObjectStore, local::LocalObjectStore};
use rust_campus_hub::routes;
use rust_campus_hub::storage::{Storage, sea_orm_storage::SeaOrmStorage};
use rust_campus_hub::utils::{generate_random_code, json_error_handler, path_error_handler};

// 1x1 透明 PNG
const PNG_DATA_URI: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

async fn memory_storage() -> Arc<dyn Storage> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt)
        .await
        .expect("failed to open in-memory sqlite");
    Arc::new(
        SeaOrmStorage::from_connection(db)
            .await
            .expect("failed to migrate"),
    )
}

// 测试结束时删除对象存储目录
struct TempObjectDir(PathBuf);

impl Drop for TempObjectDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

fn temp_object_store() -> (Arc<dyn ObjectStore>, TempObjectDir) {
    let dir = std::env::temp_dir().join(format!("campus-objects-{}", generate_random_code(10)));
    let store: Arc<dyn ObjectStore> =
        Arc::new(LocalObjectStore::new(dir.clone(), "http://objects.test"));
    (store, TempObjectDir(dir))
}

macro_rules! test_app {
    () => {{
        let storage = memory_storage().await;
        let (object_store, objects_dir) = temp_object_store();
        let app = test::init_service(
            App::new()
                .wrap(NormalizePath::trim())
                .app_data(web::PathConfig::default().error_handler(path_error_handler))
                .app_data(
                    web::JsonConfig::default()
                        // 不依赖 Content-Type，任何请求体都按 JSON 解析
                        .content_type_required(false)
                        .content_type(|_| true)
                        .error_handler(json_error_handler),
                )
                .app_data(web::Data::new(storage))
                .app_data(web::Data::new(object_store))
                .configure(routes::configure_routes),
        )
        .await;
        (app, objects_dir)
    }};
}

macro_rules! call {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let bytes = test::read_body(resp).await;
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }};
}

macro_rules! create_user {
    ($app:expr, $name:expr, $netid:expr) => {{
        let (status, body) = call!(
            $app,
            test::TestRequest::post()
                .uri("/api/users/")
                .set_json(json!({ "name": $name, "netid": $netid }))
        );
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_i64().unwrap()
    }};
}

macro_rules! create_good {
    ($app:expr, $seller:expr, $price:expr) => {{
        let (status, body) = call!(
            $app,
            test::TestRequest::post().uri("/api/goods/").set_json(json!({
                "good_name": "Calculus textbook",
                "image": PNG_DATA_URI,
                "price": $price,
                "seller_id": $seller,
            }))
        );
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body
    }};
}

#[actix_web::test]
async fn test_user_lifecycle_and_duplicate_netid() {
    let (app, _objects) = test_app!();

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/users/")
            .set_json(json!({ "name": "Alicia", "netid": "ab123" }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["netid"], "ab123");
    assert_eq!(body["rating"], json!(5.0));
    assert_eq!(body["transactions"], json!([]));
    let user_id = body["id"].as_i64().unwrap();

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/users/")
            .set_json(json!({ "name": "Impostor", "netid": "ab123" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "User already exists" }));

    let (status, body) = call!(
        app,
        test::TestRequest::get().uri(&format!("/api/users/{user_id}/"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alicia");
    assert!(body.get("transactions").is_none());

    let (status, body) = call!(
        app,
        test::TestRequest::patch()
            .uri(&format!("/api/users/{user_id}/"))
            .set_json(json!({ "name": "Alice" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alice");

    let (status, _) = call!(
        app,
        test::TestRequest::delete().uri(&format!("/api/users/{user_id}/"))
    );
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call!(
        app,
        test::TestRequest::get().uri(&format!("/api/users/{user_id}/"))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "User not found" }));
}

#[actix_web::test]
async fn test_user_missing_fields() {
    let (app, _objects) = test_app!();

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/users/")
            .set_json(json!({ "name": "No NetID" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Incomplete user information");
}

#[actix_web::test]
async fn test_course_membership_and_assignments() {
    let (app, _objects) = test_app!();
    let student = create_user!(app, "Student", "st001");
    let teacher = create_user!(app, "Teacher", "tc001");

    let (status, course) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/courses/")
            .set_json(json!({ "code": "CS 1998", "name": "Intro to Backend" }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(course["students"], json!([]));
    let course_id = course["id"].as_i64().unwrap();

    // 重复添加同一学生只保留一条
    for _ in 0..2 {
        let (status, _) = call!(
            app,
            test::TestRequest::post()
                .uri(&format!("/api/courses/{course_id}/add/"))
                .set_json(json!({ "user_id": student, "type": "student" }))
        );
        assert_eq!(status, StatusCode::OK);
    }
    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/courses/{course_id}/add/"))
            .set_json(json!({ "user_id": teacher, "type": "instructor" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["students"].as_array().unwrap().len(), 1);
    assert_eq!(body["instructors"][0]["netid"], "tc001");

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/courses/{course_id}/add/"))
            .set_json(json!({ "user_id": student, "type": "ta" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("'ta'"));

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/courses/{course_id}/add/"))
            .set_json(json!({ "user_id": 999, "type": "student" }))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");

    let (status, assignment) = call!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/courses/{course_id}/assignment/"))
            .set_json(json!({ "title": "PA1", "due_date": 1553354209 }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(assignment["due_date"], 1553354209);
    assert_eq!(assignment["course"]["id"], course_id);
    assert!(assignment["course"].get("assignments").is_none());

    let (status, body) = call!(
        app,
        test::TestRequest::get().uri(&format!("/api/users/{student}/"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["courses"][0]["code"], "CS 1998");

    let (status, body) = call!(app, test::TestRequest::get().uri("/api/courses/"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["courses"][0]["assignments"][0]["title"], "PA1");

    let (status, body) = call!(
        app,
        test::TestRequest::delete().uri(&format!("/api/courses/{course_id}/"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], "CS 1998");

    let (status, body) = call!(
        app,
        test::TestRequest::get().uri(&format!("/api/courses/{course_id}"))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Course not found");
}

#[actix_web::test]
async fn test_assignment_for_missing_course() {
    let (app, _objects) = test_app!();

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/courses/42/assignment/")
            .set_json(json!({ "title": "PA1", "due_date": 1 }))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Course not found");

    // 缺少字段时先返回 400，不查询课程
    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/courses/42/assignment/")
            .set_json(json!({ "title": "PA1" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Incomplete assignment information");
}

#[actix_web::test]
async fn test_good_lifecycle_keeps_integer_price() {
    let (app, _objects) = test_app!();
    let seller = create_user!(app, "Seller", "se001");

    let good = create_good!(app, seller, 500);
    let good_id = good["id"].as_i64().unwrap();
    assert_eq!(good["seller"]["id"], seller);
    let image_url = good["image_url"].as_str().unwrap();
    assert!(image_url.starts_with("http://objects.test/"));
    assert!(image_url.ends_with(".png"));

    let (status, body) = call!(
        app,
        test::TestRequest::get().uri(&format!("/api/goods/{good_id}/"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["price"].as_i64(), Some(500));
    assert!(body["price"].is_i64());

    let (status, body) = call!(
        app,
        test::TestRequest::get().uri(&format!("/api/users/{seller}/goods/"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["goods"].as_array().unwrap().len(), 1);
    assert!(body["goods"][0].get("seller").is_none());

    let (status, body) = call!(
        app,
        test::TestRequest::patch()
            .uri(&format!("/api/goods/{good_id}/"))
            .set_json(json!({ "price": 750 }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["price"], 750);
    assert_eq!(body["good_name"], "Calculus textbook");

    let (status, body) = call!(
        app,
        test::TestRequest::patch()
            .uri(&format!("/api/goods/{good_id}/"))
            .set_json(json!({}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Incomplete good information");

    let (status, body) = call!(app, test::TestRequest::get().uri("/api/goods/"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["goods"][0]["seller"]["netid"], "se001");

    let (status, _) = call!(
        app,
        test::TestRequest::delete().uri(&format!("/api/goods/{good_id}/"))
    );
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call!(app, test::TestRequest::get().uri("/api/goods/"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "goods": [] }));
}

#[actix_web::test]
async fn test_good_rejects_bad_input() {
    let (app, _objects) = test_app!();
    let seller = create_user!(app, "Seller", "se002");

    let (status, body) = call!(
        app,
        test::TestRequest::post().uri("/api/goods/").set_json(json!({
            "good_name": "Lamp",
            "image": "data:image/bmp;base64,Qk0=",
            "price": 100,
            "seller_id": seller,
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("is not valid"));

    let (status, body) = call!(
        app,
        test::TestRequest::post().uri("/api/goods/").set_json(json!({
            "good_name": "Lamp",
            "image": PNG_DATA_URI,
            "price": -1,
            "seller_id": seller,
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Price must not be negative");

    let (status, body) = call!(
        app,
        test::TestRequest::post().uri("/api/goods/").set_json(json!({
            "good_name": "Lamp",
            "image": PNG_DATA_URI,
            "price": 100,
            "seller_id": 999,
        }))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Seller not found");

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/goods/")
            .set_json(json!({ "good_name": "Lamp" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Incomplete good information");
}

#[actix_web::test]
async fn test_deleting_user_deletes_goods() {
    let (app, _objects) = test_app!();
    let seller = create_user!(app, "Seller", "se003");
    let good = create_good!(app, seller, 1200);
    let good_id = good["id"].as_i64().unwrap();

    let (status, body) = call!(
        app,
        test::TestRequest::delete().uri(&format!("/api/users/{seller}/"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["goods"][0]["id"], good_id);

    let (status, body) = call!(
        app,
        test::TestRequest::get().uri(&format!("/api/goods/{good_id}/"))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Good not found");
}

#[actix_web::test]
async fn test_transactions_drive_seller_rating() {
    let (app, _objects) = test_app!();
    let seller = create_user!(app, "Seller", "se004");
    let buyer = create_user!(app, "Buyer", "bu004");
    let good = create_good!(app, seller, 800);
    let good_id = good["id"].as_i64().unwrap();

    let (status, rated) = call!(
        app,
        test::TestRequest::post().uri("/api/transactions/").set_json(json!({
            "amount": 800,
            "good_id": good_id,
            "buyer_id": buyer,
            "seller_id": seller,
            "rating": 3,
        }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(rated["amount"], 800);
    assert_eq!(rated["buyer"]["netid"], "bu004");
    assert_eq!(rated["seller"]["netid"], "se004");
    assert_eq!(rated["good"]["id"], good_id);

    // 未评分的交易不影响评分
    let (status, unrated) = call!(
        app,
        test::TestRequest::post().uri("/api/transactions/").set_json(json!({
            "amount": 800,
            "good_id": good_id,
            "buyer_id": buyer,
            "seller_id": seller,
        }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert!(unrated["rating"].is_null());

    let (status, body) = call!(
        app,
        test::TestRequest::get().uri(&format!("/api/users/{seller}/rating/"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "rating": 4.0 }));

    let unrated_id = unrated["id"].as_i64().unwrap();
    let (status, body) = call!(
        app,
        test::TestRequest::patch()
            .uri(&format!("/api/transactions/{unrated_id}/"))
            .set_json(json!({ "rating": 7 }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Rating must be between 0 and 5");

    let (status, body) = call!(
        app,
        test::TestRequest::patch()
            .uri(&format!("/api/transactions/{unrated_id}/"))
            .set_json(json!({ "rating": 1 }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rating"], json!(1.0));

    // (5 + 3 + 1) / 3
    let (_, body) = call!(
        app,
        test::TestRequest::get().uri(&format!("/api/users/{seller}/"))
    );
    assert_eq!(body["rating"], json!(3.0));

    let (status, body) = call!(
        app,
        test::TestRequest::get().uri(&format!("/api/users/{buyer}/transactions/"))
    );
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body["transactions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![rated["id"].as_i64().unwrap(), unrated_id]);

    let (status, body) = call!(
        app,
        test::TestRequest::post().uri("/api/transactions/").set_json(json!({
            "amount": 800,
            "good_id": good_id,
            "buyer_id": 999,
            "seller_id": seller,
        }))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Buyer not found");

    let (status, body) = call!(
        app,
        test::TestRequest::patch()
            .uri("/api/transactions/999/")
            .set_json(json!({ "rating": 2 }))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Transaction not found");
}

#[actix_web::test]
async fn test_reset_empties_collections() {
    let (app, _objects) = test_app!();
    let seller = create_user!(app, "Seller", "se005");
    create_good!(app, seller, 300);
    let (status, _) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/courses/")
            .set_json(json!({ "code": "CS 2110", "name": "OOP" }))
    );
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call!(app, test::TestRequest::post().uri("/api/reset/"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Database reset successfully" }));

    let (_, body) = call!(app, test::TestRequest::get().uri("/api/courses/"));
    assert_eq!(body, json!({ "courses": [] }));
    let (_, body) = call!(app, test::TestRequest::get().uri("/api/goods/"));
    assert_eq!(body, json!({ "goods": [] }));

    // 重置后 netid 可以重新使用
    create_user!(app, "Seller", "se005");
}

#[actix_web::test]
async fn test_request_errors_use_error_envelope() {
    let (app, _objects) = test_app!();

    let (status, body) = call!(app, test::TestRequest::get().uri("/api/users/abc/"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid path parameter");

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/courses/")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = call!(app, test::TestRequest::get().uri("/api/courses"));
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_json_body_without_content_type() {
    let (app, _objects) = test_app!();

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/users/")
            .set_payload(r#"{"name":"A","netid":"ab1"}"#)
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["netid"], "ab1");

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/courses/")
            .insert_header(("content-type", "text/plain"))
            .set_payload(r#"{"code":"CS 1998","name":"Backend"}"#)
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["code"], "CS 1998");
}

#[::core::prelude::v1::test]
fn test_object_dir_removed_after_drop() {
    let (_store, objects) = temp_object_store();
    let dir = objects.0.clone();
    std::fs::create_dir_all(&dir).unwrap();
    assert!(dir.exists());
    drop(objects);
    assert!(!dir.exists());
}
