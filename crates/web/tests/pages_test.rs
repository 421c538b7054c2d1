//! Integration tests for the HTML pages.

mod support;

use axum::http::{Method, StatusCode};

use support::{form_request, get, json_request, send, test_app, user_json};

const VALID_FORM: &str = "code=U1&fullName=Nguyen+Van+A&dateOfBirth=1990-05-17\
&email=a%40x.com&phoneNumber=0912+345+678&address=12+Ly+Thai+To";

#[tokio::test]
async fn test_root_redirects_to_user_list() {
    let app = test_app().await;

    let res = send(&app, get("/")).await;

    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location(), Some("/users"));
}

#[tokio::test]
async fn test_list_page_shows_users() {
    let app = test_app().await;
    send(&app, json_request(Method::POST, "/api/users", &user_json("U1", "a@x.com"))).await;

    let res = send(&app, get("/users")).await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("<td>U1</td>"));
    assert!(res.body.contains("<td>a@x.com</td>"));
}

#[tokio::test]
async fn test_create_form_is_empty() {
    let app = test_app().await;

    let res = send(&app, get("/users/create")).await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains(r#"action="/users/create""#));
    assert!(res.body.contains(r#"name="code" type="text" value="">"#));
}

#[tokio::test]
async fn test_create_submission_redirects_to_list() {
    let app = test_app().await;

    let res = send(&app, form_request("/users/create", VALID_FORM)).await;

    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location(), Some("/users"));

    let stored = send(&app, get("/api/users/U1")).await.json();
    assert_eq!(stored["phoneNumber"], "0912 345 678");
}

#[tokio::test]
async fn test_invalid_submission_rerenders_form_with_messages() {
    let app = test_app().await;

    let res = send(
        &app,
        form_request("/users/create", "code=U1&fullName=&email=bad&dateOfBirth=1990-05-17"),
    )
    .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body.contains("One or more validation errors occurred"));
    assert!(res.body.contains("Email is not a valid email address"));
    assert!(res.body.contains("Full name is required"));
    // Entered values survive
    assert!(res.body.contains(r#"value="bad""#));

    let list = send(&app, get("/api/users")).await.json();
    assert_eq!(list, serde_json::json!([]));
}

#[tokio::test]
async fn test_duplicate_submission_rerenders_form() {
    let app = test_app().await;
    send(&app, form_request("/users/create", VALID_FORM)).await;

    let res = send(&app, form_request("/users/create", VALID_FORM)).await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body.contains("User with this Code already exists"));
}

#[tokio::test]
async fn test_edit_form_is_prefilled() {
    let app = test_app().await;
    send(&app, form_request("/users/create", VALID_FORM)).await;

    let res = send(&app, get("/users/edit/U1")).await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains(r#"value="U1" readonly>"#));
    assert!(res.body.contains(r#"value="1990-05-17""#));
    assert!(res.body.contains(r#"value="Nguyen Van A""#));
}

#[tokio::test]
async fn test_edit_form_for_unknown_user_is_not_found() {
    let app = test_app().await;

    let res = send(&app, get("/users/edit/ghost")).await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert!(res.body.contains("User with code ghost not found"));
}

#[tokio::test]
async fn test_edit_submission_uses_path_code() {
    let app = test_app().await;
    send(&app, form_request("/users/create", VALID_FORM)).await;

    let body = VALID_FORM
        .replace("code=U1", "code=OTHER")
        .replace("Nguyen+Van+A", "Tran+Thi+B");
    let res = send(&app, form_request("/users/edit/U1", &body)).await;

    assert_eq!(res.status, StatusCode::SEE_OTHER);
    let stored = send(&app, get("/api/users/U1")).await.json();
    assert_eq!(stored["fullName"], "Tran Thi B");
    let other = send(&app, get("/api/users/OTHER")).await;
    assert_eq!(other.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_edit_submission_for_vanished_user_is_not_found() {
    let app = test_app().await;

    let res = send(&app, form_request("/users/edit/U1", VALID_FORM)).await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_redirects_and_removes_user() {
    let app = test_app().await;
    send(&app, form_request("/users/create", VALID_FORM)).await;

    let res = send(&app, form_request("/users/delete/U1", "")).await;

    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location(), Some("/users"));
    let list = send(&app, get("/users")).await;
    assert!(list.body.contains("No users yet."));
}

#[tokio::test]
async fn test_delete_unknown_user_is_not_found_page() {
    let app = test_app().await;

    let res = send(&app, form_request("/users/delete/ghost", "")).await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert!(res.body.contains("Not Found"));
}
