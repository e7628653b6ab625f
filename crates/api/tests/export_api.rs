//! HTTP-level tests for the CSV export endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, get, post_json};
use sqlx::PgPool;

async fn create_project(pool: &PgPool) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({"name": "Export target", "estimation_days": 10}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn create_task(
    pool: &PgPool,
    project_id: i64,
    description: &str,
    assignee_id: Option<i64>,
) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/projects/{project_id}/tasks"),
        serde_json::json!({
            "due_date": "2023-05-10",
            "description": description,
            "assignee_id": assignee_id,
            "priority": "high",
            "hours_estimated": 16.0,
            "hours_done": 18.0,
            "state": "done",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_task_export_is_csv_with_header_and_rows(pool: PgPool) {
    let project_id = create_project(&pool).await;

    // First seeded user as assignee, second task unassigned.
    let app = common::build_test_app(pool.clone());
    let users = body_json(get(app, "/api/v1/users").await).await;
    let user_id = users[0]["id"].as_i64().unwrap();
    let user_name = users[0]["name"].as_str().unwrap().to_string();

    create_task(&pool, project_id, "Design mockups", Some(user_id)).await;
    create_task(&pool, project_id, "Front-end build", None).await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/projects/{project_id}/export?view=tasks"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/csv"));
    assert!(response
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("attachment"));

    let csv = body_text(response).await;
    let lines: Vec<&str> = csv.lines().collect();
    // Header plus one row per task.
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "Date,Task,Responsible,Priority,Estimated hours,Actual hours,Status"
    );
    // Dates render day/month/year; the resolved user name appears quoted.
    assert!(lines[1].starts_with("\"10/05/2023\",\"Design mockups\""));
    assert!(lines[1].contains(&format!("\"{user_name}\"")));
    // Unassigned responsible is an empty quoted field.
    assert!(lines[2].contains("\"Front-end build\",\"\""));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bug_note_export_resolves_linked_task(pool: PgPool) {
    let project_id = create_project(&pool).await;
    let task_id = create_task(&pool, project_id, "Design mockups", None).await;

    for (kind, content, link) in [
        ("bug", "Rendering glitch", Some(task_id)),
        ("note", "Client feedback pending", None),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            &format!("/api/v1/projects/{project_id}/bug-notes"),
            serde_json::json!({
                "date": "2023-05-12",
                "kind": kind,
                "content": content,
                "task_id": link,
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/projects/{project_id}/export?view=bugs"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let csv = body_text(response).await;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Date,Kind,Content,Linked task");
    assert_eq!(
        lines[1],
        "\"12/05/2023\",\"bug\",\"Rendering glitch\",\"Design mockups\""
    );
    // Unlinked record leaves the column empty.
    assert_eq!(
        lines[2],
        "\"12/05/2023\",\"note\",\"Client feedback pending\",\"\""
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_export_of_empty_project_is_header_only(pool: PgPool) {
    let project_id = create_project(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/projects/{project_id}/export?view=tasks"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let csv = body_text(response).await;
    assert_eq!(csv.lines().count(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_export_view_is_rejected(pool: PgPool) {
    let project_id = create_project(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/projects/{project_id}/export?view=everything"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_export_for_missing_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/projects/999999/export?view=tasks").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
