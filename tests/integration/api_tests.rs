// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, write_csv};
use axum::http::StatusCode;
use jobpulse::domain::models::job_stats::{CitySkillBreakdown, SkillSalaryStat};
use serde_json::Value;

const ROWS: [&str; 6] = [
    "1,Python Developer,100000,150000,RUR,True,\"Москва, улица Ленина 5\",\"Python, Django\"",
    "2,Backend Developer,200000,,RUR,False,\"Москва, Тверская 1\",\"Python, SQL\"",
    "3,Senior Python,300000,,RUR,,г. Самара,\"Python, Docker\"",
    "4,Data Engineer,,,,,,\"SQL, Airflow\"",
    "5,Intern,abc,,RUR,,,Python",
    "6,Team Lead,400000,,RUR,,\"Казань, Баумана 2\",",
];

#[tokio::test]
async fn health_check_works() {
    let app = create_test_app(None);

    let response = app.server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn version_endpoint_reports_crate_version() {
    let app = create_test_app(None);

    let response = app.server.get("/v1/version").await;
    response.assert_status_ok();
    assert_eq!(response.text(), env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn index_page_is_served() {
    let app = create_test_app(None);

    let response = app.server.get("/").await;
    response.assert_status_ok();
    assert!(response.text().contains("dashboard"));
}

#[tokio::test]
async fn all_endpoint_returns_records_verbatim() {
    let app = create_test_app(Some(&ROWS));

    let response = app.server.get("/api/jobdata/all").await;
    response.assert_status_ok();

    let records = response.json::<Vec<Value>>();
    assert_eq!(records.len(), 6);
    assert_eq!(records[0]["vacancy_id"], "1");
    assert_eq!(records[0]["salary_from"], 100000.0);
    assert_eq!(records[0]["salary_gross"], true);
    assert_eq!(records[0]["address_raw"], "Москва, улица Ленина 5");
    assert_eq!(records[0]["key_skills"], "Python, Django");
    assert_eq!(records[3]["salary_from"], Value::Null);
    assert_eq!(records[4]["salary_from"], Value::Null);
    assert_eq!(records[5]["key_skills"], Value::Null);
}

#[tokio::test]
async fn skill_salary_endpoint_applies_threshold() {
    let app = create_test_app(Some(&ROWS));

    let response = app.server.get("/api/jobdata/skill_salary").await;
    response.assert_status_ok();

    let stats = response.json::<Vec<SkillSalaryStat>>();
    assert_eq!(
        stats,
        vec![SkillSalaryStat {
            skill: "Python".to_string(),
            avg_salary: 200000,
            count: 3,
        }]
    );
}

#[tokio::test]
async fn skills_by_city_endpoint_excludes_unknown() {
    let app = create_test_app(Some(&ROWS));

    let response = app.server.get("/api/jobdata/skills_by_city").await;
    response.assert_status_ok();

    let cities = response.json::<Vec<CitySkillBreakdown>>();
    let names: Vec<&str> = cities.iter().map(|c| c.city.as_str()).collect();
    assert_eq!(names, vec!["Москва", "Самара", "Казань"]);

    assert_eq!(cities[0].vacancy_count, 2);
    assert_eq!(cities[0].skills[0].skill, "Python");
    assert_eq!(cities[0].skills[0].count, 2);
    assert_eq!(cities[2].vacancy_count, 1);
    assert!(cities[2].skills.is_empty());
}

#[tokio::test]
async fn missing_file_returns_same_error_on_every_endpoint() {
    let app = create_test_app(None);

    let mut bodies = Vec::new();
    for endpoint in [
        "/api/jobdata/all",
        "/api/jobdata/skill_salary",
        "/api/jobdata/skills_by_city",
    ] {
        let response = app.server.get(endpoint).expect_failure().await;
        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        bodies.push(response.json::<Value>());
    }

    assert!(bodies[0]["error"]
        .as_str()
        .unwrap()
        .starts_with("CSV file not found: "));
    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[1], bodies[2]);
}

#[tokio::test]
async fn data_is_loaded_after_file_appears() {
    let app = create_test_app(None);

    app.server
        .get("/api/jobdata/all")
        .expect_failure()
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let status = app.server.get("/api/jobdata/status").await.json::<Value>();
    assert_eq!(status["populated"], false);
    assert!(status["error"].is_string());

    write_csv(&app.csv_path, &ROWS);
    let response = app.server.get("/api/jobdata/all").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Vec<Value>>().len(), 6);

    let status = app.server.get("/api/jobdata/status").await.json::<Value>();
    assert_eq!(status["populated"], true);
    assert_eq!(status["error"], Value::Null);
    assert!(status["loaded_at"].is_string());
}

#[tokio::test]
async fn views_are_not_refreshed_after_success() {
    let app = create_test_app(Some(&ROWS));

    let first = app.server.get("/api/jobdata/skill_salary").await.text();

    write_csv(&app.csv_path, &["9,Other,999999,,RUR,,Омск,Python"]);
    let second = app.server.get("/api/jobdata/skill_salary").await.text();

    assert_eq!(first, second);
    assert_eq!(app.use_case.get_all_records().await.unwrap().len(), 6);
}
