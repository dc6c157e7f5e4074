// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

// 配置设置测试：默认值、TOML 覆盖、环境变量覆盖以及派生参数

use jobpulse::config::settings::Settings;
use std::sync::Mutex;
use std::time::Duration;

/// 串行化修改进程环境变量的测试
static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_defaults_without_sources() {
    let settings = Settings::from_toml_str("").unwrap();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 5001);
    assert_eq!(
        settings.data.csv_path,
        "hh_vacancies_data_python_developer_113.csv"
    );
    assert_eq!(settings.static_files.index_file, "static/index.html");

    assert_eq!(settings.aggregation.min_salary_data_points, 3);
    assert_eq!(settings.aggregation.top_n_skills_for_salary_chart, 15);
    assert_eq!(settings.aggregation.top_n_cities_for_skill_breakdown, 5);
    assert_eq!(settings.aggregation.top_n_skills_per_city, 7);

    assert_eq!(settings.scraper.base_url, "https://api.hh.ru");
    assert_eq!(settings.scraper.target_count, 1000);
    assert_eq!(settings.scraper.per_page, 100);
    assert!(settings.scraper.output_path.is_none());
}

#[test]
fn test_toml_overrides_merge_with_defaults() {
    let settings = Settings::from_toml_str(
        r#"
        [server]
        port = 8080

        [aggregation]
        min_salary_data_points = 1
        top_n_skills_per_city = 3

        [scraper]
        search_text = "rust developer"
        area_id = "1"
        output_path = "data/rust.csv"
        "#,
    )
    .unwrap();

    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.aggregation.min_salary_data_points, 1);
    assert_eq!(settings.aggregation.top_n_skills_per_city, 3);
    assert_eq!(settings.aggregation.top_n_skills_for_salary_chart, 15);
    assert_eq!(settings.scraper.output_path(), "data/rust.csv");
}

#[test]
fn test_default_output_path_follows_search_parameters() {
    let settings = Settings::from_toml_str(
        r#"
        [scraper]
        search_text = "data engineer"
        area_id = "2"
        "#,
    )
    .unwrap();

    assert_eq!(
        settings.scraper.output_path(),
        "hh_vacancies_data_data_engineer_2.csv"
    );
}

#[test]
fn test_scrape_options_convert_delays() {
    let settings = Settings::from_toml_str(
        r#"
        [scraper]
        target_count = 50
        per_page = 20
        search_delay_ms = 0
        detail_delay_ms = 150
        request_timeout_secs = 5
        "#,
    )
    .unwrap();

    let options = settings.scraper.scrape_options();
    assert_eq!(options.target_count, 50);
    assert_eq!(options.per_page, 20);
    assert_eq!(options.search_delay, Duration::ZERO);
    assert_eq!(options.detail_delay, Duration::from_millis(150));
    assert_eq!(options.max_pages(), 3);
    assert_eq!(settings.scraper.request_timeout(), Duration::from_secs(5));

    let query = settings.scraper.search_query();
    assert_eq!(query.text, "python developer");
    assert_eq!(query.area, "113");
    assert_eq!(query.per_page, 20);
}

#[test]
fn test_invalid_value_type_is_rejected() {
    let result = Settings::from_toml_str(
        r#"
        [server]
        port = "not a number"
        "#,
    );

    assert!(result.is_err());
}

#[test]
fn test_environment_variables_override_file_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    std::env::set_var("APP_ENVIRONMENT", "no_such_environment");
    std::env::set_var("JOBPULSE__SERVER__PORT", "8088");
    std::env::set_var("JOBPULSE__AGGREGATION__TOP_N_SKILLS_PER_CITY", "4");

    let result = Settings::new();

    std::env::remove_var("APP_ENVIRONMENT");
    std::env::remove_var("JOBPULSE__SERVER__PORT");
    std::env::remove_var("JOBPULSE__AGGREGATION__TOP_N_SKILLS_PER_CITY");

    let settings = result.unwrap();
    assert_eq!(settings.server.port, 8088);
    assert_eq!(settings.aggregation.top_n_skills_per_city, 4);
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.aggregation.min_salary_data_points, 3);
}

#[test]
fn test_new_without_overrides_uses_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let settings = Settings::new().unwrap();
    assert_eq!(settings.server.port, 5001);
    assert_eq!(settings.aggregation.top_n_skills_per_city, 7);
    assert_eq!(settings.static_files.index_file, "static/index.html");
}
