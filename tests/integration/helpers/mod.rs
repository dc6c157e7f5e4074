// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Extension;
use axum_test::TestServer;
use jobpulse::application::use_cases::job_data::JobDataUseCase;
use jobpulse::domain::services::aggregation_service::AggregationConfig;
use jobpulse::infrastructure::cache::view_cache::ViewCache;
use jobpulse::infrastructure::repositories::csv_vacancy_repo::CsvVacancyRepository;
use jobpulse::presentation::routes;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub const CSV_HEADER: &str =
    "vacancy_id,vacancy_name,salary_from,salary_to,salary_currency,salary_gross,address_raw,key_skills";

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub use_case: Arc<JobDataUseCase>,
    pub csv_path: PathBuf,
    // Keep the directory alive
    pub dir: TempDir,
}

/// 创建测试应用
///
/// `csv_rows` 为 `None` 时不创建数据文件
pub fn create_test_app(csv_rows: Option<&[&str]>) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("vacancies.csv");
    if let Some(rows) = csv_rows {
        write_csv(&csv_path, rows);
    }

    let index_path = dir.path().join("index.html");
    std::fs::write(&index_path, "<html><body>dashboard</body></html>").unwrap();

    let source = Arc::new(CsvVacancyRepository::new(&csv_path));
    let cache = Arc::new(ViewCache::new(source, AggregationConfig::default()));
    let use_case = Arc::new(JobDataUseCase::new(cache));

    let app = routes::routes(&index_path).layer(Extension(use_case.clone()));
    let server = TestServer::new(app).unwrap();

    TestApp {
        server,
        use_case,
        csv_path,
        dir,
    }
}

pub fn write_csv(path: &std::path::Path, rows: &[&str]) {
    let mut content = String::from(CSV_HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    std::fs::write(path, content).unwrap();
}
