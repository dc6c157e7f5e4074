// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use jobpulse::domain::models::vacancy::{VacancyRecord, VACANCY_FIELDS};
use jobpulse::domain::repositories::vacancy_repository::VacancySource;
use jobpulse::infrastructure::repositories::csv_vacancy_repo::CsvVacancyRepository;
use jobpulse::infrastructure::storage::CsvVacancyWriter;

fn sample_records() -> Vec<VacancyRecord> {
    vec![
        VacancyRecord {
            vacancy_id: "100".to_string(),
            vacancy_name: "Python, Go developer".to_string(),
            salary_from: Some(120000.0),
            salary_to: Some(180000.0),
            salary_currency: Some("RUR".to_string()),
            salary_gross: Some(false),
            address_raw: Some("Москва, \"Сити\" башня".to_string()),
            key_skills: Some("Python, Go".to_string()),
        },
        VacancyRecord {
            vacancy_id: "101".to_string(),
            vacancy_name: "Remote".to_string(),
            ..VacancyRecord::default()
        },
    ]
}

#[tokio::test]
async fn writer_output_has_fixed_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("vacancies.csv");

    CsvVacancyWriter::new(&path)
        .save(sample_records())
        .await
        .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let header = content.lines().next().unwrap();
    assert_eq!(header, VACANCY_FIELDS.join(","));
}

#[tokio::test]
async fn writer_output_is_readable_by_repository() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vacancies.csv");
    let records = sample_records();

    CsvVacancyWriter::new(&path)
        .save(records.clone())
        .await
        .unwrap();
    let loaded = CsvVacancyRepository::new(&path).load().await.unwrap();

    assert_eq!(loaded, records);
}
