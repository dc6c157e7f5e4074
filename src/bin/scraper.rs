// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use jobpulse::application::use_cases::scrape_vacancies::ScrapeVacanciesUseCase;
use jobpulse::config::settings::Settings;
use jobpulse::engines::hh_client::HhApiClient;
use jobpulse::infrastructure::storage::CsvVacancyWriter;
use jobpulse::utils::telemetry;
use std::sync::Arc;
use tracing::{info, warn};

/// 抓取入口
///
/// 从 hh.ru 拉取职位并写入 CSV 文件
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry();

    let settings = Settings::new()?;
    let scraper = &settings.scraper;
    info!(
        "Starting scrape of {} vacancies for '{}' in area {}",
        scraper.target_count, scraper.search_text, scraper.area_id
    );

    let api = HhApiClient::new(
        &scraper.base_url,
        scraper.search_query(),
        &scraper.user_agent,
        scraper.request_timeout(),
    )?;
    let use_case = ScrapeVacanciesUseCase::new(Arc::new(api), scraper.scrape_options());

    let records = use_case.execute().await;
    if records.is_empty() {
        warn!("No data was collected to save.");
        return Ok(());
    }

    let writer = CsvVacancyWriter::new(scraper.output_path());
    info!("Saving data to {}...", writer.path().display());
    writer.save(records).await?;

    info!("Scrape finished");
    Ok(())
}
