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

use axum::Extension;
use jobpulse::application::use_cases::job_data::JobDataUseCase;
use jobpulse::config::settings::Settings;
use jobpulse::infrastructure::cache::view_cache::ViewCache;
use jobpulse::infrastructure::repositories::csv_vacancy_repo::CsvVacancyRepository;
use jobpulse::presentation::routes;
use jobpulse::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// 主函数
///
/// 加载配置、构建视图缓存并启动 HTTP 服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting jobpulse...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Wire the data source and view cache
    let repository = CsvVacancyRepository::new(&settings.data.csv_path);
    if !repository.path().exists() {
        warn!(
            "CSV file '{}' not found. API endpoints will fail until it appears.",
            repository.path().display()
        );
    }
    let cache = Arc::new(ViewCache::new(
        Arc::new(repository),
        settings.aggregation.clone(),
    ));
    let use_case = Arc::new(JobDataUseCase::new(cache));

    // 4. Start HTTP server
    let app = routes::routes(&settings.static_files.index_file)
        .layer(Extension(use_case))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
