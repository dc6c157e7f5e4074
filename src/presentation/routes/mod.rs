// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::presentation::handlers::job_data_handler;
use axum::{
    routing::{get, get_service},
    Router,
};
use std::path::Path;
use tower_http::services::ServeFile;

/// 创建应用路由
///
/// # 参数
///
/// * `index_file` - `/` 返回的静态页面
///
/// # 返回值
///
/// 返回配置好的路由，处理器需要的 `JobDataUseCase` 由调用方通过 `Extension` 注入
pub fn routes(index_file: impl AsRef<Path>) -> Router {
    let public_routes = Router::new()
        .route("/", get_service(ServeFile::new(index_file)))
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let api_routes = Router::new()
        .route("/api/jobdata/all", get(job_data_handler::get_all_job_data))
        .route(
            "/api/jobdata/skill_salary",
            get(job_data_handler::get_skill_salary_data),
        )
        .route(
            "/api/jobdata/skills_by_city",
            get(job_data_handler::get_skills_by_city_data),
        )
        .route("/api/jobdata/status", get(job_data_handler::get_cache_status));

    Router::new().merge(public_routes).merge(api_routes)
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
