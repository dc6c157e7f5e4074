// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{Extension, Json};
use std::sync::Arc;

use crate::application::use_cases::job_data::JobDataUseCase;
use crate::domain::models::job_stats::{CitySkillBreakdown, SkillSalaryStat};
use crate::domain::models::vacancy::VacancyRecord;
use crate::presentation::errors::AppError;

/// 全部职位记录
pub async fn get_all_job_data(
    Extension(use_case): Extension<Arc<JobDataUseCase>>,
) -> Result<Json<Vec<VacancyRecord>>, AppError> {
    Ok(Json(use_case.get_all_records().await?))
}

/// 技能平均薪资排行
pub async fn get_skill_salary_data(
    Extension(use_case): Extension<Arc<JobDataUseCase>>,
) -> Result<Json<Vec<SkillSalaryStat>>, AppError> {
    Ok(Json(use_case.get_skill_salary_correlation().await?))
}

/// 热门城市的技能分布
pub async fn get_skills_by_city_data(
    Extension(use_case): Extension<Arc<JobDataUseCase>>,
) -> Result<Json<Vec<CitySkillBreakdown>>, AppError> {
    Ok(Json(use_case.get_skills_by_city().await?))
}

/// 缓存状态
pub async fn get_cache_status(
    Extension(use_case): Extension<Arc<JobDataUseCase>>,
) -> Json<serde_json::Value> {
    let cache = use_case.cache();
    Json(serde_json::json!({
        "populated": cache.is_populated().await,
        "loaded_at": cache.loaded_at().await,
        "error": cache.last_error().await.map(|e| e.to_string()),
    }))
}
