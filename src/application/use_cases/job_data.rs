// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use crate::domain::models::job_stats::{CitySkillBreakdown, SkillSalaryStat};
use crate::domain::models::vacancy::VacancyRecord;
use crate::domain::repositories::vacancy_repository::LoadError;
use crate::infrastructure::cache::view_cache::ViewCache;

/// 职位数据查询用例
///
/// 三个只读查询，首次调用时触发缓存填充。数据源不可用时返回加载错误，
/// 不会返回部分或过期的数据。
pub struct JobDataUseCase {
    cache: Arc<ViewCache>,
}

impl JobDataUseCase {
    pub fn new(cache: Arc<ViewCache>) -> Self {
        Self { cache }
    }

    /// 全部职位记录（未聚合）
    pub async fn get_all_records(&self) -> Result<Vec<VacancyRecord>, LoadError> {
        Ok(self.cache.get().await?.all_vacancies.clone())
    }

    /// 技能平均薪资排行
    pub async fn get_skill_salary_correlation(&self) -> Result<Vec<SkillSalaryStat>, LoadError> {
        Ok(self.cache.get().await?.skill_salary_correlation.clone())
    }

    /// 热门城市的技能分布
    pub async fn get_skills_by_city(&self) -> Result<Vec<CitySkillBreakdown>, LoadError> {
        Ok(self.cache.get().await?.skills_by_city.clone())
    }

    /// 底层缓存
    pub fn cache(&self) -> &Arc<ViewCache> {
        &self.cache
    }
}
