// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::models::vacancy::VacancyRecord;

/// 单个技能的薪资统计
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillSalaryStat {
    /// 技能名称
    pub skill: String,
    /// 平均薪资下限（四舍五入到整数）
    pub avg_salary: i64,
    /// 参与统计的职位数
    pub count: usize,
}

/// 技能出现次数
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillCount {
    pub skill: String,
    pub count: usize,
}

/// 城市技能分布
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CitySkillBreakdown {
    /// 城市名称
    pub city: String,
    /// 该城市的职位总数（包括没有技能的职位）
    pub vacancy_count: usize,
    /// 按出现次数降序排列的热门技能
    pub skills: Vec<SkillCount>,
}

/// 处理后的全部视图
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessedViews {
    pub all_vacancies: Vec<VacancyRecord>,
    pub skill_salary_correlation: Vec<SkillSalaryStat>,
    pub skills_by_city: Vec<CitySkillBreakdown>,
}
