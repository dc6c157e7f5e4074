// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 职位数据聚合
//!
//! 对完整的记录集执行两轮互不依赖的聚合：
//! - A 轮：技能 → 平均薪资排行
//! - B 轮：城市 → 热门技能分布
//!
//! 所有排序都是稳定排序，计数相同时按首次出现的顺序排列。

use serde::Deserialize;
use std::collections::HashMap;

use crate::domain::models::job_stats::{
    CitySkillBreakdown, ProcessedViews, SkillCount, SkillSalaryStat,
};
use crate::domain::models::vacancy::VacancyRecord;
use crate::domain::services::normalizer::{extract_city, parse_skills, UNKNOWN_CITY};

/// 聚合阈值配置
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AggregationConfig {
    /// 计算平均薪资所需的最少数据点
    pub min_salary_data_points: usize,
    /// 薪资排行保留的技能数
    pub top_n_skills_for_salary_chart: usize,
    /// 技能分布保留的城市数
    pub top_n_cities_for_skill_breakdown: usize,
    /// 每个城市保留的技能数
    pub top_n_skills_per_city: usize,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            min_salary_data_points: 3,
            top_n_skills_for_salary_chart: 15,
            top_n_cities_for_skill_breakdown: 5,
            top_n_skills_per_city: 7,
        }
    }
}

/// 按首次插入顺序保存的键值累加器
struct OrderedAccumulator<V> {
    index: HashMap<String, usize>,
    entries: Vec<(String, V)>,
}

impl<V> Default for OrderedAccumulator<V> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<V: Default> OrderedAccumulator<V> {
    fn entry(&mut self, key: &str) -> &mut V {
        let position = match self.index.get(key).copied() {
            Some(position) => position,
            None => {
                self.entries.push((key.to_string(), V::default()));
                self.index.insert(key.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[position].1
    }

    fn into_entries(self) -> Vec<(String, V)> {
        self.entries
    }
}

#[derive(Default)]
struct CityTally {
    vacancy_count: usize,
    skills: OrderedAccumulator<usize>,
}

/// A 轮：技能与薪资的相关性
///
/// 只统计 `salary_from` 为正数的记录，数据点不足阈值的技能被丢弃，
/// 结果按平均薪资降序排列并截断。
pub fn skill_salary_correlation(
    records: &[VacancyRecord],
    config: &AggregationConfig,
) -> Vec<SkillSalaryStat> {
    let mut salaries: OrderedAccumulator<Vec<f64>> = OrderedAccumulator::default();

    for record in records {
        let Some(salary) = record.salary_from.filter(|s| *s > 0.0) else {
            continue;
        };
        for skill in parse_skills(record.key_skills.as_deref()) {
            salaries.entry(&skill).push(salary);
        }
    }

    let mut stats: Vec<SkillSalaryStat> = salaries
        .into_entries()
        .into_iter()
        .filter(|(_, values)| values.len() >= config.min_salary_data_points)
        .map(|(skill, values)| {
            let count = values.len();
            let mean = values.iter().sum::<f64>() / count as f64;
            SkillSalaryStat {
                skill,
                avg_salary: mean.round_ties_even() as i64,
                count,
            }
        })
        .collect();

    stats.sort_by(|a, b| b.avg_salary.cmp(&a.avg_salary));
    stats.truncate(config.top_n_skills_for_salary_chart);
    stats
}

/// B 轮：各城市的热门技能
///
/// `Unknown` 城市在截断前就被排除，因此最多返回
/// `top_n_cities_for_skill_breakdown` 个有名称的城市。
pub fn skills_by_city(
    records: &[VacancyRecord],
    config: &AggregationConfig,
) -> Vec<CitySkillBreakdown> {
    let mut cities: OrderedAccumulator<CityTally> = OrderedAccumulator::default();

    for record in records {
        let tally = cities.entry(&extract_city(record.address_raw.as_deref()));
        tally.vacancy_count += 1;
        for skill in parse_skills(record.key_skills.as_deref()) {
            *tally.skills.entry(&skill) += 1;
        }
    }

    let mut ranked = cities.into_entries();
    ranked.sort_by(|a, b| b.1.vacancy_count.cmp(&a.1.vacancy_count));

    ranked
        .into_iter()
        .filter(|(city, _)| city != UNKNOWN_CITY)
        .take(config.top_n_cities_for_skill_breakdown)
        .map(|(city, tally)| {
            let mut skills = tally.skills.into_entries();
            skills.sort_by(|a, b| b.1.cmp(&a.1));
            CitySkillBreakdown {
                city,
                vacancy_count: tally.vacancy_count,
                skills: skills
                    .into_iter()
                    .take(config.top_n_skills_per_city)
                    .map(|(skill, count)| SkillCount { skill, count })
                    .collect(),
            }
        })
        .collect()
}

/// 执行两轮聚合并与原始记录一起打包
pub fn process(records: Vec<VacancyRecord>, config: &AggregationConfig) -> ProcessedViews {
    let skill_salary_correlation = skill_salary_correlation(&records, config);
    let skills_by_city = skills_by_city(&records, config);

    ProcessedViews {
        all_vacancies: records,
        skill_salary_correlation,
        skills_by_city,
    }
}

#[cfg(test)]
#[path = "aggregation_service_test.rs"]
mod tests;
