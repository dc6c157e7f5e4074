// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::services::normalizer::{non_blank, parse_gross, parse_salary};

/// CSV 文件的列顺序
pub const VACANCY_FIELDS: [&str; 8] = [
    "vacancy_id",
    "vacancy_name",
    "salary_from",
    "salary_to",
    "salary_currency",
    "salary_gross",
    "address_raw",
    "key_skills",
];

/// 职位记录
///
/// 加载后不可变。`address_raw` 与 `key_skills` 保留原始文本，
/// 城市和技能列表在聚合时由规范化函数派生。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VacancyRecord {
    /// 职位ID
    pub vacancy_id: String,
    /// 职位名称
    pub vacancy_name: String,
    /// 薪资下限
    pub salary_from: Option<f64>,
    /// 薪资上限
    pub salary_to: Option<f64>,
    /// 币种
    pub salary_currency: Option<String>,
    /// 是否税前
    pub salary_gross: Option<bool>,
    /// 原始地址文本
    pub address_raw: Option<String>,
    /// 逗号分隔的技能列表
    pub key_skills: Option<String>,
}

/// 未经处理的 CSV 行
///
/// 所有字段都按文本读取，缺失的列视为空。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVacancyRow {
    #[serde(default)]
    pub vacancy_id: Option<String>,
    #[serde(default)]
    pub vacancy_name: Option<String>,
    #[serde(default)]
    pub salary_from: Option<String>,
    #[serde(default)]
    pub salary_to: Option<String>,
    #[serde(default)]
    pub salary_currency: Option<String>,
    #[serde(default)]
    pub salary_gross: Option<String>,
    #[serde(default)]
    pub address_raw: Option<String>,
    #[serde(default)]
    pub key_skills: Option<String>,
}

impl From<RawVacancyRow> for VacancyRecord {
    fn from(row: RawVacancyRow) -> Self {
        Self {
            vacancy_id: row.vacancy_id.unwrap_or_default(),
            vacancy_name: row.vacancy_name.unwrap_or_default(),
            salary_from: parse_salary(row.salary_from.as_deref()),
            salary_to: parse_salary(row.salary_to.as_deref()),
            salary_currency: non_blank(row.salary_currency),
            salary_gross: parse_gross(row.salary_gross.as_deref()),
            address_raw: non_blank(row.address_raw),
            key_skills: non_blank(row.key_skills),
        }
    }
}
