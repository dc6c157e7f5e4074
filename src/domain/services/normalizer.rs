// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 记录字段规范化
//!
//! 把 CSV 单元格中的自由文本转换为类型化的值。所有函数都是全函数：
//! 无效输入退化为“无值”，从不返回错误。

/// 无法识别城市时使用的占位名
pub const UNKNOWN_CITY: &str = "Unknown";

/// 地址开头可能出现的行政前缀（小写比较）
const CITY_PREFIXES: [&str; 4] = ["г.", "город", "g.", "city"];

/// 解析薪资文本
///
/// 空白、非数字或非有限值都返回 `None`。
pub fn parse_salary(text: Option<&str>) -> Option<f64> {
    let trimmed = text?.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// 解析逗号分隔的技能列表
///
/// 保留原始顺序，去掉首尾空白和空项，不去重。
pub fn parse_skills(text: Option<&str>) -> Vec<String> {
    let Some(text) = text else {
        return Vec::new();
    };
    text.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

/// 从原始地址中提取城市
///
/// 取第一个逗号之前的部分，按空白切分后取第一个词；如果该词是
/// 行政前缀且后面还有词，则取第二个词。
pub fn extract_city(address: Option<&str>) -> String {
    let Some(address) = address.filter(|a| !a.trim().is_empty()) else {
        return UNKNOWN_CITY.to_string();
    };

    let segment = address.split(',').next().unwrap_or_default();
    let mut tokens = segment.split_whitespace();

    match tokens.next() {
        Some(first) if is_city_prefix(first) => tokens.next().unwrap_or(first).to_string(),
        Some(first) => first.to_string(),
        None => UNKNOWN_CITY.to_string(),
    }
}

/// 解析税前标记，接受 `true`/`false`（不区分大小写）以及 `1`/`0`
pub fn parse_gross(text: Option<&str>) -> Option<bool> {
    match text?.trim().to_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// 把空白字符串折叠为 `None`
pub fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}

fn is_city_prefix(token: &str) -> bool {
    let lowered = token.to_lowercase();
    CITY_PREFIXES.contains(&lowered.as_str())
}
