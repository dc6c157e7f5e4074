// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::vacancy::VacancyRecord;

/// 数据加载错误类型
///
/// 作为缓存的失败状态保存，因此需要 `Clone`。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// 文件不存在
    #[error("CSV file not found: {path}")]
    NotFound { path: String },
    /// 文件无法读取
    #[error("Error reading CSV: {message}")]
    Read { path: String, message: String },
    /// 文件内容格式错误
    #[error("Error parsing CSV {path}: {message}")]
    Parse { path: String, message: String },
}

/// 职位数据源特质
///
/// 一次性返回完整的记录集
#[async_trait]
pub trait VacancySource: Send + Sync {
    /// 加载全部职位记录
    async fn load(&self) -> Result<Vec<VacancyRecord>, LoadError>;
}
