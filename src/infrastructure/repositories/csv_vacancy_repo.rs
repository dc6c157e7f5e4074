// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::domain::models::vacancy::{RawVacancyRow, VacancyRecord, VACANCY_FIELDS};
use crate::domain::repositories::vacancy_repository::{LoadError, VacancySource};

/// CSV 职位数据源实现
///
/// 按表头名称读取列，多余的列被忽略，缺失的列视为空值。
pub struct CsvVacancyRepository {
    path: PathBuf,
}

impl CsvVacancyRepository {
    /// 创建新的 CSV 数据源
    ///
    /// # 参数
    ///
    /// * `path` - CSV 文件路径
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 数据文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(path: &Path) -> Result<Vec<VacancyRecord>, LoadError> {
        let path_str = path.display().to_string();
        if !path.exists() {
            return Err(LoadError::NotFound { path: path_str });
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_path(path)
            .map_err(|e| csv_error(&path_str, e))?;

        let headers = reader
            .headers()
            .map_err(|e| csv_error(&path_str, e))?
            .clone();
        let missing: Vec<&str> = VACANCY_FIELDS
            .iter()
            .copied()
            .filter(|field| !headers.iter().any(|h| h == *field))
            .collect();
        if !missing.is_empty() {
            warn!(path = %path_str, ?missing, "CSV header is missing expected columns");
        }

        let mut records = Vec::new();
        for row in reader.deserialize::<RawVacancyRow>() {
            let row = row.map_err(|e| csv_error(&path_str, e))?;
            records.push(VacancyRecord::from(row));
        }

        info!("Successfully loaded {} rows from {}", records.len(), path_str);
        Ok(records)
    }
}

#[async_trait]
impl VacancySource for CsvVacancyRepository {
    async fn load(&self) -> Result<Vec<VacancyRecord>, LoadError> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || Self::read_all(&path))
            .await
            .map_err(|e| LoadError::Read {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?
    }
}

fn csv_error(path: &str, err: csv::Error) -> LoadError {
    if err.is_io_error() {
        LoadError::Read {
            path: path.to_string(),
            message: err.to_string(),
        }
    } else {
        LoadError::Parse {
            path: path.to_string(),
            message: err.to_string(),
        }
    }
}
