// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::domain::models::vacancy::VacancyRecord;

/// 存储错误类型
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// CSV 序列化错误
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// 其他错误
    #[error("Storage error: {0}")]
    Other(String),
}

/// CSV 职位写入器
///
/// 列顺序与 [`VACANCY_FIELDS`](crate::domain::models::vacancy::VACANCY_FIELDS) 一致，
/// 已存在的文件会被覆盖。
pub struct CsvVacancyWriter {
    path: PathBuf,
}

impl CsvVacancyWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 写入全部记录，返回写入的行数
    pub async fn save(&self, records: Vec<VacancyRecord>) -> Result<usize, StorageError> {
        let path = self.path.clone();
        let written = tokio::task::spawn_blocking(move || write_records(&path, &records))
            .await
            .map_err(|e| StorageError::Other(e.to_string()))??;

        info!("Successfully saved {} rows to {}", written, self.path.display());
        Ok(written)
    }
}

fn write_records(path: &Path, records: &[VacancyRecord]) -> Result<usize, StorageError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(records.len())
}
