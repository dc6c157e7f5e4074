// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::domain::models::job_stats::ProcessedViews;
use crate::domain::repositories::vacancy_repository::{LoadError, VacancySource};
use crate::domain::services::aggregation_service::{self, AggregationConfig};

#[derive(Default)]
struct CacheState {
    views: Option<Arc<ProcessedViews>>,
    last_error: Option<LoadError>,
    loaded_at: Option<DateTime<Utc>>,
}

/// 视图缓存
///
/// 首次访问时加载数据源并执行聚合，成功结果在进程生命周期内不再刷新；
/// 加载失败只记录失败状态，下一次访问会重新尝试。
/// 填充过程由一把异步互斥锁串行化，并发调用者等待同一次加载的结果。
pub struct ViewCache {
    source: Arc<dyn VacancySource>,
    config: AggregationConfig,
    state: Mutex<CacheState>,
}

impl ViewCache {
    /// 创建新的视图缓存
    ///
    /// # 参数
    ///
    /// * `source` - 职位数据源
    /// * `config` - 聚合阈值
    pub fn new(source: Arc<dyn VacancySource>, config: AggregationConfig) -> Self {
        Self {
            source,
            config,
            state: Mutex::new(CacheState::default()),
        }
    }

    /// 获取处理后的视图，必要时触发加载
    pub async fn get(&self) -> Result<Arc<ProcessedViews>, LoadError> {
        let mut state = self.state.lock().await;
        if let Some(views) = &state.views {
            return Ok(views.clone());
        }

        info!("Loading and processing vacancy data...");
        match self.source.load().await {
            Ok(records) => {
                let views = Arc::new(aggregation_service::process(records, &self.config));
                info!(
                    vacancies = views.all_vacancies.len(),
                    skills = views.skill_salary_correlation.len(),
                    cities = views.skills_by_city.len(),
                    "Vacancy data processed"
                );
                state.views = Some(views.clone());
                state.last_error = None;
                state.loaded_at = Some(Utc::now());
                Ok(views)
            }
            Err(e) => {
                error!("Failed to load/process data: {}", e);
                state.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// 确保缓存已填充
    ///
    /// 已填充时不做任何事
    pub async fn load(&self) -> Result<(), LoadError> {
        self.get().await.map(|_| ())
    }

    /// 缓存是否已成功填充
    pub async fn is_populated(&self) -> bool {
        self.state.lock().await.views.is_some()
    }

    /// 最近一次失败的加载错误
    pub async fn last_error(&self) -> Option<LoadError> {
        self.state.lock().await.last_error.clone()
    }

    /// 成功加载的时间
    pub async fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.state.lock().await.loaded_at
    }
}
