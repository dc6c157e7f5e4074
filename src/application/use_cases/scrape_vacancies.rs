// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::domain::models::vacancy::VacancyRecord;
use crate::engines::traits::{VacancyApi, VacancyDetails};

/// 抓取选项
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    /// 目标职位数
    pub target_count: usize,
    /// 每页职位数
    pub per_page: u32,
    /// 搜索翻页之间的间隔
    pub search_delay: Duration,
    /// 每次获取详情之后的间隔
    pub detail_delay: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            target_count: 1000,
            per_page: 100,
            search_delay: Duration::from_millis(500),
            detail_delay: Duration::from_millis(300),
        }
    }
}

impl ScrapeOptions {
    /// 达到目标数量所需的最大页数
    pub fn max_pages(&self) -> u32 {
        if self.per_page == 0 {
            return 0;
        }
        (self.target_count as u64).div_ceil(self.per_page as u64) as u32
    }
}

/// 职位抓取用例
///
/// 顺序翻页收集职位ID，再逐个获取详情。任何单个请求的失败都不会
/// 丢弃已经收集到的结果。
pub struct ScrapeVacanciesUseCase {
    api: Arc<dyn VacancyApi>,
    options: ScrapeOptions,
}

impl ScrapeVacanciesUseCase {
    pub fn new(api: Arc<dyn VacancyApi>, options: ScrapeOptions) -> Self {
        Self { api, options }
    }

    /// 收集职位ID
    ///
    /// 遇到空页、达到目标数量或请求失败时停止。
    pub async fn collect_vacancy_ids(&self) -> Vec<String> {
        let target = self.options.target_count;
        let max_pages = self.options.max_pages();
        let mut ids: Vec<String> = Vec::new();

        info!(
            "Fetching up to {} vacancy IDs from {}...",
            target,
            self.api.name()
        );

        for page in 0..max_pages {
            if ids.len() >= target {
                info!("Target of {} vacancy IDs reached. Stopping ID search.", target);
                break;
            }

            if page == 0 || (page + 1) % 2 == 0 {
                info!("Requesting search page {}/{}", page + 1, max_pages);
            }

            let search_page = match self.api.search_page(page).await {
                Ok(search_page) => search_page,
                Err(e) => {
                    error!("Error fetching search page {}: {}", page + 1, e);
                    break;
                }
            };

            if search_page.is_empty() {
                info!("No more items found in search results. Stopping ID search.");
                break;
            }

            for id in search_page.ids() {
                ids.push(id.to_string());
                if ids.len() >= target {
                    break;
                }
            }
            info!("Collected {}/{} vacancy IDs so far.", ids.len(), target);

            if page + 1 < max_pages && ids.len() < target {
                tokio::time::sleep(self.options.search_delay).await;
            }
        }

        ids.truncate(target);
        ids
    }

    /// 逐个获取职位详情
    ///
    /// 获取失败的职位被跳过，不会写入占位行。
    pub async fn fetch_records(&self, ids: &[String]) -> Vec<VacancyRecord> {
        let total = ids.len();
        let mut records = Vec::with_capacity(total);

        for (i, id) in ids.iter().enumerate() {
            if i == 0 || (i + 1) % 50 == 0 || i + 1 == total {
                info!("Processing vacancy ID {} ({}/{})...", id, i + 1, total);
            }

            match self.api.vacancy_details(id).await {
                Ok(details) => records.push(record_from_details(id, details)),
                Err(e) => warn!("Error fetching details for vacancy {}: {}", id, e),
            }

            tokio::time::sleep(self.options.detail_delay).await;
        }

        info!("Finished fetching details for {} vacancies.", records.len());
        records
    }

    /// 执行完整的抓取流程
    pub async fn execute(&self) -> Vec<VacancyRecord> {
        let ids = self.collect_vacancy_ids().await;
        if ids.is_empty() {
            warn!("No vacancy IDs found or an error occurred during ID fetching.");
            return Vec::new();
        }

        info!("Fetched {} vacancy IDs. Now fetching full details...", ids.len());
        self.fetch_records(&ids).await
    }
}

/// 把 API 详情映射为 CSV 行
pub fn record_from_details(id: &str, details: VacancyDetails) -> VacancyRecord {
    let salary = details.salary.unwrap_or_default();
    let key_skills = details
        .key_skills
        .unwrap_or_default()
        .into_iter()
        .filter_map(|skill| skill.name.filter(|name| !name.is_empty()))
        .collect::<Vec<_>>()
        .join(", ");

    VacancyRecord {
        vacancy_id: id.to_string(),
        vacancy_name: details.name.unwrap_or_default(),
        salary_from: salary.from,
        salary_to: salary.to,
        salary_currency: salary.currency,
        salary_gross: salary.gross,
        address_raw: details.address.and_then(|address| address.raw),
        key_skills: Some(key_skills).filter(|skills| !skills.is_empty()),
    }
}
