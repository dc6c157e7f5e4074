// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::time::Duration;

use crate::application::use_cases::scrape_vacancies::ScrapeOptions;
use crate::domain::services::aggregation_service::AggregationConfig;
use crate::engines::hh_client::SearchQuery;

/// 应用程序配置设置
///
/// 服务端与抓取端共用同一份配置
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 数据文件配置
    pub data: DataSettings,
    /// 聚合阈值配置
    pub aggregation: AggregationConfig,
    /// 静态页面配置
    pub static_files: StaticFileSettings,
    /// 抓取配置
    pub scraper: ScraperSettings,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 数据文件配置设置
#[derive(Debug, Deserialize)]
pub struct DataSettings {
    /// 服务端读取的 CSV 文件路径
    pub csv_path: String,
}

/// 静态页面配置设置
#[derive(Debug, Deserialize)]
pub struct StaticFileSettings {
    /// `/` 返回的页面
    pub index_file: String,
}

/// 抓取配置设置
#[derive(Debug, Deserialize)]
pub struct ScraperSettings {
    /// API根地址
    pub base_url: String,
    /// 搜索关键词
    pub search_text: String,
    /// 地区ID
    pub area_id: String,
    /// 目标职位数
    pub target_count: usize,
    /// 每页职位数
    pub per_page: u32,
    /// 单个请求超时时间（秒）
    pub request_timeout_secs: u64,
    /// 搜索翻页间隔（毫秒）
    pub search_delay_ms: u64,
    /// 详情请求间隔（毫秒）
    pub detail_delay_ms: u64,
    /// 请求使用的 User-Agent
    pub user_agent: String,
    /// 输出文件路径，未设置时按搜索参数生成
    pub output_path: Option<String>,
}

impl ScraperSettings {
    /// 输出文件路径
    pub fn output_path(&self) -> String {
        self.output_path.clone().unwrap_or_else(|| {
            format!(
                "hh_vacancies_data_{}_{}.csv",
                self.search_text.replace(' ', "_"),
                self.area_id
            )
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn search_query(&self) -> SearchQuery {
        SearchQuery {
            text: self.search_text.clone(),
            area: self.area_id.clone(),
            per_page: self.per_page,
        }
    }

    pub fn scrape_options(&self) -> ScrapeOptions {
        ScrapeOptions {
            target_count: self.target_count,
            per_page: self.per_page,
            search_delay: Duration::from_millis(self.search_delay_ms),
            detail_delay: Duration::from_millis(self.detail_delay_ms),
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加默认值、`config/default`、`config/{APP_ENVIRONMENT}`
    /// 以及 `JOBPULSE__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("JOBPULSE").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// 从 TOML 文本加载配置，未给出的项使用默认值
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let aggregation = AggregationConfig::default();
        Config::builder()
            // Server
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5001)?
            // Data
            .set_default("data.csv_path", "hh_vacancies_data_python_developer_113.csv")?
            .set_default("static_files.index_file", "static/index.html")?
            // Aggregation thresholds
            .set_default(
                "aggregation.min_salary_data_points",
                aggregation.min_salary_data_points as i64,
            )?
            .set_default(
                "aggregation.top_n_skills_for_salary_chart",
                aggregation.top_n_skills_for_salary_chart as i64,
            )?
            .set_default(
                "aggregation.top_n_cities_for_skill_breakdown",
                aggregation.top_n_cities_for_skill_breakdown as i64,
            )?
            .set_default(
                "aggregation.top_n_skills_per_city",
                aggregation.top_n_skills_per_city as i64,
            )?
            // Scraper
            .set_default("scraper.base_url", "https://api.hh.ru")?
            .set_default("scraper.search_text", "python developer")?
            .set_default("scraper.area_id", "113")?
            .set_default("scraper.target_count", 1000)?
            .set_default("scraper.per_page", 100)?
            .set_default("scraper.request_timeout_secs", 20)?
            .set_default("scraper.search_delay_ms", 500)?
            .set_default("scraper.detail_delay_ms", 300)?
            .set_default(
                "scraper.user_agent",
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/18.4 Safari/605.1.15",
            )
    }
}
