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

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 非成功状态码
    #[error("HTTP {status} from {url}: {body}")]
    Status {
        status: u16,
        url: String,
        body: String,
    },
    /// 响应无法解析
    #[error("JSON decode error: {0}")]
    Decode(String),
    /// 无效的URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// 搜索结果页
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub items: Option<Vec<SearchItem>>,
    /// 总页数
    #[serde(default)]
    pub pages: Option<u32>,
    /// 匹配的职位总数
    #[serde(default)]
    pub found: Option<u64>,
}

impl SearchPage {
    /// 页面中的职位ID
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().flatten().map(|item| item.id.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.items.as_ref().map_or(true, Vec::is_empty)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    pub id: String,
}

/// 职位详情
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VacancyDetails {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub salary: Option<Salary>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub key_skills: Option<Vec<KeySkill>>,
}

/// 薪资信息
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Salary {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: Option<String>,
    pub gross: Option<bool>,
}

/// 地址信息
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Address {
    pub raw: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeySkill {
    #[serde(default)]
    pub name: Option<String>,
}

/// 职位 API 特质
#[async_trait]
pub trait VacancyApi: Send + Sync {
    /// 获取搜索结果的第 `page` 页（从 0 开始）
    async fn search_page(&self, page: u32) -> Result<SearchPage, EngineError>;

    /// 获取单个职位的详情
    async fn vacancy_details(&self, id: &str) -> Result<VacancyDetails, EngineError>;

    /// 客户端名称
    fn name(&self) -> &'static str;
}
