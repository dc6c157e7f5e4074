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
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::engines::traits::{EngineError, SearchPage, VacancyApi, VacancyDetails};

/// 错误信息中保留的响应体字符数
const BODY_PREVIEW_CHARS: usize = 200;

/// 搜索参数
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// 搜索关键词
    pub text: String,
    /// 地区ID（113 = 俄罗斯）
    pub area: String,
    /// 每页职位数
    pub per_page: u32,
}

/// hh.ru API 客户端
///
/// 基于reqwest实现，所有请求共享同一个连接池
pub struct HhApiClient {
    client: reqwest::Client,
    base_url: Url,
    query: SearchQuery,
}

impl HhApiClient {
    /// 创建新的客户端
    ///
    /// # 参数
    ///
    /// * `base_url` - API根地址，例如 `https://api.hh.ru`
    /// * `query` - 搜索参数
    /// * `user_agent` - 请求使用的 User-Agent
    /// * `timeout` - 单个请求的超时时间
    pub fn new(
        base_url: &str,
        query: SearchQuery,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, EngineError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url,
            query,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, EngineError> {
        Ok(self.base_url.join(path)?)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, EngineError> {
        let response = request.send().await?;
        let status = response.status();
        let url = response.url().to_string();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(EngineError::Status {
                status: status.as_u16(),
                url,
                body: preview(&body),
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| EngineError::Decode(format!("{}; response: {}", e, preview(&body))))
    }
}

#[async_trait]
impl VacancyApi for HhApiClient {
    async fn search_page(&self, page: u32) -> Result<SearchPage, EngineError> {
        let url = self.endpoint("vacancies")?;
        debug!("Requesting search page {} from {}", page, url);

        let request = self.client.get(url).query(&[
            ("text", self.query.text.clone()),
            ("area", self.query.area.clone()),
            ("per_page", self.query.per_page.to_string()),
            ("page", page.to_string()),
            ("only_with_salary", "false".to_string()),
            ("archived", "false".to_string()),
        ]);
        self.get_json(request).await
    }

    async fn vacancy_details(&self, id: &str) -> Result<VacancyDetails, EngineError> {
        let url = self.endpoint(&format!("vacancies/{}", id))?;
        self.get_json(self.client.get(url)).await
    }

    fn name(&self) -> &'static str {
        "hh.ru"
    }
}

fn preview(body: &str) -> String {
    let mut head: String = body.chars().take(BODY_PREVIEW_CHARS).collect();
    if body.chars().count() > BODY_PREVIEW_CHARS {
        head.push_str("...");
    }
    head
}

#[cfg(test)]
#[path = "hh_client_test.rs"]
mod tests;
