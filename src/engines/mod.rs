// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 职位 API 客户端模块
///
/// - traits：客户端特质、错误类型与响应模型
/// - hh_client：基于 reqwest 的 hh.ru 客户端
pub mod hh_client;
pub mod traits;
