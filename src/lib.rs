// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含查询用例与抓取用例
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含职位数据模型、规范化与聚合逻辑以及数据源接口
pub mod domain;

/// 引擎模块
///
/// 实现职位 API 的 HTTP 客户端
pub mod engines;

/// 基础设施模块
///
/// 提供 CSV 读写与视图缓存
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由、处理器和错误映射
pub mod presentation;

/// 工具模块
///
/// 提供日志初始化等通用功能
pub mod utils;
