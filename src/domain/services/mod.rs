// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 规范化（normalizer）：薪资、技能、城市字段解析
/// - 聚合（aggregation_service）：技能薪资排行与城市技能分布
pub mod aggregation_service;
pub mod normalizer;
