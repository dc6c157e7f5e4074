// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心数据结构，包括：
/// - 职位记录（vacancy）：CSV 中的一行职位数据
/// - 聚合视图（job_stats）：技能薪资排行与城市技能分布
pub mod job_stats;
pub mod vacancy;
