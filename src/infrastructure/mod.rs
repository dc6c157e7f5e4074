// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// - 缓存（cache）：进程内视图缓存
/// - 仓库（repositories）：基于 CSV 文件的职位数据源
/// - 存储（storage）：抓取结果写入 CSV
pub mod cache;
pub mod repositories;
pub mod storage;
