// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 视图缓存模块
///
/// 惰性加载并在进程生命周期内保存聚合结果
pub mod view_cache;
