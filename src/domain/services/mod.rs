// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务逻辑服务。
///
/// 包含的服务：
/// - 增强服务（enrichment_service）：用数据源的实际天气观测值
///   覆盖设备上报的环境字段，失败时保留设备原始值
pub mod enrichment_service;
