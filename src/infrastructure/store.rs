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

use tokio::sync::RwLock;

use crate::domain::models::sensor::{SensorReading, SensorSnapshot};

/// 进程内遥测状态存储
///
/// 持有最新传感器快照和扫描标志，两者都以读写锁保护，
/// 通过依赖注入传入各处理器，不使用模块级全局变量。
pub struct TelemetryStore {
    /// 最新合并后的传感器快照
    snapshot: RwLock<SensorSnapshot>,
    /// 设备扫描标志
    scanning: RwLock<bool>,
}

impl TelemetryStore {
    /// 创建新的状态存储，快照全零、扫描标志关闭
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(SensorSnapshot::default()),
            scanning: RwLock::new(false),
        }
    }

    /// 返回当前快照的副本
    pub async fn snapshot(&self) -> SensorSnapshot {
        self.snapshot.read().await.clone()
    }

    /// 将部分读数浅合并进快照
    pub async fn merge(&self, reading: SensorReading) {
        self.snapshot.write().await.merge(reading);
    }

    /// 返回当前扫描标志
    pub async fn is_scanning(&self) -> bool {
        *self.scanning.read().await
    }

    /// 设置扫描标志
    pub async fn set_scanning(&self, desired: bool) {
        *self.scanning.write().await = desired;
    }
}

impl Default for TelemetryStore {
    fn default() -> Self {
        Self::new()
    }
}
