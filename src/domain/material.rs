// ==========================================
// 材料成本工具 - 材料领域模型
// ==========================================
// 对齐: 主机材料注册表字段 + cura/material_settings 偏好键
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// MaterialRecord - 材料记录
// ==========================================
// 用途: 由材料目录派生，不落库
// 红线: 颜色变体共享一个 base 材料，导出以 base 变体为准
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialRecord {
    // ===== 主键 =====
    pub guid: String, // 材料唯一标识（UUID 字符串）

    // ===== 基础信息 =====
    pub brand: String,         // 品牌（可能为空）
    pub material_type: String, // 材料类型（如 PLA/PETG）
    pub name: String,          // 显示名称

    // ===== 工艺维度 =====
    pub approximate_diameter: Option<f64>, // 近似线径（mm）

    // ===== 变体信息 =====
    pub is_base_variant: bool, // 是否为 base 变体（guid == base_file guid）
}

impl MaterialRecord {
    /// 导出行标签: 品牌与显示名称以单个空格拼接
    pub fn export_label(&self) -> String {
        format!("{} {}", self.brand, self.name)
    }

    /// 导出排序键: (brand, material_type, name)，区分大小写字典序
    pub fn sort_key(&self) -> (&str, &str, &str) {
        (&self.brand, &self.material_type, &self.name)
    }
}

// ==========================================
// CostEntry - 耗材成本条目
// ==========================================
// 用途: 持久化于 cura/material_settings 偏好键（JSON 对象, guid → CostEntry）
// 说明: 两个字段都可缺失；双缺失条目无意义但不主动清理
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostEntry {
    /// 整卷重量（克）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spool_weight: Option<i32>,

    /// 整卷价格（货币单位由 cura/currency 决定）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spool_cost: Option<f64>,
}

impl CostEntry {
    /// 两个字段是否都缺失
    pub fn is_empty(&self) -> bool {
        self.spool_weight.is_none() && self.spool_cost.is_none()
    }
}

/// 成本条目映射: guid → CostEntry
///
/// 使用 BTreeMap 保证序列化顺序确定（可对比、可 diff）
pub type CostEntryMap = BTreeMap<String, CostEntry>;

/// 解析偏好设置中的成本条目 JSON
///
/// # 参数
/// - raw: 偏好键原始字符串
///
/// # 返回
/// - Ok(CostEntryMap): 解析成功；空白字符串视为未设置，返回空映射
/// - Err: JSON 语法错误（调用方按 StoreUnreadable 处理）
pub fn parse_cost_entry_map(raw: &str) -> Result<CostEntryMap, serde_json::Error> {
    if raw.trim().is_empty() {
        return Ok(CostEntryMap::new());
    }
    serde_json::from_str(raw)
}

/// 序列化成本条目映射为单个 JSON 字符串（一次持久化调用）
pub fn serialize_cost_entry_map(map: &CostEntryMap) -> Result<String, serde_json::Error> {
    serde_json::to_string(map)
}
