// ==========================================
// 材料成本工具 - 偏好设置访问接口
// ==========================================
// 职责: 定义偏好存储接口（类型化 get/set + 文档化默认值）
// 实现者: PreferenceStore
// ==========================================

use crate::domain::material::{
    parse_cost_entry_map, serialize_cost_entry_map, CostEntryMap,
};
use crate::settings::error::{SettingsError, SettingsResult};

// ==========================================
// 偏好键常量与默认值
// ==========================================
pub mod keys {
    /// 上次使用的对话框目录
    pub const DIALOG_PATH: &str = "material_cost_tools/dialog_path";

    /// 成本条目 JSON 映射（guid → {spool_weight, spool_cost}）
    pub const MATERIAL_SETTINGS: &str = "cura/material_settings";

    /// 货币代码
    pub const CURRENCY: &str = "cura/currency";

    /// 收藏材料标识列表（';' 连接）
    pub const FAVORITE_MATERIALS: &str = "cura/favorite_materials";

    /// 键的文档化默认值（键未设置时的回退值）
    pub fn default_for(key: &str) -> &'static str {
        match key {
            MATERIAL_SETTINGS => "{}",
            CURRENCY => "€",
            _ => "",
        }
    }
}

// ==========================================
// SettingsStore Trait
// ==========================================
// 用途: 偏好存储主接口
// 说明: 读-改-写，无乐观并发检查（单用户桌面场景，最后写入者胜出）
pub trait SettingsStore: Send + Sync {
    /// 读取偏好值
    ///
    /// # 参数
    /// - key: 偏好键
    ///
    /// # 返回
    /// - Some(String): 已设置的值
    /// - None: 键未设置
    fn get_value(&self, key: &str) -> SettingsResult<Option<String>>;

    /// 写入偏好值
    fn set_value(&self, key: &str, value: &str) -> SettingsResult<()>;

    /// 读取偏好值，未设置时返回键的文档化默认值
    fn get_or_default(&self, key: &str) -> SettingsResult<String> {
        Ok(self
            .get_value(key)?
            .unwrap_or_else(|| keys::default_for(key).to_string()))
    }

    /// 当前货币代码
    fn currency(&self) -> SettingsResult<String> {
        self.get_or_default(keys::CURRENCY)
    }

    /// 收藏材料标识集合
    ///
    /// 偏好值为 ';' 连接的标识列表；未设置或为空返回空集合（不是错误）
    fn favorite_material_ids(&self) -> SettingsResult<Vec<String>> {
        let raw = self.get_or_default(keys::FAVORITE_MATERIALS)?;
        Ok(raw
            .split(';')
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect())
    }

    /// 读取成本条目映射
    ///
    /// # 返回
    /// - Ok(CostEntryMap): 键未设置/空白时为延迟创建的空映射
    /// - Err(StoreUnreadable): 键已设置但 JSON 无法解析（操作在任何变更前中止）
    fn cost_entries(&self) -> SettingsResult<CostEntryMap> {
        let raw = self.get_or_default(keys::MATERIAL_SETTINGS)?;
        parse_cost_entry_map(&raw).map_err(|e| SettingsError::StoreUnreadable {
            key: keys::MATERIAL_SETTINGS.to_string(),
            message: e.to_string(),
        })
    }

    /// 写回成本条目映射（单次持久化调用）
    fn set_cost_entries(&self, entries: &CostEntryMap) -> SettingsResult<()> {
        let raw = serialize_cost_entry_map(entries)
            .map_err(|e| SettingsError::InternalError(format!("成本条目序列化失败: {}", e)))?;
        self.set_value(keys::MATERIAL_SETTINGS, &raw)
    }

    /// 重置成本条目映射为默认值（空对象）
    fn reset_cost_entries(&self) -> SettingsResult<()> {
        self.set_value(
            keys::MATERIAL_SETTINGS,
            keys::default_for(keys::MATERIAL_SETTINGS),
        )
    }

    /// 上次使用的对话框目录
    fn dialog_path(&self) -> SettingsResult<String> {
        self.get_or_default(keys::DIALOG_PATH)
    }

    /// 记录本次使用的对话框目录（供下次对话框打开时使用）
    fn set_dialog_path(&self, path: &str) -> SettingsResult<()> {
        self.set_value(keys::DIALOG_PATH, path)
    }
}
