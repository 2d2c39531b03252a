// ==========================================
// 材料成本工具 - 偏好设置层
// ==========================================
// 职责: 主机偏好存储的键值访问（带类型化访问器与默认值）
// 存储: preference_kv 表 (key-value)
// ==========================================

pub mod error;
pub mod preference_store;
pub mod settings_store;

// 重导出核心类型
pub use error::{SettingsError, SettingsResult};
pub use preference_store::PreferenceStore;
pub use settings_store::{keys, SettingsStore};
