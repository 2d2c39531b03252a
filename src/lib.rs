// ==========================================
// 材料成本工具 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 3D打印主机内嵌的耗材成本数据导入/导出工具
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 偏好设置层 - 键值存储
pub mod settings;

// 材料目录层 - 主机材料注册表
pub mod catalog;

// 交换层 - CSV 导入/导出/清除
pub mod exchange;

// 主机协作接口 - 文件选择对话框
pub mod host;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 菜单命令接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::material::{CostEntry, CostEntryMap, MaterialRecord};
pub use domain::types::{ActivePrinter, ExportSummary, ImportSummary, SelectionMode};

// 偏好设置
pub use settings::{PreferenceStore, SettingsError, SettingsStore};

// 材料目录
pub use catalog::{CatalogError, MaterialCatalog, SqliteMaterialCatalog};

// 交换层
pub use exchange::{
    ConfirmRequest, ConfirmationProvider, CostDataClearer, CsvExporter, CsvImporter,
    ExchangeError, ExportSelector,
};

// API
pub use api::{ApiError, CostDataApi, ExchangeResponse};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "材料成本工具";

// ==========================================
// 预编译检查
// ==========================================
