// ==========================================
// 材料成本工具 - 材料目录层
// ==========================================
// 职责: 主机材料注册表的只读访问
// 红线: 不含导入/导出逻辑，只负责枚举与兼容性解析
// ==========================================

pub mod error;
pub mod material_catalog;
pub mod sqlite_catalog;

// 重导出核心类型
pub use error::{CatalogError, CatalogResult};
pub use material_catalog::MaterialCatalog;
pub use sqlite_catalog::SqliteMaterialCatalog;
