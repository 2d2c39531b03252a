// ==========================================
// 材料成本工具 - 领域类型定义
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE (与前端/日志一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 导出选择模式 (Selection Mode)
// ==========================================
// 四种模式均只选取 base 变体（一个物理材料一行，而非一个颜色 SKU 一行）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionMode {
    All,               // 全部已知材料
    Favorites,         // 收藏列表中的材料
    PrinterCompatible, // 与当前打印机线径匹配的材料
    Configured,        // 已配置成本数据的材料
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::All => write!(f, "ALL"),
            SelectionMode::Favorites => write!(f, "FAVORITES"),
            SelectionMode::PrinterCompatible => write!(f, "PRINTER_COMPATIBLE"),
            SelectionMode::Configured => write!(f, "CONFIGURED"),
        }
    }
}

// ==========================================
// ActivePrinter - 当前激活的打印机
// ==========================================
// 用途: 打印机兼容导出的判定输入（目录层提供）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivePrinter {
    pub printer_id: String,             // 打印机标识
    pub name: String,                   // 显示名称
    pub material_diameter: Option<f64>, // 第一挤出机配置的耗材线径（mm）
    pub supports_materials: bool,       // 打印机是否声明支持耗材管理
}

impl ActivePrinter {
    /// 是否具备按线径匹配材料的条件
    pub fn can_match_materials(&self) -> bool {
        self.supports_materials && self.material_diameter.is_some()
    }
}

// ==========================================
// ImportSummary - 导入汇总
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportSummary {
    /// 成功合并的数据行数（至少一个数值字段解析成功）
    pub imported_rows: usize,
    /// 跳过的数据行数（字段不足/UUID 非法/数值全部解析失败）
    pub skipped_rows: usize,
}

// ==========================================
// ExportSummary - 导出汇总
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportSummary {
    /// 成功写出的数据行数（不含表头）
    pub written_rows: usize,
    /// 序列化失败而被跳过的行数
    pub skipped_rows: usize,
}
