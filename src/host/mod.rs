// ==========================================
// 材料成本工具 - 主机协作接口
// ==========================================
// 职责: 定义由宿主应用提供的交互能力（文件选择对话框）
// 红线: 本 crate 不含任何 GUI 实现，宿主注入实现
// ==========================================

pub mod dialog;

// 重导出核心类型
pub use dialog::{FilePicker, FixedPathPicker, NoDialogPicker};
