// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use material_cost_tools::catalog::SqliteMaterialCatalog;
use material_cost_tools::domain::material::{CostEntry, MaterialRecord};
use material_cost_tools::domain::types::ActivePrinter;
use material_cost_tools::exchange::{AlwaysConfirm, ConfirmationProvider};
use material_cost_tools::host::{FilePicker, FixedPathPicker, NoDialogPicker};
use material_cost_tools::settings::{PreferenceStore, SettingsStore};
use material_cost_tools::api::CostDataApi;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

// ==========================================
// MaterialRecord 构建器
// ==========================================

pub struct MaterialRecordBuilder {
    guid: String,
    brand: String,
    material_type: String,
    name: String,
    approximate_diameter: Option<f64>,
}

impl MaterialRecordBuilder {
    pub fn new(guid: &str) -> Self {
        Self {
            guid: guid.to_string(),
            brand: "Generic".to_string(),
            material_type: "PLA".to_string(),
            name: "PLA".to_string(),
            approximate_diameter: Some(2.85),
        }
    }

    pub fn brand(mut self, brand: &str) -> Self {
        self.brand = brand.to_string();
        self
    }

    pub fn material_type(mut self, material_type: &str) -> Self {
        self.material_type = material_type.to_string();
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn diameter(mut self, diameter: f64) -> Self {
        self.approximate_diameter = Some(diameter);
        self
    }

    pub fn no_diameter(mut self) -> Self {
        self.approximate_diameter = None;
        self
    }

    pub fn build(self) -> MaterialRecord {
        MaterialRecord {
            guid: self.guid,
            brand: self.brand,
            material_type: self.material_type,
            name: self.name,
            approximate_diameter: self.approximate_diameter,
            is_base_variant: true,
        }
    }
}

// ==========================================
// TestEnv - 集成测试环境
// ==========================================
// 临时目录内包含偏好库与目录库两个 SQLite 文件
pub struct TestEnv {
    pub dir: TempDir,
    pub settings: Arc<PreferenceStore>,
    pub catalog: Arc<SqliteMaterialCatalog>,
}

impl TestEnv {
    pub fn new() -> Self {
        material_cost_tools::logging::init_test();

        let dir = TempDir::new().expect("创建临时目录失败");

        let settings_path = dir.path().join("preferences.db");
        let settings =
            Arc::new(PreferenceStore::new(settings_path.to_str().unwrap()).expect("创建偏好库失败"));

        let catalog_path = dir.path().join("catalog.db");
        let catalog = Arc::new(
            SqliteMaterialCatalog::new(catalog_path.to_str().unwrap()).expect("创建目录库失败"),
        );

        Self {
            dir,
            settings,
            catalog,
        }
    }

    /// 写入一条 base 材料记录
    pub fn seed_base_material(&self, record: &MaterialRecord) {
        self.catalog
            .replace_material(record, None)
            .expect("写入材料失败");
    }

    /// 写入一条颜色变体记录（非 base）
    pub fn seed_color_variant(&self, record: &MaterialRecord, base_guid: &str) {
        self.catalog
            .replace_material(record, Some(base_guid))
            .expect("写入颜色变体失败");
    }

    /// 写入并激活一台打印机
    pub fn seed_active_printer(&self, printer_id: &str, diameter: Option<f64>, supports: bool) {
        let printer = ActivePrinter {
            printer_id: printer_id.to_string(),
            name: printer_id.to_string(),
            material_diameter: diameter,
            supports_materials: supports,
        };
        self.catalog
            .upsert_printer(&printer, true)
            .expect("写入打印机失败");
    }

    /// 直接写入一条成本条目
    pub fn seed_cost_entry(&self, guid: &str, weight: Option<i32>, cost: Option<f64>) {
        let mut entries = self.settings.cost_entries().expect("读取成本条目失败");
        entries.insert(
            guid.to_string(),
            CostEntry {
                spool_weight: weight,
                spool_cost: cost,
            },
        );
        self.settings
            .set_cost_entries(&entries)
            .expect("写入成本条目失败");
    }

    /// 临时目录下的 CSV 文件路径
    pub fn csv_path(&self, file_name: &str) -> PathBuf {
        self.dir.path().join(file_name)
    }

    /// 写出一个 CSV 文件并返回其路径
    pub fn write_csv(&self, file_name: &str, content: &str) -> PathBuf {
        let path = self.csv_path(file_name);
        std::fs::write(&path, content).expect("写入测试 CSV 失败");
        path
    }

    /// 构建 API 实例（自定义对话框与确认实现）
    pub fn api(
        &self,
        picker: Arc<dyn FilePicker>,
        confirm: Arc<dyn ConfirmationProvider>,
    ) -> CostDataApi {
        CostDataApi::new(
            self.settings.clone(),
            self.catalog.clone(),
            picker,
            confirm,
        )
    }

    /// 对话框固定返回指定文件、确认一律同意的 API 实例
    pub fn api_with_file(&self, path: &Path) -> CostDataApi {
        self.api(
            Arc::new(FixedPathPicker::new(path.to_path_buf())),
            Arc::new(AlwaysConfirm),
        )
    }

    /// 对话框一律取消的 API 实例
    pub fn api_cancelled(&self) -> CostDataApi {
        self.api(Arc::new(NoDialogPicker), Arc::new(AlwaysConfirm))
    }
}
