// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 生成手工联调用的样例数据集
// 输出: tests/fixtures/datasets/ 下的 CSV 文件与种子数据库
// ==========================================

use csv::Writer;
use material_cost_tools::catalog::SqliteMaterialCatalog;
use material_cost_tools::domain::material::MaterialRecord;
use material_cost_tools::domain::types::ActivePrinter;
use material_cost_tools::settings::{PreferenceStore, SettingsStore};
use std::error::Error;
use std::fs;
use std::fs::File;
use uuid::Uuid;

// CSV 表头（当前四列格式，货币 EUR）
const CSV_HEADER: &[&str] = &["guid", "name", "weight (g)", "cost (EUR)"];

// 样例材料（贴近主机内置的通用材料）
const SAMPLE_MATERIALS: &[(&str, &str, &str, &str, f64)] = &[
    (
        "0ff92885-617b-4144-a03c-9989872454bc",
        "Generic",
        "PLA",
        "PLA",
        2.85,
    ),
    (
        "60636bb4-518f-42e7-8237-fe77b194ebe0",
        "Generic",
        "ABS",
        "ABS",
        2.85,
    ),
    (
        "28fb4162-db74-49e1-9008-d05f1e8bef5c",
        "Generic",
        "PETG",
        "PETG",
        2.85,
    ),
    (
        "506c9f0d-e3aa-4bd4-b2d2-23e2425b1aa9",
        "Generic",
        "CPE",
        "CPE",
        1.75,
    ),
];

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = "tests/fixtures/datasets";
    fs::create_dir_all(out_dir)?;

    generate_catalog_db(&format!("{}/catalog.db", out_dir))?;
    generate_preferences_db(&format!("{}/preferences.db", out_dir))?;
    generate_clean_csv(&format!("{}/costs_clean.csv", out_dir))?;
    generate_dirty_csv(&format!("{}/costs_dirty.csv", out_dir))?;
    generate_usd_csv(&format!("{}/costs_usd.csv", out_dir))?;
    generate_legacy_csv(&format!("{}/costs_legacy.csv", out_dir))?;

    println!("样例数据集已生成: {}", out_dir);
    Ok(())
}

/// 种子材料目录: 样例材料 + 每个材料两个颜色变体 + 一台激活打印机
fn generate_catalog_db(path: &str) -> Result<(), Box<dyn Error>> {
    let catalog = SqliteMaterialCatalog::new(path)?;

    for (guid, brand, material_type, name, diameter) in SAMPLE_MATERIALS {
        let record = MaterialRecord {
            guid: guid.to_string(),
            brand: brand.to_string(),
            material_type: material_type.to_string(),
            name: name.to_string(),
            approximate_diameter: Some(*diameter),
            is_base_variant: true,
        };
        catalog.replace_material(&record, None)?;

        // 颜色变体共享 base 材料，导出时应被去重
        for color in ["Red", "Blue"] {
            let variant = MaterialRecord {
                guid: Uuid::new_v4().to_string(),
                brand: brand.to_string(),
                material_type: material_type.to_string(),
                name: format!("{} {}", name, color),
                approximate_diameter: Some(*diameter),
                is_base_variant: false,
            };
            catalog.replace_material(&variant, Some(*guid))?;
        }
    }

    let printer = ActivePrinter {
        printer_id: "ultimaker_s5".to_string(),
        name: "Ultimaker S5".to_string(),
        material_diameter: Some(2.85),
        supports_materials: true,
    };
    catalog.upsert_printer(&printer, true)?;

    Ok(())
}

/// 种子偏好库: 货币 EUR + 前两个样例材料已配置成本
fn generate_preferences_db(path: &str) -> Result<(), Box<dyn Error>> {
    let store = PreferenceStore::new(path)?;
    store.set_value("cura/currency", "EUR")?;
    store.set_value(
        "cura/favorite_materials",
        &format!("{};{}", SAMPLE_MATERIALS[0].0, SAMPLE_MATERIALS[1].0),
    )?;

    let mut entries = material_cost_tools::domain::material::CostEntryMap::new();
    entries.insert(
        SAMPLE_MATERIALS[0].0.to_string(),
        material_cost_tools::domain::material::CostEntry {
            spool_weight: Some(750),
            spool_cost: Some(19.99),
        },
    );
    entries.insert(
        SAMPLE_MATERIALS[1].0.to_string(),
        material_cost_tools::domain::material::CostEntry {
            spool_weight: Some(1000),
            spool_cost: Some(24.5),
        },
    );
    store.set_cost_entries(&entries)?;
    Ok(())
}

/// 干净数据集: 每行字段齐全
fn generate_clean_csv(path: &str) -> Result<(), Box<dyn Error>> {
    let mut writer = Writer::from_writer(File::create(path)?);
    writer.write_record(CSV_HEADER)?;
    for (idx, (guid, brand, _material_type, name, _diameter)) in
        SAMPLE_MATERIALS.iter().enumerate()
    {
        writer.write_record([
            guid.to_string(),
            format!("{} {}", brand, name),
            (500 + idx * 250).to_string(),
            format!("{:.2}", 15.0 + idx as f64 * 2.5),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// 脏数据集: 合法行 + UUID 非法行 + 字段不足行 + 数值非法行
fn generate_dirty_csv(path: &str) -> Result<(), Box<dyn Error>> {
    let mut writer = Writer::from_writer(File::create(path)?);
    writer.write_record(CSV_HEADER)?;
    writer.write_record([
        SAMPLE_MATERIALS[0].0,
        "Generic PLA",
        "750",
        "19.99",
    ])?;
    writer.write_record(["not-a-uuid", "Broken", "750", "19.99"])?;
    writer.write_record([SAMPLE_MATERIALS[1].0, "Generic ABS", "heavy", "24.5"])?;
    writer.write_record([SAMPLE_MATERIALS[2].0, "Generic PETG", "heavy", "pricey"])?;
    writer.flush()?;
    Ok(())
}

/// 货币不一致数据集: 表头 USD
fn generate_usd_csv(path: &str) -> Result<(), Box<dyn Error>> {
    let mut writer = Writer::from_writer(File::create(path)?);
    writer.write_record(["guid", "name", "weight (g)", "cost (USD)"])?;
    writer.write_record([SAMPLE_MATERIALS[0].0, "Generic PLA", "750", "21.99"])?;
    writer.flush()?;
    Ok(())
}

/// 旧版三列数据集: 导入端应明确拒绝
fn generate_legacy_csv(path: &str) -> Result<(), Box<dyn Error>> {
    let mut writer = Writer::from_writer(File::create(path)?);
    writer.write_record(["guid", "weight (g)", "cost (EUR)"])?;
    writer.write_record([SAMPLE_MATERIALS[0].0, "750", "19.99"])?;
    writer.flush()?;
    Ok(())
}
