use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::model::{Category, Manifest, ResourceEntry};
use crate::utils::{compute_file_hash, scan_files};

/// 清单文件名，位于资源根目录下
pub const MANIFEST_FILE_NAME: &str = "resources.json";

/// 重新计算资源清单并写入 `<resources_root>/resources.json`
pub fn update_resources(resources_root: &Path) -> Result<PathBuf> {
    println!("资源目录: {}", resources_root.display());
    let manifest = generate_manifest(resources_root)?;
    let output = write_manifest(&manifest, resources_root)?;

    println!("清单已生成: {}", output.display());
    println!("  {}", manifest.summary());

    Ok(output)
}

/// 扫描字体和图片目录并计算每个文件的哈希
pub fn generate_manifest(resources_root: &Path) -> Result<Manifest> {
    let fonts = collect_entries(resources_root, Category::Fonts)?;
    let images = collect_entries(resources_root, Category::Images)?;
    Ok(build_manifest(fonts, images))
}

/// 计算单个分类下所有文件的记录，结果无序
pub fn collect_entries(resources_root: &Path, category: Category) -> Result<Vec<ResourceEntry>> {
    let dir = resources_root.join(category.dir_name());
    println!("正在扫描 {}...", category.dir_name());

    let mut entries = Vec::new();
    for file in scan_files(&dir, category.walk_mode())? {
        let hash = compute_file_hash(&file.path)?;
        println!("  {} {}", &hash[..8], file.relative);
        entries.push(ResourceEntry::new(file.relative, hash));
    }

    Ok(entries)
}

/// 按 `file` 字节序排序后组装清单
pub fn build_manifest(mut fonts: Vec<ResourceEntry>, mut images: Vec<ResourceEntry>) -> Manifest {
    fonts.sort_by(|a, b| a.file.cmp(&b.file));
    images.sort_by(|a, b| a.file.cmp(&b.file));
    Manifest { fonts, images }
}

/// 写入清单文件，已存在时直接覆盖
pub fn write_manifest(manifest: &Manifest, resources_root: &Path) -> Result<PathBuf> {
    let output = resources_root.join(MANIFEST_FILE_NAME);
    let content = manifest.to_json()?;
    fs::write(&output, content).with_context(|| format!("无法写入清单: {:?}", output))?;
    Ok(output)
}

/// 读取已有的清单文件
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content =
        fs::read_to_string(path).with_context(|| format!("无法读取清单: {:?}", path))?;
    Manifest::from_json(&content).with_context(|| format!("清单格式错误: {:?}", path))
}
