use anyhow::{Context, Result, anyhow, bail};
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// 目录遍历方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkMode {
    /// 只列出根目录下的直接条目
    Flat,
    /// 递归遍历所有子目录
    Recursive,
}

/// 扫描得到的文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// 相对于根目录的路径，使用 `/` 分隔
    pub relative: String,
    /// 可直接打开的完整路径
    pub path: PathBuf,
}

/// 列出目录下的所有普通文件，结果无序
///
/// 子目录等非普通文件会被跳过；指向普通文件的符号链接会被记录，但不会进入链接到的目录。
/// 根目录不存在或遍历出错时返回错误。
pub fn scan_files(root: &Path, mode: WalkMode) -> Result<Vec<ScannedFile>> {
    if !root.is_dir() {
        bail!("目录不存在: {:?}", root);
    }

    let mut walker = WalkDir::new(root).min_depth(1).follow_links(false);
    if mode == WalkMode::Flat {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.with_context(|| format!("无法遍历目录: {:?}", root))?;
        if !is_regular_file(&entry)? {
            continue;
        }

        let path = entry.into_path();
        let relative = path
            .strip_prefix(root)
            .with_context(|| format!("无法获取相对路径: {:?}", path))?;
        let relative = to_slash_path(relative)?;
        files.push(ScannedFile { relative, path });
    }

    Ok(files)
}

fn is_regular_file(entry: &DirEntry) -> Result<bool> {
    if entry.file_type().is_file() {
        return Ok(true);
    }
    if !entry.path_is_symlink() {
        return Ok(false);
    }

    let metadata = fs::metadata(entry.path())
        .with_context(|| format!("无法读取链接目标: {:?}", entry.path()))?;
    Ok(metadata.is_file())
}

/// 将相对路径转换为以 `/` 分隔的字符串，与平台无关
pub fn to_slash_path(relative: &Path) -> Result<String> {
    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(name) => {
                let name = name
                    .to_str()
                    .ok_or_else(|| anyhow!("文件名不是有效的 UTF-8: {:?}", relative))?;
                parts.push(name);
            }
            Component::CurDir => {}
            _ => return Err(anyhow!("不是相对路径: {:?}", relative)),
        }
    }
    Ok(parts.join("/"))
}
