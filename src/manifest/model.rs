use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::utils::WalkMode;

/// 单个资源文件的记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub file: String,
    pub hash: String,
}

impl ResourceEntry {
    pub fn new(file: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            hash: hash.into(),
        }
    }
}

/// 资源清单，两个分类各自按 `file` 升序排列
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub fonts: Vec<ResourceEntry>,
    pub images: Vec<ResourceEntry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fonts.len() + self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty() && self.images.is_empty()
    }

    pub fn entries(&self, category: Category) -> &[ResourceEntry] {
        match category {
            Category::Fonts => &self.fonts,
            Category::Images => &self.images,
        }
    }

    /// 两空格缩进的 JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn summary(&self) -> String {
        format!(
            "共 {} 个文件 (字体: {}, 图片: {})",
            self.len(),
            self.entries(Category::Fonts).len(),
            self.entries(Category::Images).len()
        )
    }
}

/// 资源分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Fonts,
    Images,
}

impl Category {
    /// 资源根目录下对应的子目录名
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Fonts => "fonts",
            Category::Images => "images",
        }
    }

    pub fn walk_mode(&self) -> WalkMode {
        match self {
            Category::Fonts => WalkMode::Flat,
            Category::Images => WalkMode::Recursive,
        }
    }
}
