//! # Resource Manifest
//!
//! 资源文件清单生成工具库
//!
//! ## 功能
//!
//! - 扫描资源目录下的 `fonts`（单层）和 `images`（递归）目录
//! - 以 4096 字节分块计算每个文件的 SHA256 校验和
//! - 按相对路径排序后写入 `resources.json`，供构建或运行时校验资源完整性
//!
//! ## 使用示例
//!
//! ```no_run
//! use resource_manifest::manifest::{generate_manifest, update_resources};
//! use std::path::Path;
//!
//! // 只生成清单，不写文件
//! let manifest = generate_manifest(Path::new("resources")).unwrap();
//! println!("{}", manifest.to_json().unwrap());
//!
//! // 生成并写入 resources/resources.json
//! update_resources(Path::new("resources")).unwrap();
//! ```

pub mod cli;
pub mod manifest;
pub mod utils;

// 重新导出常用类型
pub use manifest::{Category, Manifest, ResourceEntry};
pub use manifest::{generate_manifest, update_resources, write_manifest};
