use clap::Parser;
use std::path::PathBuf;

/// 生成资源文件清单
#[derive(Parser)]
#[command(name = "update_resources")]
#[command(about = "计算资源文件哈希并生成 resources.json", long_about = None)]
pub struct Cli {
    /// 资源根目录 (包含 fonts 和 images)，默认为项目下的 resources 目录
    #[arg(short, long)]
    pub resources_dir: Option<PathBuf>,
}

impl Cli {
    pub fn resources_root(&self) -> PathBuf {
        self.resources_dir
            .clone()
            .unwrap_or_else(default_resources_root)
    }
}

/// 项目目录下的 `resources`
pub fn default_resources_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources")
}
