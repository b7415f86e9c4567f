use anyhow::{Result, bail};
use clap::Parser;

use resource_manifest::cli::Cli;
use resource_manifest::manifest::update_resources;

fn run() -> Result<()> {
    let cli = Cli::parse();
    let resources_root = cli.resources_root();

    if !resources_root.exists() {
        bail!("资源目录不存在: {:?}", resources_root);
    }

    update_resources(&resources_root)?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("错误: {:#}", err);
        std::process::exit(1);
    }
}
