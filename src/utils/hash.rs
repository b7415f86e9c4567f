use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// 每次读取的块大小
pub const HASH_CHUNK_SIZE: usize = 4096;

/// 计算文件的 SHA256 校验和
pub fn compute_file_hash(path: &Path) -> Result<String> {
    let file = File::open(path).with_context(|| format!("无法打开文件: {:?}", path))?;
    compute_reader_hash(BufReader::new(file)).with_context(|| format!("无法读取文件: {:?}", path))
}

/// 以固定大小的块流式计算 SHA256，返回小写十六进制字符串
pub fn compute_reader_hash<R: Read>(mut reader: R) -> Result<String> {
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; HASH_CHUNK_SIZE];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}
