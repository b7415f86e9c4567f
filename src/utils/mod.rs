mod fs;
mod hash;

pub use fs::{ScannedFile, WalkMode, scan_files, to_slash_path};
pub use hash::{HASH_CHUNK_SIZE, compute_file_hash, compute_reader_hash};
