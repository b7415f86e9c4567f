mod generate;
mod model;

pub use generate::{
    MANIFEST_FILE_NAME, build_manifest, collect_entries, generate_manifest, load_manifest,
    update_resources, write_manifest,
};
pub use model::{Category, Manifest, ResourceEntry};
