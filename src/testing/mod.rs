mod memory_config_fs;

pub use memory_config_fs::MockConfigFs;
