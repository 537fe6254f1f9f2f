// src/config/consts.rs

// Net config
pub const API_BASE: &str = "https://api.vk.com/method";
pub const USERS_GET: &str = "users.get";
pub const API_VERSION: &str = "5.74";
pub const API_LANG: &str = "ru";
pub const PROFILE_FIELDS: &[&str] = &["city", "country", "home_town"];
pub const ACCESS_TOKEN_ENV: &str = "VK_ACCESS_TOKEN";
pub const HTTP_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("vk_surnames/", env!("CARGO_PKG_VERSION"));

// Harvest
// 483 678 400 accounts were registered by 16.04.18; the default scan covers the first 50k.
pub const DEFAULT_START_ID: u64 = 1;
pub const DEFAULT_END_ID: u64 = 50_000;
pub const BATCH_SIZE: u64 = 500;
pub const MAX_BATCH_SIZE: u64 = 1_000; // users.get hard limit
pub const REPORT_EVERY_IDS: u64 = 5_000;

// Profile filter
pub const DELETED_STATUS: &str = "deleted";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const PEOPLE_FILE: &str = "vk_people.jsonl";
pub const TABLE_FILE: &str = "last_names.json";
pub const RANKED_FILE: &str = "sorted_last_names.json";

// Local log
pub const LOG_FILE: &str = ".store/harvest.log";
