//! 嵌入资源管理
//!
//! 使用 rust-embed 将 Robot Framework 模板文件编译进二进制

pub mod files;
pub mod render;

pub use files::TemplateAssets;
pub use render::{render_suite, settings_block, test_cases_block};
