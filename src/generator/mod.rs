//! 项目生成模块
//!
//! 根据配置生成 Robot Framework 项目目录树

pub mod config;
pub mod project;

// 重导出
pub use config::ProjectConfig;
pub use project::create_project;
