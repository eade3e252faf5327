// Robot Scaffold CLI - Library Root
//
// Robot Framework 项目脚手架：模板嵌入、目录生成、外部 runner 调用

pub mod generator;
pub mod runner;
pub mod templates;
pub mod utils;

// 重新导出常用类型
pub use generator::{create_project, ProjectConfig};
pub use templates::TemplateAssets;
