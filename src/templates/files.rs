//! 模板文件嵌入
//!
//! 嵌入生成 Robot Framework 项目所需的模板文件

use anyhow::{anyhow, Result};
use rust_embed::RustEmbed;

/// 模板文件资源（编译时嵌入）
#[derive(RustEmbed)]
#[folder = "embedded/templates/"]
pub struct TemplateAssets;

impl TemplateAssets {
    /// 获取测试套件基础模板（含 {settings_block} / {test_cases} 占位符）
    pub fn base_suite() -> Result<String> {
        Self::get_file("MySuite.robot.tmpl")
    }

    /// 获取基础测试用例片段（始终写入套件）
    pub fn case_local_keyword() -> Result<String> {
        Self::get_file("case_local_keyword.robot")
    }

    /// 获取依赖 Python 库的测试用例片段
    pub fn case_library_keyword() -> Result<String> {
        Self::get_file("case_library_keyword.robot")
    }

    /// 获取依赖资源文件的测试用例片段
    pub fn case_resource_keyword() -> Result<String> {
        Self::get_file("case_resource_keyword.robot")
    }

    /// 获取 MyLibrary.py 内容
    pub fn library_file() -> Result<String> {
        Self::get_file("MyLibrary.py")
    }

    /// 获取 MyResource.robot 内容
    pub fn resource_file() -> Result<String> {
        Self::get_file("MyResource.robot")
    }

    /// 获取指定模板文件
    fn get_file(filename: &str) -> Result<String> {
        let file = Self::get(filename)
            .ok_or_else(|| anyhow!("Template '{}' not found", filename))?;

        let content = std::str::from_utf8(file.data.as_ref())
            .map_err(|e| anyhow!("Failed to decode template '{}': {}", filename, e))?;

        Ok(content.to_string())
    }

    /// 列出所有可用的模板文件
    pub fn list_templates() -> Vec<String> {
        Self::iter()
            .map(|path| path.as_ref().to_string())
            .collect()
    }
}

// ═══════════════════════════════════════════════════════════════════
// 测试
// ═══════════════════════════════════════════════════════════════════
