//! 套件内容组装
//!
//! 纯字符串拼接：设置区块、测试用例区块，以及最终套件文本的占位符替换。
//! 输出完全由开关组合决定，不依赖任何运行时状态。

use anyhow::Result;

use crate::templates::TemplateAssets;

/// 库文件在套件设置区块中的引用路径（相对 tests/ 目录）
pub const LIBRARY_SETTING: &str = "Library    ../libraries/MyLibrary.py";

/// 资源文件在套件设置区块中的引用路径（相对 tests/ 目录）
pub const RESOURCE_SETTING: &str = "Resource   ../resources/MyResource.robot";

/// 构建设置区块
///
/// 每个启用的协作者一行，固定顺序：Library 在前，Resource 在后。
/// 两者都未启用时返回空字符串。
pub fn settings_block(with_lib: bool, with_resource: bool) -> String {
    let mut settings = Vec::new();
    if with_lib {
        settings.push(LIBRARY_SETTING);
    }
    if with_resource {
        settings.push(RESOURCE_SETTING);
    }
    settings.join("\n")
}

/// 构建测试用例区块
///
/// 基础用例始终在首位，之后按固定顺序追加库用例、资源用例。
pub fn test_cases_block(with_lib: bool, with_resource: bool) -> Result<String> {
    let mut test_cases = TemplateAssets::case_local_keyword()?;

    if with_lib {
        test_cases.push('\n');
        test_cases.push_str(&TemplateAssets::case_library_keyword()?);
    }

    if with_resource {
        test_cases.push('\n');
        test_cases.push_str(&TemplateAssets::case_resource_keyword()?);
    }

    Ok(test_cases)
}

/// 渲染最终套件文本
///
/// 用字面替换填入两个占位符，保留模板中的全部空白和分节符。
pub fn render_suite(with_lib: bool, with_resource: bool) -> Result<String> {
    let base = TemplateAssets::base_suite()?;

    let content = base
        .replace("{settings_block}", &settings_block(with_lib, with_resource))
        .replace("{test_cases}", &test_cases_block(with_lib, with_resource)?);

    Ok(content)
}
