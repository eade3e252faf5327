//! 项目生成
//!
//! 单次线性流程：目录创建 → 模板渲染 → 文件写入 → 可选 runner 调用 →
//! 可选打开日志。目录和文件创建失败即中止，已写入的文件不回滚。

use anyhow::Result;
use colored::*;

use crate::generator::ProjectConfig;
use crate::runner;
use crate::templates::{render_suite, TemplateAssets};
use crate::utils::{ensure_dir, write_file};

/// 生成的库文件名（固定）
pub const LIBRARY_FILE_NAME: &str = "MyLibrary.py";

/// 生成的资源文件名（固定）
pub const RESOURCE_FILE_NAME: &str = "MyResource.robot";

/// 生成 Robot Framework 项目
///
/// dry-run 时跳过全部写入，但仍打印每一步计划的动作。
/// `--run` / `--open-log` 的处理委托给 runner 模块。
pub fn create_project(config: &ProjectConfig) -> Result<()> {
    println!(
        "Creating Robot Framework project in: {}",
        config.project_dir.display().to_string().green()
    );

    if !config.dry_run {
        ensure_dir(&config.project_dir)?;
        ensure_dir(&config.project_dir.join("tests"))?;
        println!("...Project directory created.");
    }

    // 渲染套件文本（纯字符串组装，与文件系统无关）
    let suite_content = render_suite(config.with_lib, config.with_resource)?;

    let suite_path = config.project_dir.join("tests").join(&config.suite_name);
    println!(
        "Creating Robot Framework test file at: {}",
        suite_path.display().to_string().green()
    );
    if !config.dry_run {
        write_file(&suite_path, &suite_content)?;
        println!("...Robot test file created.");
    }

    if config.with_lib {
        let lib_dir = config.project_dir.join("libraries");
        println!(
            "Creating Python library file at: {}",
            lib_dir.join(LIBRARY_FILE_NAME).display().to_string().green()
        );
        if !config.dry_run {
            ensure_dir(&lib_dir)?;
            write_file(
                &lib_dir.join(LIBRARY_FILE_NAME),
                &TemplateAssets::library_file()?,
            )?;
            println!("...Python library file created");
        }
    }

    if config.with_resource {
        let resource_dir = config.project_dir.join("resources");
        println!(
            "Creating resource file at: {}",
            resource_dir
                .join(RESOURCE_FILE_NAME)
                .display()
                .to_string()
                .green()
        );
        if !config.dry_run {
            ensure_dir(&resource_dir)?;
            write_file(
                &resource_dir.join(RESOURCE_FILE_NAME),
                &TemplateAssets::resource_file()?,
            )?;
            println!("...Resource file created");
        }
    }

    if config.run {
        runner::run_suite(&config.project_dir)?;
    }

    if config.open_log {
        runner::open_log(&config.project_dir, config.run)?;
    }

    Ok(())
}
