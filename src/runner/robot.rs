//! 套件执行器
//!
//! 以阻塞子进程方式调用外部 robot runner，输出写入 results/ 目录。
//! 等待没有超时上限，runner 的 stdout/stderr 直接透传给用户。

use anyhow::{Context, Result};
use colored::*;
use std::path::Path;
use std::process::Command;

use crate::runner::resolver::resolve_robot_path;
use crate::utils::ensure_dir;

/// 运行生成的测试套件
///
/// 调用形式固定：
/// `robot --outputdir <project>/results --loglevel TRACE:INFO
///  --pythonpath <project> <project>/tests`
///
/// 工作目录沿用当前进程的工作目录，传给 runner 的路径按原样构造，
/// 不假设相对于项目目录。
///
/// # Errors
///
/// robot 非零退出时打印诊断信息并返回错误（不重试）。
pub fn run_suite(project_dir: &Path) -> Result<()> {
    let results_dir = project_dir.join("results");
    ensure_dir(&results_dir)?;

    println!("{}", "Running test suite...".cyan());

    let robot_bin = resolve_robot_path().context("Failed to resolve robot command path")?;

    let status = Command::new(&robot_bin)
        .arg("--outputdir")
        .arg(&results_dir)
        .arg("--loglevel")
        .arg("TRACE:INFO")
        .arg("--pythonpath")
        .arg(project_dir)
        .arg(project_dir.join("tests"))
        .status()
        .context("Failed to spawn robot process. Is 'robot' installed and in PATH?")?;

    if !status.success() {
        eprintln!(
            "{}",
            format!(
                "Error running Robot Framework test suite (exit code {:?})",
                status.code()
            )
            .red()
        );
        anyhow::bail!(
            "Robot Framework run failed with exit code {:?}",
            status.code()
        );
    }

    Ok(())
}
