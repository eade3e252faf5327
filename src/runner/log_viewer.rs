//! 日志查看器
//!
//! 运行结束后在系统默认查看器中打开 results/log.html。
//! 查看器调用是 fire-and-forget：启动失败只警告，不影响退出码。

use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::utils::file_exists;

/// 打开 runner 生成的 log.html
///
/// 两个非错误的早退分支：
/// - 本次调用没有带 `--run`：提示先运行套件，正常返回
/// - log.html 不存在：提示未找到，正常返回
pub fn open_log(project_dir: &Path, ran: bool) -> Result<()> {
    if !ran {
        println!(
            "{}",
            "Run the test suite first to generate log files.".yellow()
        );
        return Ok(());
    }

    let log_path = project_dir.join("results").join("log.html");
    let log_path = std::path::absolute(&log_path).unwrap_or(log_path);

    if file_exists(&log_path) {
        println!(
            "Opening log file: {}",
            log_path.display().to_string().green()
        );
        if let Err(e) = opener::open(&log_path) {
            eprintln!("⚠️  Failed to open log file in viewer: {}", e);
        }
    } else {
        println!("{} not found!", log_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_log_without_run_is_ok() {
        let temp = TempDir::new().unwrap();
        // ran = false 时不触碰文件系统，直接正常返回
        assert!(open_log(temp.path(), false).is_ok());
    }

    #[test]
    fn test_open_log_missing_file_is_ok() {
        let temp = TempDir::new().unwrap();
        // results/log.html 不存在：提示后正常返回，不调用查看器
        assert!(open_log(temp.path(), true).is_ok());
    }
}
