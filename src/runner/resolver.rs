//! Robot 命令路径解析器
//!
//! 智能搜索 robot 命令路径，支持多种场景：
//! - 环境变量 ROBOT_SCAFFOLD_ROBOT_BIN
//! - 系统 PATH
//! - 项目本地虚拟环境（.venv / venv）
//!
//! # 搜索优先级
//!
//! 1. 环境变量 `ROBOT_SCAFFOLD_ROBOT_BIN` (最高优先级)
//! 2. 系统 PATH (尝试直接执行 `robot --version`)
//! 3. 项目本地: `./.venv/bin/robot`、`./venv/bin/robot` (向上查找最多 5 层)

use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::OnceLock;

/// 环境变量覆盖项，指向 robot 可执行文件的完整路径
pub const ROBOT_BIN_ENV: &str = "ROBOT_SCAFFOLD_ROBOT_BIN";

/// Session-level cache for robot path
/// 使用 OnceLock 确保线程安全且仅初始化一次
static ROBOT_PATH_CACHE: OnceLock<Option<PathBuf>> = OnceLock::new();

/// 解析 robot 命令路径（带缓存）
///
/// 第一次调用时执行完整搜索，后续调用返回缓存结果。
/// 返回的 "robot" 字符串表示在系统 PATH 中找到。
///
/// # Errors
///
/// 如果在所有位置都找不到 robot，返回包含详细搜索位置的错误。
pub fn resolve_robot_path() -> Result<String> {
    let cached = ROBOT_PATH_CACHE.get_or_init(|| resolve_robot_path_uncached().ok());

    match cached {
        Some(path) => Ok(path.to_string_lossy().to_string()),
        None => {
            // Cache 中是 None，说明之前搜索失败了
            // 重新尝试并返回详细错误
            resolve_robot_path_uncached().map(|p| p.to_string_lossy().to_string())
        }
    }
}

/// 执行未缓存的 robot 路径解析
///
/// 按优先级顺序搜索所有可能的位置。
fn resolve_robot_path_uncached() -> Result<PathBuf> {
    // Priority 1: 环境变量
    if let Ok(env_path) = env::var(ROBOT_BIN_ENV) {
        let path = PathBuf::from(&env_path);
        if validate_robot_binary(&path) {
            return Ok(path);
        } else {
            eprintln!(
                "⚠️  {} points to invalid binary: {}",
                ROBOT_BIN_ENV, env_path
            );
            eprintln!("   Falling back to automatic search...");
        }
    }

    // Priority 2: 系统 PATH
    if is_in_path("robot") {
        return Ok(PathBuf::from("robot"));
    }

    // Priority 3: 项目本地虚拟环境
    if let Some(venv_path) = search_virtualenv() {
        return Ok(venv_path);
    }

    // 所有搜索都失败了
    Err(build_resolution_error())
}

/// 检查 `robot --version` 的退出状态
///
/// Robot Framework 对 --version 返回 251 (INFO_PRINTED)，不是 0。
fn version_status_ok(status: std::process::ExitStatus) -> bool {
    status.success() || status.code() == Some(251)
}

/// 验证路径是否为有效的 robot 可执行文件
///
/// 1. 检查文件是否存在
/// 2. 检查文件是否可执行 (仅 Unix)
/// 3. 尝试执行 `robot --version` 验证它确实能运行
fn validate_robot_binary(path: &Path) -> bool {
    if !path.exists() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(metadata) = std::fs::metadata(path) {
            let permissions = metadata.permissions();
            if permissions.mode() & 0o111 == 0 {
                return false; // 不可执行
            }
        } else {
            return false;
        }
    }

    Command::new(path)
        .arg("--version")
        .output()
        .map(|o| version_status_ok(o.status))
        .unwrap_or(false)
}

/// 检查命令是否在系统 PATH 中
///
/// 通过尝试执行 `robot --version` 来验证
fn is_in_path(cmd: &str) -> bool {
    Command::new(cmd)
        .arg("--version")
        .output()
        .map(|o| version_status_ok(o.status))
        .unwrap_or(false)
}

/// 搜索项目本地虚拟环境中的 robot
///
/// 从当前目录开始向上查找，最多查找 5 层，
/// 每层依次检查 `.venv/bin/robot` 和 `venv/bin/robot`。
fn search_virtualenv() -> Option<PathBuf> {
    let mut current = env::current_dir().ok()?;

    for _ in 0..5 {
        for venv_dir in [".venv", "venv"] {
            let candidate = current.join(venv_dir).join("bin/robot");

            if validate_robot_binary(&candidate) {
                return Some(candidate);
            }
        }

        // 向上移动一层
        current = current.parent()?.to_path_buf();
    }

    None
}

/// 构建详细的解析失败错误消息
///
/// 列出所有搜索过的位置和安装建议
fn build_resolution_error() -> anyhow::Error {
    let mut error_msg = format!(
        "Robot Framework command not found in any of the following locations:\n\
         1. Environment variable: {} ",
        ROBOT_BIN_ENV
    );

    if env::var(ROBOT_BIN_ENV).is_ok() {
        error_msg.push_str("(set but invalid)\n");
    } else {
        error_msg.push_str("(not set)\n");
    }

    error_msg.push_str("2. System PATH (command 'robot' not found)\n");
    error_msg.push_str("3. Project virtualenv: ./.venv/bin/robot, ./venv/bin/robot (not found)\n");
    error_msg.push_str("\n💡 Installation suggestions:\n");
    error_msg.push_str("- Install via pip: pip install robotframework\n");
    error_msg.push_str(&format!("- Or set {} to the full path\n", ROBOT_BIN_ENV));

    anyhow::anyhow!(error_msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // 测试锁，防止 chdir 的测试相互干扰
    static TEST_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    /// 创建一个模拟的 robot 可执行文件
    fn create_mock_robot(path: &Path) -> std::io::Result<()> {
        fs::write(path, "#!/bin/sh\necho 'Robot Framework 7.0'\nexit 251")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    #[test]
    fn test_validate_robot_binary_nonexistent() {
        let _guard = TEST_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap();

        let path = PathBuf::from("/nonexistent/robot");
        assert!(!validate_robot_binary(&path));
    }

    #[test]
    #[cfg(unix)]
    fn test_validate_robot_binary_valid() {
        let _guard = TEST_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap();

        let temp = TempDir::new().unwrap();
        let robot_path = temp.path().join("robot");

        create_mock_robot(&robot_path).unwrap();

        assert!(validate_robot_binary(&robot_path));
    }

    #[test]
    #[cfg(unix)]
    fn test_validate_robot_binary_not_executable() {
        let _guard = TEST_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap();

        let temp = TempDir::new().unwrap();
        let robot_path = temp.path().join("robot");

        // 创建文件但不设置可执行权限
        fs::write(&robot_path, "#!/bin/sh\necho 'test'\n").unwrap();

        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&robot_path).unwrap().permissions();
        perms.set_mode(0o644); // rw-r--r-- (不可执行)
        fs::set_permissions(&robot_path, perms).unwrap();

        assert!(!validate_robot_binary(&robot_path));
    }

    #[test]
    #[cfg(unix)]
    fn test_search_virtualenv() {
        let _guard = TEST_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap();

        let original_dir = env::current_dir().unwrap();

        let temp = TempDir::new().unwrap();
        let venv_bin = temp.path().join(".venv/bin");
        fs::create_dir_all(&venv_bin).unwrap();

        let robot_path = venv_bin.join("robot");
        create_mock_robot(&robot_path).unwrap();

        // 切换到临时目录
        env::set_current_dir(temp.path()).unwrap();

        let result = search_virtualenv();

        // 恢复原目录
        env::set_current_dir(&original_dir).unwrap();

        assert!(result.is_some());
        assert_eq!(result.unwrap(), robot_path);
    }

    #[test]
    fn test_build_resolution_error() {
        let error = build_resolution_error();
        let error_msg = error.to_string();

        assert!(error_msg.contains("Robot Framework command not found"));
        assert!(error_msg.contains(ROBOT_BIN_ENV));
        assert!(error_msg.contains("System PATH"));
        assert!(error_msg.contains("Project virtualenv"));
        assert!(error_msg.contains("pip install robotframework"));
    }
}
