//! 生成配置

use std::path::PathBuf;

/// 一次生成调用的完整配置
///
/// 生成的文件内容是该配置的纯函数：相同配置必然产生相同输出。
/// 每次调用构造一次，用完即弃，不做任何持久化。
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// 项目根目录（不存在时自动创建）
    pub project_dir: PathBuf,
    /// 套件文件名，原样用作 tests/ 下的文件名
    pub suite_name: String,
    /// 生成后调用外部 robot runner
    pub run: bool,
    /// 运行后打开 results/log.html
    pub open_log: bool,
    /// 跳过所有文件写入，仅打印计划动作
    pub dry_run: bool,
    /// 生成 libraries/MyLibrary.py 并在设置区块引用
    pub with_lib: bool,
    /// 生成 resources/MyResource.robot 并在设置区块引用
    pub with_resource: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("robot_project"),
            suite_name: "MySuite.robot".to_string(),
            run: false,
            open_log: false,
            dry_run: false,
            with_lib: false,
            with_resource: false,
        }
    }
}
