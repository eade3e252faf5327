//! 外部 runner 模块
//!
//! robot 命令路径解析、阻塞式套件执行、log.html 查看器调用

pub mod log_viewer;
pub mod resolver;
pub mod robot;

// 重导出
pub use log_viewer::open_log;
pub use resolver::resolve_robot_path;
pub use robot::run_suite;
