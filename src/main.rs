use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use robot_scaffold::{create_project, ProjectConfig};

/// Robot Framework Project Scaffolder
///
/// 生成 Robot Framework 测试项目，可选附带 Python 库和资源文件
#[derive(Parser)]
#[command(name = "robot-scaffold")]
#[command(author, version = env!("APP_VERSION"), about)]
#[command(
    long_about = "Generates a Robot Framework test suite with optional library and resource.\n\
                        All templates are embedded in the binary - no external files required."
)]
struct Cli {
    /// Directory to create the Robot Framework project in
    #[arg(long, default_value = "robot_project")]
    project_dir: PathBuf,

    /// Name of the Robot Framework file to generate
    #[arg(long, default_value = "MySuite.robot")]
    suite_name: String,

    /// Run the generated Robot Framework test suite
    #[arg(long)]
    run: bool,

    /// Open the log file after running the test suite
    #[arg(long)]
    open_log: bool,

    /// Perform a dry run without creating files
    #[arg(long)]
    dry_run: bool,

    /// Include custom Python library (libraries/MyLibrary.py)
    #[arg(long)]
    with_lib: bool,

    /// Include custom resource file (resources/MyResource.robot)
    #[arg(long)]
    with_resource: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ProjectConfig {
        project_dir: cli.project_dir,
        suite_name: cli.suite_name,
        run: cli.run,
        open_log: cli.open_log,
        dry_run: cli.dry_run,
        with_lib: cli.with_lib,
        with_resource: cli.with_resource,
    };

    create_project(&config)
}
