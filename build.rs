use std::fs;

fn main() {
    // 从 VERSION 文件读取版本号，编译期注入
    let version = fs::read_to_string("VERSION")
        .expect("Failed to read VERSION file")
        .trim()
        .to_string();

    println!("cargo:rustc-env=APP_VERSION={}", version);

    // VERSION 变更时触发重新编译
    println!("cargo:rerun-if-changed=VERSION");
}
