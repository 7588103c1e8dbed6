//! Text written into the bundle and to the console

use std::path::Path;

/// Label preceding each path. The colon is full-width (U+FF1A).
pub const LABEL_PREFIX: &str = "文件名：";

/// Written after every content block
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Header line for one entry, including its trailing newline
pub fn label_line(path: &str) -> String {
    format!("{}{}\n", LABEL_PREFIX, path)
}

/// Substituted in place of content when the path does not exist
pub fn not_found_message(path: &str) -> String {
    format!("文件不存在: {}", path)
}

/// Substituted in place of content for any other read failure
pub fn read_error_message(path: &str, details: &str) -> String {
    format!("读取文件时出错: {}\n错误: {}", path, details)
}

/// Printed on stdout once the bundle is written
pub fn confirmation_message(output_path: &Path) -> String {
    format!("文件内容已成功导出到 {}", output_path.display())
}
