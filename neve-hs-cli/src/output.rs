//! Output formatting utilities.
//! 输出格式化工具。

use neve_cabal::DependencyHandle;

/// Print a warning message in yellow.
/// 以黄色打印警告消息。
pub fn warning(msg: &str) {
    eprintln!("\x1b[33mwarning:\x1b[0m {msg}");
}

/// Print a section header in bold.
/// 以粗体打印章节标题。
pub fn header(title: &str, count: usize) {
    println!("\x1b[1m{title}\x1b[0m ({count})");
}

/// Print a list of dependency handles, one per line.
/// 逐行打印依赖句柄列表。
pub fn handles(list: &[DependencyHandle]) {
    if list.is_empty() {
        println!("  (none)");
        return;
    }
    for handle in list {
        println!("  {handle}");
    }
}
