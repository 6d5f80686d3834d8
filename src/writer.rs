//! 输出写入 (一次性整体写入，无原子性保证)

use crate::error::Result;
use crate::types::FilterRule;
use std::fs;
use std::path::Path;

/// 把规则序列以紧凑 JSON 写入目标文件，已存在则截断覆盖
pub fn write_filter_file(path: &Path, rules: &[FilterRule]) -> Result<()> {
    let json = serde_json::to_string(rules)?;
    fs::write(path, json)?;
    Ok(())
}
