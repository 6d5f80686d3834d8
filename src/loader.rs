//! 域名列表加载 (传统原则：常识性接口设计)

use crate::error::Result;
use std::fs;
use std::path::Path;

/// 读取域名列表文件，按 '\n' 逐字切分
///
/// 切分是字面的：不去空白、不处理 \r、不过滤空行，
/// 末尾换行符会产生一个尾部空串条目（兼容性要求，勿"修复"）。
/// 空文件返回空列表。
pub fn read_domain_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    // 零字节文件没有域名可言，"".split('\n') 的 [""] 是切分的副产物
    if content.is_empty() {
        return Ok(Vec::new());
    }

    Ok(content.split('\n').map(str::to_string).collect())
}
