//! 错误处理模块 (修复原则：明确抛出异常)
//!
//! 参数校验错误由 clap 直接处理（usage 信息 + 退出码 2），
//! 这里只覆盖参数解析之后的运行期错误。

use std::error::Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("文件IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON序列化错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("规则 ID 溢出: 起始 ID {start_id} 加上第 {index} 个条目超出 u32 范围")]
    RuleIdOverflow { start_id: u32, index: usize },
}

/// 详细的错误报告函数 (透明原则)
impl AppError {
    /// 报告错误，支持详细/安静模式
    /// verbose = true: 详细错误链
    /// verbose = false: 关键信息，安静模式
    pub fn report(&self, verbose: bool) {
        if verbose {
            // 详细模式：打印完整错误链
            eprintln!("❌ 错误: {}", self);

            // 如果有源错误，打印级联信息
            // (thiserror 支持自动的 source() 链)
            if let Some(source) = self.source() {
                eprintln!("  └─ 原因: {}", source);
                let mut current = source.source();
                while let Some(next) = current {
                    eprintln!("     └─ {}", next);
                    current = next.source();
                }
            }
        } else {
            // 安静模式：只打印关键信息
            match self {
                AppError::Io(err) => eprintln!("文件错误: {}", err),
                AppError::Json(err) => eprintln!("序列化错误: {}", err),
                AppError::RuleIdOverflow { .. } => eprintln!("错误: {}", self),
            }
        }
    }
}

/// 简化 Result 类型别名
pub type Result<T> = std::result::Result<T, AppError>;
