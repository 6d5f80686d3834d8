//! CLI 参数定义
//!
//! 所有参数校验都放在 value_parser 里，失败时由 clap 统一
//! 打印 usage 到 stderr 并以退出码 2 结束，不会触碰输出文件。

use clap::Parser;
use std::path::PathBuf;

/// admiral-block - 生成 Untangle WebFilter 的 Admiral 域名屏蔽列表
#[derive(Parser)]
#[command(
    name = "admiral-block",
    version = "0.1.0",
    about = "生成 Untangle WebFilter 的 Admiral 域名屏蔽列表",
    long_about = "读取换行分隔的域名列表文件，为每个域名生成一条带递增 ID 的 GenericRule 规则，并将规则数组以 JSON 写入输出文件"
)]
pub struct Cli {
    /// 包含待屏蔽 Admiral 域名的列表文件
    #[arg(short = 'd', long = "domains", value_parser = parse_domain_file)]
    pub domain_file: PathBuf,

    /// 输出文件名
    #[arg(
        short = 'o',
        long = "out_file",
        default_value = "untangle_admiral_block.json"
    )]
    pub out_file: PathBuf,

    /// 输出列表中第一条规则使用的 ID
    #[arg(
        short = 's',
        long = "start_id",
        default_value_t = 1,
        allow_negative_numbers = true,
        value_parser = parse_start_id
    )]
    pub rule_id: u32,

    /// 详细输出模式
    #[arg(short, long)]
    pub verbose: bool,
}

/// 校验域名文件路径指向一个已存在的普通文件
fn parse_domain_file(arg: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(arg);
    if path.is_file() {
        Ok(path)
    } else {
        Err(format!("文件 {} 不存在", arg))
    }
}

/// 校验起始 ID 是非负整数
fn parse_start_id(arg: &str) -> Result<u32, String> {
    let value: i64 = arg
        .parse()
        .map_err(|_| format!("{} 不是有效的整数", arg))?;
    if value < 0 {
        return Err(format!("{} 不是有效的非负整数", arg));
    }
    u32::try_from(value).map_err(|_| format!("{} 超出规则 ID 的取值范围", arg))
}
