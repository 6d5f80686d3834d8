//! admiral-block 主程序入口
//!
//! 设计原则：
//! - 模块化：入口代码简洁，逻辑委托给各模块
//! - 安静模式：默认无输出，成功静默
//! - 错误处理：详细/安静错误模式，通过 --verbose 切换
//!
//! 流水线：参数解析 → 加载域名列表 → 构造规则 → 写出 JSON，
//! 单线程顺序执行，首个未处理错误即终止。

mod cli;
mod error;
mod loader;
mod rules;
mod types;
mod writer;

use clap::Parser;
use cli::Cli;
use error::Result;
use types::Config;

fn main() {
    // 解析 CLI 参数（校验失败时 clap 打印 usage 并以退出码 2 结束）
    let cli = Cli::parse();
    let config = init_config(cli);

    match run(&config) {
        Ok(count) => {
            // 静默成功 - 符合安静原则
            if config.verbose {
                println!(
                    "✓ 已写入 {} 条规则到 {}",
                    count,
                    config.out_file.display()
                );
            }
        }
        Err(e) => {
            e.report(config.verbose);
            std::process::exit(1);
        }
    }
}

/// 从解析结果构造配置 (按值传递，无共享解析器状态)
fn init_config(cli: Cli) -> Config {
    Config {
        domain_file: cli.domain_file,
        out_file: cli.out_file,
        rule_id: cli.rule_id,
        verbose: cli.verbose,
    }
}

/// 执行完整流水线，返回写出的规则数
fn run(config: &Config) -> Result<usize> {
    let domains = loader::read_domain_list(&config.domain_file)?;
    let filter_rules = rules::create_webfilter_rules(&domains, config.rule_id)?;
    writer::write_filter_file(&config.out_file, &filter_rules)?;
    Ok(filter_rules.len())
}
