//! 核心数据结构定义 (表达原则：用数据结构表达逻辑)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Untangle GenericRule 的固定 javaClass 标识
pub const RULE_JAVA_CLASS: &str = "com.untangle.uvm.app.GenericRule";

/// 所有生成规则共用的固定描述文本
pub const RULE_DESCRIPTION: &str = "Admiral A**holes";

/// 单条 WebFilter 屏蔽规则
///
/// 字段声明顺序即 JSON 输出顺序，必须与 Untangle 期望的
/// 规则格式保持一致。`name`/`readOnly`/`category`/`enabled`
/// 始终序列化为 null。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterRule {
    pub blocked: bool,
    pub flagged: bool,
    /// 域名原文，逐字节保留输入内容（不做任何清洗）
    pub string: String,
    #[serde(rename = "javaClass")]
    pub java_class: String,
    pub name: Option<String>,
    pub description: String,
    #[serde(rename = "readOnly")]
    pub read_only: Option<bool>,
    pub id: u32,
    pub category: Option<String>,
    pub enabled: Option<bool>,
}

impl FilterRule {
    /// 构造一条屏蔽规则，除域名和 ID 外全部取固定值
    pub fn new(domain: String, id: u32) -> Self {
        Self {
            blocked: true,
            flagged: true,
            string: domain,
            java_class: RULE_JAVA_CLASS.to_string(),
            name: None,
            description: RULE_DESCRIPTION.to_string(),
            read_only: None,
            id,
            category: None,
            enabled: None,
        }
    }
}

/// 校验后的运行配置 (按值传递，不依赖共享解析器状态)
#[derive(Debug, Clone)]
pub struct Config {
    /// 域名列表文件路径（已通过存在性校验）
    pub domain_file: PathBuf,
    /// 输出文件路径，按原样使用
    pub out_file: PathBuf,
    /// 第一条规则的 ID
    pub rule_id: u32,
    /// 是否详细输出
    pub verbose: bool,
}
