//! 规则构造 (模块原则：纯函数，无副作用)

use crate::error::{AppError, Result};
use crate::types::FilterRule;

/// 把域名序列映射为 WebFilter 规则序列
///
/// 第 i 个域名（0 起）得到 `id = start_id + i`，顺序与输入一致。
/// 不校验域名内容：空串、畸形域名、重复项全部原样通过。
/// ID 必须严格递增，start_id 靠近 u32::MAX 时加法可能越界，
/// 用 checked_add 把越界显式转成错误而不是回绕出重复 ID。
pub fn create_webfilter_rules(domains: &[String], start_id: u32) -> Result<Vec<FilterRule>> {
    domains
        .iter()
        .enumerate()
        .map(|(idx, domain)| {
            let id = u32::try_from(idx)
                .ok()
                .and_then(|offset| start_id.checked_add(offset))
                .ok_or(AppError::RuleIdOverflow {
                    start_id,
                    index: idx,
                })?;
            Ok(FilterRule::new(domain.clone(), id))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RULE_DESCRIPTION, RULE_JAVA_CLASS};

    fn domains(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_length_and_order_match_input() {
        let input = domains(&["a.com", "b.com", "c.com"]);
        let rules = create_webfilter_rules(&input, 1).unwrap();

        assert_eq!(rules.len(), input.len());
        for (i, rule) in rules.iter().enumerate() {
            assert_eq!(rule.string, input[i]);
            assert_eq!(rule.id, 1 + i as u32);
        }
    }

    #[test]
    fn test_start_id_offset() {
        let input = domains(&["a.com", "b.com"]);
        let rules = create_webfilter_rules(&input, 100).unwrap();

        assert_eq!(rules[0].id, 100);
        assert_eq!(rules[1].id, 101);
    }

    #[test]
    fn test_start_id_zero() {
        let rules = create_webfilter_rules(&domains(&["a.com"]), 0).unwrap();
        assert_eq!(rules[0].id, 0);
    }

    #[test]
    fn test_empty_input() {
        let rules = create_webfilter_rules(&[], 1).unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_fixed_fields() {
        let rules = create_webfilter_rules(&domains(&["a.com"]), 1).unwrap();
        let rule = &rules[0];

        assert!(rule.blocked);
        assert!(rule.flagged);
        assert_eq!(rule.java_class, RULE_JAVA_CLASS);
        assert_eq!(rule.description, RULE_DESCRIPTION);
        assert_eq!(rule.name, None);
        assert_eq!(rule.read_only, None);
        assert_eq!(rule.category, None);
        assert_eq!(rule.enabled, None);
    }

    #[test]
    fn test_no_content_validation() {
        // 空串与重复域名不去重、不过滤
        let input = domains(&["", "dup.com", "dup.com"]);
        let rules = create_webfilter_rules(&input, 5).unwrap();

        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].string, "");
        assert_eq!(rules[0].id, 5);
        assert_eq!(rules[2].string, "dup.com");
        assert_eq!(rules[2].id, 7);
    }

    #[test]
    fn test_single_rule_at_u32_max() {
        // 上界本身仍是合法 ID
        let rules = create_webfilter_rules(&domains(&["a.com"]), u32::MAX).unwrap();
        assert_eq!(rules[0].id, u32::MAX);
    }

    #[test]
    fn test_id_overflow_near_u32_max_rejected() {
        // start_id = u32::MAX 且有两条输入时第二个 ID 越界，
        // 必须报错而不是回绕产生重复 ID
        let input = domains(&["a.com", "b.com"]);
        let err = create_webfilter_rules(&input, u32::MAX).unwrap_err();

        assert!(matches!(
            err,
            AppError::RuleIdOverflow {
                start_id: u32::MAX,
                index: 1,
            }
        ));
    }
}
