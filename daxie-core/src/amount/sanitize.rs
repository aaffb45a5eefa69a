//! 输入过滤
//!
//! 对应表单输入框的实时过滤：只保留数字和小数点，限制小数位数

/// 过滤用户输入的金额文本
///
/// 规则：
/// - 删除数字和小数点以外的字符
/// - 出现多个小数点时，去掉末尾的小数点
/// - 小数点后超过两位时截断为两位（第二个小数点之后的内容一并丢弃）
///
/// 过滤结果不保证是合法金额（例如 "1.2.3" 原样保留），仍需校验
pub fn sanitize_input(raw: &str) -> String {
    let mut value: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if value.matches('.').count() > 1 {
        let trimmed_len = value.trim_end_matches('.').len();
        value.truncate(trimmed_len);
    }

    if value.contains('.') {
        let mut parts = value.split('.');
        let integer = parts.next().unwrap_or_default();
        let fraction = parts.next().unwrap_or_default();
        if fraction.len() > 2 {
            value = format!("{}.{}", integer, &fraction[..2]);
        }
    }

    value
}
