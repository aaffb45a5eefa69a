//! 金额输入模块
//!
//! 校验金额文本格式，并把合法文本拆分为整数部分和小数部分

mod sanitize;

pub use sanitize::sanitize_input;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{DaxieError, DaxieResult};
use crate::numeral::MAX_INTEGER_DIGITS;

/// 金额格式：整数或最多两位小数的非负数
///
/// 只接受 ASCII 数字，不允许符号、空白和千分位分隔符
static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(\.[0-9]{1,2})?$").expect("amount pattern is valid"));

/// 检查文本是否为合法金额
///
/// # 示例
/// ```
/// use daxie_core::is_valid_amount;
/// assert!(is_valid_amount("1234.56"));
/// assert!(!is_valid_amount("1234.567"));
/// ```
pub fn is_valid_amount(text: &str) -> bool {
    AMOUNT_PATTERN.is_match(text)
}

/// 已校验的金额
///
/// 只能通过 [`Amount::parse`] 构造，持有原始文本的切片
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount<'a> {
    /// 整数部分（至少一位数字）
    integer: &'a str,
    /// 小数部分（0-2 位数字）
    fraction: &'a str,
}

impl<'a> Amount<'a> {
    /// 校验并拆分金额文本
    ///
    /// # 返回
    /// - `Err(EmptyInput)`: 空字符串
    /// - `Err(MalformedAmount)`: 不符合金额格式
    /// - `Err(AmountTooLarge)`: 整数部分超过大单位表支持的位数
    pub fn parse(text: &'a str) -> DaxieResult<Self> {
        if text.is_empty() {
            return Err(DaxieError::EmptyInput);
        }

        if !is_valid_amount(text) {
            tracing::warn!("金额格式无效: {:?}", text);
            return Err(DaxieError::MalformedAmount(text.to_string()));
        }

        let (integer, fraction) = text.split_once('.').unwrap_or((text, ""));

        if integer.len() > MAX_INTEGER_DIGITS {
            tracing::warn!("金额超出范围: 整数部分 {} 位", integer.len());
            return Err(DaxieError::AmountTooLarge {
                digits: integer.len(),
                max: MAX_INTEGER_DIGITS,
            });
        }

        Ok(Self { integer, fraction })
    }

    /// 整数部分数字串
    pub fn integer(&self) -> &'a str {
        self.integer
    }

    /// 小数部分数字串（可能为空）
    pub fn fraction(&self) -> &'a str {
        self.fraction
    }

    /// 整数部分是否为零（全部为 '0'）
    pub fn is_integer_zero(&self) -> bool {
        self.integer.bytes().all(|b| b == b'0')
    }

    /// 小数部分是否缺省或全部为 '0'
    pub fn is_fraction_zero(&self) -> bool {
        self.fraction.bytes().all(|b| b == b'0')
    }
}
