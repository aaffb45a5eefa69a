//! 大写金额格式化
//!
//! 整数部分按四位一组处理，组内单位为拾佰仟，组间单位为万亿兆；
//! 连续的零只输出一个"零"

use crate::amount::Amount;
use crate::error::DaxieResult;
use crate::numeral::{
    CURRENCY_UNIT, DIGITS, FRACTION_UNITS, GROUP_SIZE, LARGE_UNITS, PREFIX, SMALL_UNITS,
    WHOLE_TERMINAL,
};

/// 将金额文本转换为人民币大写
///
/// # 参数
/// - `amount`: 金额文本（例如："1234.56"）
///
/// # 返回
/// - `Ok(String)`: 大写金额（例如："人民币壹仟贰佰叁拾肆元伍角陆分"）
/// - `Err`: 文本不是合法金额，或整数部分超出支持范围
///
/// # 示例
/// ```
/// use daxie_core::convert_to_chinese;
/// assert_eq!(convert_to_chinese("100.00").unwrap(), "人民币壹佰元整");
/// ```
pub fn convert_to_chinese(amount: &str) -> DaxieResult<String> {
    let amount = Amount::parse(amount)?;
    Ok(format_amount(&amount))
}

/// 格式化已校验的金额
pub fn format_amount(amount: &Amount<'_>) -> String {
    let mut result = String::from(PREFIX);

    write_integer(&mut result, amount);
    write_fraction(&mut result, amount);

    tracing::debug!(
        "转换金额: {}.{} → {}",
        amount.integer(),
        amount.fraction(),
        result
    );
    result
}

/// 写入整数部分（含"元"）
fn write_integer(out: &mut String, amount: &Amount<'_>) {
    if amount.is_integer_zero() {
        out.push_str(DIGITS[0]);
        out.push_str(CURRENCY_UNIT);
        return;
    }

    let digits = amount.integer().as_bytes();
    let len = digits.len();
    // 零计数跨组累加，不在组边界清零
    let mut zero_count = 0usize;

    for (i, &b) in digits.iter().enumerate() {
        let digit = usize::from(b - b'0');
        let pos = len - i - 1;
        let group = pos / GROUP_SIZE;
        let unit = pos % GROUP_SIZE;

        if digit == 0 {
            zero_count += 1;
        } else {
            if zero_count > 0 {
                out.push_str(DIGITS[0]);
            }
            zero_count = 0;
            out.push_str(DIGITS[digit]);
            out.push_str(SMALL_UNITS[unit]);
        }

        // 组末尾：整组为零时不输出大单位
        if unit == 0 && zero_count < GROUP_SIZE {
            out.push_str(LARGE_UNITS[group]);
        }
    }

    out.push_str(CURRENCY_UNIT);
}

/// 写入小数部分（角分或"整"）
///
/// 小数部分全为零（包括单个 "0"）一律以"整"结尾，例如 "2.0" → "贰元整"，不输出"贰元零"
fn write_fraction(out: &mut String, amount: &Amount<'_>) {
    if amount.is_fraction_zero() {
        out.push_str(WHOLE_TERMINAL);
        return;
    }

    let digits = amount.fraction().as_bytes();
    for (i, &b) in digits.iter().enumerate().take(FRACTION_UNITS.len()) {
        let digit = usize::from(b - b'0');
        if digit != 0 {
            out.push_str(DIGITS[digit]);
            out.push_str(FRACTION_UNITS[i]);
        } else if i == 0 {
            // 角位为零而分位非零：补一个"零"，不带单位
            out.push_str(DIGITS[0]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DaxieError;

    fn convert(text: &str) -> String {
        convert_to_chinese(text).unwrap()
    }

    #[test]
    fn test_zero() {
        assert_eq!(convert("0"), "人民币零元整");
        assert_eq!(convert("0.00"), "人民币零元整");
        assert_eq!(convert("000"), "人民币零元整");
    }

    #[test]
    fn test_single_digit() {
        assert_eq!(convert("1"), "人民币壹元整");
        assert_eq!(convert("9"), "人民币玖元整");
    }

    #[test]
    fn test_full_group() {
        assert_eq!(convert("1234.56"), "人民币壹仟贰佰叁拾肆元伍角陆分");
        assert_eq!(convert("9999"), "人民币玖仟玖佰玖拾玖元整");
    }

    #[test]
    fn test_trailing_zeros_in_group() {
        assert_eq!(convert("100.00"), "人民币壹佰元整");
        assert_eq!(convert("10"), "人民币壹拾元整");
        assert_eq!(convert("1000"), "人民币壹仟元整");
    }

    #[test]
    fn test_inner_zero_run() {
        assert_eq!(convert("1001"), "人民币壹仟零壹元整");
        assert_eq!(convert("1010"), "人民币壹仟零壹拾元整");
        assert_eq!(convert("105"), "人民币壹佰零伍元整");
    }

    #[test]
    fn test_zero_run_across_group_boundary() {
        assert_eq!(convert("10001"), "人民币壹万零壹元整");
        assert_eq!(convert("100010"), "人民币壹拾万零壹拾元整");
        assert_eq!(convert("1000000001"), "人民币壹拾亿零壹元整");
    }

    #[test]
    fn test_large_units() {
        assert_eq!(convert("10000"), "人民币壹万元整");
        assert_eq!(convert("100000000"), "人民币壹亿元整");
        assert_eq!(convert("120000000"), "人民币壹亿贰仟万元整");
        assert_eq!(convert("1000000000000"), "人民币壹兆元整");
        assert_eq!(convert("100010000"), "人民币壹亿零壹万元整");
    }

    #[test]
    fn test_max_magnitude() {
        assert_eq!(
            convert("9999999999999999"),
            "人民币玖仟玖佰玖拾玖兆玖仟玖佰玖拾玖亿玖仟玖佰玖拾玖万玖仟玖佰玖拾玖元整"
        );
        assert!(matches!(
            convert_to_chinese("10000000000000000"),
            Err(DaxieError::AmountTooLarge { .. })
        ));
    }

    #[test]
    fn test_leading_zeros() {
        // 前导零计入零计数，在首个非零数字前输出一个"零"
        assert_eq!(convert("012"), "人民币零壹拾贰元整");
        assert_eq!(convert("0001.50"), "人民币零壹元伍角");
    }

    #[test]
    fn test_fraction() {
        assert_eq!(convert("1000.5"), "人民币壹仟元伍角");
        assert_eq!(convert("1.50"), "人民币壹元伍角");
        assert_eq!(convert("0.05"), "人民币零元零伍分");
        assert_eq!(convert("3.07"), "人民币叁元零柒分");
        assert_eq!(convert("0.5"), "人民币零元伍角");
    }

    #[test]
    fn test_all_zero_fraction_is_whole() {
        assert_eq!(convert("2.0"), "人民币贰元整");
        assert_eq!(convert("2.00"), "人民币贰元整");
        assert_eq!(convert("0.0"), "人民币零元整");
    }

    #[test]
    fn test_rejects_unvalidated_text() {
        assert!(matches!(convert_to_chinese(""), Err(DaxieError::EmptyInput)));
        assert!(matches!(
            convert_to_chinese("12.345"),
            Err(DaxieError::MalformedAmount(_))
        ));
    }

    #[test]
    fn test_deterministic() {
        let first = convert("80604.03");
        for _ in 0..10 {
            assert_eq!(convert("80604.03"), first);
        }
        assert_eq!(first, "人民币捌万零陆佰零肆元零叁分");
    }
}
