//! 转换入口
//!
//! 对应表单的"转换"操作：整理输入、校验、输出大写金额

use crate::amount::{sanitize_input, Amount};
use crate::config::ConverterConfig;
use crate::error::DaxieResult;
use crate::numeral::format_amount;

/// 清空输入后显示的占位结果
pub const CLEARED_DISPLAY: &str = "人民币 零元整";

/// 转换用户输入的金额（默认配置）
///
/// 去掉首尾空白后校验并转换；空输入返回 `EmptyInput`，
/// 格式错误返回 `MalformedAmount`
pub fn convert_amount(raw: &str) -> DaxieResult<String> {
    Converter::default().convert(raw)
}

/// 金额转换器
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    /// 创建新的转换器
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// 整理输入文本（过滤、去空白）
    pub fn prepare(&self, raw: &str) -> String {
        let text = if self.config.sanitize_input {
            sanitize_input(raw)
        } else {
            raw.to_string()
        };

        if self.config.trim_input {
            text.trim().to_string()
        } else {
            text
        }
    }

    /// 只校验，不转换
    pub fn check(&self, raw: &str) -> DaxieResult<()> {
        let text = self.prepare(raw);
        Amount::parse(&text).map(|_| ())
    }

    /// 转换金额
    pub fn convert(&self, raw: &str) -> DaxieResult<String> {
        let text = self.prepare(raw);
        let amount = Amount::parse(&text)?;
        Ok(format_amount(&amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DaxieError;

    #[test]
    fn test_convert_amount_trims() {
        assert_eq!(
            convert_amount("  1234.56\n").unwrap(),
            "人民币壹仟贰佰叁拾肆元伍角陆分"
        );
    }

    #[test]
    fn test_convert_amount_errors() {
        assert!(matches!(convert_amount(""), Err(DaxieError::EmptyInput)));
        assert!(matches!(convert_amount("   "), Err(DaxieError::EmptyInput)));
        assert!(matches!(
            convert_amount("1,000"),
            Err(DaxieError::MalformedAmount(_))
        ));
    }

    #[test]
    fn test_sanitizing_converter() {
        let converter = Converter::new(ConverterConfig {
            sanitize_input: true,
            trim_input: true,
        });
        assert_eq!(converter.convert("¥1,000.509").unwrap(), "人民币壹仟元伍角");
        assert!(matches!(converter.convert("元"), Err(DaxieError::EmptyInput)));
        assert!(matches!(
            converter.convert("1.2.3"),
            Err(DaxieError::MalformedAmount(_))
        ));
    }

    #[test]
    fn test_without_trim() {
        let converter = Converter::new(ConverterConfig {
            sanitize_input: false,
            trim_input: false,
        });
        assert!(matches!(
            converter.convert(" 1"),
            Err(DaxieError::MalformedAmount(_))
        ));
    }

    #[test]
    fn test_check() {
        let converter = Converter::default();
        assert!(converter.check("12.5").is_ok());
        assert!(converter.check("12.555").is_err());
    }

    #[test]
    fn test_cleared_display() {
        assert_eq!(CLEARED_DISPLAY.replace(' ', ""), convert_amount("0").unwrap());
    }
}
