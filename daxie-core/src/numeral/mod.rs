//! 大写数字模块
//!
//! 将已校验的金额转换为人民币大写金额

pub mod formatter;

pub use formatter::{convert_to_chinese, format_amount};

/// 数字大写：0-9
pub const DIGITS: [&str; 10] = ["零", "壹", "贰", "叁", "肆", "伍", "陆", "柒", "捌", "玖"];

/// 组内单位：个、拾、佰、仟
pub const SMALL_UNITS: [&str; 4] = ["", "拾", "佰", "仟"];

/// 大单位：每四位一组
pub const LARGE_UNITS: [&str; 4] = ["", "万", "亿", "兆"];

/// 小数单位：角、分
pub const FRACTION_UNITS: [&str; 2] = ["角", "分"];

/// 金额前缀
pub const PREFIX: &str = "人民币";

/// 货币单位
pub const CURRENCY_UNIT: &str = "元";

/// 无角分时的结尾
pub const WHOLE_TERMINAL: &str = "整";

/// 每组位数
pub const GROUP_SIZE: usize = SMALL_UNITS.len();

/// 整数部分最多位数（大单位表之外无法表示）
pub const MAX_INTEGER_DIGITS: usize = GROUP_SIZE * LARGE_UNITS.len();
