use thiserror::Error;

#[derive(Error, Debug)]
pub enum DaxieError {
    // 输入错误
    #[error("请输入金额")]
    EmptyInput,

    #[error("请输入有效的金额，如：1234.56")]
    MalformedAmount(String),

    #[error("金额超出支持范围：整数部分 {digits} 位，最多 {max} 位")]
    AmountTooLarge { digits: usize, max: usize },

    // 配置错误
    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Config directory not available")]
    ConfigDir,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DaxieError {
    /// 是否为用户输入错误（而非环境/配置错误）
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput | Self::MalformedAmount(_) | Self::AmountTooLarge { .. }
        )
    }
}

pub type DaxieResult<T> = Result<T, DaxieError>;
