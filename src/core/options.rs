//! Options 构造与必填参数校验

use crate::error::{Result, SdkError};

/// 必填参数收集器
///
/// 依次检查所有必填字段，最后一次性报告全部缺失项。
#[derive(Debug)]
pub struct RequiredFields {
    operation: &'static str,
    missing: Vec<String>,
}

impl RequiredFields {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            missing: Vec::new(),
        }
    }

    /// 字符串参数：只有空字符串视为未设置，空白字符原样发送
    #[must_use]
    pub fn text(mut self, name: &str, value: &str) -> Self {
        if value.is_empty() {
            self.missing.push(name.to_string());
        }
        self
    }

    #[must_use]
    pub fn present<T>(mut self, name: &str, value: Option<&T>) -> Self {
        if value.is_none() {
            self.missing.push(name.to_string());
        }
        self
    }

    #[must_use]
    pub fn non_empty<T>(mut self, name: &str, values: &[T]) -> Self {
        if values.is_empty() {
            self.missing.push(name.to_string());
        }
        self
    }

    pub fn finish(self) -> Result<()> {
        if self.missing.is_empty() {
            return Ok(());
        }
        log::debug!("[{}] 参数校验失败: {:?}", self.operation, self.missing);
        Err(SdkError::Validation {
            operation: self.operation,
            missing: self.missing,
        })
    }
}

/// 为 Options 类型生成调用级设置
///
/// 要求结构体包含 `headers: HashMap<String, String>` 和 `timeout: Option<Duration>` 字段。
macro_rules! call_options {
    ($($options:ty),+ $(,)?) => {
        $(
            impl $crate::traits::CallOptions for $options {
                fn headers(&self) -> &::std::collections::HashMap<String, String> {
                    &self.headers
                }

                fn timeout(&self) -> Option<::std::time::Duration> {
                    self.timeout
                }
            }

            impl $options {
                /// 追加一个自定义 header
                #[must_use]
                pub fn with_header(
                    mut self,
                    name: impl Into<String>,
                    value: impl Into<String>,
                ) -> Self {
                    self.headers.insert(name.into(), value.into());
                    self
                }

                /// 替换全部自定义 header
                #[must_use]
                pub fn with_headers(
                    mut self,
                    headers: ::std::collections::HashMap<String, String>,
                ) -> Self {
                    self.headers = headers;
                    self
                }

                /// 本次调用的超时时间
                #[must_use]
                pub fn with_timeout(mut self, timeout: ::std::time::Duration) -> Self {
                    self.timeout = Some(timeout);
                    self
                }
            }
        )+
    };
}

pub(crate) use call_options;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_every_missing_field() {
        let err = RequiredFields::new("update_filter")
            .text("x_auth_user_token", "")
            .text("crn", "crn:v1")
            .text("zone_identifier", "")
            .present::<String>("expression", None)
            .non_empty::<u8>("ids", &[])
            .finish()
            .unwrap_err();

        match err {
            SdkError::Validation { operation, missing } => {
                assert_eq!(operation, "update_filter");
                assert_eq!(
                    missing,
                    vec!["x_auth_user_token", "zone_identifier", "expression", "ids"]
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_whitespace_counts_as_set() {
        assert!(
            RequiredFields::new("get_filter")
                .text("crn", " ")
                .text("zone_identifier", "\t")
                .finish()
                .is_ok()
        );
    }

    #[test]
    fn test_all_present() {
        assert!(
            RequiredFields::new("get_filter")
                .text("crn", "crn:v1")
                .present("paused", Some(&false))
                .non_empty("ids", &[1])
                .finish()
                .is_ok()
        );
    }
}
