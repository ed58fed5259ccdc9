//! 集成测试公共工具

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use edge_security_sdk::{
    BearerTokenAuthenticator, HttpRequest, HttpTransport, NoAuth, RawResponse, Result,
    ServiceConfig,
};

pub const CRN: &str = "crn-test-instance";
pub const ZONE: &str = "zone-0123456789";
pub const TOKEN: &str = "token-1";

/// 指向 mock server 的配置（Bearer 认证）
pub fn config(name: &str, uri: &str) -> ServiceConfig {
    ServiceConfig::new(name, BearerTokenAuthenticator::new(TOKEN)).with_url(uri)
}

/// 只统计调用次数的传输层
#[derive(Debug, Default)]
pub struct CountingTransport {
    calls: AtomicUsize,
}

impl CountingTransport {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpTransport for CountingTransport {
    async fn send(&self, _request: HttpRequest) -> Result<RawResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(RawResponse::new(200, vec![], vec![]))
    }
}

/// 使用计数传输层的配置
pub fn spy_config(name: &str) -> (ServiceConfig, Arc<CountingTransport>) {
    let spy = Arc::new(CountingTransport::default());
    let config = ServiceConfig::new(name, NoAuth)
        .with_url("https://api.example.com")
        .with_transport(spy.clone());
    (config, spy)
}
