//! 公共核心：认证、配置、请求构造、响应解析和通用服务

pub mod auth;
pub mod config;
pub mod options;
pub mod request;
pub mod response;
pub mod service;
