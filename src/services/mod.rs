//! 资源服务
//!
//! 每个模块对应一组 REST 资源，结构一致：
//! - `types`: 响应模型
//! - `options`: 操作参数与请求映射
//! - `service`: 服务方法

pub mod alerts;
pub mod edge_functions;
pub mod filters;
pub mod page_rules;
pub mod rate_limits;
