//! 核心层：错误映射、中间件、提取器与响应结构

pub mod error;
pub mod extract;
pub mod middleware;
pub mod response;
