//! 请求提取器
//!
//! 包装 axum 内置提取器，拒绝时统一返回 `CoreError`。

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::CoreError;

/// 从原始 JSON 构造经过校验的输入类型
pub trait Validate: Sized {
    fn validate(payload: &Value) -> Result<Self, CoreError>;
}

/// 只有通过校验的请求体才会交给处理器
///
/// 空请求体按 `{}` 处理，无法解析的 JSON 返回 400。
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: Validate,
    S: Send + Sync,
{
    type Rejection = CoreError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| CoreError::Validation(e.body_text()))?;

        let payload = if body.iter().all(u8::is_ascii_whitespace) {
            Value::Object(Default::default())
        } else {
            serde_json::from_slice(&body)
                .map_err(|_| CoreError::Validation("Invalid JSON payload".to_string()))?
        };

        T::validate(&payload).map(ValidatedJson)
    }
}

/// 查询参数提取器，解析失败时返回 400 JSON 错误
#[derive(Debug)]
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = CoreError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| CoreError::Validation(e.body_text()))?;
        Ok(QueryParams(query))
    }
}

/// 路径参数提取器
#[derive(Debug)]
pub struct PathParam<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = CoreError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| CoreError::Validation(e.body_text()))?;
        Ok(PathParam(value))
    }
}
