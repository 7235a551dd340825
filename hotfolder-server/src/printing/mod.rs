//! 打印提交工作流
//!
//! # 模块结构
//!
//! - [`service`] - 提交工作流 (校验 → 解码 → 命名 → 写入)
//! - [`types`] - 请求与字段错误类型
//! - [`messages`] - 可本地化的拒绝消息

pub mod messages;
pub mod service;
pub mod types;

pub use messages::Messages;
pub use service::{PrintService, SubmitError};
pub use types::{FieldError, FieldErrors, PrintRequest, fields};
