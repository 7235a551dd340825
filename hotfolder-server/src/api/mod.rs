//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`print`] - 打印提交与打印机列表

pub mod health;
pub mod print;
