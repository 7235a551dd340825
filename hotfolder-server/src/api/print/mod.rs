//! Print API 模块
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/printers | GET | 配置的打印机列表 |
//! | /api/print | POST | 提交打印任务 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/printers", get(handler::list_printers))
        .route("/api/print", post(handler::submit))
}
