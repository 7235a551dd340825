//! Hotfolder Print Server - 热文件夹打印提交服务
//!
//! # 架构概述
//!
//! 接收打印任务 (base64 文档 + 元数据)，校验并解码后写入外部打印
//! spooler 监视的热文件夹。写入成功即视为提交完成，之后的实际打印
//! 由 spooler 负责，本服务不跟踪打印状态。
//!
//! # 模块结构
//!
//! ```text
//! hotfolder-server/src/
//! ├── core/          # 配置、状态、HTTP 服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── printing/      # 提交工作流 (校验 → 解码 → 命名 → 写入)
//! └── utils/         # 日志等工具
//! ```

pub mod api;
pub mod core;
pub mod printing;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, ConfigError, PrintConfig, Server, ServerState};
pub use printing::{FieldErrors, Messages, PrintRequest, PrintService, SubmitError};

// Re-export logger functions
pub use utils::logger::init_logger;

pub fn print_banner() {
    println!(
        r#"
    __  __      __     ______      __    __
   / / / /___  / /_   / ____/___  / /___/ /__  _____
  / /_/ / __ \/ __/  / /_  / __ \/ / __  / _ \/ ___/
 / __  / /_/ / /_   / __/ / /_/ / / /_/ /  __/ /
/_/ /_/\____/\__/  /_/    \____/_/\__,_/\___/_/
    "#
    );
}
