use std::sync::Arc;

use crate::core::Config;
use crate::printing::{Messages, PrintService};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求处理器克隆一份即可。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Arc\<Config\> | 配置项 (不可变) |
/// | printing | PrintService | 打印提交服务 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Arc<Config>,
    /// 打印提交服务
    pub printing: PrintService,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 打印配置快照在此处注入一次，之后所有并发请求共享同一只读
    /// 快照，无需加锁。
    pub fn initialize(config: &Config) -> Self {
        let print_config = Arc::new(config.print.clone());

        // 热文件夹可能由 spooler 稍后挂载，这里只提示不报错；
        // 可写性在每次提交时重新验证
        if !print_config.hot_folder.is_dir() {
            tracing::warn!(
                hot_folder = %print_config.hot_folder.display(),
                "hot folder is not a directory yet; submissions will fail until it exists"
            );
        }

        let messages = Arc::new(Messages::from_env());

        Self {
            config: Arc::new(config.clone()),
            printing: PrintService::new(print_config, messages),
        }
    }
}
