use std::path::PathBuf;

/// 服务器配置 - 打印网关的所有配置项
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | HOT_FOLDER | (必填) | 热文件夹路径，外部 spooler 监视的目录 |
/// | PRINTERS | (空) | 打印机显示名称，逗号分隔，保持顺序 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 日志文件目录 (按天滚动) |
///
/// # 示例
///
/// ```ignore
/// HOT_FOLDER=/var/spool/hotfolder PRINTERS="Printer 1,Printer 2" cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 打印配置快照，启动后只读
    pub print: PrintConfig,
    /// 日志级别
    pub log_level: String,
    /// 日志文件目录 (可选)
    pub log_dir: Option<String>,
}

/// 打印配置 - 热文件夹与打印机列表
///
/// 进程启动时加载一次，之后所有请求共享同一只读快照。
#[derive(Debug, Clone)]
pub struct PrintConfig {
    /// 热文件夹绝对路径，外部 spooler 从这里取走新文件
    pub hot_folder: PathBuf,
    /// 打印机显示名称 (顺序即展示顺序，允许重复)
    pub printers: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("HOT_FOLDER is not set; the server cannot accept print jobs without a hot folder")]
    MissingHotFolder,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// HOT_FOLDER 必填，其余配置项未设置时使用默认值。
    pub fn from_env() -> Result<Self, ConfigError> {
        let hot_folder = std::env::var("HOT_FOLDER").map_err(|_| ConfigError::MissingHotFolder)?;

        Ok(Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            print: PrintConfig {
                hot_folder: PathBuf::from(hot_folder),
                printers: std::env::var("PRINTERS")
                    .map(|raw| parse_printers(&raw))
                    .unwrap_or_default(),
            },
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        })
    }
}

/// 解析 PRINTERS 环境变量 (逗号分隔，保持顺序)
fn parse_printers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
