use hotfolder_server::{Config, Server, ServerState, init_logger, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 环境 (.env 可选)
    dotenv::dotenv().ok();

    // 2. 加载配置 (HOT_FOLDER 缺失视为启动失败)
    let config = Config::from_env()?;

    // 3. 日志
    init_logger(&config.log_level, config.log_dir.as_deref());

    // 打印横幅
    print_banner();

    tracing::info!(
        hot_folder = %config.print.hot_folder.display(),
        printers = config.print.printers.len(),
        "Hotfolder print server starting..."
    );

    // 4. 初始化服务器状态 (注入只读打印配置快照)
    let state = ServerState::initialize(&config);

    // 5. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
