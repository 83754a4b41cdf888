use product_api::{build_app, infrastructure::config::AppConfig, infrastructure::logger::Logger};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    Logger::init(&config.log_level);

    info!("启动 Product API 服务器...");

    let app = build_app(&config);

    let listener = TcpListener::bind(config.address()).await?;

    info!("🚀 Server is running on http://localhost:{}", config.port);
    info!("📖 API 端点:");
    info!("   GET    /                        - 欢迎信息");
    info!("   GET    /api/products            - 产品列表 (category, page, limit)");
    info!("   GET    /api/products/search     - 按名称搜索 (name)");
    info!("   GET    /api/products/stats      - 分类统计");
    info!("   GET    /api/products/:id        - 获取产品");
    info!("   POST   /api/products            - 创建产品");
    info!("   PUT    /api/products/:id        - 更新产品");
    info!("   DELETE /api/products/:id        - 删除产品");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务器已关闭");
    Ok(())
}

/// 等待 Ctrl-C 或 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("无法监听 Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("无法监听 SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("收到关闭信号，开始优雅退出");
}
