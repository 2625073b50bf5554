use common::utils::logging::init_logging_json;
use dotenvy::dotenv;
use gateway::bootstrap;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging() {
    // 加载 .env（允许使用 RUST_LOG / UPSTREAM_URL 配置）
    dotenv().ok();
    // 使用统一的JSON结构化日志初始化
    init_logging_json();
    info!(service = "gateway", event = "logger_init", "tracing subscriber initialized");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(service = "gateway", event = "signal_error", error = %e, "failed to listen for Ctrl+C");
        return;
    }
    info!(service = "gateway", event = "shutdown_signal", "received Ctrl+C, shutting down");
}

fn main() -> std::process::ExitCode {
    init_logging();

    // 生成服务实例上下文（不含敏感信息）
    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "gateway",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "gateway", event = "config_invalid", error = %e, "failed to load configuration");
            return std::process::ExitCode::FAILURE;
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "gateway", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "gateway",
        event = "start",
        %service_id,
        pid,
        version,
        upstream = %cfg.gateway.upstream_url,
        "gateway service starting"
    );

    match rt.block_on(bootstrap::run(cfg, shutdown_signal())) {
        Ok(()) => {
            info!(service = "gateway", event = "stop", %service_id, pid, "gateway service stopped");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "gateway", event = "run_failed", error = %e, "gateway::bootstrap returned error");
            std::process::ExitCode::FAILURE
        }
    }
}
