use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = server::startup::load_config()?;
    let worker_threads = cfg.server.worker_threads.unwrap_or(4);

    // Instance context for log correlation (no sensitive data)
    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "my-books",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let outcome = server::run().await;
        match &outcome {
            Ok(()) => info!(service = "my-books", event = "stop", %service_id, pid, version, "service stopped"),
            Err(e) => error!(service = "my-books", event = "fatal", %service_id, error = %e, "service failed"),
        }
        outcome
    })
}
