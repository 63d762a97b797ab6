use anyhow::Result;
use sysinfo::{get_current_pid, ProcessesToUpdate, System};
use taxiload::{DatasetLoader, LoaderConfig};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) load the cleaned dataset ─────────────────────────────────
    let config = LoaderConfig::default();
    info!("dataset dir: {}", config.dataset_dir().display());

    let loader = DatasetLoader::new(config);
    let dataset = match loader.load() {
        Ok(d) => d,
        Err(e) => {
            error!("load failed: {}", e);
            return Err(e.into());
        }
    };

    // ─── 3) report the typed table ───────────────────────────────────
    for field in dataset.batch.schema().fields() {
        info!("  {}: {}", field.name(), field.data_type());
    }
    info!(
        rows = dataset.num_rows(),
        "table memory: {:.2} MB",
        dataset.memory_bytes() as f64 / (1024.0 * 1024.0)
    );

    if let Ok(pid) = get_current_pid() {
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
        if let Some(process) = sys.process(pid) {
            info!(
                "process rss: {:.2} MB",
                process.memory() as f64 / (1024.0 * 1024.0)
            );
        }
    }

    Ok(())
}
