use ddc_vcp_control::config::Config;
use ddc_vcp_control::features::ImageAdjustment;
use ddc_vcp_control::monitor::DisplayManager;
use ddc_vcp_control::protocols::ddc_ci::DdcCiTransport;

#[macro_use]
extern crate tracing;

fn setup_logs() {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let fmt_layer = fmt::layer().with_target(false);
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new(format!(
        "warn,{}=warn",
        env!("CARGO_CRATE_NAME")
    )));

    if let Ok(journal_layer) = tracing_journald::layer() {
        tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .with(journal_layer)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    setup_logs();

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            error!("errors loading config: {}", err);
            Config::default()
        }
    };

    let transport = DdcCiTransport::new(&config);
    let manager = DisplayManager::with_queries(&transport, config.queries.clone());

    for display in manager.collect()? {
        println!(
            "Display {} [{}] {}",
            display.index(),
            display.backend(),
            display.display_id()
        );
        if let Some(model) = display.model_name() {
            println!("\tModel: {}", model);
        }
        if let Some(manufacturer) = display.manufacturer_id() {
            println!("\tManufacturer: {}", manufacturer);
        }
        if let Some(serial) = display.serial_number() {
            println!("\tSerial Number: {}", serial);
        }
        if let Some(version) = display.mccs_version() {
            println!("\tMCCS: {}", version);
        }

        match display.get_feature(ImageAdjustment::Luminance.code()) {
            Ok(value) => println!("\tLuminance: {}/{}", value.current, value.maximum),
            Err(err) => {
                let display_id = display.display_id();
                warn!(display_id = %display_id, "can't read luminance: {err}")
            }
        }
    }

    Ok(())
}
