use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use one_listener::{EventName, Handler, HeadlessHost, ListenerConfig, NativeEvent, OneListener};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const LISTENER_ID: &str = "demo";

fn main() -> Result<()> {
    let subscriber_result = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .try_init();
    if subscriber_result.is_err() {
        // tracing was already initialised; continue silently
    }

    let config_path = std::env::var("ONE_LISTENER_CONFIG").ok().map(PathBuf::from);
    let config = ListenerConfig::load(config_path).context("failed to load listener config")?;

    let host: Rc<HeadlessHost<String>> = Rc::new(HeadlessHost::new());
    let listeners = OneListener::with_config(Rc::clone(&host), config);

    for name in EventName::ALL {
        listeners.register(
            name,
            LISTENER_ID,
            Handler::with_event(move |event: Option<&String>| match event {
                Some(event) => info!(bucket = %name, %event, "handler ran with event"),
                None => info!(bucket = %name, "handler ran in animation frame"),
            }),
        );
    }

    let mut immediate = 0;
    for raw in std::env::args().skip(1) {
        let native = match raw.parse::<NativeEvent>() {
            Ok(native) => native,
            Err(err) => {
                warn!(error = %err, "skipping");
                continue;
            }
        };
        host.fire(native, &raw);
        if native.bucket() == EventName::MouseUp {
            immediate += 1;
        }
    }

    let deferred = host.run_frame();
    info!(immediate, deferred, "done");
    Ok(())
}
