use clap::Parser;
use dioxus::prelude::*;
use seriesgrid::config::AppConfig;
use seriesgrid::ui::app::App;

fn main() {
    let config = AppConfig::parse();
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::WindowBuilder::new()
                    .with_title("Series Grid")
                    .with_inner_size(dioxus::desktop::LogicalSize::new(1400.0, 900.0)),
            ),
        )
        .with_context(config)
        .launch(App);
}
