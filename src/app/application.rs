//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::sync::Arc;

use gpui::{
    AnyView, App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, px,
};
use gpui_component::Root;

use crate::assets::Assets;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::error::Result;
use crate::helpers::{Quit, new_key_bindings};
use crate::services::MisoClient;
use crate::states::DashConfig;
use crate::views::DashboardView;

const WINDOW_TITLE: &str = "MISO Realtime Data Dashboard";

/// Run the dashboard until the window is closed
pub fn run_app(config: DashConfig) -> Result<()> {
    let source = Arc::new(MisoClient::new(&config.api_base_url, config.request_timeout())?);
    tracing::info!(
        url = %source.url(),
        poll_secs = config.poll_interval().as_secs(),
        "Dashboard configured"
    );

    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        gpui_component::init(cx);
        cx.bind_keys(new_key_bindings());

        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(WINDOW_TITLE)),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let view = cx.new(|cx| DashboardView::new(&config, source.clone(), window, cx));
            cx.new(|cx| Root::new(AnyView::from(view), window, cx))
        });
        if let Err(e) = opened {
            tracing::error!(error = %e, "Failed to open dashboard window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });

    Ok(())
}
