// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring between the map screen and its services.
//!
//! The `App` struct owns localization, the map screen and the two injected
//! services (location and routing). It translates screen effects into tasks
//! and keeps track of the route request currently in flight.

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{LocationProvider, RoutingService};
use crate::domain::{Coordinate, LocationFix};
use crate::infrastructure::{
    DisabledLocationProvider, FixedLocationProvider, OsrmRoutingService, ReplayLocationProvider,
    UnavailableRoutingService,
};
use crate::ui::map_screen;
use crate::ui::theming::{ColorScheme, ThemeMode};
use config::{Config, LocationSource};
use i18n::fluent::I18n;
use iced::{task, window, Element, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    colors: ColorScheme,
    map: map_screen::State,
    location: Arc<dyn LocationProvider>,
    routing: Arc<dyn RoutingService>,
    /// Handle of the route request still in flight, if any.
    route_task: Option<task::Handle>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("screen_state", &self.map.screen_state())
            .field("pins", &self.map.map().annotations().len())
            .field("route_in_flight", &self.route_task.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

/// Picks the location adapter described by the `[location]` section.
pub fn location_provider(config: &config::LocationConfig) -> Arc<dyn LocationProvider> {
    match config.source {
        LocationSource::Fixed => Arc::new(FixedLocationProvider::new(LocationFix::at(
            config.fixed.into(),
        ))),
        LocationSource::Replay if config.replay_track.is_empty() => {
            log::warn!("[location] replay_track is empty; falling back to the fixed location");
            Arc::new(FixedLocationProvider::new(LocationFix::at(
                config.fixed.into(),
            )))
        }
        LocationSource::Replay => {
            let track: Vec<Coordinate> = config
                .replay_track
                .iter()
                .copied()
                .map(Coordinate::from)
                .collect();
            Arc::new(ReplayLocationProvider::new(track, config.replay_interval()))
        }
        LocationSource::None => Arc::new(DisabledLocationProvider),
    }
}

/// Builds the OSRM client for `endpoint`, or a service that fails every
/// request if the HTTP client cannot be created.
pub fn routing_service(endpoint: &str) -> Arc<dyn RoutingService> {
    match OsrmRoutingService::new(endpoint) {
        Ok(service) => {
            log::info!("Routing through {}", service.endpoint());
            Arc::new(service)
        }
        Err(err) => {
            log::error!("Routing is unavailable: {}", err);
            Arc::new(UnavailableRoutingService::new(err))
        }
    }
}

impl App {
    /// Loads settings, builds the services and starts location updates.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());

        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            log::warn!("Using default settings: {}", warning);
        } else {
            write_defaults_on_first_launch(&config);
        }

        let i18n = I18n::new(flags.lang.clone(), &config);
        let endpoint = flags
            .endpoint
            .clone()
            .unwrap_or_else(|| config.routing.endpoint.clone());

        let location = location_provider(&config.location);
        let routing = routing_service(&endpoint);

        let app = Self::with_services(&config, i18n, location, routing);
        let task = update::start_location_updates(&app.location);
        (app, task)
    }

    /// Builds the app around explicit services without touching the disk.
    pub fn with_services(
        config: &Config,
        i18n: I18n,
        location: Arc<dyn LocationProvider>,
        routing: Arc<dyn RoutingService>,
    ) -> Self {
        let theme_mode = config.general.theme_mode;
        Self {
            map: map_screen::State::new(&config.map, &i18n),
            i18n,
            theme_mode,
            colors: theme_mode.colors(),
            location,
            routing,
            route_task: None,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    /// Map screen state, for inspection.
    pub fn map(&self) -> &map_screen::State {
        &self.map
    }

    /// Returns `true` while a route request is in flight.
    pub fn route_in_flight(&self) -> bool {
        self.route_task.is_some()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Map(map_message) => {
                let mut ctx = update::UpdateContext {
                    map: &mut self.map,
                    routing: &self.routing,
                    route_task: &mut self.route_task,
                };
                update::handle_map_message(&mut ctx, map_message)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            colors: &self.colors,
            map: &self.map,
        })
    }
}

/// Writes the defaults to `settings.toml` when no file exists yet, so users
/// have something to edit.
fn write_defaults_on_first_launch(config: &Config) {
    let Some(path) = config::config_path() else {
        return;
    };
    if path.exists() {
        return;
    }
    match config::save_to_path(config, &path) {
        Ok(()) => log::info!("Wrote default settings to {}", path.display()),
        Err(err) => log::warn!("Could not write default settings: {}", err),
    }
}
