// SPDX-License-Identifier: MPL-2.0
use pinroute::app::config::{self, Config, LocationSource};
use pinroute::app::i18n::fluent::I18n;
use pinroute::domain::{Coordinate, LocationFix, MapStyle, TransportMode};
use pinroute::infrastructure::routing::parse_response;
use pinroute::ui::map_screen::{
    prompt, CanvasMessage, Effect, Message, ScreenState, State as MapScreen,
};
use tempfile::tempdir;

const OSRM_WALK: &str = r#"{
    "code": "Ok",
    "routes": [{
        "distance": 1420.5,
        "duration": 1015.2,
        "geometry": {
            "type": "LineString",
            "coordinates": [[37.6173, 55.7558], [37.6201, 55.7570], [37.6250, 55.7601]]
        }
    }]
}"#;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    config::save_to_path(&config, &config_path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    config.general.language = Some("ru".to_string());
    config::save_to_path(&config, &config_path).expect("Failed to write russian config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load russian config");
    let i18n_ru = I18n::new(None, &loaded);
    assert_eq!(i18n_ru.current_locale().to_string(), "ru");
    assert_eq!(i18n_ru.tr("pin-prompt-cancel"), "Отмена");
}

#[test]
fn test_startup_toggles_follow_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");
    std::fs::write(
        &config_path,
        "[map]\ndefault_style = \"satellite\"\ndefault_transport = \"walking\"\n\n[location]\nsource = \"none\"\n",
    )
    .expect("Failed to write config");

    let config = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(config.location.source, LocationSource::None);

    let screen = MapScreen::new(&config.map, &I18n::new(None, &config));
    assert_eq!(screen.style(), MapStyle::Satellite);
    assert_eq!(screen.transport(), TransportMode::Walking);
    assert_eq!(screen.map().style(), MapStyle::Satellite);
}

#[test]
fn test_walking_route_from_location_to_pin() {
    let mut screen = MapScreen::new(&Config::default().map, &I18n::default());
    let here = Coordinate::new(55.7558, 37.6173);
    let cafe = Coordinate::new(55.7601, 37.6250);

    let _ = screen.handle_message(Message::LocationUpdated(vec![LocationFix::at(here)]));
    let _ = screen.handle_message(Message::TransportSelected(TransportMode::Walking));
    let _ = screen.handle_message(Message::Canvas(CanvasMessage::LongPress(cafe)));
    let _ = screen.handle_message(Message::Prompt(prompt::Message::TitleChanged(
        "Cafe".into(),
    )));
    let _ = screen.handle_message(Message::Prompt(prompt::Message::Confirm));

    let pin = screen.map().annotations()[0].clone();
    assert_eq!(pin.title, "Cafe");
    let _ = screen.handle_message(Message::Canvas(CanvasMessage::PinTapped(pin.id)));
    assert!(screen.track_button().is_visible());

    let request = match screen.handle_message(Message::TrackPressed).0 {
        Effect::RequestRoute(request) => request,
        Effect::None => panic!("expected a route request"),
    };
    assert_eq!(request.origin, here);
    assert_eq!(request.destination, cafe);
    assert_eq!(request.mode, TransportMode::Walking);

    let result = parse_response(OSRM_WALK);
    let _ = screen.handle_message(Message::RouteFinished {
        id: request.id,
        result,
    });

    assert_eq!(screen.screen_state(), ScreenState::RouteDisplayed);
    assert_eq!(screen.map().overlays().len(), 1);
    assert_eq!(screen.map().overlays()[0].len(), 3);
    assert!(screen
        .map()
        .viewport()
        .contains(cafe.to_map_point()));
}
