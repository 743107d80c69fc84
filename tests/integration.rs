// SPDX-License-Identifier: MPL-2.0
use iced_carousel::app::config::{self, CarouselSection, Config};
use iced_carousel::carousel::{self, autoplay, Controls, Host, Message, PointerKind};
use iced_carousel::i18n::fluent::I18n;
use iced_carousel::slides::{self, Slide};
use tempfile::tempdir;

fn host(slide_count: usize, window_width: f32) -> Host {
    Host {
        slide_count,
        controls: Controls::BOTH,
        window_width,
    }
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &config_path).expect("Failed to write config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &config_path).expect("Failed to write config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(
        i18n_fr.tr_with_args("carousel-indicator-label", &[("number", "2")]),
        "Diapositive 2"
    );
}

#[test]
fn test_config_drives_carousel_policy() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config = Config {
        carousel: CarouselSection {
            autoplay: Some(false),
            ..CarouselSection::default()
        },
        ..Config::default()
    };
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let carousel = carousel::mount(Some(host(5, 900.0)), loaded.to_carousel_config())
        .expect("carousel should mount");
    assert_eq!(carousel.autoplay_status(), autoplay::Status::Suspended);
    assert_eq!(carousel.pending_timers(), 0);
}

#[test]
fn test_user_session_through_messages() {
    let mut carousel = carousel::mount(Some(host(6, 1200.0)), Default::default())
        .expect("carousel should mount");
    assert_eq!(carousel.visible_count(), 3);
    assert_eq!(carousel.page_count(), 4);

    // Hover pauses autoplay; clicking an indicator still navigates.
    carousel.update(Message::PointerEntered);
    assert_eq!(carousel.pending_timers(), 0);
    carousel.update(Message::GoToPage(2));
    assert_eq!(carousel.current_index(), 2);

    // Shrinking the window to one card per page rebuilds the dots.
    carousel.update(Message::Resized(500.0));
    assert_eq!(carousel.visible_count(), 1);
    assert_eq!(carousel.indicators().len(), 6);
    assert_eq!(carousel.indicators().active_page(), 2);

    // Leaving resumes autoplay with exactly one timer.
    carousel.update(Message::PointerLeft);
    assert_eq!(carousel.pending_timers(), 1);

    carousel.destroy();
    carousel.update(Message::Next);
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(carousel.pending_timers(), 0);
}

#[test]
fn test_viewport_drag_commits_next_page() {
    let mut carousel = carousel::mount(Some(host(4, 500.0)), Default::default())
        .expect("carousel should mount");
    let width = carousel.viewport_width();

    carousel.update(Message::ViewportMoved(width * 0.8));
    carousel.update(Message::ViewportPressed);
    assert!(carousel.is_dragging());
    carousel.update(Message::ViewportMoved(width * 0.5));
    carousel.update(Message::ViewportReleased);

    assert!(!carousel.is_dragging());
    assert_eq!(carousel.current_index(), 1);

    // Touch input fed directly by a host follows the same commit rule.
    carousel.drag_start(200.0, PointerKind::Touch);
    carousel.drag_move(200.0 + width * 0.3, PointerKind::Touch);
    carousel.drag_end(PointerKind::Touch);
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn test_missing_host_is_no_op() {
    assert!(carousel::mount(None, Default::default()).is_none());
}

#[tokio::test]
async fn test_directory_source_feeds_carousel() {
    let dir = tempdir().expect("Failed to create temporary directory");
    for name in ["b.png", "a.jpg", "c.gif", "notes.md"] {
        std::fs::write(dir.path().join(name), b"fake").expect("Failed to write file");
    }

    let deck = slides::load(
        Some(dir.path().to_path_buf()),
        config::SortOrder::Alphabetical,
    )
    .await
    .expect("directory should load");
    assert_eq!(deck.len(), 3);
    assert!(matches!(
        &deck.slides()[0],
        Slide::Image { caption: Some(c), .. } if c == "a"
    ));

    let carousel = carousel::mount(Some(host(deck.len(), 800.0)), Default::default())
        .expect("carousel should mount");
    assert_eq!(carousel.slide_count(), 3);
    assert_eq!(carousel.max_index(), 1);
}
