// SPDX-License-Identifier: MPL-2.0
use atelier::catalog::{Catalog, ImageRef, ProjectRecord, Team};
use atelier::error::GalleryError;
use atelier::gallery::{Direction, Message, Phase, ScrollLock, State};
use atelier::i18n::{I18n, Locale};
use std::time::{Duration, Instant};

fn project(id: u32, images: usize) -> ProjectRecord {
    ProjectRecord {
        id,
        title: format!("Project {id}"),
        location: "Istanbul, Turkey".into(),
        period: "2024".into(),
        challenge: "Delivered on time".into(),
        address: "Maslak".into(),
        description: "One.\nTwo.".into(),
        images: (1..=images)
            .map(|n| ImageRef::new(format!("projects/{id}/{n:02}.jpg")))
            .collect(),
        team: Team::default(),
    }
}

fn viewer(duration: Duration) -> (State, ScrollLock) {
    let lock = ScrollLock::new();
    (State::new(lock.clone(), duration), lock)
}

#[test]
fn stepping_through_three_images_wraps_both_ways() {
    let (mut viewer, _lock) = viewer(Duration::ZERO);
    viewer.open(project(1, 3)).expect("opens");
    assert_eq!(viewer.current_index(), Some(0));

    for expected in [1, 2, 0] {
        viewer.handle_message(Message::Next);
        assert_eq!(viewer.current_index(), Some(expected));
    }

    viewer.handle_message(Message::Previous);
    assert_eq!(viewer.current_index(), Some(2));
    assert_eq!(viewer.direction(), Direction::Backward);
}

#[test]
fn escape_closes_info_panel_then_viewer() {
    let (mut viewer, lock) = viewer(Duration::ZERO);
    viewer.open(project(2, 4)).expect("opens");
    viewer.handle_message(Message::ToggleInfo);
    assert_eq!(viewer.phase(), Phase::InfoVisible);

    viewer.handle_message(Message::Cancel);
    assert_eq!(viewer.phase(), Phase::Viewing);
    assert!(lock.is_held());

    viewer.handle_message(Message::Cancel);
    assert_eq!(viewer.phase(), Phase::Closed);
    assert!(!lock.is_held());
}

#[test]
fn jump_direction_follows_target_side() {
    let (mut viewer, _lock) = viewer(Duration::ZERO);
    viewer.open(project(3, 5)).expect("opens");

    viewer.handle_message(Message::JumpTo(2));
    assert_eq!(viewer.current_index(), Some(2));
    assert_eq!(viewer.direction(), Direction::Forward);

    viewer.handle_message(Message::JumpTo(0));
    assert_eq!(viewer.current_index(), Some(0));
    assert_eq!(viewer.direction(), Direction::Backward);
}

#[test]
fn navigation_is_dropped_until_the_transition_completes() {
    let (mut viewer, _lock) = viewer(Duration::from_millis(300));
    viewer.open(project(4, 5)).expect("opens");

    viewer.handle_message(Message::Next);
    assert!(viewer.is_transitioning());
    for message in [Message::Next, Message::Previous, Message::JumpTo(4)] {
        viewer.handle_message(message);
        assert_eq!(viewer.current_index(), Some(1));
    }

    viewer.handle_message(Message::Tick(Instant::now() + Duration::from_secs(1)));
    assert!(!viewer.is_transitioning());
    viewer.handle_message(Message::Next);
    assert_eq!(viewer.current_index(), Some(2));
}

#[test]
fn reopening_starts_a_fresh_session() {
    let (mut viewer, lock) = viewer(Duration::ZERO);
    viewer.open(project(5, 6)).expect("opens");
    viewer.handle_message(Message::JumpTo(4));
    viewer.handle_message(Message::ToggleInfo);

    viewer.open(project(6, 2)).expect("reopens");
    assert_eq!(viewer.current_index(), Some(0));
    assert!(!viewer.is_info_panel_open());
    assert_eq!(viewer.image_count(), 2);
    assert!(lock.is_held());
}

#[test]
fn second_viewer_cannot_claim_the_page() {
    let lock = ScrollLock::new();
    let mut first = State::new(lock.clone(), Duration::ZERO);
    let mut second = State::new(lock.clone(), Duration::ZERO);

    first.open(project(1, 2)).expect("opens");
    assert_eq!(second.open(project(2, 2)), Err(GalleryError::ScrollLockHeld));

    first.close();
    assert!(second.open(project(2, 2)).is_ok());
}

#[test]
fn empty_projects_are_refused() {
    let (mut viewer, lock) = viewer(Duration::ZERO);
    assert_eq!(
        viewer.open(project(9, 0)),
        Err(GalleryError::EmptyImageList { project_id: 9 })
    );
    assert_eq!(viewer.phase(), Phase::Closed);
    assert!(!lock.is_held());
}

#[test]
fn catalog_projects_open_in_both_languages() {
    let catalog = Catalog::embedded().expect("embedded catalog");
    let mut i18n = I18n::default();
    let (mut viewer, _lock) = viewer(Duration::ZERO);

    for locale in Locale::ALL {
        i18n.set_locale(locale);
        for entry in catalog.entries() {
            let record = catalog.record(entry.id, &i18n).expect("record");
            assert!(!record.title.starts_with("project-"), "{locale}: {}", record.title);
            viewer.open(record).expect("opens");
            assert_eq!(viewer.image_count(), entry.images.len());
        }
    }
}

#[test]
fn missing_keys_render_as_themselves() {
    let mut i18n = I18n::default();
    for locale in Locale::ALL {
        i18n.set_locale(locale);
        assert_eq!(i18n.tr("nowhere-to-be-found"), "nowhere-to-be-found");
    }
}

#[test]
fn unsupported_locale_is_reported_and_ignored() {
    let mut i18n = I18n::default();
    i18n.set_locale(Locale::Tr);

    assert!(i18n.set_locale_code("fr").is_err());
    assert_eq!(i18n.current_locale(), Locale::Tr);
}
