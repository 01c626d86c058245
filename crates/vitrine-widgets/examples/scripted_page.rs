//! Drives a page of widgets with scripted input on an in-memory DOM
//!
//! Run with `RUST_LOG=trace` to see every transition.

use std::time::Duration;

use vitrine::{
    Document, Dom, ElementId, ListenTarget, ManualScheduler, NamedKey, Page, PageConfig, PageEvent,
    Preferences, TouchPoint,
};
use vitrine_widgets::{choose, exhibition, hero, mount_all, nav};

struct Markup {
    hero_root: ElementId,
    hero_track: ElementId,
    exhibition_toggle: ElementId,
    exhibition_next: ElementId,
    choose_cards: Vec<ElementId>,
    hamburger: ElementId,
}

fn build(doc: &mut Document) -> Markup {
    let body = doc.body();

    let hero_root = doc.create_element(body, "section", &[hero::classes::ROOT]);
    let hero_track = doc.create_element(hero_root, "div", &[hero::classes::TRACK]);
    for size in [2, 1, 3] {
        let group = doc.create_element(hero_track, "div", &[hero::classes::GROUP]);
        let vertical = doc.create_element(group, "div", &[hero::classes::VERTICAL_TRACK]);
        for _ in 0..size {
            doc.create_element(vertical, "article", &[hero::classes::SLIDE]);
        }
    }

    let exhibition_root = doc.create_element(body, "section", &[exhibition::classes::ROOT]);
    let track = doc.create_element(exhibition_root, "div", &[exhibition::classes::TRACK]);
    for _ in 0..4 {
        doc.create_element(track, "article", &[exhibition::classes::CARD]);
    }
    let exhibition_next =
        doc.create_element(exhibition_root, "button", &[exhibition::classes::NEXT]);
    let exhibition_toggle =
        doc.create_element(exhibition_root, "button", &[exhibition::classes::TOGGLE]);

    let choose_root = doc.create_element(body, "section", &[choose::classes::ROOT]);
    let grid = doc.create_element(choose_root, "div", &[choose::classes::GRID]);
    let choose_cards = (0..4)
        .map(|_| doc.create_element(grid, "article", &[choose::classes::CARD]))
        .collect::<Vec<_>>();
    for _ in 0..choose_cards.len() {
        doc.create_element(choose_root, "button", &[choose::classes::DOT]);
    }

    let header = doc.create_element(body, "header", &[]);
    let hamburger = doc.create_element(header, "button", &[nav::classes::HAMBURGER]);
    doc.create_element(header, "ul", &[nav::classes::NAV_LIST]);

    Markup {
        hero_root,
        hero_track,
        exhibition_toggle,
        exhibition_next,
        choose_cards,
        hamburger,
    }
}

fn visible_cards(page: &Page<Document, ManualScheduler>, cards: &[ElementId]) -> usize {
    cards
        .iter()
        .filter(|card| !page.dom().has_attribute(**card, "hidden"))
        .count()
}

fn main() {
    env_logger::init();

    let mut doc = Document::new();
    let markup = build(&mut doc);
    let mut page = Page::new(
        doc,
        ManualScheduler::new(),
        Preferences::default(),
        PageConfig::default(),
    );
    let mounted = mount_all(&mut page);
    println!("mounted {mounted} widgets: {:?}", page.widget_names());

    page.advance(Duration::from_secs(12));
    println!(
        "hero track after 12s: {:?}",
        page.dom().style(markup.hero_track, "transform")
    );

    page.dispatch_at(&markup.hero_root, PageEvent::key(NamedKey::ArrowRight));
    page.dispatch_at(&markup.hero_root, PageEvent::TouchStart(TouchPoint::at(300.0)));
    page.dispatch_at(&markup.hero_root, PageEvent::TouchEnd(TouchPoint::at(200.0)));
    println!(
        "hero track after key + swipe: {:?}",
        page.dom().style(markup.hero_track, "transform")
    );

    page.dispatch_at(&markup.exhibition_toggle, PageEvent::Click);
    page.advance(Duration::from_secs(6));
    page.dispatch_at(&markup.exhibition_next, PageEvent::Click);
    println!(
        "exhibition toggle pressed: {:?}",
        page.dom().attribute(&markup.exhibition_toggle, "aria-pressed")
    );

    println!(
        "choose cards visible at 1024px: {}",
        visible_cards(&page, &markup.choose_cards)
    );
    page.dom_mut().set_viewport_width(500.0);
    page.dispatch(ListenTarget::Window, PageEvent::Resize { width: 500.0 });
    println!(
        "choose cards visible at 500px: {}",
        visible_cards(&page, &markup.choose_cards)
    );

    page.dispatch_at(&markup.hamburger, PageEvent::Click);
    println!(
        "menu expanded: {:?}",
        page.dom().attribute(&markup.hamburger, "aria-expanded")
    );

    page.teardown();
    println!("intervals left: {}", page.scheduler().active_intervals());
}
