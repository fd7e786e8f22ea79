//! End-to-end navigation through the update loop and the real renderer

use std::io::Write;

use academy_app::config::Settings;
use academy_app::message::Message;
use academy_app::state::AppState;
use academy_app::{update, InputKey, Route};
use academy_core::Catalog;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use unicode_width::UnicodeWidthStr;

fn process(state: &mut AppState, message: Message) {
    let mut next = Some(message);
    while let Some(msg) = next {
        next = update(state, msg).message;
    }
}

fn press(state: &mut AppState, key: InputKey) {
    process(state, Message::Key(key));
}

/// Draw one frame and return its text, skipping cells hidden by wide characters
fn draw(terminal: &mut Terminal<TestBackend>, state: &mut AppState) -> String {
    terminal
        .draw(|frame| academy_tui::render::view(frame, state))
        .unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        let mut skip = 0;
        for x in 0..buffer.area.width {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let symbol = buffer[(x, y)].symbol();
            text.push_str(symbol);
            skip = symbol.width().saturating_sub(1);
        }
        text.push('\n');
    }
    text
}

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 30)).unwrap()
}

#[test]
fn walk_every_module_forward_and_back() {
    let catalog = Catalog::embedded().unwrap();
    let ids: Vec<String> = catalog.iter().map(|m| m.id.clone()).collect();
    let mut state = AppState::new(catalog, Settings::default()).with_route(Route::module(&ids[0]));
    let mut term = terminal();

    for window in ids.windows(2) {
        let screen = draw(&mut term, &mut state);
        assert!(screen.contains("下一模块"), "{}", window[0]);

        press(&mut state, InputKey::Right);
        assert_eq!(state.route, Route::module(&window[1]));
        assert_eq!(state.page_view.offset, 0);
    }

    // Last module: no next link and Right does nothing
    let screen = draw(&mut term, &mut state);
    assert!(!screen.contains("下一模块"));
    press(&mut state, InputKey::Right);
    assert_eq!(state.route, Route::module(ids.last().unwrap()));

    for window in ids.windows(2).rev() {
        press(&mut state, InputKey::Left);
        assert_eq!(state.route, Route::module(&window[0]));
    }
    let screen = draw(&mut term, &mut state);
    assert!(!screen.contains("上一模块"));
}

#[test]
fn scroll_resets_when_changing_module() {
    let catalog = Catalog::embedded().unwrap();
    let mut state = AppState::new(catalog, Settings::default()).with_route(Route::module("module-1"));
    let mut term = Terminal::new(TestBackend::new(80, 20)).unwrap();

    draw(&mut term, &mut state);
    press(&mut state, InputKey::PageDown);
    press(&mut state, InputKey::Char('j'));
    draw(&mut term, &mut state);
    assert!(state.page_view.offset > 0);

    press(&mut state, InputKey::Char('n'));
    let screen = draw(&mut term, &mut state);

    assert_eq!(state.page_view.offset, 0);
    assert!(screen.contains("Layer 2（L2）扩容方案"));
}

#[test]
fn unknown_module_offers_way_home() {
    let catalog = Catalog::embedded().unwrap();
    let mut state =
        AppState::new(catalog, Settings::default()).with_route(Route::from_arg(Some("/module/module-999")));
    let mut term = terminal();

    let screen = draw(&mut term, &mut state);
    assert!(screen.contains("模块未找到"));
    assert!(screen.contains("返回首页"));

    press(&mut state, InputKey::Enter);
    assert_eq!(state.route, Route::Home);
    assert_eq!(state.route.path(), "/");

    let screen = draw(&mut term, &mut state);
    assert!(screen.contains("全部模块"));
}

#[test]
fn search_then_open_from_home() {
    let catalog = Catalog::embedded().unwrap();
    let mut state = AppState::new(catalog, Settings::default());

    press(&mut state, InputKey::Char('/'));
    for c in "NFT".chars() {
        press(&mut state, InputKey::Char(c));
    }
    press(&mut state, InputKey::Enter);
    press(&mut state, InputKey::Enter);

    assert_eq!(state.route, Route::module("module-7"));
}

#[test]
fn custom_json_catalog_drives_navigation() {
    let json = r#"{
        "modules": [
            { "id": "b", "moduleNumber": 2, "title": "第二课", "category": "foo", "difficulty": "expert" },
            { "id": "a", "moduleNumber": 1, "title": "第一课", "category": "nft", "difficulty": "beginner" }
        ]
    }"#;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::File::create(&path)
        .unwrap()
        .write_all(json.as_bytes())
        .unwrap();

    let catalog = crypto_academy::load_catalog(Some(&path), &Settings::default()).unwrap();
    let mut state = AppState::new(catalog, Settings::default()).with_route(Route::module("a"));
    let mut term = terminal();

    press(&mut state, InputKey::Char('n'));
    assert_eq!(state.route, Route::module("b"));

    // Unknown category and difficulty fall back to neutral metadata
    let screen = draw(&mut term, &mut state);
    assert!(screen.contains("未知"));
    assert!(screen.contains("本模块将带你系统了解「第二课」"));
}

#[test]
fn headless_output_matches_route() {
    let catalog = Catalog::embedded().unwrap();
    let route = Route::module("module-6");
    let output = crypto_academy::headless::HeadlessOutput::compose(&catalog, &route);
    let value: serde_json::Value = serde_json::from_str(&output.to_json().unwrap()).unwrap();

    assert_eq!(value["page"]["previous"]["id"], "module-5");
    assert_eq!(value["page"]["next"]["id"], "module-7");
    assert!(value["page"]["deep_dive"].is_object());
}
