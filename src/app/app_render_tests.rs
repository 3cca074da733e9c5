use std::rc::Rc;

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::app::App;
use crate::config::Config;
use crate::navigator::RouteNavigator;
use crate::test_utils::test_helpers::{RecordingStore, fixed_now};

pub fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

pub fn render_to_string(app: &mut App<RecordingStore>, width: u16, height: u16) -> String {
    let mut terminal = create_test_terminal(width, height);
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().to_string()
}

/// App over a recording store with a fixed clock
pub fn test_app(store: RecordingStore) -> App<RecordingStore> {
    let mut app = App::new(
        Rc::new(store),
        Rc::new(RouteNavigator::new()),
        &Config::default(),
    );
    app.clock = fixed_now;
    app
}
