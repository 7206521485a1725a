use super::Action;
use super::Engine;

/// Records everything a layout asked for.
#[derive(Default, Debug)]
pub struct MockEngine {
    pub notifications: usize,
    pub passed_through: Vec<Action>,
}

impl Engine for MockEngine {
    fn show_layout_notification(&mut self) {
        self.notifications += 1;
    }

    fn execute_without_layout_override(&mut self, action: &Action) {
        self.passed_through.push(action.clone());
    }
}
