//! Fixed chrome actions hosted alongside the script list.
//!
//! The menu is a small set of labeled actions with well-known meanings; the
//! launcher maps their activation to engine commands (Quit -> `quit()`,
//! Reload Scripts -> `load_scripts("")`).

use smallvec::SmallVec;

use crate::host::{ActionId, WindowHost};

/// Meaning of a chrome action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Quit,
    ReloadScripts,
}

#[derive(Debug, Default)]
pub struct Menu {
    items: SmallVec<[(ActionId, MenuAction); 4]>,
}

impl Menu {
    /// Build the standard chrome: Quit and Reload Scripts.
    pub fn standard<H: WindowHost>(host: &mut H) -> Self {
        let mut menu = Menu::default();
        menu.add_item(host, "Quit", MenuAction::Quit);
        menu.add_item(host, "Reload Scripts", MenuAction::ReloadScripts);
        menu
    }

    pub fn add_item<H: WindowHost>(&mut self, host: &mut H, label: &str, action: MenuAction) {
        let id = host.add_action(label);
        self.items.push((id, action));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Resolve an activated host action to its chrome meaning, if it is one.
    pub fn action_for(&self, id: ActionId) -> Option<MenuAction> {
        self.items
            .iter()
            .find(|(item_id, _)| *item_id == id)
            .map(|(_, action)| *action)
    }

    /// Host action ids of all chrome items, in creation order.
    pub fn action_ids(&self) -> impl Iterator<Item = ActionId> + '_ {
        self.items.iter().map(|(id, _)| *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HeadlessHost;

    #[test]
    fn test_standard_menu_has_quit_and_reload() {
        let mut host = HeadlessHost::new();
        let menu = Menu::standard(&mut host);

        assert_eq!(menu.len(), 2);
        assert_eq!(host.action_count(), 2);

        let meanings: Vec<MenuAction> = menu
            .action_ids()
            .filter_map(|id| menu.action_for(id))
            .collect();
        assert_eq!(meanings, vec![MenuAction::Quit, MenuAction::ReloadScripts]);
    }

    #[test]
    fn test_unknown_action_is_not_chrome() {
        let mut host = HeadlessHost::new();
        let menu = Menu::standard(&mut host);
        let other = host.add_action("not a menu item");
        assert_eq!(menu.action_for(other), None);
    }
}
