//! The store page: sidebar and app grid sharing one focus cursor

use crate::app::app_list::{AppList, AppListAction};
use crate::app::sidebar::{Sidebar, SidebarAction};
use crate::config::SortMode;
use crate::repo::Package;
use crate::ui::context::AppContext;
use crate::ui::element::{Element, Frame};
use crate::ui::focus::Focus;
use crate::ui::input::{Button, InputEvents};
use crate::ui::render::{Renderer, SCREEN_HEIGHT, SCREEN_WIDTH};

use std::path::Path;
use std::rc::Rc;

pub struct Storefront {
    frame: Frame,
    pub sidebar: Sidebar,
    pub app_list: AppList,
    pub focus: Focus,
}

impl Storefront {
    pub fn new(packages: Vec<Rc<Package>>, sort: SortMode, cache_path: &Path, res_dir: &Path) -> Self {
        Self {
            frame: Frame {
                width: SCREEN_WIDTH,
                height: SCREEN_HEIGHT,
                ..Default::default()
            },
            sidebar: Sidebar::new(res_dir),
            app_list: AppList::new(packages, sort, cache_path, res_dir),
            focus: Focus::None,
        }
    }

    fn toggle_sidebar(&mut self) {
        let hidden = !self.sidebar.frame().hidden;
        self.sidebar.frame_mut().hidden = hidden;
        self.app_list.set_sidebar_visible(!hidden);
        self.app_list.reset_scroll();
        if hidden && self.focus.sidebar().is_some() {
            self.focus = Focus::None;
        }
        log::debug!("Sidebar {}", if hidden { "hidden" } else { "shown" });
    }

    fn apply_sidebar(&mut self, action: SidebarAction) {
        match action {
            SidebarAction::HandOff => self.app_list.reset_scroll(),
            SidebarAction::Select(_) => {
                self.app_list
                    .set_category(self.sidebar.current_cat_value(), self.sidebar.current_cat_name());
                self.app_list.reset_scroll();
                self.app_list.update();
            }
            SidebarAction::Ignored | SidebarAction::Consumed => {}
        }
    }
}

impl Element for Storefront {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn process(&mut self, event: &mut InputEvents, ctx: &mut AppContext) -> bool {
        if event.is_key_down() && event.held(Button::L) {
            self.toggle_sidebar();
            event.acknowledge();
            return true;
        }

        let mut consumed = false;

        if !self.sidebar.frame().hidden {
            let action = self.sidebar.process(event, &mut self.focus);
            consumed |= action != SidebarAction::Ignored;
            self.apply_sidebar(action);
        }

        match self.app_list.process(event, ctx, &mut self.focus) {
            AppListAction::FocusSidebar => {
                self.focus = Focus::Sidebar(self.sidebar.cur_category());
                consumed = true;
            }
            AppListAction::Consumed => consumed = true,
            AppListAction::Ignored => {}
        }

        consumed
    }

    fn render(&self, r: &mut dyn Renderer, origin: (i32, i32)) {
        self.sidebar.render(r, origin, self.focus);
        self.app_list.render(r, origin, self.focus);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::sidebar::category_band;

    fn storefront() -> Storefront {
        let packages = ["game", "tool", "game", "emu"]
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let mut pkg = Package::new(&format!("pkg{i}"), "1.0", "https://repo");
                pkg.category = category.to_string();
                Rc::new(pkg)
            })
            .collect();
        Storefront::new(packages, SortMode::Repository, Path::new("/nonexistent"), Path::new("res"))
    }

    fn key(button: Button) -> InputEvents {
        InputEvents::key_down(&[button])
    }

    #[test]
    fn test_right_hands_focus_and_resets_scroll() {
        let mut store = storefront();
        let mut ctx = AppContext::default();
        store.focus = Focus::Sidebar(0);

        let mut event = key(Button::Right);
        assert!(store.process(&mut event, &mut ctx));
        assert_eq!(store.focus, Focus::AppList(0));
        assert_eq!(store.app_list.scroll_y(), 0);
        assert!(event.is_handled());
    }

    #[test]
    fn test_left_returns_to_current_category() {
        let mut store = storefront();
        let mut ctx = AppContext::default();

        let band = category_band(1);
        store.process(&mut InputEvents::touch_down(band.x + 5, band.y + 5), &mut ctx);
        store.process(&mut InputEvents::touch_up(band.x + 5, band.y + 5), &mut ctx);
        assert_eq!(store.sidebar.cur_category(), 1);
        assert_eq!(store.app_list.len(), 2);

        store.focus = Focus::AppList(0);
        assert!(store.process(&mut key(Button::Left), &mut ctx));
        assert_eq!(store.focus, Focus::Sidebar(1));
    }

    #[test]
    fn test_a_on_sidebar_filters_list() {
        let mut store = storefront();
        let mut ctx = AppContext::default();
        store.focus = Focus::Sidebar(3);

        store.process(&mut key(Button::A), &mut ctx);
        assert_eq!(store.sidebar.current_cat_value(), "tool");
        assert_eq!(store.app_list.len(), 1);
        assert!(!ctx.has_subscreen());
    }

    #[test]
    fn test_l_toggles_sidebar() {
        let mut store = storefront();
        let mut ctx = AppContext::default();
        store.focus = Focus::Sidebar(2);

        store.process(&mut key(Button::L), &mut ctx);
        assert!(store.sidebar.frame().hidden);
        assert_eq!(store.app_list.columns(), 4);
        assert_eq!(store.focus, Focus::None);

        store.process(&mut key(Button::L), &mut ctx);
        assert!(!store.sidebar.frame().hidden);
        assert_eq!(store.app_list.columns(), 3);
    }
}
