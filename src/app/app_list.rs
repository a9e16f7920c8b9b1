//! Grid of the packages in the current category

use crate::app::app_card::{AppCard, CARD_HEIGHT, CARD_WIDTH};
use crate::app::app_details::AppDetails;
use crate::config::SortMode;
use crate::repo::Package;
use crate::ui::context::AppContext;
use crate::ui::element::{Element, Frame};
use crate::ui::focus::{Focus, NavDirection};
use crate::ui::focus::pure::{GridNav, direction_of, navigate_grid};
use crate::ui::input::{Button, InputEvents};
use crate::ui::render::{Rect, Renderer, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::ui::theme;

use std::path::{Path, PathBuf};
use std::rc::Rc;

const LIST_X: i32 = 410;
const GAP: i32 = 20;
const GRID_TOP: i32 = 120;
const GRID_BOTTOM: i32 = SCREEN_HEIGHT - 20;
const ROW_HEIGHT: i32 = CARD_HEIGHT + GAP;
/// Touch travel below which a drag still counts as a tap
const TAP_SLOP: i32 = 10;

/// What the app list did with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppListAction {
    Ignored,
    Consumed,
    /// Controller moved off the left edge; the sidebar should take focus
    FocusSidebar,
}

pub struct AppList {
    frame: Frame,
    packages: Vec<Rc<Package>>,
    cards: Vec<AppCard>,
    category: &'static str,
    category_name: &'static str,
    sort: SortMode,
    sidebar_visible: bool,
    scroll_y: i32,
    dragging: bool,
    drag_travel: i32,
    cache_path: PathBuf,
    res_dir: PathBuf,
}

impl AppList {
    pub fn new(packages: Vec<Rc<Package>>, sort: SortMode, cache_path: &Path, res_dir: &Path) -> Self {
        let mut list = Self {
            frame: Frame {
                x: LIST_X,
                width: SCREEN_WIDTH - LIST_X,
                height: SCREEN_HEIGHT,
                ..Default::default()
            },
            packages,
            cards: Vec::new(),
            category: "_all",
            category_name: "All Apps",
            sort,
            sidebar_visible: true,
            scroll_y: 0,
            dragging: false,
            drag_travel: 0,
            cache_path: cache_path.to_path_buf(),
            res_dir: res_dir.to_path_buf(),
        };
        list.update();
        list
    }

    pub fn columns(&self) -> usize {
        if self.sidebar_visible { 3 } else { 4 }
    }

    pub fn scroll_y(&self) -> i32 {
        self.scroll_y
    }

    pub fn reset_scroll(&mut self) {
        self.scroll_y = 0;
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, index: usize) -> Option<&AppCard> {
        self.cards.get(index)
    }

    pub fn set_category(&mut self, key: &'static str, name: &'static str) {
        self.category = key;
        self.category_name = name;
    }

    pub fn set_sidebar_visible(&mut self, visible: bool) {
        self.sidebar_visible = visible;
        self.frame.x = if visible { LIST_X } else { 0 };
        self.frame.width = SCREEN_WIDTH - self.frame.x;
        self.layout();
    }

    /// Recompute the cards from the current category and sort mode
    pub fn update(&mut self) {
        let mut shown: Vec<Rc<Package>> = self
            .packages
            .iter()
            .filter(|pkg| self.category == "_all" || pkg.category == self.category)
            .cloned()
            .collect();

        if self.sort == SortMode::Alphabetical {
            shown.sort_by_key(|pkg| pkg.display_title().to_lowercase());
        }

        self.cards = shown
            .into_iter()
            .map(|pkg| AppCard::new(pkg, &self.cache_path, &self.res_dir))
            .collect();
        self.layout();
    }

    fn grid_margin(&self) -> i32 {
        let cols = self.columns() as i32;
        let grid_width = cols * CARD_WIDTH + (cols - 1) * GAP;
        (self.frame.width - grid_width).max(0) / 2
    }

    /// Card positions relative to the list, without scroll
    fn layout(&mut self) {
        let cols = self.columns();
        let margin = self.grid_margin();
        for (i, card) in self.cards.iter_mut().enumerate() {
            let col = (i % cols) as i32;
            let row = (i / cols) as i32;
            card.position(margin + col * (CARD_WIDTH + GAP), GRID_TOP + row * ROW_HEIGHT);
        }
    }

    fn min_scroll(&self) -> i32 {
        let rows = self.cards.len().div_ceil(self.columns()) as i32;
        (GRID_BOTTOM - (GRID_TOP + rows * ROW_HEIGHT)).min(0)
    }

    /// Scroll just enough for card `index` to be fully on screen
    pub fn ensure_visible(&mut self, index: usize) {
        let Some(card) = self.cards.get(index) else {
            return;
        };
        let top = card.frame().y;
        if top + self.scroll_y < GRID_TOP {
            self.scroll_y = GRID_TOP - top;
        } else if top + CARD_HEIGHT + self.scroll_y > GRID_BOTTOM {
            self.scroll_y = GRID_BOTTOM - CARD_HEIGHT - top;
        }
        self.scroll_y = self.scroll_y.min(0);
    }

    fn open_details(&self, index: usize, ctx: &mut AppContext) {
        if let Some(card) = self.cards.get(index) {
            log::debug!("Opening details for {}", card.package.pkg_name);
            let details = AppDetails::new(Rc::clone(&card.package), card.icon(), &self.cache_path, &self.res_dir);
            ctx.push_subscreen(Box::new(details));
        }
    }

    fn card_at(&self, event: &InputEvents) -> Option<usize> {
        let (ox, oy) = (self.frame.x, self.frame.y + self.scroll_y);
        self.cards.iter().position(|card| {
            let f = card.frame();
            event.touch_in(ox + f.x, oy + f.y, f.width, f.height)
        })
    }

    pub fn process(&mut self, event: &mut InputEvents, ctx: &mut AppContext, focus: &mut Focus) -> AppListAction {
        if event.is_key_down() {
            return self.process_key(event, ctx, focus);
        }

        if event.is_touch_down() {
            if event.x < self.frame.x {
                return AppListAction::Ignored;
            }
            self.dragging = true;
            self.drag_travel = 0;
            *focus = Focus::None;
            return AppListAction::Consumed;
        }

        if event.is_touch_motion() && self.dragging {
            self.scroll_y = (self.scroll_y + event.yrel).clamp(self.min_scroll(), 0);
            self.drag_travel += event.yrel.abs();
            return AppListAction::Consumed;
        }

        if event.is_touch_up() && self.dragging {
            self.dragging = false;
            if self.drag_travel < TAP_SLOP
                && let Some(index) = self.card_at(event)
            {
                self.open_details(index, ctx);
            }
            return AppListAction::Consumed;
        }

        AppListAction::Ignored
    }

    fn process_key(&mut self, event: &mut InputEvents, ctx: &mut AppContext, focus: &mut Focus) -> AppListAction {
        if event.held(Button::Y) {
            self.sort = self.sort.next();
            log::info!("Sorting apps {}", self.sort.label());
            self.update();
            return AppListAction::Consumed;
        }

        let direction = [Button::Up, Button::Down, Button::Left, Button::Right]
            .into_iter()
            .find(|b| event.held(*b))
            .and_then(direction_of);

        let index = match *focus {
            Focus::Sidebar(_) => return AppListAction::Ignored,
            Focus::None => {
                if direction.is_none() && !event.held(Button::A) {
                    return AppListAction::Ignored;
                }
                if self.cards.is_empty() {
                    if direction == Some(NavDirection::Left) {
                        return self.leave_left(event);
                    }
                    return AppListAction::Consumed;
                }
                *focus = Focus::AppList(0);
                self.ensure_visible(0);
                return AppListAction::Consumed;
            }
            Focus::AppList(index) => index,
        };

        if event.held(Button::A) {
            self.open_details(index, ctx);
            return AppListAction::Consumed;
        }

        let Some(direction) = direction else {
            return AppListAction::Ignored;
        };

        match navigate_grid(index, self.cards.len(), self.columns(), direction) {
            GridNav::MoveTo(next) => {
                *focus = Focus::AppList(next);
                self.ensure_visible(next);
                AppListAction::Consumed
            }
            GridNav::LeaveLeft => self.leave_left(event),
            GridNav::None => AppListAction::Consumed,
        }
    }

    fn leave_left(&self, event: &mut InputEvents) -> AppListAction {
        if !self.sidebar_visible {
            return AppListAction::Consumed;
        }
        event.acknowledge();
        AppListAction::FocusSidebar
    }

    pub fn render(&self, r: &mut dyn Renderer, origin: (i32, i32), focus: Focus) {
        if self.frame.hidden {
            return;
        }
        let ox = origin.0 + self.frame.x;
        let oy = origin.1 + self.frame.y + self.scroll_y;
        let margin = self.grid_margin();

        r.text(ox + margin, oy + 40, self.category_name, 28.0, theme::TEXT_PRIMARY, None);
        r.text(
            ox + margin,
            oy + 80,
            &format!("Sorted {}", self.sort.label()),
            15.0,
            theme::TEXT_MUTED,
            None,
        );

        if self.cards.is_empty() {
            r.text(ox + margin, oy + GRID_TOP, "No apps in this category", 20.0, theme::TEXT_MUTED, None);
            return;
        }

        for (i, card) in self.cards.iter().enumerate() {
            let f = card.frame();
            let top = oy + f.y;
            if top + f.height < 0 || top > SCREEN_HEIGHT {
                continue;
            }
            card.render(r, (ox, oy));
            if focus.app_list() == Some(i) {
                r.stroke_rect(Rect::new(ox + f.x, top, f.width, f.height).expand(5), theme::FOCUS_STROKE);
            }
        }
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }
}
