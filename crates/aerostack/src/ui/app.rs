//! Dashboard state and input handling.
//!
//! [`App`] owns the loaded record set and the component-local UI state:
//! the live query, the table cursor, the selection, and the active nav
//! section. Every mutation happens here, in direct response to one key
//! event; rendering recomputes the view model from this state each frame.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::query::OrderQuery;
use crate::source::DataSet;
use crate::view::OrdersViewModel;

/// Navigation sections, in sidebar order.
pub const SECTIONS: [&str; 6] = [
    "Dashboard",
    "Inventory",
    "Orders",
    "Warehouse",
    "Analytics",
    "Product",
];

/// Index of the Orders section, the dashboard's home screen.
pub const ORDERS_SECTION: usize = 2;

/// Dashboard application state.
#[derive(Debug)]
pub struct App {
    data: DataSet,
    viewport: aerostack_map::Viewport,
    should_quit: bool,
    /// Active navigation section index.
    pub section: usize,
    /// Live search text and status selector.
    pub query: OrderQuery,
    /// Row cursor within the filtered order table.
    pub cursor: usize,
    /// Identifier of the selected order, if any. Nothing is selected
    /// until the operator picks a row.
    pub selected: Option<String>,
}

impl App {
    /// Create the dashboard state over a loaded record set.
    #[must_use]
    pub fn new(data: DataSet, viewport: aerostack_map::Viewport) -> Self {
        Self {
            data,
            viewport,
            should_quit: false,
            section: ORDERS_SECTION,
            query: OrderQuery::default(),
            cursor: 0,
            selected: None,
        }
    }

    /// The loaded record set.
    #[must_use]
    pub fn data(&self) -> &DataSet {
        &self.data
    }

    /// The configured map viewport.
    #[must_use]
    pub fn viewport(&self) -> aerostack_map::Viewport {
        self.viewport
    }

    /// Whether the event loop should exit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Compose the current orders view model.
    #[must_use]
    pub fn view(&self) -> OrdersViewModel<'_> {
        OrdersViewModel::compose(&self.data.orders, &self.query, self.selected.as_deref())
    }

    /// Handle one key event.
    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char(c) => {
                self.query.search.push(c);
                self.cursor = 0;
            }
            KeyCode::Backspace => {
                self.query.search.pop();
                self.cursor = 0;
            }
            KeyCode::Tab => {
                self.query.status = self.query.status.next();
                self.cursor = 0;
            }
            KeyCode::BackTab => {
                self.query.status = self.query.status.prev();
                self.cursor = 0;
            }
            KeyCode::Down => {
                let len = self.filtered_len();
                if len > 0 {
                    self.cursor = (self.cursor + 1).min(len - 1);
                }
            }
            KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Left => {
                self.section = if self.section == 0 {
                    SECTIONS.len() - 1
                } else {
                    self.section - 1
                };
            }
            KeyCode::Right => {
                self.section = (self.section + 1) % SECTIONS.len();
            }
            KeyCode::Enter => {
                self.select_under_cursor();
            }
            KeyCode::Esc => {
                if self.selected.is_some() {
                    self.selected = None;
                } else if !self.query.search.is_empty() {
                    self.query.search.clear();
                    self.cursor = 0;
                } else {
                    self.should_quit = true;
                }
            }
            _ => {}
        }
    }

    fn filtered_len(&self) -> usize {
        self.query.filter(&self.data.orders).len()
    }

    fn select_under_cursor(&mut self) {
        let id = self
            .query
            .filter(&self.data.orders)
            .get(self.cursor)
            .map(|order| order.id.clone());
        if let Some(id) = id {
            self.selected = Some(id);
        }
    }
}
