//! Application state and the reducer that advances it. All mutation funnels
//! through [`App::apply`]; the terminal layer only translates key events
//! into [`Action`]s and draws whatever state results.

use chrono::{DateTime, Local};

use crate::pager::Pager;
use crate::store::Roster;
use crate::types::{Field, User, UserDraft};

/// What the open modal will commit to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(u64),
}

/// The modal form while it is open: mode, draft, and which field has focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub mode: FormMode,
    pub draft: UserDraft,
    pub focus: Field,
}

impl Form {
    fn add() -> Self {
        Self {
            mode: FormMode::Add,
            draft: UserDraft::default(),
            focus: Field::FirstName,
        }
    }

    fn edit(user: &User) -> Self {
        Self {
            mode: FormMode::Edit(user.id),
            draft: UserDraft::from_user(user),
            focus: Field::FirstName,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Add User",
            FormMode::Edit(_) => "Edit User",
        }
    }
}

/// Everything the UI can do to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    OpenAdd,
    OpenEdit,
    Delete,
    SelectNext,
    SelectPrev,
    GotoPage(usize),
    NextPage,
    PrevPage,
    Input(char),
    Backspace,
    FocusNext,
    FocusPrev,
    Save,
    Cancel,
    Quit,
}

pub struct App {
    pub roster: Roster,
    pub pager: Pager,
    pub form: Option<Form>,
    pub error: Option<String>,
    /// Row selection within the visible slice; the terminal stand-in for the
    /// per-row buttons of the original interface.
    pub selected: usize,
    pub synced_at: Option<DateTime<Local>>,
    pub should_quit: bool,
}

impl App {
    pub fn new(page_size: usize) -> Self {
        Self {
            roster: Roster::new(),
            pager: Pager::new(page_size),
            form: None,
            error: None,
            selected: 0,
            synced_at: None,
            should_quit: false,
        }
    }

    /// Install the fetched directory wholesale.
    pub fn seed(&mut self, users: Vec<User>) {
        self.roster.replace_all(users);
        self.synced_at = Some(Local::now());
    }

    /// Replace the single error banner.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn visible(&self) -> &[User] {
        self.pager.slice(self.roster.users())
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.visible().get(self.selected)
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,

            Action::OpenAdd => self.form = Some(Form::add()),
            Action::OpenEdit => {
                if let Some(user) = self.selected_user() {
                    self.form = Some(Form::edit(user));
                }
            }
            Action::Delete => {
                if let Some(id) = self.selected_user().map(|u| u.id) {
                    self.roster.remove(id);
                    // The page stays put even if its slice is now empty;
                    // only the row cursor is pulled back in.
                    self.clamp_selection();
                }
            }

            Action::SelectNext => {
                let len = self.visible().len();
                if len > 0 && self.selected + 1 < len {
                    self.selected += 1;
                }
            }
            Action::SelectPrev => {
                self.selected = self.selected.saturating_sub(1);
            }

            Action::GotoPage(page) => {
                // Only pages that are actually shown in the pagination bar
                // can be selected.
                if page >= 1 && page <= self.pager.page_count(self.roster.len()) {
                    self.pager.select(page);
                    self.selected = 0;
                }
            }
            Action::NextPage => {
                self.pager.next(self.roster.len());
                self.selected = 0;
            }
            Action::PrevPage => {
                self.pager.prev();
                self.selected = 0;
            }

            Action::Input(c) => {
                if let Some(form) = &mut self.form {
                    form.draft.field_mut(form.focus).push(c);
                }
            }
            Action::Backspace => {
                if let Some(form) = &mut self.form {
                    form.draft.field_mut(form.focus).pop();
                }
            }
            Action::FocusNext => {
                if let Some(form) = &mut self.form {
                    form.focus = form.focus.next();
                }
            }
            Action::FocusPrev => {
                if let Some(form) = &mut self.form {
                    form.focus = form.focus.prev();
                }
            }

            Action::Save => self.save(),
            Action::Cancel => self.form = None,
        }
    }

    fn save(&mut self) {
        let Some(form) = self.form.clone() else {
            return;
        };
        match form.mode {
            FormMode::Add => match self.roster.add(&form.draft) {
                Ok(_) => {
                    self.form = None;
                    self.error = None;
                }
                Err(e) => self.error = Some(e.to_string()),
            },
            FormMode::Edit(id) => {
                self.roster.update(id, &form.draft);
                self.form = None;
                self.error = None;
            }
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}
