//! Keybinding registry: maps key events to actions, per context.
//!
//! Defaults are registered in [`KeybindingRegistry::new`]. Users remap an
//! action from the `[keybindings]` table of config.toml, e.g.
//! `next_page = "PageDown"`. A remapped action keeps the contexts it was
//! bound in and loses all of its default keys.
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

// ============================================================================
// Actions
// ============================================================================

/// Every command a key can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    NavDown,
    NavUp,
    Back,
    OpenPost,
    ToggleView,
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    CycleCategory,
    CycleSort,
    CycleTimeFilter,
    EnterSearch,
    ExitSearch,
    CommitSearch,
    ClearSearch,
    ResetFilters,
    CycleTheme,
    ShowHelp,
}

/// Config names for each action. The first name listed is the canonical one.
const ACTION_NAMES: &[(Action, &[&str])] = &[
    (Action::Quit, &["quit"]),
    (Action::NavDown, &["nav_down", "down"]),
    (Action::NavUp, &["nav_up", "up"]),
    (Action::Back, &["back"]),
    (Action::OpenPost, &["open_post", "open"]),
    (Action::ToggleView, &["toggle_view", "view_all"]),
    (Action::NextPage, &["next_page"]),
    (Action::PrevPage, &["prev_page", "previous_page"]),
    (Action::FirstPage, &["first_page"]),
    (Action::LastPage, &["last_page"]),
    (Action::CycleCategory, &["cycle_category", "category"]),
    (Action::CycleSort, &["cycle_sort", "sort"]),
    (Action::CycleTimeFilter, &["cycle_time_filter", "time"]),
    (Action::EnterSearch, &["enter_search", "search"]),
    (Action::ExitSearch, &["exit_search"]),
    (Action::CommitSearch, &["commit_search"]),
    (Action::ClearSearch, &["clear_search"]),
    (Action::ResetFilters, &["reset_filters", "reset"]),
    (Action::CycleTheme, &["cycle_theme", "theme"]),
    (Action::ShowHelp, &["show_help", "help"]),
];

impl Action {
    /// Help screen text.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Quit => "Quit",
            Self::NavDown => "Select next post",
            Self::NavUp => "Select previous post",
            Self::Back => "Back to featured posts",
            Self::OpenPost => "Open post in browser",
            Self::ToggleView => "Toggle featured / all posts",
            Self::NextPage => "Next page",
            Self::PrevPage => "Previous page",
            Self::FirstPage => "First page",
            Self::LastPage => "Last page",
            Self::CycleCategory => "Cycle category filter",
            Self::CycleSort => "Cycle sort order",
            Self::CycleTimeFilter => "Cycle reading-time filter",
            Self::EnterSearch => "Search posts",
            Self::ExitSearch => "Leave search box",
            Self::CommitSearch => "Apply search now",
            Self::ClearSearch => "Clear search",
            Self::ResetFilters => "Reset all filters",
            Self::CycleTheme => "Cycle theme",
            Self::ShowHelp => "Show help",
        }
    }

    /// Resolve a config name. Case and underscores are ignored, so
    /// `next_page`, `NextPage` and `nextpage` are the same action.
    pub fn from_config_name(name: &str) -> Option<Self> {
        let wanted = normalize_name(name);
        ACTION_NAMES
            .iter()
            .find(|(_, names)| names.iter().any(|n| normalize_name(n) == wanted))
            .map(|(action, _)| *action)
    }
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

// ============================================================================
// Contexts
// ============================================================================

/// Where a binding is active.
///
/// `Featured` and `Listing` fall back to `Global`; `Search` never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    Global,
    Featured,
    Listing,
    Search,
}

impl Context {
    fn parent(self) -> Option<Self> {
        match self {
            Self::Featured | Self::Listing => Some(Self::Global),
            Self::Global | Self::Search => None,
        }
    }
}

// ============================================================================
// Keys
// ============================================================================

/// Key code plus modifiers, as matched against crossterm events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySpec {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Named keys accepted in config, spelled as the help screen shows them.
const NAMED_KEYS: &[(&str, KeyCode)] = &[
    ("Enter", KeyCode::Enter),
    ("Esc", KeyCode::Esc),
    ("Tab", KeyCode::Tab),
    ("Up", KeyCode::Up),
    ("Down", KeyCode::Down),
    ("Left", KeyCode::Left),
    ("Right", KeyCode::Right),
    ("Backspace", KeyCode::Backspace),
    ("Home", KeyCode::Home),
    ("End", KeyCode::End),
    ("PageUp", KeyCode::PageUp),
    ("PageDown", KeyCode::PageDown),
    ("Space", KeyCode::Char(' ')),
];

impl KeySpec {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    const fn ch(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }

    /// Parse a config key string: `"q"`, `"/"`, `"PageDown"`, `"esc"`,
    /// `"Ctrl+u"` or `"F1"`..`"F12"`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();

        if let Some(rest) = s.strip_prefix("Ctrl+").map(str::trim) {
            return single_char(rest).map(Self::ctrl);
        }

        if let Some((_, code)) = NAMED_KEYS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
        {
            return Some(Self::plain(*code));
        }
        // Aliases not shown in help.
        match s.to_ascii_lowercase().as_str() {
            "return" => return Some(Self::plain(KeyCode::Enter)),
            "escape" => return Some(Self::plain(KeyCode::Esc)),
            _ => {}
        }

        let function_key = s
            .strip_prefix(['F', 'f'])
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| (1..=12).contains(n));
        if let Some(n) = function_key {
            return Some(Self::plain(KeyCode::F(n)));
        }

        single_char(s).map(Self::ch)
    }

    /// Label for the help screen, e.g. `"Ctrl+u"` or `"PageDown"`.
    pub fn label(&self) -> String {
        let name = NAMED_KEYS
            .iter()
            .find(|(_, code)| *code == self.code)
            .map(|(name, _)| (*name).to_string())
            .unwrap_or_else(|| match self.code {
                KeyCode::Char(c) => c.to_string(),
                KeyCode::F(n) => format!("F{n}"),
                _ => "?".to_string(),
            });

        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{name}")
        } else {
            name
        }
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

// ============================================================================
// Registry
// ============================================================================

/// One row of the help table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingInfo {
    pub context: Context,
    pub key: String,
    pub action: Action,
}

/// Keybindings in effect for this session.
pub struct KeybindingRegistry {
    by_key: HashMap<(Context, KeySpec), Action>,
    /// Registration order, used for the help screen.
    ordered: Vec<(Context, KeySpec, Action)>,
}

impl KeybindingRegistry {
    /// Registry holding the default bindings.
    pub fn new() -> Self {
        use Action::*;
        use Context::*;

        let defaults = [
            (Global, KeySpec::ch('q'), Quit),
            (Global, KeySpec::ch('j'), NavDown),
            (Global, KeySpec::plain(KeyCode::Down), NavDown),
            (Global, KeySpec::ch('k'), NavUp),
            (Global, KeySpec::plain(KeyCode::Up), NavUp),
            (Global, KeySpec::plain(KeyCode::Esc), Back),
            (Global, KeySpec::plain(KeyCode::Enter), OpenPost),
            (Global, KeySpec::ch('o'), OpenPost),
            (Global, KeySpec::ch('v'), ToggleView),
            (Global, KeySpec::plain(KeyCode::Tab), ToggleView),
            (Global, KeySpec::ch('T'), CycleTheme),
            (Global, KeySpec::ch('?'), ShowHelp),
            (Listing, KeySpec::ch('n'), NextPage),
            (Listing, KeySpec::plain(KeyCode::Right), NextPage),
            (Listing, KeySpec::ch('l'), NextPage),
            (Listing, KeySpec::ch('p'), PrevPage),
            (Listing, KeySpec::plain(KeyCode::Left), PrevPage),
            (Listing, KeySpec::ch('h'), PrevPage),
            (Listing, KeySpec::plain(KeyCode::Home), FirstPage),
            (Listing, KeySpec::plain(KeyCode::End), LastPage),
            (Listing, KeySpec::ch('c'), CycleCategory),
            (Listing, KeySpec::ch('s'), CycleSort),
            (Listing, KeySpec::ch('t'), CycleTimeFilter),
            (Listing, KeySpec::ch('/'), EnterSearch),
            (Listing, KeySpec::ch('x'), ClearSearch),
            (Listing, KeySpec::ch('r'), ResetFilters),
            (Search, KeySpec::plain(KeyCode::Esc), ExitSearch),
            (Search, KeySpec::plain(KeyCode::Enter), CommitSearch),
            (Search, KeySpec::ctrl('u'), ClearSearch),
        ];

        let mut registry = Self {
            by_key: HashMap::with_capacity(defaults.len()),
            ordered: Vec::with_capacity(defaults.len()),
        };
        for (context, key, action) in defaults {
            registry.insert(context, key, action);
        }
        registry
    }

    fn insert(&mut self, context: Context, key: KeySpec, action: Action) {
        self.by_key.insert((context, key), action);
        self.ordered.push((context, key, action));
    }

    /// Move `action` onto `key` in every context it is currently bound in.
    fn rebind(&mut self, action: Action, key: KeySpec) {
        let mut contexts: Vec<Context> = Vec::new();
        for (context, _, bound) in &self.ordered {
            if *bound == action && !contexts.contains(context) {
                contexts.push(*context);
            }
        }

        self.ordered.retain(|(_, _, bound)| *bound != action);
        self.by_key.retain(|_, bound| *bound != action);
        for context in contexts {
            self.insert(context, key, action);
        }
    }

    /// Apply `[keybindings]` from config (action name to key string).
    ///
    /// Bad entries are skipped and reported in the returned warnings.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, String>) -> Vec<String> {
        let mut warnings = Vec::new();

        for (name, key_str) in overrides {
            let Some(action) = Action::from_config_name(name) else {
                warnings.push(format!("Unknown action '{}' in [keybindings]", name));
                continue;
            };
            let Some(key) = KeySpec::parse(key_str) else {
                warnings.push(format!("Cannot parse key '{}' for '{}'", key_str, name));
                continue;
            };

            self.rebind(action, key);
            tracing::info!(action = %name, key = %key.label(), "Rebound key");
        }

        warnings
    }

    /// Action bound to a key event in `context`, if any.
    pub fn action_for_key(
        &self,
        code: KeyCode,
        modifiers: KeyModifiers,
        context: Context,
    ) -> Option<Action> {
        // Shift is already folded into the character ('T', '?').
        let modifiers = match code {
            KeyCode::Char(_) => modifiers.difference(KeyModifiers::SHIFT),
            _ => modifiers,
        };
        let key = KeySpec::new(code, modifiers);
        self.by_key
            .get(&(context, key))
            .or_else(|| {
                context
                    .parent()
                    .and_then(|parent| self.by_key.get(&(parent, key)))
            })
            .copied()
    }

    /// Bindings in registration order.
    pub fn all_bindings(&self) -> Vec<BindingInfo> {
        self.ordered
            .iter()
            .map(|(context, key, action)| BindingInfo {
                context: *context,
                key: key.label(),
                action: *action,
            })
            .collect()
    }
}

impl Default for KeybindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}
