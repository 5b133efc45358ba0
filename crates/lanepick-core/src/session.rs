// Top-level session loop: pick, view stats, exit.
//
// The store is read once when the session is built and kept for its whole
// lifetime; every mutation is flushed by the component making it.

use rand::Rng;
use tracing::{info, warn};

use crate::console::Console;
use crate::draw::{self, DrawOutcome};
use crate::error::PickerError;
use crate::ledger;
use crate::menu::{Menu, Unmatched};
use crate::ownership;
use crate::pool;
use crate::role::{PlayStyle, Role};
use crate::source::ChampionSource;
use crate::store::IniStore;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopAction {
    Pick,
    ViewStats,
    Exit,
}

pub struct Session<S, C, R> {
    store: IniStore,
    source: S,
    console: C,
    rng: R,
    max_attempts: u32,
}

impl<S, C, R> Session<S, C, R>
where
    S: ChampionSource,
    C: Console,
    R: Rng,
{
    pub fn new(store: IniStore, source: S, console: C, rng: R) -> Self {
        Self {
            store,
            source,
            console,
            rng,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Consecutive invalid answers tolerated by inner menus and selections.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn store(&self) -> &IniStore {
        &self.store
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Run the menu loop until the player exits. Unrecognized input exits too.
    pub async fn run(&mut self) -> Result<(), PickerError> {
        let menu = top_menu();
        loop {
            match menu.choose(&mut self.console)? {
                TopAction::Pick => {
                    self.pick().await?;
                }
                TopAction::ViewStats => self.view_stats()?,
                TopAction::Exit => {
                    self.console.show("Thank you for using the application!")?;
                    info!("session finished");
                    return Ok(());
                }
            }
        }
    }

    /// One full pick: role, play style, fetch, ownership, draw.
    pub async fn pick(&mut self) -> Result<DrawOutcome, PickerError> {
        let role = role_menu(self.max_attempts).choose(&mut self.console)?;
        let style = play_style_menu(self.max_attempts).choose(&mut self.console)?;
        info!(role = %role, style = %style, "pick started");

        let candidates = self.source.fetch(role, style.tiers()).await?;
        info!(role = %role, candidates = candidates.len(), "tier list fetched");

        let resolution = ownership::resolve(
            &mut self.store,
            &mut self.console,
            role,
            &candidates,
            self.max_attempts,
        )?;

        let pickable = pool::reconcile(&candidates, &resolution.unowned);
        if resolution.needs_persist() {
            ownership::persist_unowned(&mut self.store, role, &resolution.unowned)?;
        }
        if pickable.is_empty() {
            warn!(role = %role, "no pickable champions");
        }

        draw::run(pickable, &mut self.console, &mut self.store, &mut self.rng)
    }

    pub fn view_stats(&mut self) -> Result<(), PickerError> {
        let text = ledger::render(&self.store)?;
        if !text.is_empty() {
            self.console.show(&text)?;
        }
        Ok(())
    }
}

fn top_menu() -> Menu<TopAction> {
    Menu::new(
        "main",
        "Welcome to LoL random champion picker! Please select what you want to do:",
        Unmatched::Fallback(TopAction::Exit),
    )
    .option("Pick a random champion", TopAction::Pick)
    .option("See stats about picked champions", TopAction::ViewStats)
    .option("Exit program", TopAction::Exit)
}

fn role_menu(max_attempts: u32) -> Menu<Role> {
    Role::ALL.iter().fold(
        Menu::new(
            "role",
            "Please type what role you're going to play:",
            Unmatched::Retry {
                max_attempts,
                message: "You're trolling",
            },
        ),
        |menu, role| menu.option(role.label(), *role),
    )
}

fn play_style_menu(max_attempts: u32) -> Menu<PlayStyle> {
    PlayStyle::ALL.iter().fold(
        Menu::new(
            "play style",
            "How do you feel like playing?",
            Unmatched::Retry {
                max_attempts,
                message: "You're trolling again",
            },
        ),
        |menu, style| menu.option(style.label(), *style),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_menu_accepts_labels_and_numbers() {
        let menu = role_menu(3);
        assert_eq!(menu.match_input("adc"), Some(Role::Adc));
        assert_eq!(menu.match_input("5)"), Some(Role::Support));
        assert_eq!(menu.match_input("TOP"), Some(Role::Top));
    }

    #[test]
    fn play_style_menu_order() {
        let menu = play_style_menu(3);
        assert_eq!(menu.match_input("1"), Some(PlayStyle::Tryhard));
        assert_eq!(menu.match_input("not too troll"), Some(PlayStyle::Moderate));
        assert_eq!(menu.match_input("3"), Some(PlayStyle::Feeder));
        assert_eq!(
            menu.match_input("Just hit me with something, fam"),
            Some(PlayStyle::Any)
        );
    }

    #[test]
    fn top_menu_falls_back_to_exit() {
        let menu = top_menu();
        assert_eq!(menu.match_input("2"), Some(TopAction::ViewStats));
        assert_eq!(menu.match_input("pick a random champion"), Some(TopAction::Pick));
        assert_eq!(menu.match_input("dance"), None);
    }
}
