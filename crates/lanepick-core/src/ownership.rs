// Per-role record of unowned champions.
//
// Each pick runs the role through a small state machine:
//
//   NoConfig  --Initialize-->  unowned set chosen from the fresh fetch (persist pending)
//   HasConfig --UsePast------>  persisted set used as-is
//   HasConfig --Reset-------->  section deleted, then Initialize (persist pending)
//   HasConfig --Show--------->  persisted set printed, back to the sub-menu
//   HasConfig --RemoveBought->  entries dropped and saved at once, back to the sub-menu
//
// A pending set is written by the session after pool reconciliation.

use tracing::{debug, info};

use crate::console::Console;
use crate::error::{PickerError, StoreError};
use crate::menu::{Menu, Unmatched};
use crate::role::Role;
use crate::selection::ask_selection;
use crate::store::IniStore;

/// Option key holding the JSON array of unowned champion names.
pub const UNOWNED_KEY: &str = "Unowned";

const TROLLING_AGAIN: &str = "You're trolling again";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Whether a role already has a persisted unowned set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigState {
    NoConfig,
    HasConfig(Vec<String>),
}

impl ConfigState {
    pub fn detect(store: &IniStore, role: Role) -> Result<Self, StoreError> {
        Ok(match load_unowned(store, role)? {
            Some(unowned) => ConfigState::HasConfig(unowned),
            None => ConfigState::NoConfig,
        })
    }
}

/// How the unowned set in a [`Resolution`] came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// No prior record; chosen against the current fetch.
    Initialized,
    /// Prior record deleted and chosen again against the current fetch.
    Reset,
    /// Prior record (possibly edited this session) used verbatim.
    Past,
}

/// Outcome of the per-role interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub unowned: Vec<String>,
    pub origin: Origin,
}

impl Resolution {
    /// Initialize and Reset outcomes still have to be written to the store.
    pub fn needs_persist(&self) -> bool {
        matches!(self.origin, Origin::Initialized | Origin::Reset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigAction {
    UsePast,
    Reset,
    Show,
    RemoveBought,
}

// ---------------------------------------------------------------------------
// Store access
// ---------------------------------------------------------------------------

pub fn load_unowned(store: &IniStore, role: Role) -> Result<Option<Vec<String>>, StoreError> {
    store.get_json(role.section(), UNOWNED_KEY)
}

/// Write `unowned` under the role's section and flush the store.
pub fn persist_unowned(
    store: &mut IniStore,
    role: Role,
    unowned: &[String],
) -> Result<(), StoreError> {
    store.set_json(role.section(), UNOWNED_KEY, unowned)?;
    store.save()?;
    info!(role = %role, count = unowned.len(), "unowned champions saved");
    Ok(())
}

// ---------------------------------------------------------------------------
// Pure helpers
// ---------------------------------------------------------------------------

/// Names at `indices` of `candidates`, in selection order.
pub fn unowned_from_selection(candidates: &[String], indices: &[usize]) -> Vec<String> {
    indices
        .iter()
        .filter_map(|&i| candidates.get(i).cloned())
        .collect()
}

/// A copy of `unowned` without the entries at `indices`.
///
/// Indices are removed highest first so earlier positions do not shift;
/// repeated indices remove their entry once.
pub fn remove_bought(unowned: &[String], indices: &[usize]) -> Vec<String> {
    let mut sorted = indices.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.dedup();

    let mut remaining = unowned.to_vec();
    for i in sorted {
        if i < remaining.len() {
            remaining.remove(i);
        }
    }
    remaining
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

/// Settle the unowned set for `role` against the freshly fetched `candidates`.
pub fn resolve(
    store: &mut IniStore,
    console: &mut dyn Console,
    role: Role,
    candidates: &[String],
    max_attempts: u32,
) -> Result<Resolution, PickerError> {
    match ConfigState::detect(store, role)? {
        ConfigState::NoConfig => {
            debug!(role = %role, "no past configuration");
            let unowned = initialize(console, candidates, max_attempts)?;
            Ok(Resolution {
                unowned,
                origin: Origin::Initialized,
            })
        }
        ConfigState::HasConfig(_) => configure_existing(store, console, role, candidates, max_attempts),
    }
}

fn initialize(
    console: &mut dyn Console,
    candidates: &[String],
    max_attempts: u32,
) -> Result<Vec<String>, PickerError> {
    let indices = ask_selection(
        console,
        "Please indicate, if you don't own any champions\n\
         or press Enter, if all champions are owned:",
        candidates,
        max_attempts,
        TROLLING_AGAIN,
    )?;
    Ok(unowned_from_selection(candidates, &indices))
}

fn configure_existing(
    store: &mut IniStore,
    console: &mut dyn Console,
    role: Role,
    candidates: &[String],
    max_attempts: u32,
) -> Result<Resolution, PickerError> {
    let mut menu = Menu::new(
        "configuration",
        "Detected past configuration of unowned champions.",
        Unmatched::Retry {
            max_attempts,
            message: TROLLING_AGAIN,
        },
    )
    .option("Use past configuration", ConfigAction::UsePast)
    .option("Reset configuration of role", ConfigAction::Reset)
    .option("Show configuration", ConfigAction::Show)
    .option("Remove champion (Bought him)", ConfigAction::RemoveBought);

    loop {
        match menu.choose(console)? {
            ConfigAction::UsePast => {
                let unowned = load_unowned(store, role)?.unwrap_or_default();
                debug!(role = %role, count = unowned.len(), "using past configuration");
                return Ok(Resolution {
                    unowned,
                    origin: Origin::Past,
                });
            }
            ConfigAction::Reset => {
                store.remove_section(role.section());
                store.save()?;
                info!(role = %role, "configuration reset");
                let unowned = initialize(console, candidates, max_attempts)?;
                return Ok(Resolution {
                    unowned,
                    origin: Origin::Reset,
                });
            }
            ConfigAction::Show => {
                let unowned = load_unowned(store, role)?.unwrap_or_default();
                if !unowned.is_empty() {
                    console.show(&unowned.join("\n"))?;
                }
            }
            ConfigAction::RemoveBought => {
                let past = load_unowned(store, role)?.unwrap_or_default();
                let indices = ask_selection(
                    console,
                    "Please indicate what new champions were bought:",
                    &past,
                    max_attempts,
                    TROLLING_AGAIN,
                )?;
                let updated = remove_bought(&past, &indices);
                persist_unowned(store, role, &updated)?;
                menu.relabel(0, "Use new configuration");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn remove_bought_high_to_low() {
        let list = names(&["A", "B", "C", "D"]);
        assert_eq!(remove_bought(&list, &[0, 2]), names(&["B", "D"]));
        assert_eq!(list, names(&["A", "B", "C", "D"]), "input must be untouched");
    }

    #[test]
    fn remove_bought_ignores_repeats_and_strays() {
        let list = names(&["A", "B", "C"]);
        assert_eq!(remove_bought(&list, &[1, 1, 9]), names(&["A", "C"]));
        assert_eq!(remove_bought(&list, &[]), list);
    }

    #[test]
    fn selection_keeps_order_and_duplicates() {
        let candidates = names(&["X", "Y", "Z"]);
        assert_eq!(
            unowned_from_selection(&candidates, &[2, 0, 0]),
            names(&["Z", "X", "X"])
        );
    }

    #[test]
    fn no_config_initializes_from_candidates() {
        let mut store = IniStore::in_memory();
        let mut console = ScriptedConsole::new(["[1-2]"]);
        let candidates = names(&["Aatrox", "Camille", "Darius"]);

        let res = resolve(&mut store, &mut console, Role::Top, &candidates, 3).unwrap();
        assert_eq!(res.unowned, names(&["Aatrox", "Camille"]));
        assert_eq!(res.origin, Origin::Initialized);
        assert!(res.needs_persist());
        // Nothing is written until the session persists the resolution.
        assert!(!store.has_section("Top"));
    }

    #[test]
    fn empty_answer_means_everything_owned() {
        let mut store = IniStore::in_memory();
        let mut console = ScriptedConsole::new([""]);
        let res = resolve(&mut store, &mut console, Role::Mid, &names(&["Ahri"]), 3).unwrap();
        assert!(res.unowned.is_empty());
    }

    #[test]
    fn use_past_loads_verbatim() {
        let mut store = IniStore::in_memory();
        persist_unowned(&mut store, Role::Jungle, &names(&["Old", "Stale"])).unwrap();
        let mut console = ScriptedConsole::new(["1"]);

        let res = resolve(&mut store, &mut console, Role::Jungle, &names(&["Lee Sin"]), 3).unwrap();
        assert_eq!(res.unowned, names(&["Old", "Stale"]));
        assert_eq!(res.origin, Origin::Past);
        assert!(!res.needs_persist());
    }

    #[test]
    fn reset_replaces_previous_set() {
        let mut store = IniStore::in_memory();
        persist_unowned(&mut store, Role::Top, &names(&["Old"])).unwrap();
        let mut console = ScriptedConsole::new(["Reset configuration of role", "1"]);

        let res = resolve(&mut store, &mut console, Role::Top, &names(&["X", "Y"]), 3).unwrap();
        assert_eq!(res.unowned, names(&["X"]));
        assert_eq!(res.origin, Origin::Reset);
        assert!(!store.has_section("Top"), "reset deletes the section immediately");

        persist_unowned(&mut store, Role::Top, &res.unowned).unwrap();
        assert_eq!(load_unowned(&store, Role::Top).unwrap(), Some(names(&["X"])));
    }

    #[test]
    fn show_then_use_past() {
        let mut store = IniStore::in_memory();
        persist_unowned(&mut store, Role::Support, &names(&["Bard", "Taric"])).unwrap();
        let mut console = ScriptedConsole::new(["3)", "1"]);

        let res = resolve(&mut store, &mut console, Role::Support, &[], 3).unwrap();
        assert_eq!(res.origin, Origin::Past);
        assert!(console.transcript().iter().any(|t| t == "Bard\nTaric"));
    }

    #[test]
    fn show_of_empty_set_prints_nothing() {
        let mut store = IniStore::in_memory();
        persist_unowned(&mut store, Role::Mid, &[]).unwrap();

        let mut direct = ScriptedConsole::new(["1"]);
        resolve(&mut store, &mut direct, Role::Mid, &[], 3).unwrap();
        let mut shown = ScriptedConsole::new(["3", "1"]);
        resolve(&mut store, &mut shown, Role::Mid, &[], 3).unwrap();

        // Only the repeated sub-menu prompt is added.
        assert_eq!(shown.transcript().len(), direct.transcript().len() + 1);
        assert!(shown.transcript().iter().all(|t| !t.is_empty()));
    }

    #[test]
    fn remove_bought_persists_and_relabels() {
        let mut store = IniStore::in_memory();
        persist_unowned(&mut store, Role::Adc, &names(&["A", "B", "C", "D"])).unwrap();
        let mut console = ScriptedConsole::new(["4", "1,3", "use new configuration"]);

        let res = resolve(&mut store, &mut console, Role::Adc, &[], 3).unwrap();
        assert_eq!(res.unowned, names(&["B", "D"]));
        assert_eq!(res.origin, Origin::Past);
        assert_eq!(load_unowned(&store, Role::Adc).unwrap(), Some(names(&["B", "D"])));
        assert!(console.output().contains("1) Use new configuration"));
    }

    #[test]
    fn sub_menu_three_strikes() {
        let mut store = IniStore::in_memory();
        persist_unowned(&mut store, Role::Mid, &names(&["Zed"])).unwrap();
        let mut console = ScriptedConsole::new(["no", "nope", "never"]);

        let err = resolve(&mut store, &mut console, Role::Mid, &[], 3).unwrap_err();
        assert_eq!(err.exit_message(), "You're trolling again");
    }

    #[test]
    fn detect_reports_state() {
        let mut store = IniStore::in_memory();
        assert_eq!(ConfigState::detect(&store, Role::Top).unwrap(), ConfigState::NoConfig);
        persist_unowned(&mut store, Role::Top, &[]).unwrap();
        assert_eq!(
            ConfigState::detect(&store, Role::Top).unwrap(),
            ConfigState::HasConfig(vec![])
        );
    }
}
