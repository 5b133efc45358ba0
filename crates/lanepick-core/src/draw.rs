// Reject-and-redraw selection over the pickable pool.

use rand::Rng;
use tracing::{debug, info};

use crate::console::Console;
use crate::error::PickerError;
use crate::ledger;
use crate::store::IniStore;

/// How the draw loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOutcome {
    /// The player said "yes"; the pick was recorded in the ledger.
    Accepted(String),
    /// Every candidate was rejected; the last one drawn is forced and is not
    /// recorded in the ledger.
    Forced(String),
}

impl DrawOutcome {
    pub fn champion(&self) -> &str {
        match self {
            DrawOutcome::Accepted(name) | DrawOutcome::Forced(name) => name,
        }
    }
}

/// Draw uniformly without replacement until the player accepts or the pool
/// runs dry. An empty pool is fatal.
pub fn run<R: Rng>(
    pool: Vec<String>,
    console: &mut dyn Console,
    store: &mut IniStore,
    rng: &mut R,
) -> Result<DrawOutcome, PickerError> {
    if pool.is_empty() {
        return Err(PickerError::NoChampionsLeft);
    }

    let mut pool = pool;
    loop {
        let index = rng.gen_range(0..pool.len());
        let champion = pool.remove(index);
        debug!(champion = %champion, remaining = pool.len(), "drew champion");

        console.show(&format!("Randomly picked champion is: {champion}"))?;
        let answer = console.ask("Satisfied with the result? [yes/no] ")?;

        if answer == "yes" {
            ledger::record_pick(store, &champion)?;
            info!(champion = %champion, "champion accepted");
            return Ok(DrawOutcome::Accepted(champion));
        }

        if pool.is_empty() {
            console.show(&format!(
                "No more champions left to choose from. \
                 Now you have to play {champion} after all!"
            ))?;
            info!(champion = %champion, "pool exhausted, forcing last draw");
            return Ok(DrawOutcome::Forced(champion));
        }

        console.show("Champion removed from pool. Try again!")?;
    }
}
