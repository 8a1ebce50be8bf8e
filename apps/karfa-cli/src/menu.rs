//! # Menu Loop
//!
//! Numbered menu that dispatches to the session operations until the user
//! quits or input ends.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  print menu ──► prompt choice ──┬── 1..5 ──► Session operation ──┐     │
//! │       ▲                          ├── 0 / q / EOF ──► return       │     │
//! │       │                          └── other ──► error, repeat      │     │
//! │       └──────────────────────────────────────────────────────────┘     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::str::FromStr;

use karfa_core::{Input, Output, Session};
use tracing::{debug, info};

const MENU: &str = "\
Aðgerðir:
  1) Bæta vöru í vörulista
  2) Sýna vörur
  3) Bæta vöru í körfu
  4) Sýna körfu
  5) Klára kaup
  0) Hætta";

const PROMPT_CHOICE: &str = "Veldu aðgerð:";

const UNKNOWN_CHOICE: &str = "Óþekkt aðgerð, veldu 0-5.";

/// One menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddProduct,
    ListProducts,
    AddToCart,
    ShowCart,
    Checkout,
    Quit,
}

impl FromStr for MenuAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" => Ok(MenuAction::AddProduct),
            "2" => Ok(MenuAction::ListProducts),
            "3" => Ok(MenuAction::AddToCart),
            "4" => Ok(MenuAction::ShowCart),
            "5" => Ok(MenuAction::Checkout),
            "0" | "q" | "h" => Ok(MenuAction::Quit),
            _ => Err(()),
        }
    }
}

/// Runs the menu until the user quits. Returns the number of operations run.
pub fn run_menu<I: Input, O: Output>(session: &mut Session<I, O>) -> usize {
    let mut operations = 0;

    loop {
        session.output_mut().info(MENU);

        let Some(answer) = session.input_mut().prompt(PROMPT_CHOICE) else {
            debug!("Input closed, leaving menu");
            break;
        };

        let Ok(action) = answer.parse::<MenuAction>() else {
            session.output_mut().error(UNKNOWN_CHOICE);
            continue;
        };

        debug!(?action, "Menu choice");
        match action {
            MenuAction::AddProduct => session.add_product(),
            MenuAction::ListProducts => session.list_products(),
            MenuAction::AddToCart => session.add_to_cart(),
            MenuAction::ShowCart => session.show_cart(),
            MenuAction::Checkout => session.checkout(),
            MenuAction::Quit => break,
        }
        operations += 1;
    }

    let totals = session.shop().totals();
    info!(
        operations,
        cart_lines = totals.line_count,
        cart_total = totals.total.kronur(),
        "Session ended"
    );
    operations
}
