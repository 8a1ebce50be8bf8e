//! # Interactive Session
//!
//! Runs the shop operations against injected input and output
//! collaborators, so the same flow drives a terminal or a scripted test.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Operation                                    │
//! │                                                                         │
//! │  Input::prompt ──► answer ──► Shop method ──┬── Ok  ──► Output::info   │
//! │       ▲                                     │                           │
//! │       │                                     └── Err ──► Output::error  │
//! │   next prompt only                                      (abort)         │
//! │   if this one passed                                                    │
//! │                                                                         │
//! │  Errors end the operation, never the session.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::{CoreError, Field, ValidationError};
use crate::format::{format_cart_line, format_product_line};
use crate::shop::Shop;
use crate::types::CartAddition;

// =============================================================================
// Collaborators
// =============================================================================

/// Source of user answers.
pub trait Input {
    /// Shows `message` and returns the answer, or `None` if the user
    /// declined to answer (cancel, end of input).
    fn prompt(&mut self, message: &str) -> Option<String>;
}

/// Sink for shop messages.
pub trait Output {
    /// Normal messages (listings, receipts, confirmations).
    fn info(&mut self, text: &str);

    /// Error messages.
    fn error(&mut self, text: &str);
}

// =============================================================================
// Prompts
// =============================================================================

const PROMPT_TITLE: &str = "Titill:";
const PROMPT_DESCRIPTION: &str = "Lýsing:";
const PROMPT_PRICE: &str = "Verð:";
const PROMPT_PRODUCT_ID: &str = "Sláðu inn auðkenni (ID) á vöru sem þú vilt bæta í körfu:";
const PROMPT_QUANTITY: &str = "Sláðu inn fjölda sem þú vilt bæta í körfu:";
const PROMPT_NAME: &str = "Nafn:";
const PROMPT_ADDRESS: &str = "Heimilisfang:";

// =============================================================================
// Session
// =============================================================================

/// A shop wired to an input and an output.
pub struct Session<I, O> {
    shop: Shop,
    input: I,
    output: O,
}

impl<I: Input, O: Output> Session<I, O> {
    pub fn new(shop: Shop, input: I, output: O) -> Self {
        Session {
            shop,
            input,
            output,
        }
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Splits the session back into its parts.
    pub fn into_parts(self) -> (Shop, I, O) {
        (self.shop, self.input, self.output)
    }

    /// Asks for title, description and price, then adds the product.
    ///
    /// An empty answer stops at that prompt with the matching error.
    pub fn add_product(&mut self) {
        let Some(title) = self.required_answer(PROMPT_TITLE, Field::Title) else {
            return;
        };
        let Some(description) = self.required_answer(PROMPT_DESCRIPTION, Field::Description)
        else {
            return;
        };
        let Some(price) = self.required_answer(PROMPT_PRICE, Field::Price) else {
            return;
        };

        match self.shop.add_product(&title, &description, &price) {
            Ok(product) => {
                let line = format_product_line(self.shop.currency(), &product, None);
                self.output.info(&format!("Vöru bætt við:\n{line}"));
            }
            Err(e) => self.report(e),
        }
    }

    /// Prints the catalog.
    pub fn list_products(&mut self) {
        let listing = self.shop.list_products().join("\n");
        self.output.info(&listing);
    }

    /// Asks for a product id and a quantity, then updates the cart.
    ///
    /// Declining either prompt ends the operation silently. The id is
    /// checked before the quantity is asked for.
    pub fn add_to_cart(&mut self) {
        let Some(id) = self.optional_answer(PROMPT_PRODUCT_ID) else {
            debug!("add_to_cart cancelled at product id");
            return;
        };

        if let Err(e) = self.shop.select_product(&id) {
            self.report(e);
            return;
        }

        let Some(quantity) = self.optional_answer(PROMPT_QUANTITY) else {
            debug!("add_to_cart cancelled at quantity");
            return;
        };

        match self.shop.add_to_cart(&id, &quantity) {
            Ok(addition) => {
                let text = format_cart_line(self.shop.currency(), addition.line());
                let heading = match addition {
                    CartAddition::Added(_) => "Vöru bætt við körfu:",
                    CartAddition::Merged(_) => "Vöru fjöldi uppfærður:",
                };
                self.output.info(&format!("{heading}\n{text}"));
            }
            Err(e) => self.report(e),
        }
    }

    /// Prints the cart.
    pub fn show_cart(&mut self) {
        let text = self.shop.show_cart();
        self.output.info(&text);
    }

    /// Asks for name and address and prints the receipt.
    ///
    /// An empty cart is reported before anything is asked.
    pub fn checkout(&mut self) {
        if let Err(e) = self.shop.ensure_cart_not_empty() {
            self.report(e);
            return;
        }

        let Some(name) = self.required_answer(PROMPT_NAME, Field::Name) else {
            return;
        };
        let Some(address) = self.required_answer(PROMPT_ADDRESS, Field::Address) else {
            return;
        };

        match self.shop.checkout(&name, &address) {
            Ok(receipt) => self.output.info(&receipt),
            Err(e) => self.report(e),
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Prompts; blank or declined answers are reported as `Required`.
    fn required_answer(&mut self, message: &str, field: Field) -> Option<String> {
        match self.optional_answer(message) {
            Some(answer) => Some(answer),
            None => {
                self.report(ValidationError::Required { field }.into());
                None
            }
        }
    }

    /// Prompts; blank answers count as declined.
    fn optional_answer(&mut self, message: &str) -> Option<String> {
        self.input
            .prompt(message)
            .filter(|answer| !answer.trim().is_empty())
    }

    fn report(&mut self, err: CoreError) {
        debug!(error = ?err, "Operation aborted");
        self.output.error(&err.to_string());
    }
}

// =============================================================================
// Scripted Collaborators
// =============================================================================

#[cfg(any(test, feature = "testing"))]
pub use self::testing::{RecordingOutput, ScriptedInput};

/// In-memory `Input` and `Output` for driving sessions in tests.
///
/// Built for this crate's tests and, with the `testing` feature, for
/// downstream crates' tests.
#[cfg(any(test, feature = "testing"))]
mod testing {
    use std::collections::VecDeque;

    use super::{Input, Output};

    /// Answers prompts from a fixed list, then declines.
    #[derive(Debug, Default)]
    pub struct ScriptedInput {
        answers: VecDeque<Option<String>>,
        prompts: Vec<String>,
    }

    impl ScriptedInput {
        pub fn new<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
            ScriptedInput {
                answers: answers.into_iter().map(|a| Some(a.into())).collect(),
                prompts: Vec::new(),
            }
        }

        /// Queues a declined answer.
        pub fn decline(mut self) -> Self {
            self.answers.push_back(None);
            self
        }

        /// Prompts shown so far.
        pub fn prompts(&self) -> &[String] {
            &self.prompts
        }
    }

    impl Input for ScriptedInput {
        fn prompt(&mut self, message: &str) -> Option<String> {
            self.prompts.push(message.to_string());
            self.answers.pop_front().flatten()
        }
    }

    /// Keeps everything written to it.
    #[derive(Debug, Default)]
    pub struct RecordingOutput {
        pub infos: Vec<String>,
        pub errors: Vec<String>,
    }

    impl Output for RecordingOutput {
        fn info(&mut self, text: &str) {
            self.infos.push(text.to_string());
        }

        fn error(&mut self, text: &str) {
            self.errors.push(text.to_string());
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
