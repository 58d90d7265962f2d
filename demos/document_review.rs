//! Document Review Workflow
//!
//! A toy engine resolves events against a transition table and hands each
//! resolved transition to a `DefaultDelegate`.
//!
//! Key concepts:
//! - The engine owns legality; the delegate only runs hooks
//! - Exit and enter hooks are skipped for self-transitions
//! - A failing action triggers compensation and leaves the state unchanged
//!
//! Run with: cargo run --example document_review

use stagehand::define_states;
use stagehand::{DefaultDelegate, Delegate, EventProcessor, Outcome};
use std::cell::RefCell;

define_states! {
    enum DocState {
        Draft,
        Review,
        Approved,
        Published,
    }
    terminal: [Published]
}

struct Document {
    id: u64,
    word_count: usize,
}

#[derive(Debug)]
enum ReviewError {
    TooShort { words: usize },
    NotApproved,
}

struct Editorial {
    reviewers: RefCell<Vec<String>>,
}

impl EventProcessor for Editorial {
    type State = DocState;
    type Args = Document;
    type Output = String;
    type Error = ReviewError;

    fn on_exit(&self, from: &DocState, doc: &Document) {
        println!("  [exit]   doc {} leaves {from}", doc.id);
    }

    fn action(
        &self,
        action: &str,
        _from: &DocState,
        to: &DocState,
        doc: &Document,
    ) -> Outcome<String, ReviewError> {
        match action {
            "submit" if doc.word_count < 100 => Outcome::failure(ReviewError::TooShort {
                words: doc.word_count,
            }),
            "submit" => {
                self.reviewers.borrow_mut().push("ann".to_string());
                Outcome::success(format!("assigned to ann, heading to {to}"))
            }
            "publish" if self.reviewers.borrow().is_empty() => {
                Outcome::failure(ReviewError::NotApproved)
            }
            "comment" => Outcome::success("comment added".to_string()),
            _ => Outcome::success(format!("{action} done")),
        }
    }

    fn on_action_failure(
        &self,
        action: &str,
        from: &DocState,
        _to: &DocState,
        doc: &Document,
        err: &ReviewError,
    ) {
        println!("  [undo]   doc {} stays in {from}: {action} failed with {err:?}", doc.id);
    }

    fn on_enter(&self, to: &DocState, doc: &Document) {
        println!("  [enter]  doc {} enters {to}", doc.id);
    }
}

fn resolve(current: DocState, event: &str) -> Option<DocState> {
    use DocState::*;
    match (current, event) {
        (Draft, "submit") => Some(Review),
        (Review, "comment") => Some(Review),
        (Review, "approve") => Some(Approved),
        (Approved, "publish") => Some(Published),
        _ => None,
    }
}

fn main() {
    println!("=== Document Review Example ===\n");

    let editorial = Editorial {
        reviewers: RefCell::new(Vec::new()),
    };
    let delegate = DefaultDelegate::new(&editorial);

    let mut state = DocState::Draft;
    let short = Document { id: 1, word_count: 40 };
    let long = Document { id: 1, word_count: 1200 };

    for (event, doc) in [
        ("submit", &short),
        ("submit", &long),
        ("comment", &long),
        ("approve", &long),
        ("publish", &long),
    ] {
        println!("{event} from {state}:");
        let Some(target) = resolve(state, event) else {
            println!("  no transition\n");
            continue;
        };

        match delegate.handle_event(event, &state, &target, doc).into_result() {
            Ok(message) => {
                println!("  -> {}\n", message.unwrap_or_default());
                state = target;
            }
            Err(err) => println!("  -> rejected: {err:?}\n"),
        }
    }

    println!("Final state: {state}");
    println!("\n=== Example Complete ===");
}
