//! Quokka CLI
//!
//! Builds a CSS selector from a JSON build plan and prints the rendered
//! text. A plan is either an array of category steps for one fragment, or
//! an object joining two sub-plans with a combinator character:
//!
//! ```json
//! {
//!   "left": [
//!     { "step": "element", "value": "div" },
//!     { "step": "id", "value": "main" }
//!   ],
//!   "combinator": "+",
//!   "right": [
//!     { "step": "element", "value": "table" },
//!     { "step": "id", "value": "data" }
//!   ]
//! }
//! ```

use std::env;
use std::fs;

use anyhow::{Context, Result, bail};
use quokka_selector::{Combinator, SelectorFragment, Stringify, combine};
use serde::Deserialize;

/// A selector build plan.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Plan {
    /// Category steps applied in order to a fresh fragment.
    Fragment(Vec<Step>),
    /// Two sub-plans joined by a combinator character.
    Combined {
        left: Box<Plan>,
        combinator: char,
        right: Box<Plan>,
    },
}

/// One category append within a fragment plan.
#[derive(Debug, Deserialize)]
struct Step {
    step: String,
    value: String,
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: quokka <plan.json>");
        eprintln!("       quokka --json '[{{\"step\":\"element\",\"value\":\"div\"}}]'");
        std::process::exit(1);
    }

    let text = if args[1] == "--json" {
        if args.len() < 3 {
            eprintln!("Error: --json requires a JSON plan argument");
            std::process::exit(1);
        }
        args[2].clone()
    } else {
        fs::read_to_string(&args[1])
            .with_context(|| format!("failed to read plan '{}'", args[1]))?
    };

    let plan: Plan = quokka_json::from_json(&text).context("invalid build plan")?;
    println!("{}", build(&plan)?.stringify());
    Ok(())
}

/// Build a plan into a stringifiable selector value.
fn build(plan: &Plan) -> Result<Box<dyn Stringify>> {
    match plan {
        Plan::Fragment(steps) => {
            let mut fragment = SelectorFragment::new();
            for Step { step, value } in steps {
                fragment = match step.as_str() {
                    "element" => fragment.element(value)?,
                    "id" => fragment.id(value)?,
                    "class" => fragment.class(value)?,
                    "attr" => fragment.attr(value)?,
                    "pseudo-class" => fragment.pseudo_class(value)?,
                    "pseudo-element" => fragment.pseudo_element(value)?,
                    other => bail!("unknown step {other:?}"),
                };
            }
            Ok(Box::new(fragment))
        }
        Plan::Combined {
            left,
            combinator,
            right,
        } => {
            let left = build(left)?;
            let right = build(right)?;
            let combinator = Combinator::try_from(*combinator)?;
            Ok(Box::new(combine(left.as_ref(), combinator, right.as_ref())))
        }
    }
}
