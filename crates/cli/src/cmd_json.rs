// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Json command: structured printing.

use std::io;

use serde::{Deserialize, Serialize};

use verbose::cli::JsonArgs;
use verbose::emitter::{DatePattern, Verb};
use verbose::error::ExitCode;
use verbose::vprintln;

const FRUIT_JSON: &str = r#"{"fruit":[
    {"name":"apple","color":"green","price":1.2},
    {"name":"pear","color":"yellow","price":0.55},
    {"name":"grape","color":"purple","price":0.20},
    {"name":"cherry","color":"red","price":0.25},
    {"name":"banana","color":"yellow","price":0.5},
    {"name":"kiwi","color":"green","price":1.25}
]}"#;

#[derive(Debug, Serialize, Deserialize)]
struct Basket {
    fruit: Vec<Fruit>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Fruit {
    name: String,
    color: String,
    price: f64,
}

/// Run the json command.
pub fn run(args: &JsonArgs) -> anyhow::Result<ExitCode> {
    let basket: Basket = serde_json::from_str(FRUIT_JSON)?;

    let mut verb = Verb::new(io::stdout(), DatePattern::from_arg(args.date.as_deref()))?;
    verb.enabled = true;
    verb.printj(&basket);
    vprintln!(verb, "Done");
    verb.flush();

    Ok(ExitCode::Success)
}
