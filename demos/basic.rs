//! Parsing a BON document and reading it back.
//!
//! Run with: cargo run --example basic

use serde_bon::{parse, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let input = r#"{value: "data"; list: [1, 2e-5, 3.5, 4f, "5", {key: "value";} ]; nested_object: { hello: "world"; }; };"#;

    println!("Input (string): {}", input);
    let result = parse(input)?;
    println!("Output (Object):\n{}\n", result);

    let obj = result.as_object().ok_or("expected an object")?;

    println!("obj.get(\"value\")");
    println!(">>> {}\n", obj.get("value")?);

    println!("obj.get(\"list\")");
    println!(">>> {}\n", obj.get("list")?);

    println!("obj.get(\"nested_object\")?.get(\"hello\")");
    if let Some(Value::String(hello)) = obj.get("nested_object")?.get("hello") {
        println!(">>> {}\n", hello);
    }

    println!("All values:");
    for node in obj {
        println!("{}", node);
    }
    println!();

    let node = parse(r#"value_1: "value";"#)?;
    println!("{}", node);

    Ok(())
}
