//! Built-in Shapes Demonstration
//!
//! Walks the full catalog of functional shapes: binds a closure to each
//! contract, invokes it, and prints one line per result. The sequence is
//! fixed and the random supplier is seeded, so repeated runs produce the
//! same output.
//!
//! Run with: cargo run -p builtins

use fnshape::prelude::*;

fn main() {
    fnshape::console::init();

    println!("fnshape built-in shapes");
    println!("=======================\n");

    let name = Some("Mohamed Ali".to_string());
    let other = Some("Ali".to_string());

    // Predicate / BiPredicate
    let contains_mohamed = text::contains("Mohamed");
    println!("contains 'Mohamed'? {}", contains_mohamed.test(&name));
    let contains = text::contains_pair();
    println!("contains(other)? {}", contains.test(&name, &other));

    // Supplier
    let random_double = random::seeded_double(42);
    println!("random double: {}", random_double.get());

    // Consumer / BiConsumer
    let printer = FnConsumer::new(|line: &String| println!("{}", line));
    printer.accept(&"Hello from Consumer".to_string());
    let join_printer = FnBiConsumer::new(|a: &String, b: &String| println!("{} {}", a, b));
    join_printer.accept(&"Hello".to_string(), &"World".to_string());

    // Function / BiFunction
    let length = text::length();
    println!("length(name): {}", length.apply(&name));
    let concat_with_dash = text::concat_with("-");
    println!(
        "concat with dash: {}",
        concat_with_dash.apply(&"A".to_string(), &"B".to_string())
    );

    // Operators
    let trim = text::trim();
    println!(
        "trim: '{}'",
        trim.apply(&Some("  hi  ".to_string())).unwrap_or_default()
    );
    let max = numeric::max::<i64>();
    println!("max: {}", max.apply(&10, &7));

    // Primitive specializations
    let is_even = numeric::int_is_even();
    println!("is_even(6): {}", is_even.test(6));
    println!("is_even(7): {}", is_even.test(7));
    let parse_or_zero = text::parse_or_zero();
    println!("parse_or_zero('123'): {}", parse_or_zero.apply("123"));
    println!("parse_or_zero('x'): {}", parse_or_zero.apply("x"));
    let ten_supplier = numeric::constant_int(10);
    let int_printer = FnIntConsumer::new(|n| println!("int={}", n));
    int_printer.accept(ten_supplier.get());

    // Declarative contracts
    println!("\n--- Declarative contracts ---\n");

    let mut registry = ShapeRegistry::with_builtins();
    println!("built-in contracts: {}", registry.len());

    let manifest = ShapeManifest::from_toml_str(
        r#"
        [[shapes]]
        name = "LineFilter"
        category = "predicate"

        [[shapes.operations]]
        name = "test"
        params = ["text"]
        returns = { value = "bool" }
    "#,
    )
    .unwrap();
    let added = manifest.register_into(&mut registry).unwrap();
    println!("registered from manifest: {}", added);

    // A contract with a second abstract operation is rejected before any
    // closure can be bound to it.
    let invalid = ShapeManifest::from_toml_str(
        r#"
        [[shapes]]
        name = "Broken"
        category = "function"

        [[shapes.operations]]
        name = "first"
        params = ["text"]
        returns = { value = "text" }

        [[shapes.operations]]
        name = "second"
        params = ["text"]
        returns = { value = "text" }
    "#,
    )
    .unwrap();
    match invalid.compile() {
        Ok(_) => println!("unexpectedly accepted"),
        Err(e) => println!("rejected: {}", e),
    }
}
