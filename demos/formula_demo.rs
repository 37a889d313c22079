use formula_rs::{evaluate, evaluate_with_precision};

fn show(formula: &str) {
    println!("  {} = {}", formula, evaluate(formula));
}

fn main() {
    pretty_env_logger::init();

    println!("=== Formula Evaluator Demo ===\n");

    println!("Simple numbers:");
    for formula in ["42", "-5", "3.14"] {
        show(formula);
    }

    println!("\nBasic operations:");
    for formula in ["add(2, 3)", "subtract(10, 4)", "multiply(3, 4)", "divide(8, 2)"] {
        show(formula);
    }

    println!("\nNested expressions:");
    for formula in [
        "add(2, multiply(3, 4))",
        "multiply(add(2, 3), divide(10, 2))",
        "add(1, add(2, add(3, 4)))",
    ] {
        show(formula);
    }

    println!("\nComplex nested:");
    show("add(2, multiply(add(1, multiply(1, 1)), divide(2, 2)))");

    println!("\nDecimal precision:");
    println!("  divide(10, 3) [2 places] = {}", evaluate("divide(10, 3)"));
    println!(
        "  divide(10, 3) [4 places] = {}",
        evaluate_with_precision("divide(10, 3)", 4)
    );

    println!("\nError handling:");
    for formula in ["divide(10, 0)", "unknown(2, 3)", "add(2)", " That's all folks"] {
        show(formula);
    }
}
