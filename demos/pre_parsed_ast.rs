use formula_rs::Evaluator;

fn main() {
    pretty_env_logger::init();

    let evaluator = Evaluator::default();

    let formula = "add(2, multiply(add(1, multiply(1, 1)), divide(2, 2)))";
    let ast = evaluator.parse(formula).expect("Failed to parse");

    println!("Canonical form: {}", ast);
    println!("Nesting depth: {}", ast.depth());

    match evaluator.resolve(&ast) {
        Ok(result) => println!("Result: {}", result),
        Err(err) => println!("Error: {}", err),
    }
}
