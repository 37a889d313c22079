use formula_rs::{Evaluator, EvaluatorOptions};

fn main() {
    pretty_env_logger::init();

    let formulas = vec![
        "add(2, 3)",
        "multiply(add(2, 3), divide(10, 2))",
        "divide(10, 3)",
        "divide(1, subtract(3, 3))",
        "pow(2, 8)",
    ];

    let evaluator = Evaluator::new(EvaluatorOptions::default().with_decimal_places(3));
    let results = evaluator.evaluate_batch(&formulas);

    for (i, (formula, result)) in formulas.iter().zip(results).enumerate() {
        println!("Result {}: {} = {}", i, formula, result);
    }
}
