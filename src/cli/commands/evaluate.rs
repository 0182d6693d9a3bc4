use crate::services::evaluator::{evaluate, square, Contribution};

/// 1ペアの判定結果を説明する文字列
pub fn describe_pair(x1: f64, x2: f64) -> String {
    let fx1 = square(x1);
    match evaluate(x1, x2) {
        Contribution::Counted(value) => {
            format!("f({x1}) = {fx1} <= {x2}: contributes {value}")
        }
        Contribution::Skipped => format!("f({x1}) = {fx1} > {x2}: contributes nothing"),
    }
}

/// Execute the `evaluate` command
pub fn execute_evaluate(x1: f64, x2: f64) {
    println!("{}", describe_pair(x1, x2));
}
