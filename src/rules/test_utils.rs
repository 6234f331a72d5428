#[cfg(test)]
use super::model::{Field, Move};

#[cfg(test)]
pub fn assert_fields(generated: Vec<Field>, expected: Vec<&str>) {
    let mut generated: Vec<String> = generated.iter().map(|f| f.as_algebraic()).collect();
    generated.sort();
    let mut expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    expected.sort();

    assert_eq!(generated, expected);
}

#[cfg(test)]
pub fn field(text: &str) -> Field {
    Field::from_algebraic(text).unwrap()
}

#[cfg(test)]
pub fn mv(text: &str) -> Move {
    Move::from_algebraic(text).unwrap()
}
