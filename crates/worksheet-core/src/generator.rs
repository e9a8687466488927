//! Problem generators.
//!
//! Each operation has its own generator honoring the numeric constraints of
//! the settings. Constrained generators use bounded rejection sampling and
//! fall back to a deterministic value when the retry budget runs out. The
//! fallback is always a valid problem (correct answer, no negative
//! difference, exact division) but can break the requested carry/borrow
//! constraint or, for division with `max == 0`, the requested range. Callers
//! never see whether a fallback was used.

use tracing::trace;
use worksheet_model::{GenerateError, Operation, Problem, Settings};

use crate::digits::{has_borrow, has_carry};
use crate::source::UniformSource;

/// Attempts at a carry-free addition pair before falling back.
pub const ADDITION_ATTEMPTS: usize = 1000;
/// Attempts at a borrow-free subtraction pair before falling back.
pub const SUBTRACTION_ATTEMPTS: usize = 100;
/// Attempts at an in-range clean division before falling back.
pub const DIVISION_ATTEMPTS: usize = 1000;

/// Addition with operands drawn independently from `[min, max]`.
///
/// With `allow_carry == false` the fallback draws a fresh `a` and pairs it
/// with `b = clamp(9 - a % 10, min, max)`, which still carries when the
/// bounds leave no carry-free choice (e.g. `min == max == 9`).
pub fn generate_addition<S>(rng: &mut S, min: u64, max: u64, allow_carry: bool) -> Problem
where
    S: UniformSource + ?Sized,
{
    if !allow_carry {
        for _ in 0..ADDITION_ATTEMPTS {
            let a = rng.uniform(min, max);
            let b = rng.uniform(min, max);
            if !has_carry(a, b) {
                return addition(a, b);
            }
        }
        let a = rng.uniform(min, max);
        let b = (9 - a % 10).clamp(min, max);
        trace!(a, b, min, max, "no carry-free addition found, using fallback");
        return addition(a, b);
    }
    let a = rng.uniform(min, max);
    let b = rng.uniform(min, max);
    addition(a, b)
}

/// Subtraction with `a` in `[min, max]` and `b` in `[min, a]`, so the
/// difference is never negative.
///
/// With `allow_borrow == false` an exhausted search ends with one more
/// unconstrained draw, which may borrow.
pub fn generate_subtraction<S>(rng: &mut S, min: u64, max: u64, allow_borrow: bool) -> Problem
where
    S: UniformSource + ?Sized,
{
    if !allow_borrow {
        for _ in 0..SUBTRACTION_ATTEMPTS {
            let a = rng.uniform(min, max);
            let b = rng.uniform(min, a.min(max));
            if !has_borrow(a, b) {
                return subtraction(a, b);
            }
        }
        trace!(min, max, "no borrow-free subtraction found, using fallback");
    }
    let a = rng.uniform(min, max);
    let b = rng.uniform(min, a.min(max));
    subtraction(a, b)
}

/// Multiplication with operands drawn independently from `[min, max]`.
pub fn generate_multiplication<S>(rng: &mut S, min: u64, max: u64) -> Problem
where
    S: UniformSource + ?Sized,
{
    let a = rng.uniform(min, max);
    let b = rng.uniform(min, max);
    Problem {
        operand_a: a,
        operand_b: b,
        operation: Operation::Multiplication,
        answer: a * b,
    }
}

/// Clean division `a ÷ b = q` with the dividend in `[max(1, min), max]`.
///
/// Draws a divisor and a quotient and accepts their product when it lands in
/// range. The fallback `max(1, min) ÷ max(1, min) = 1` is always exact.
pub fn generate_division<S>(rng: &mut S, min: u64, max: u64) -> Problem
where
    S: UniformSource + ?Sized,
{
    let low = min.max(1);
    let high = max.max(1);
    for _ in 0..DIVISION_ATTEMPTS {
        let b = rng.uniform(low, high);
        let q = rng.uniform(1, high);
        let Some(a) = b.checked_mul(q) else {
            continue;
        };
        if a >= low && a <= max {
            return division(a, b, q);
        }
    }
    trace!(min, max, "no in-range division found, using fallback");
    division(low, low, 1)
}

/// Picks one enabled operation uniformly and generates a problem for it.
pub fn generate_one<S>(rng: &mut S, settings: &Settings) -> Result<Problem, GenerateError>
where
    S: UniformSource + ?Sized,
{
    let operations = settings.operations.to_vec();
    if operations.is_empty() {
        return Err(GenerateError::NoOperationSelected);
    }
    let operation = operations[rng.index(operations.len())];
    let (min, max) = (settings.min, settings.max);
    let problem = match operation {
        Operation::Addition => generate_addition(rng, min, max, settings.allow_carry),
        Operation::Subtraction => generate_subtraction(rng, min, max, settings.allow_borrow),
        Operation::Multiplication => generate_multiplication(rng, min, max),
        Operation::Division => generate_division(rng, min, max),
    };
    Ok(problem)
}

/// Generates exactly `settings.problem_count` independent problems.
///
/// Problems are not deduplicated.
pub fn generate_list<S>(rng: &mut S, settings: &Settings) -> Result<Vec<Problem>, GenerateError>
where
    S: UniformSource + ?Sized,
{
    (0..settings.problem_count)
        .map(|_| generate_one(rng, settings))
        .collect()
}

fn addition(a: u64, b: u64) -> Problem {
    Problem {
        operand_a: a,
        operand_b: b,
        operation: Operation::Addition,
        answer: a + b,
    }
}

fn subtraction(a: u64, b: u64) -> Problem {
    Problem {
        operand_a: a,
        operand_b: b,
        operation: Operation::Subtraction,
        answer: a - b,
    }
}

fn division(a: u64, b: u64, q: u64) -> Problem {
    Problem {
        operand_a: a,
        operand_b: b,
        operation: Operation::Division,
        answer: q,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use worksheet_model::OperationSet;

    fn settings(operations: &[Operation], min: u64, max: u64, count: usize) -> Settings {
        Settings {
            min,
            max,
            operations: operations.iter().copied().collect(),
            allow_carry: false,
            allow_borrow: false,
            problem_count: count,
            worksheet_count: 1,
            title: "Test".to_string(),
        }
    }

    /// Replays `prefix` for the first `repeat` draws, then `tail` forever.
    struct Scripted {
        prefix: [u64; 2],
        tail: [u64; 2],
        repeat: usize,
        draws: usize,
    }

    impl Scripted {
        fn new(prefix: [u64; 2], tail: [u64; 2], repeat: usize) -> Self {
            Self {
                prefix,
                tail,
                repeat,
                draws: 0,
            }
        }
    }

    impl UniformSource for Scripted {
        fn uniform(&mut self, _lo: u64, _hi: u64) -> u64 {
            let pair = if self.draws < self.repeat {
                self.prefix
            } else {
                self.tail
            };
            let value = pair[self.draws % 2];
            self.draws += 1;
            value
        }
    }

    #[test]
    fn subtraction_fallback_draws_a_fresh_pair() {
        // 52 - 17 borrows in the ones column; 57 - 12 does not.
        let mut source = Scripted::new([52, 17], [57, 12], 2 * SUBTRACTION_ATTEMPTS);
        let problem = generate_subtraction(&mut source, 10, 60, false);
        assert_eq!(source.draws, 2 * SUBTRACTION_ATTEMPTS + 2);
        assert_eq!((problem.operand_a, problem.operand_b), (57, 12));
        assert_eq!(problem.answer, 45);
    }

    #[test]
    fn subtraction_fallback_may_borrow() {
        let mut source = Scripted::new([52, 17], [52, 17], usize::MAX);
        let problem = generate_subtraction(&mut source, 10, 60, false);
        assert_eq!(source.draws, 2 * SUBTRACTION_ATTEMPTS + 2);
        assert!(problem.operand_b <= problem.operand_a);
        assert_eq!(problem.answer, 35);
        assert!(has_borrow(problem.operand_a, problem.operand_b));
    }

    #[test]
    fn subtraction_with_borrow_allowed_takes_one_pair() {
        let mut source = Scripted::new([52, 17], [52, 17], usize::MAX);
        let problem = generate_subtraction(&mut source, 10, 60, true);
        assert_eq!(source.draws, 2);
        assert_eq!(problem.answer, 35);
    }

    #[test]
    fn addition_fallback_draws_a_fresh_operand() {
        // 5 + 5 carries; the fallback pairs a fresh 23 with 9 - 3.
        let mut source = Scripted::new([5, 5], [23, 23], 2 * ADDITION_ATTEMPTS);
        let problem = generate_addition(&mut source, 0, 99, false);
        assert_eq!(source.draws, 2 * ADDITION_ATTEMPTS + 1);
        assert_eq!((problem.operand_a, problem.operand_b), (23, 6));
        assert!(!has_carry(problem.operand_a, problem.operand_b));
    }

    #[test]
    fn addition_fallback_may_carry() {
        let mut rng = StdRng::seed_from_u64(3);
        let problem = generate_addition(&mut rng, 9, 9, false);
        assert_eq!((problem.operand_a, problem.operand_b), (9, 9));
        assert_eq!(problem.answer, 18);
        assert!(has_carry(problem.operand_a, problem.operand_b));
    }

    #[test]
    fn addition_fallback_clamps_into_range() {
        // Every pair in [5, 6] carries; fallback b = 9 - a % 10 is clamped.
        let mut rng = StdRng::seed_from_u64(11);
        let problem = generate_addition(&mut rng, 5, 6, false);
        assert!((5..=6).contains(&problem.operand_b));
        assert!(problem.is_consistent());
    }

    #[test]
    fn addition_with_carry_allowed_takes_first_draw() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut replay = StdRng::seed_from_u64(5);
        let problem = generate_addition(&mut rng, 10, 99, true);
        let a = replay.uniform(10, 99);
        let b = replay.uniform(10, 99);
        assert_eq!((problem.operand_a, problem.operand_b), (a, b));
    }

    #[test]
    fn subtraction_never_goes_negative() {
        let mut rng = StdRng::seed_from_u64(9);
        for allow_borrow in [true, false] {
            for _ in 0..200 {
                let problem = generate_subtraction(&mut rng, 0, 30, allow_borrow);
                assert!(problem.operand_b <= problem.operand_a);
                assert_eq!(problem.answer, problem.operand_a - problem.operand_b);
            }
        }
    }

    #[test]
    fn subtraction_without_borrow_on_single_digits() {
        // b <= a always holds, so single digits can never borrow.
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..100 {
            let problem = generate_subtraction(&mut rng, 0, 9, false);
            assert!(!has_borrow(problem.operand_a, problem.operand_b));
        }
    }

    #[test]
    fn division_with_zero_max_uses_fallback() {
        let mut rng = StdRng::seed_from_u64(1);
        let problem = generate_division(&mut rng, 0, 0);
        assert_eq!(
            (problem.operand_a, problem.operand_b, problem.answer),
            (1, 1, 1)
        );
    }

    #[test]
    fn division_equal_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let problem = generate_division(&mut rng, 12, 12);
        assert_eq!(problem.operand_a, 12);
        assert_eq!(problem.operand_a % problem.operand_b, 0);
        assert!(problem.is_consistent());
    }

    #[test]
    fn empty_operation_set_is_an_invariant_violation() {
        let mut settings = settings(&[Operation::Addition], 0, 9, 3);
        settings.operations = OperationSet::new();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate_one(&mut rng, &settings),
            Err(GenerateError::NoOperationSelected)
        );
        assert_eq!(
            generate_list(&mut rng, &settings),
            Err(GenerateError::NoOperationSelected)
        );
    }

    #[test]
    fn dispatcher_only_uses_enabled_operations() {
        let settings = settings(&[Operation::Subtraction, Operation::Division], 1, 50, 18);
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..20 {
            let problems = generate_list(&mut rng, &settings).expect("generate");
            assert_eq!(problems.len(), 18);
            assert!(problems.iter().all(|p| matches!(
                p.operation,
                Operation::Subtraction | Operation::Division
            )));
        }
    }

    #[test]
    fn dispatcher_reaches_every_enabled_operation() {
        let settings = settings(&Operation::ALL, 1, 20, 18);
        let mut rng = StdRng::seed_from_u64(8);
        let mut seen = OperationSet::new();
        for _ in 0..10 {
            for problem in generate_list(&mut rng, &settings).expect("generate") {
                seen.insert(problem.operation);
            }
        }
        assert_eq!(seen.len(), 4);
    }
}
