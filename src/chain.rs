use std::marker::PhantomData;

use super::select::{select, select_lazy};

/// Begins a fluent ternary expression.
///
/// ```
/// use ternop::if_cond;
///
/// assert_eq!(if_cond(5 > 3).then(10).else_(20), 10);
/// assert_eq!(if_cond(5 < 3).then_lazy(|| 10).else_lazy(|| 20), 20);
/// ```
pub fn if_cond<T>(cond: bool) -> PendingCondition<T> {
    PendingCondition {
        condition: cond,
        _value: PhantomData,
    }
}

/// A condition waiting for its true branch.
#[must_use = "a ternary expression does nothing until it is completed with `then`/`else_`"]
#[derive(Debug)]
pub struct PendingCondition<T> {
    condition: bool,
    _value: PhantomData<fn() -> T>,
}

impl<T> PendingCondition<T> {
    pub fn then(self, if_true: T) -> PendingDecision<T> {
        PendingDecision {
            condition: self.condition,
            if_true,
        }
    }

    pub fn then_lazy<F>(self, if_true: F) -> PendingDecisionLazy<T, F>
    where
        F: FnOnce() -> T,
    {
        PendingDecisionLazy {
            condition: self.condition,
            if_true,
            _value: PhantomData,
        }
    }
}

/// A condition and its true value, waiting for the false value.
///
/// An eager chain cannot be finished lazily:
///
/// ```compile_fail
/// let _ = ternop::if_cond(true).then(1).else_lazy(|| 2);
/// ```
#[must_use = "a ternary expression does nothing until it is completed with `else_`"]
#[derive(Clone, Debug)]
pub struct PendingDecision<T> {
    condition: bool,
    if_true: T,
}

impl<T> PendingDecision<T> {
    pub fn else_(self, if_false: T) -> T {
        select(self.condition, self.if_true, if_false)
    }
}

/// A condition and its true-branch producer, waiting for the false-branch
/// producer.
///
/// ```compile_fail
/// let _ = ternop::if_cond(true).then_lazy(|| 1).else_(2);
/// ```
#[must_use = "a ternary expression does nothing until it is completed with `else_lazy`"]
pub struct PendingDecisionLazy<T, F> {
    condition: bool,
    if_true: F,
    _value: PhantomData<fn() -> T>,
}

impl<T, F> PendingDecisionLazy<T, F>
where
    F: FnOnce() -> T,
{
    pub fn else_lazy<G>(self, if_false: G) -> T
    where
        G: FnOnce() -> T,
    {
        select_lazy(self.condition, self.if_true, if_false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn if_then_else() {
        assert_eq!(if_cond(true).then(10).else_(20), 10);
        assert_eq!(if_cond(false).then(10).else_(20), 20);
    }

    #[test]
    fn if_then_else_matches_select() {
        for cond in [true, false] {
            assert_eq!(if_cond(cond).then("a").else_("b"), select(cond, "a", "b"));
        }
    }

    #[test]
    fn lazy_if_then_else() {
        for cond in [true, false] {
            let called_true = Cell::new(0);
            let called_false = Cell::new(0);
            let result = if_cond(cond)
                .then_lazy(|| {
                    called_true.set(called_true.get() + 1);
                    10
                })
                .else_lazy(|| {
                    called_false.set(called_false.get() + 1);
                    20
                });
            assert_eq!(result, if cond { 10 } else { 20 });
            assert_eq!(called_true.get(), cond as u32);
            assert_eq!(called_false.get(), !cond as u32);
        }
    }

    #[test]
    fn nested() {
        let result = if_cond(false)
            .then("foo")
            .else_(if_cond(true).then("bar").else_("baz"));
        assert_eq!(result, "bar");
    }

    #[test]
    fn explicit_type_parameter() {
        let s = if_cond::<String>(true).then("x".into()).else_("y".into());
        assert_eq!(s, "x");
    }
}
