use super::select::{select, select_lazy};

pub trait TernaryOperator {
    fn q<V>(&self, if_true: V, if_false: V) -> V;
    fn q_lazy<V, F, G>(&self, if_true: F, if_false: G) -> V
    where
        F: FnOnce() -> V,
        G: FnOnce() -> V;
}

impl TernaryOperator for bool {
    fn q<V>(&self, if_true: V, if_false: V) -> V {
        select(*self, if_true, if_false)
    }

    fn q_lazy<V, F, G>(&self, if_true: F, if_false: G) -> V
    where
        F: FnOnce() -> V,
        G: FnOnce() -> V,
    {
        select_lazy(*self, if_true, if_false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn q_agrees_with_select() {
        for cond in [true, false] {
            assert_eq!(cond.q(1.5, 2.5), select(cond, 1.5, 2.5));
        }
    }

    #[test]
    fn q_lazy_skips_the_other_branch() {
        let mut log: Vec<&str> = vec![];
        let v = false.q_lazy(
            || {
                log.push("true");
                1
            },
            || 2,
        );
        assert_eq!(v, 2);
        assert!(log.is_empty());
    }

    #[test]
    fn usable_inline_in_arithmetic() {
        let median_index = |line_count: usize| (line_count == 1).q(0, (line_count + 1) / 2);
        assert_eq!(median_index(1), 0);
        assert_eq!(median_index(4), 2);
    }
}
