/// Returns `if_true` when `cond` holds, otherwise `if_false`.
///
/// ```
/// assert_eq!(ternop::select(5 > 3, 10, 20), 10);
/// assert_eq!(ternop::select(5 < 3, 10, 20), 20);
/// ```
pub fn select<T>(cond: bool, if_true: T, if_false: T) -> T {
    if cond {
        if_true
    } else {
        if_false
    }
}

/// Like [`select`], but only the selected producer is called.
pub fn select_lazy<T, F, G>(cond: bool, if_true: F, if_false: G) -> T
where
    F: FnOnce() -> T,
    G: FnOnce() -> T,
{
    if cond {
        if_true()
    } else {
        if_false()
    }
}
